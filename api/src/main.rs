use clap::Parser;
use quill_api::{config::QuillApiConfig, server};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let config = QuillApiConfig::parse();

    let (router, api) = server::make(config.clone())
        .await
        .expect("Failed to initialize server");

    if config.dump_openapi {
        let json = api.to_pretty_json().unwrap();
        print!("{}", json);
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or("quill_api=info,quill_db=info".into()),
            )
            .pretty()
            .init();

        let listener = TcpListener::bind(config.bind_addr)
            .await
            .expect("Failed to bind to address");

        info!("Listening on http://{:?}", config.bind_addr);
        info!(data_file = %config.data_file.display(), "Serving from JSON data file");

        axum::serve(listener, router)
            .await
            .expect("Failed to start server");
    }
}
