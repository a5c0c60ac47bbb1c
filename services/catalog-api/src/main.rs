
use std::sync::Arc;

use catalog_api::Catalog;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = "0.0.0.0:5000")]
    bind: String,

    #[arg(long, default_value = "false")]
    enable_openapi: bool,
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let json = std::env::var("CATALOG_LOG_JSON").ok().as_deref() == Some("1");
    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().with_target(true).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let catalog = Arc::new(Catalog::reference());
    info!(categories = catalog.len(), products = catalog.all_products().count(), "catalog loaded");

    let app = catalog_api::app(catalog, args.enable_openapi);

    info!(bind=%args.bind, openapi = args.enable_openapi, "catalog-api listening");
    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
