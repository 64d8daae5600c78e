use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use labelguard_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logger(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log.filter.clone()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if args.log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args);

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;

    let app_state = state(args.clone()).await?;
    let app = router(app_state)?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("LabelGuard API listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
