use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use catalogo::config::{self, Args};
use catalogo::{Catalog, Error, Server, api};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    config::init_logging(args.log_format);

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<(), Error> {
    let store = Arc::new(Catalog::seeded());
    info!(
        products = store.len().await,
        categories = store.categories().len(),
        "catalog seeded"
    );

    let server = Server::bind(&args.addr).await?.body_limit(args.max_body_bytes);
    server.serve(api::router(store)).await
}
