//! Office hours webserver entry point
//!
//! Reads configuration from flags, the environment and an optional `.env`
//! file, then serves the dashboard over the selected storage backend.

use anyhow::Context;
use clap::Parser;
use shared::{logging, ComponentId};

use webserver::{run, Backend, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Secrets such as the SAS URL usually live in .env
    dotenv::dotenv().ok();
    let config = Config::parse();

    logging::init_tracing_with_level(Some(&config.log_level));
    logging::log_startup(
        ComponentId::WebServer,
        &format!("office hours dashboard on {}:{} ({:?} backend)", config.host, config.port, config.backend),
    );

    let result = match config.backend {
        Backend::Local => run(config.local_gateway(), &config).await,
        Backend::Blob => {
            let gateway = config.blob_gateway().context("configuring blob backend")?;
            run(gateway, &config).await
        }
    };

    if let Err(e) = &result {
        logging::log_error(ComponentId::WebServer, "Web server", e);
    }
    result.context("office hours webserver stopped with an error")?;

    logging::log_success(ComponentId::WebServer, "WebServer stopped gracefully");
    Ok(())
}
