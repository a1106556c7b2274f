mod config;
mod error;
mod logging;
mod routes;

use portfolio_shared::Catalog;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::Error;

fn report_catalog() {
    match Catalog::load() {
        Ok(catalog) => info!(
            projects = catalog.projects.len(),
            skill_groups = catalog.skill_groups.len(),
            skills = catalog.skill_count(),
            "Content catalog loaded"
        ),
        Err(e) => warn!("Content catalog will render empty: {}", e),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    logging::setup();

    let config = Config::from_env()?;
    report_catalog();

    if !config.index_path().exists() {
        warn!("No index.html under {:?}; build the frontend with `trunk build`", config.dist_dir);
    }

    let app = routes::app(&config);
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
