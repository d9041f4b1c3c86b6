use anyhow::Result;
use tracing::info;

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use data::repositories::in_memory::MemoryDb;
use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use presentation::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    // состояние живёт только в памяти процесса и сбрасывается при рестарте
    let state = AppState::in_memory(MemoryDb::new());
    info!(http_addr = %settings.http_addr, "starting blogdesk-server");

    server::run_http(&settings, state).await
}
