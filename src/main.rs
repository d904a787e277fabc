use std::sync::Arc;

use neurodoc_client::api::AssistantClient;
use neurodoc_client::event::EventHandler;
use neurodoc_client::util::log;
use neurodoc_client::{App, ClientConfig};
use tracing::info;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = ClientConfig::from_env()?;
    let log_path = log::init(&config.log_dir)?;
    info!("NeuroDoc starting against {} (log: {})", config.api_url, log_path.display());
    info!("{}", config.describe_source());

    let api = Arc::new(AssistantClient::from_config(&config)?);
    let mut app = App::new(config, api, EventHandler::new());

    // optional PDF to preselect
    if let Some(path) = std::env::args().nth(1) {
        app.session.select_file(path);
    }

    let terminal = ratatui::init();
    let result = app.run(terminal).await;
    ratatui::restore();
    result
}
