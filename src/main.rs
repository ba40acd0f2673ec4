mod config;
mod leaderboard;
mod logging;
mod page;
mod retriever;

use config::{load_config, VERSION};
use leaderboard::LeaderboardViewer;
use log::info;
use page::HostPage;
use retriever::Retriever;
use std::io;
use tokio::io::AsyncWriteExt;

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = load_config().unwrap_or_default();

    logging::setup(config.logging, &config.logging_dir);

    info!("Starting Leaderboard Viewer v{}", VERSION);

    let page = HostPage::new();
    let retriever =
        Retriever::new(&config).map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    let viewer = LeaderboardViewer::new(retriever, page.container());

    let state = viewer.initialize().await;
    info!(
        "Leaderboard load finished ({:?}, {} failures recorded)",
        state,
        viewer.diagnostics().len()
    );

    let document = page.render();
    match &config.output {
        Some(path) => {
            tokio::fs::write(path, document).await?;
            info!("Wrote leaderboard page to {}", path.display());
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(document.as_bytes()).await?;
            stdout.flush().await?;
        }
    }

    Ok(())
}
