use std::sync::Arc;

use anyhow::Result;
use limbo::host::{HostShell, LoggingShell};
use limbo::render;
use limbo::{
    APP_NAME_PRETTY, Config, ConfigManager, DEFAULT_LOG_LEVEL, DashboardStats, DashboardView,
    DictationSession, SettingsForm, VERSION,
};
use parking_lot::RwLock;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize the logger
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("LIMBO_LOG")
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
        )
        .init();

    // Load config
    let config_manager = ConfigManager::new()?;
    let config = Arc::new(RwLock::new(config_manager.load()?));
    // save back the config to create the file if it doesn't exist
    config_manager.save(&config.read())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    runtime.block_on(run(config))
}

async fn run(config: Arc<RwLock<Config>>) -> Result<()> {
    let shell: Arc<dyn HostShell> = Arc::new(LoggingShell::new());

    let (session, session_task) = DictationSession::spawn(config.clone());
    let grace = config.read().hearing_grace();
    let renderer = tokio::spawn(render::run(session.watch(), shell, grace));

    info!(version = VERSION, "{} ready", APP_NAME_PRETTY);
    info!("enter = toggle dictation, d = dashboard, s = settings, q = quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "q" => break,
            "d" => {
                let view =
                    DashboardView::project(&DashboardStats::default(), config.read().hotkey());
                info!(
                    title = view.title,
                    headline = view.status_headline,
                    hint = %view.status_hint,
                    recordings = %view.cards[0].value,
                    words = %view.cards[1].value,
                    "dashboard"
                );
            }
            "s" => {
                let form = SettingsForm::with_hotkey(config.read().hotkey());
                info!(
                    hotkey = %form.hotkey,
                    microphone = %form.microphone,
                    launch_at_startup = form.launch_at_startup,
                    minimize_to_tray = form.minimize_to_tray,
                    "settings"
                );
            }
            _ => session.toggle()?,
        }
    }

    // Dropping the handle closes the command channel; the session ends and
    // the renderer follows once the watch channel closes.
    drop(session);
    session_task.await?;
    renderer.await?;

    Ok(())
}
