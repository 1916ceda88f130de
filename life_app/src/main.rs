// main.rs - Conway's Game of Life in an egui window

use anyhow::Context as _;
use tracing_subscriber::{fmt, EnvFilter};

mod app; // egui front end
mod clock; // tokio ticker
mod config;
mod view; // grid geometry and painting

use app::LifeApp;
use config::{AppConfig, Config};

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Config::LOG_FILTER));
    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = AppConfig::default();
    config.validate().context("invalid configuration")?;

    // The ticker needs a timer but no parallelism
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("life-clock")
        .enable_time()
        .build()
        .context("failed to start the clock runtime")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_resizable(false),
        ..Default::default()
    };

    let title = config.title.clone();
    let app = LifeApp::new(config, runtime);
    eframe::run_native(&title, options, Box::new(|_cc| Box::new(app)))
        .map_err(|e| anyhow::anyhow!("window failed: {e}"))
}
