use std::{path::PathBuf, sync::Arc};

mod backend_bridge;
mod config;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use fact_client::{FactSource, HttpFactSource};
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::config::{load_settings, Overrides};
use crate::controller::events::UiEvent;
use crate::ui::FactWidgetApp;

#[derive(Parser, Debug)]
#[command(about = "Shows a random fact; press the button for another one")]
struct Args {
    /// Fact service URL. Overrides the config file and FACT_API_URL.
    #[arg(long)]
    endpoint: Option<String>,
    /// Path to a TOML config file (default: ./fact_widget.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Window title and card heading.
    #[arg(long)]
    title: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let settings = load_settings(&Overrides {
        config_path: args.config,
        endpoint: args.endpoint,
        window_title: args.title,
    })?;
    tracing::info!(endpoint = %settings.endpoint, "starting fact widget");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    let source: Arc<dyn FactSource> = Arc::new(HttpFactSource::new(settings.endpoint.clone()));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&settings.window_title)
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([420.0, 360.0]),
        ..Default::default()
    };
    let title = settings.window_title.clone();
    eframe::run_native(
        &settings.window_title,
        options,
        Box::new(move |cc| {
            let repaint_ctx = cc.egui_ctx.clone();
            backend_bridge::runtime::launch(cmd_rx, ui_tx, source, move || {
                repaint_ctx.request_repaint()
            });
            Ok(Box::new(FactWidgetApp::new(cmd_tx, ui_rx, title)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("eframe exited with error: {err}"))
}
