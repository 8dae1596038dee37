use std::{path::PathBuf, sync::Arc};

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use client_core::{SearchClient, SearchClientOptions};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::DesktopGuiApp;

const COMMAND_QUEUE_CAPACITY: usize = 64;
const UI_EVENT_QUEUE_CAPACITY: usize = 256;

/// Desktop client for the profile search backend.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Settings file (TOML). Defaults to ./profile_search.toml, then the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Base URL of the search backend; `/api/search` is appended.
    #[arg(long)]
    api_base_url: Option<String>,
    /// Per-request timeout in seconds; 0 waits indefinitely.
    #[arg(long)]
    request_timeout_secs: Option<u64>,
    /// Window and page title.
    #[arg(long)]
    title: Option<String>,
    /// Logo image shown above the title.
    #[arg(long)]
    logo_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let settings = config::load_settings(&args)?;

    let client = SearchClient::with_options(
        &settings.api_base_url,
        SearchClientOptions {
            request_timeout: settings.request_timeout,
        },
    )
    .context("failed to build search client")?;
    tracing::info!(
        endpoint = %client.endpoint(),
        timeout_secs = settings.request_timeout.map(|t| t.as_secs()),
        "starting profile search"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(COMMAND_QUEUE_CAPACITY);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(UI_EVENT_QUEUE_CAPACITY);
    let _worker = backend_bridge::runtime::launch(Arc::new(client), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.title.clone())
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([520.0, 420.0]),
        ..Default::default()
    };
    let app_name = settings.title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| {
            Ok(Box::new(DesktopGuiApp::bootstrap(
                &cc.egui_ctx,
                cmd_tx,
                ui_rx,
                &settings,
            )))
        }),
    )
    .map_err(|err| anyhow::anyhow!("desktop window failed: {err}"))?;

    tracing::info!("window closed");
    Ok(())
}
