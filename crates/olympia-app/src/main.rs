//! Main application entry point

use std::sync::Arc;

use anyhow::Result;
use egui::{Context, RichText};
use parking_lot::Mutex;
use tracing::{error, info};

use olympia_core::DashboardConfig;
use olympia_data::{CsvSource, Dataset, DatasetSource, LoadError};
use olympia_ui::{theme, Theme};

mod dashboard;

use dashboard::Dashboard;

/// Result of the background load, handed over to the UI thread
type PendingLoad = Arc<Mutex<Option<Result<Dataset, LoadError>>>>;

/// Where the dashboard is in its start-up
enum LoadState {
    Loading,
    Ready(Box<Dashboard>),
    Failed { source: String, message: String },
}

impl LoadState {
    fn from_result(
        result: Result<Dataset, LoadError>,
        config: &Arc<DashboardConfig>,
        egui_ctx: &Context,
    ) -> Self {
        match result {
            Ok(dataset) => LoadState::Ready(Box::new(Dashboard::new(dataset, config.clone(), egui_ctx))),
            Err(e) => LoadState::Failed {
                source: config.data_path.display().to_string(),
                message: e.to_string(),
            },
        }
    }
}

/// Main application state
struct OlympiaApp {
    config: Arc<DashboardConfig>,
    state: LoadState,
    pending: PendingLoad,

    /// Keeps the loader's worker threads alive
    _runtime: tokio::runtime::Runtime,
}

impl OlympiaApp {
    fn new(cc: &eframe::CreationContext<'_>, config: DashboardConfig, runtime: tokio::runtime::Runtime) -> Self {
        theme::apply_theme(&cc.egui_ctx, &Theme::from_config(&config));

        let config = Arc::new(config);
        let pending: PendingLoad = Arc::new(Mutex::new(None));

        let source = CsvSource::new(config.data_path.clone());
        let slot = pending.clone();
        let ctx = cc.egui_ctx.clone();
        runtime.spawn(async move {
            info!("Loading athlete records from {}", source.source_name());
            let result = source.load().await;
            if let Err(e) = &result {
                error!("Failed to load {}: {}", source.source_name(), e);
            }
            *slot.lock() = Some(result);
            ctx.request_repaint();
        });

        Self {
            config,
            state: LoadState::Loading,
            pending,
            _runtime: runtime,
        }
    }

    /// Move to the ready or failed state once the loader reports back
    fn receive_dataset(&mut self, ctx: &Context) {
        if !matches!(self.state, LoadState::Loading) {
            return;
        }
        if let Some(result) = self.pending.lock().take() {
            self.state = LoadState::from_result(result, &self.config, ctx);
        }
    }
}

fn show_loading_screen(ctx: &Context, config: &DashboardConfig) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.spinner();
            ui.add_space(8.0);
            ui.label(format!("Loading {}...", config.data_path.display()));
        });
    });
}

fn show_error_screen(ctx: &Context, source: &str, message: &str) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.heading("Could not load the athlete dataset");
            ui.add_space(8.0);
            ui.label(RichText::new(source).monospace());
            ui.add_space(4.0);
            ui.label(RichText::new(message).color(theme::error_color()));
            ui.add_space(12.0);
            ui.label(RichText::new("Fix the file or the data_path setting and restart.").weak());
        });
    });
}

impl eframe::App for OlympiaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.receive_dataset(ctx);

        match &mut self.state {
            LoadState::Loading => show_loading_screen(ctx, &self.config),
            LoadState::Ready(dashboard) => dashboard.update(ctx),
            LoadState::Failed { source, message } => show_error_screen(ctx, source, message),
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = DashboardConfig::load_or_default(&DashboardConfig::default_path());
    info!("Starting Olympic athletes dashboard with {}", config.data_path.display());

    let runtime = tokio::runtime::Runtime::new()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([900.0, 600.0]),
        default_theme: if config.dark_mode {
            eframe::Theme::Dark
        } else {
            eframe::Theme::Light
        },
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Olympic Athletes Dashboard",
        options,
        Box::new(move |cc| Box::new(OlympiaApp::new(cc, config, runtime))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
