// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{
        consts::APP_TITLE,
        options::LoadOptions,
        state::AppState,
        Settings,
    },
    engine::{
        aggregate::{responsaveis, state_counts},
        kpi::{EfficiencyMetrics, KpiCalculator},
        stats::{baseline_or_default, BaselineStats},
        view::update_view,
        Counts, DashboardView, Responsaveis,
    },
    fixtures,
    store::{self, DataSet},
};

use super::components;

pub fn run(options: eframe::NativeOptions, settings: Settings) -> Result<(), Box<dyn Error>> {
    if let Err(e) = settings.ensure_dirs() {
        eprintln!("Cannot create {} / {}: {e}", settings.downloads_dir.display(), settings.logs_dir.display());
    } else {
        crate::log::init(settings.log_file());
    }

    let mut state = AppState::default();
    state.options.load = LoadOptions::for_path(settings.default_input());
    let (dataset, source) = load_initial(&state.options.load);

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state, settings, dataset, source)))),
    )?;
    Ok(())
}

/// Report on disk if it loads, else the quickstart sample.
fn load_initial(load: &LoadOptions) -> (DataSet, String) {
    let sample = || (fixtures::quickstart_dataset(), s!("amostra embutida"));
    match load.path.as_deref() {
        Some(path) if path.exists() => match store::load_dataset(load) {
            Ok((ds, _report)) => (ds, path.display().to_string()),
            Err(e) => {
                loge!("Load: {e}; falling back to the built-in sample");
                sample()
            }
        },
        Some(path) => {
            logf!("Load: {} not found, using the built-in sample", path.display());
            sample()
        }
        None => sample(),
    }
}

pub struct App {
    // single source of truth for UI options (UI thread only)
    pub state: AppState,
    pub settings: Settings,

    // full dataset for this run; never mutated
    pub dataset: DataSet,
    pub source: String,

    // computed once at startup
    pub baseline: BaselineStats,
    pub state_counts: Counts,
    pub efficiency: EfficiencyMetrics,
    pub health_score: f64,
    pub filter_options: Responsaveis,

    // recomputed on every filter change
    pub view: DashboardView,

    pub status: String,
}

impl App {
    pub fn new(state: AppState, settings: Settings, dataset: DataSet, source: String) -> Self {
        let baseline = baseline_or_default(&dataset);
        let kpi = KpiCalculator::new(&dataset);
        let efficiency = kpi.calculate_efficiency_metrics();
        let health_score = kpi.overall_health_score();
        let view = update_view(&dataset, &state.gui.filters);

        logf!(
            "Init: source={}, rows={}, critical={}, health={:.2}",
            source, dataset.len(), baseline.critical, health_score
        );

        Self {
            state_counts: state_counts(&dataset),
            filter_options: responsaveis(&dataset),
            status: format!("{} SSAs carregadas de {}", dataset.len(), source),
            state,
            settings,
            dataset,
            source,
            baseline,
            efficiency,
            health_score,
            view,
        }
    }

    /// Recompute every chart and the table for the current selection.
    pub fn apply_filters(&mut self) {
        self.view = update_view(&self.dataset, &self.state.gui.filters);
        self.state.gui.table_offset = 0;
        self.status(format!("{} SSAs na seleção", self.view.table_rows.len()));
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status.as_str());
        });

        egui::SidePanel::left("filters")
            .resizable(false)
            .show(ctx, |ui| {
                components::filter_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("dashboard_scroll")
                .show(ui, |ui| {
                    ui.heading(APP_TITLE);
                    ui.add_space(8.0);

                    components::kpi_strip::draw(ui, self);
                    ui.separator();

                    components::charts::draw(ui, self);
                    ui.separator();

                    components::data_table::draw(ui, self);
                });
        });
    }
}
