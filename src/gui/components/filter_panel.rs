// src/gui/components/filter_panel.rs
//
// Left panel: the two responsible-party dropdowns. Any change rebuilds the
// whole view through `App::apply_filters`.

use eframe::egui;

use crate::config::consts::SAM_REPORT_URL;
use crate::engine::FilterSelection;
use crate::gui::app::App;

const PLACEHOLDER: &str = "Selecione um responsável...";

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filtros");
    ui.add_space(6.0);

    let mut prog = app.state.gui.filters.scheduling_owner().map(str::to_owned);
    let mut exec = app.state.gui.filters.execution_owner().map(str::to_owned);
    let mut changed = false;

    ui.label("Responsável Programação:");
    changed |= owner_combo(ui, "resp-prog-filter", &mut prog, &app.filter_options.programacao);
    ui.add_space(6.0);

    ui.label("Responsável Execução:");
    changed |= owner_combo(ui, "resp-exec-filter", &mut exec, &app.filter_options.execucao);
    ui.add_space(6.0);

    if ui
        .add_enabled(prog.is_some() || exec.is_some(), egui::Button::new("Limpar filtros"))
        .clicked()
    {
        prog = None;
        exec = None;
        changed = true;
    }

    if changed {
        app.state.gui.filters = FilterSelection::new(prog, exec);
        app.apply_filters();
        logf!(
            "UI: Filters → prog={:?} exec={:?}",
            app.state.gui.filters.scheduling_owner(),
            app.state.gui.filters.execution_owner()
        );
    }

    ui.separator();
    ui.weak(format!("Fonte: {}", app.source));
    ui.weak(format!("{} SSAs no total", app.dataset.len()));
    ui.hyperlink_to("Relatório SAM", SAM_REPORT_URL);
}

/// Returns true when the user picked a different value.
fn owner_combo(ui: &mut egui::Ui, id: &str, value: &mut Option<String>, options: &[String]) -> bool {
    let before = value.clone();
    egui::ComboBox::from_id_salt(id)
        .selected_text(value.as_deref().unwrap_or(PLACEHOLDER))
        .width(200.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(value, None, PLACEHOLDER);
            for o in options {
                ui.selectable_value(value, Some(o.clone()), o.as_str());
            }
        });
    *value != before
}
