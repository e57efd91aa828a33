// src/gui/actions/copy.rs
use eframe::egui;
use crate::{core::Delim, gui::app::App, store};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.view.table_rows.is_empty() {
        app.status("Nada para copiar");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    // Tab-separated so it pastes straight into a spreadsheet.
    let txt = store::table_to_string(&app.view.table_rows, Delim::Tsv);
    logf!("Copy: rows={}", app.view.table_rows.len());

    ui_ctx.copy_text(txt);
    app.status(format!("{} linhas copiadas", app.view.table_rows.len()));
}
