// src/gui/actions/export.rs
use std::path::PathBuf;

use crate::{config::Settings, core::Delim, gui::app::App, store};

const EXPORT_STEM: &str = "ssa_tabela";

/// Target file for a table export in the given format.
pub fn export_path(settings: &Settings, delim: Delim) -> PathBuf {
    settings.downloads_dir.join(format!("{EXPORT_STEM}.{}", delim.ext()))
}

pub fn export(app: &mut App) {
    if app.view.table_rows.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nada para exportar");
        return;
    }

    let delim = app.state.options.export_format;
    let path = export_path(&app.settings, delim);
    logf!("Export: Begin rows={}, format={:?}", app.view.table_rows.len(), delim);

    let msg = match store::export_table(&path, &app.view.table_rows, delim) {
        Ok(written) => {
            logf!("Export: OK → {}", written.display());
            format!("Exportado: {}", written.display())
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Erro ao exportar: {e}")
        }
    };
    app.status(msg);
}
