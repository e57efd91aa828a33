// src/gui/components/data_table.rs
//
// Paged SSA list with copy/export buttons. Purely a view over
// `app.view.table_rows`; only the page offset lives here.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::TABLE_PAGE_SIZE;
use crate::engine::table::TABLE_HEADERS;
use crate::gui::{actions, app::App};

const ROW_H: f32 = 20.0;
const COL_WIDTHS: [f32; 6] = [90.0, 160.0, 160.0, 160.0, 110.0, 90.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let total = app.view.table_rows.len();
    let pages = total.div_ceil(TABLE_PAGE_SIZE).max(1);
    let mut page = (app.state.gui.table_offset / TABLE_PAGE_SIZE).min(pages - 1);

    ui.horizontal(|ui| {
        ui.heading("Lista de SSAs");
        ui.label(format!("({total})"));
        ui.add_space(12.0);
        if ui.button("Copiar").clicked() {
            let ctx = ui.ctx().clone();
            actions::copy(app, &ctx);
        }
        if ui.button("Exportar").clicked() {
            actions::export(app);
        }
    });

    let rows = &app.view.table_rows;
    let start = page * TABLE_PAGE_SIZE;
    let end = (start + TABLE_PAGE_SIZE).min(total);
    let slice = &rows[start.min(end)..end];

    let mut table = TableBuilder::new(ui)
        .id_salt("ssa_table")
        .striped(true)
        .vscroll(false);
    for w in COL_WIDTHS {
        table = table.column(Column::initial(w).at_least(40.0).resizable(true).clip(true));
    }

    table
        .header(ROW_H, |mut header| {
            for h in TABLE_HEADERS {
                header.col(|ui| {
                    ui.label(RichText::new(h).strong());
                });
            }
        })
        .body(|body| {
            body.rows(ROW_H, slice.len(), |mut row| {
                let r = &slice[row.index()];
                for cell in r.to_cells() {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });

    ui.horizontal(|ui| {
        if ui.add_enabled(page > 0, egui::Button::new("◀")).clicked() {
            page -= 1;
        }
        ui.label(format!("Página {} de {}", page + 1, pages));
        if ui.add_enabled(page + 1 < pages, egui::Button::new("▶")).clicked() {
            page += 1;
        }
    });
    app.state.gui.table_offset = page * TABLE_PAGE_SIZE;
}
