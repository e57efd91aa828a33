// src/gui/components/charts.rs
//
// Horizontal bar charts built from plain egui widgets. Purely a view over
// `app.view`; nothing is aggregated here.

use eframe::egui;

use crate::engine::Counts;
use crate::gui::app::App;

const LABEL_W: f32 = 160.0;
const ROW_H: f32 = 18.0;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let v = &app.view;

    ui.columns(2, |cols| {
        bar_chart(&mut cols[0], "SSAs por Responsável na Programação", &v.resp_prog_counts);
        bar_chart(&mut cols[1], "SSAs por Responsável na Execução", &v.resp_exec_counts);
    });
    ui.add_space(6.0);
    bar_chart(ui, "SSAs Programadas por Semana", &v.week_counts);

    if v.detail_visible {
        ui.add_space(8.0);
        ui.heading("Detalhamento por Responsável");
        ui.columns(2, |cols| {
            bar_chart(&mut cols[0], "SSAs Pendentes por Estado", &v.detail_state_counts);
            bar_chart(&mut cols[1], "SSAs Programadas por Semana (Detalhamento)", &v.detail_week_counts);
        });
    }
}

pub fn bar_chart(ui: &mut egui::Ui, title: &str, counts: &Counts) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.strong(title);
        ui.separator();

        if counts.is_empty() {
            ui.weak("Sem dados para a seleção");
            return;
        }

        let max = counts.max_count().max(1) as f32;
        let bar_w = (ui.available_width() - LABEL_W - 12.0).max(40.0);
        for (key, n) in counts.iter() {
            ui.horizontal(|ui| {
                let label = if key.is_empty() { "(em branco)" } else { key };
                ui.add_sized([LABEL_W, ROW_H], egui::Label::new(label).truncate());
                ui.add(
                    egui::ProgressBar::new(n as f32 / max)
                        .desired_width(bar_w)
                        .text(n.to_string()),
                );
            });
        }
    });
}
