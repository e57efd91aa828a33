// src/gui/components/kpi_strip.rs
//
// Startup numbers: KPI cards, then one card per status ("SSAs por Estado").

use eframe::egui::{self, RichText, Vec2};

use crate::gui::app::App;

const CARD_SIZE: Vec2 = Vec2::new(140.0, 64.0);

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let b = &app.baseline;
    let period = match (b.period.inicio, b.period.fim) {
        (Some(a), Some(z)) => format!("{} → {}", a.format("%d/%m/%Y"), z.format("%d/%m/%Y")),
        _ => s!("-"),
    };

    ui.horizontal_wrapped(|ui| {
        card(ui, "Total de SSAs", b.total.to_string());
        card(ui, "Críticas (S3.7)", b.critical.to_string());
        card(ui, "Taxa de criticidade", format!("{:.1}%", b.critical_rate));
        card(ui, "Saúde geral", format!("{:.2}", app.health_score));
        card(ui, "Programadas", format!("{:.0}%", app.efficiency.scheduling_rate * 100.0));
        card(ui, "Execução simples", format!("{:.0}%", app.efficiency.simple_execution_rate * 100.0));
        card(ui, "Período", period);
    });

    ui.add_space(8.0);
    ui.heading("SSAs por Estado");
    ui.horizontal_wrapped(|ui| {
        for (state, count) in app.state_counts.iter() {
            let label = if state.is_empty() { "(em branco)" } else { state };
            card(ui, label, count.to_string());
        }
    });
}

fn card(ui: &mut egui::Ui, title: &str, value: String) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_size(CARD_SIZE);
        ui.vertical_centered(|ui| {
            ui.label(title);
            ui.label(RichText::new(value).size(22.0).strong());
        });
    });
}
