use crate::report::TopicStats;
use egui::{Color32, RichText, Ui};

pub fn porcentaje(valor: f64) -> String {
    format!("{:.0}%", valor * 100.0)
}

pub fn segundos(valor: f64) -> String {
    format!("{valor:.0} s")
}

/// Línea de tema con su precisión, verde para fortalezas y rojo para
/// temas pendientes de práctica.
pub fn linea_tema(ui: &mut Ui, tema: &str, stats: TopicStats, fuerte: bool) {
    let (icono, color) = if fuerte {
        ("✅", Color32::LIGHT_GREEN)
    } else {
        ("⚠", Color32::LIGHT_RED)
    };
    ui.label(
        RichText::new(format!(
            "{icono} {tema} — {} ({}/{})",
            porcentaje(stats.precision()),
            stats.correct,
            stats.total
        ))
        .color(color),
    );
}
