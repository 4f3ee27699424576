use crate::QuizApp;
use crate::model::Difficulty;
use crate::report::{agrupar_por_tema, resumen_de_tramo};
use crate::ui::helpers::{linea_tema, porcentaje, segundos};
use crate::ui::layout::{metric_row, profile_section, two_button_row};
use egui::{CentralPanel, Context, ScrollArea};

pub fn ui_tier_break(app: &mut QuizApp, ctx: &Context) {
    let tramo = app.progress.current_difficulty;

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 620.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(14.0);
                match tramo {
                    Difficulty::Basic => {
                        ui.heading("🕵 Punto de control de la investigación");
                        ui.label("¡Pistas básicas reunidas! Respira hondo o sigue excavando.");
                    }
                    _ => {
                        ui.heading("🎯 ¡Evidencia analizada!");
                        ui.label("Has dominado el nivel intermedio. ¿Listo para el caso final?");
                    }
                }
                ui.add_space(8.0);
                profile_section(ui);

                ui.set_width(panel_width);

                let del_tramo: Vec<_> = app
                    .progress
                    .responses
                    .iter()
                    .filter(|r| r.difficulty == tramo)
                    .cloned()
                    .collect();
                let resumen = resumen_de_tramo(&app.progress.responses, tramo);

                metric_row(
                    ui,
                    &[
                        (resumen.answered.to_string(), "🔍 Pistas revisadas"),
                        (porcentaje(resumen.accuracy), "🎯 Precisión"),
                        (segundos(resumen.avg_time), "⏱ Tiempo medio"),
                    ],
                );

                if !del_tramo.is_empty() {
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(6.0);

                    ui.columns(2, |columnas| {
                        columnas[0].label(egui::RichText::new("💪 Tus fortalezas").strong());
                        columnas[1].label(egui::RichText::new("🎯 Para practicar").strong());
                        for (tema, stats) in agrupar_por_tema(&del_tramo) {
                            if stats.precision() >= crate::report::UMBRAL_DOMINIO {
                                linea_tema(&mut columnas[0], &tema, stats, true);
                            } else {
                                linea_tema(&mut columnas[1], &tema, stats, false);
                            }
                        }
                    });
                }

                ui.add_space(16.0);
                let etiqueta_continuar = match tramo.siguiente() {
                    Some(siguiente) => format!("▶ Continuar: {}", siguiente.nombre()),
                    None => "▶ Ver el informe".to_string(),
                };
                let (descansar, continuar) =
                    two_button_row(ui, panel_width, "⏸ Volver al caso", &etiqueta_continuar);
                if descansar {
                    app.volver_al_caso();
                }
                if continuar {
                    app.continuar_tras_descanso();
                }

                if !app.message.is_empty() {
                    ui.add_space(8.0);
                    ui.label(&app.message);
                }
                ui.add_space(16.0);
            });
        });
    });
}
