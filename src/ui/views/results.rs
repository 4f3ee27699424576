use crate::QuizApp;
use crate::report::compute_report;
use crate::ui::helpers::{linea_tema, porcentaje, segundos};
use crate::ui::layout::{metric_row, profile_section, two_button_row};
use egui::{Button, CentralPanel, Context, Grid, RichText, ScrollArea};

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 680.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(14.0);
                ui.heading("🎉 ¡Caso resuelto!");
                ui.label("Tu informe de investigación está listo, detective.");
                ui.add_space(8.0);
                profile_section(ui);

                if app.progress.responses.is_empty() {
                    ui.label("No hay respuestas registradas en este caso.");
                    ui.add_space(8.0);
                    if ui.button("🏠 Volver al cuartel").clicked() {
                        app.volver_al_cuartel();
                    }
                    return;
                }

                ui.set_width(panel_width);
                let informe = compute_report(&app.progress.responses);

                // Rango del detective
                ui.add_space(6.0);
                ui.label(RichText::new(informe.rank.etiqueta()).heading().strong());
                ui.add_space(10.0);

                metric_row(
                    ui,
                    &[
                        (
                            format!("{}/{}", informe.correct, informe.total),
                            "✅ Casos resueltos",
                        ),
                        (porcentaje(informe.accuracy), "🎯 Precisión"),
                        (segundos(informe.avg_time), "⏱ Tiempo medio"),
                        (informe.streak.to_string(), "🔥 Racha actual"),
                    ],
                );

                ui.add_space(12.0);
                ui.separator();
                ui.add_space(6.0);

                // Fortalezas y temas por practicar
                ui.columns(2, |columnas| {
                    columnas[0].label(RichText::new("💪 Tus fortalezas").strong());
                    let fortalezas = informe.fortalezas();
                    if fortalezas.is_empty() {
                        columnas[0].label("Sigue resolviendo para construirlas.");
                    }
                    for (tema, stats) in fortalezas {
                        linea_tema(&mut columnas[0], tema, stats, true);
                    }

                    columnas[1].label(RichText::new("🎯 Para practicar").strong());
                    let debilidades = informe.debilidades();
                    if debilidades.is_empty() {
                        columnas[1].label("🌟 ¡Sin puntos débiles!");
                    }
                    for (tema, stats) in debilidades {
                        linea_tema(&mut columnas[1], tema, stats, false);
                    }
                });

                // Pistas falsas: los temas con más fallos acumulados
                ui.add_space(12.0);
                ui.heading("🚩 Pistas falsas (puntos de confusión)");
                if informe.confusion_points.is_empty() {
                    ui.label("🎯 Sin confusiones detectadas. ¡Claridad absoluta!");
                } else {
                    for (tema, fallos) in &informe.confusion_points {
                        ui.label(format!("🔍 Repasa {tema}: {fallos} fallo(s) aquí"));
                    }
                }

                // Revisión completa de respuestas
                ui.add_space(12.0);
                ui.separator();
                ui.heading("📋 Revisión de respuestas");
                ui.add_space(6.0);
                Grid::new("results_grid")
                    .striped(true)
                    .spacing([10.0, 2.0])
                    .show(ui, |ui| {
                        ui.label("Nº");
                        ui.label("Tema");
                        ui.label("Tu respuesta");
                        ui.label("Correcta");
                        ui.label("Tiempo");
                        ui.label("Resultado");
                        ui.end_row();

                        for fila in app.filas_de_respuestas() {
                            ui.label(fila.index_1based.to_string());
                            ui.label(&fila.topic);
                            ui.label(&fila.selected);
                            ui.label(&fila.correct_option);
                            ui.label(segundos(fila.time_spent));
                            ui.label(if fila.is_correct { "✅" } else { "❌" });
                            ui.end_row();
                        }
                    });

                // Recomendaciones: otros casos del mismo capítulo
                let otros = app.otros_subtemas();
                if !otros.is_empty() {
                    ui.add_space(12.0);
                    ui.heading("🔍 Explora otras escenas del crimen");
                    ui.add_space(4.0);
                    for tarjeta in &otros {
                        if ui
                            .add_sized(
                                [panel_width * 0.8, 32.0],
                                Button::new(format!("🚨 Investigar {}", tarjeta.key)),
                            )
                            .clicked()
                        {
                            app.investigar_otro_caso(&tarjeta.key);
                        }
                        ui.add_space(4.0);
                    }
                }

                ui.add_space(14.0);
                let (cuartel, caso) =
                    two_button_row(ui, panel_width, "🏠 Volver al cuartel", "🔙 Volver al caso");
                if cuartel {
                    app.volver_al_cuartel();
                }
                if caso {
                    app.volver_al_caso();
                }
                ui.add_space(16.0);
            });
        });
    });
}
