use crate::QuizApp;
use crate::ui::layout::two_button_row;
use egui::{CentralPanel, Context, ProgressBar, RichText, ScrollArea};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        let total = app.total_del_tramo();
        let pregunta = match app.pregunta_actual().cloned() {
            Some(q) => q,
            None => {
                ui.vertical_centered(|ui| {
                    ui.heading("❌ No hay preguntas en este tramo.");
                    if ui.button("🔙 Volver al caso").clicked() {
                        app.volver_al_caso();
                    }
                });
                return;
            }
        };
        let idx = app.progress.current_question_index;
        let ya_respondida = app.ya_respondida(&pregunta.id);

        ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.heading(app.progress.current_difficulty.titulo());
                ui.label(format!("Pregunta {} de {}", idx + 1, total));
                ui.add_space(6.0);

                ui.set_width(panel_width);
                ui.add(ProgressBar::new((idx + 1) as f32 / total.max(1) as f32));
                ui.add_space(10.0);

                ui.separator();
                ui.add_space(6.0);
                ui.label(RichText::new(&pregunta.question).heading());
                ui.add_space(10.0);

                if !ya_respondida {
                    // Pregunta abierta: abre el ancla de tiempo y muestra el radio
                    app.anclar_tiempo(now);

                    for opcion in &pregunta.options {
                        let etiqueta = format!("{}. {}", opcion.label, opcion.text);
                        ui.radio_value(
                            &mut app.progress.seleccion,
                            Some(opcion.label.clone()),
                            etiqueta,
                        );
                    }

                    ui.add_space(10.0);
                    if ui
                        .add_sized([panel_width * 0.6, 36.0], egui::Button::new("✅ Enviar respuesta"))
                        .clicked()
                    {
                        match app.progress.seleccion.clone() {
                            Some(sel) => app.procesar_respuesta(&sel, now),
                            None => app.message = "⚠ Elige una opción antes de enviar.".into(),
                        }
                    }

                    if idx > 0 {
                        ui.add_space(6.0);
                        if ui.button("⬅ Anterior").clicked() {
                            app.pregunta_anterior();
                        }
                    }
                } else {
                    // Resultado registrado: se muestra en modo consulta
                    if let Some(registro) = app.progress.respuesta_de(&pregunta.id).cloned() {
                        ui.label(format!(
                            "Tu respuesta: {}. {}",
                            registro.selected_option, registro.selected_text
                        ));
                        ui.add_space(4.0);
                        if registro.is_correct {
                            ui.label(
                                RichText::new("🎉 ¡Brillante trabajo, detective! Pista asegurada.")
                                    .color(egui::Color32::LIGHT_GREEN),
                            );
                        } else {
                            let texto_correcto = pregunta
                                .texto_de(&registro.correct_option)
                                .unwrap_or("(desconocida)");
                            ui.label(
                                RichText::new(format!(
                                    "❌ No exactamente, detective. Respuesta correcta: {}. {}",
                                    registro.correct_option, texto_correcto
                                ))
                                .color(egui::Color32::LIGHT_RED),
                            );
                        }
                    }

                    if let Some(clave) = &pregunta.answer {
                        if !clave.explanation.is_empty() {
                            ui.add_space(8.0);
                            ui.heading("📚 Explicación");
                            ui.label(&clave.explanation);
                        }
                        if !clave.steps.is_empty() {
                            ui.add_space(8.0);
                            ui.heading("🔢 Pasos de la solución");
                            for (i, paso) in clave.steps.iter().enumerate() {
                                ui.label(format!("{}. {paso}", i + 1));
                            }
                        }
                    }

                    ui.add_space(12.0);
                    let etiqueta_siguiente = if idx + 1 < total {
                        "Siguiente ➡"
                    } else {
                        "Finalizar 🎯"
                    };
                    let (anterior, siguiente) =
                        two_button_row(ui, panel_width, "⬅ Anterior", etiqueta_siguiente);
                    if anterior {
                        app.pregunta_anterior();
                    }
                    if siguiente {
                        app.pregunta_siguiente();
                    }

                    ui.add_space(6.0);
                    if ui.button("🔙 Volver al caso").clicked() {
                        app.volver_al_caso();
                    }
                }

                // Pistas inteligentes: solo en el tramo intermedio y tras la
                // primera respuesta intermedia
                if app.pista_disponible() || app.hint_pending || app.hint_text.is_some() {
                    ui.add_space(12.0);
                    ui.separator();
                    ui.heading("🤖 ¿Necesitas una pista del detective IA?");
                    ui.add_space(4.0);

                    if app.pista_disponible() && !app.hint_pending {
                        if ui.button("💡 Pedir pista").clicked() {
                            app.solicitar_pista();
                        }
                    }
                    if app.hint_pending {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("🔍 Analizando tu historial de investigación...");
                        });
                    }
                    if let Some(pista) = app.hint_text.clone() {
                        ui.group(|ui| {
                            ui.set_width(panel_width * 0.9);
                            ui.label(RichText::new("💡 El detective IA dice:").strong());
                            ui.label(pista);
                        });
                    }
                }

                ui.add_space(8.0);
                if !app.message.is_empty() {
                    ui.label(&app.message);
                }
                ui.add_space(16.0);
            });
        });
    });
}
