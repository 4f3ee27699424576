use crate::QuizApp;
use crate::ui::layout::{profile_section, two_button_row};
use egui::{CentralPanel, Context, RichText, ScrollArea};

pub fn ui_case_briefing(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 640.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        // Sin caso seleccionado no hay nada que informar
        if app.progress.current_subtopic.is_none() {
            ui.vertical_centered(|ui| {
                ui.heading("❌ ¡Ningún caso seleccionado!");
                if ui.button("🏠 Volver al cuartel").clicked() {
                    app.volver_al_cuartel();
                }
            });
            return;
        }

        let caso = match app.caso_avanzado().cloned() {
            Some(caso) => caso,
            None => {
                ui.vertical_centered(|ui| {
                    ui.heading("❌ Este expediente no tiene caso final.");
                    if ui.button("🏠 Volver al cuartel").clicked() {
                        app.volver_al_cuartel();
                    }
                });
                return;
            }
        };

        ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(
                    caso.case_title
                        .as_deref()
                        .unwrap_or("🚨 Caso misterioso"),
                );
                if let Some(numero) = &caso.case_number {
                    ui.label(RichText::new(numero).italics());
                }
                ui.add_space(8.0);
                profile_section(ui);

                if let Some(expediente) = &caso.case_file {
                    ui.set_width(panel_width);

                    ui.heading("📄 Informe del caso");
                    ui.label(&expediente.briefing);
                    ui.add_space(8.0);

                    ui.heading("🏛 Escena");
                    ui.label(&expediente.crime_scene);
                    ui.add_space(8.0);

                    if !expediente.evidence_found.is_empty() {
                        ui.heading("🧪 Evidencia encontrada");
                        for pieza in &expediente.evidence_found {
                            ui.label(format!("• {}: {}", pieza.name, pieza.detail));
                        }
                        ui.add_space(8.0);
                    }

                    if !expediente.mystery.is_empty() {
                        ui.heading("❓ El misterio");
                        ui.label(RichText::new(&expediente.mystery).strong());
                        ui.add_space(8.0);
                    }
                }

                // Insignias de progreso de los tres tramos
                ui.heading("🎯 Progreso de la investigación");
                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    for tramo in app.info_de_tramos() {
                        ui.label(tramo.badge());
                        ui.add_space(12.0);
                    }
                });

                ui.add_space(14.0);
                let (empezar, volver) = two_button_row(
                    ui,
                    panel_width,
                    "🚀 Empezar investigación",
                    "🏠 Volver al cuartel",
                );
                if empezar {
                    app.empezar_investigacion();
                }
                if volver {
                    if app.progress.responses.is_empty() {
                        app.volver_al_cuartel();
                    } else {
                        app.confirm_reset = true;
                    }
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
