use crate::QuizApp;
use crate::ui::layout::{centered_panel, profile_section};
use egui::{Button, CentralPanel, Context, RichText, ScrollArea};

pub fn ui_home(app: &mut QuizApp, ctx: &Context) {
    // Catálogo no disponible: error bloqueante, pero la aplicación sigue viva
    if let Some(err) = app.catalog_error.clone() {
        centered_panel(ctx, 160.0, 540.0, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("🚫 Archivo de casos no disponible");
                ui.add_space(8.0);
                ui.label(err.mensaje_usuario());
                ui.add_space(8.0);
                ui.label("Revisa el banco de preguntas y vuelve a abrir la aplicación.");
            });
        });
        return;
    }

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 640.0;
        let content_width = ui.available_width().min(max_width);

        ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.heading("🔍 ClueToSolve");
                ui.label("Un viaje de aprendizaje gamificado para detectives sin miedo");
                ui.add_space(10.0);
                profile_section(ui);

                if !app.message.is_empty() {
                    ui.label(
                        RichText::new(&app.message)
                            .color(egui::Color32::YELLOW)
                            .strong(),
                    );
                    ui.add_space(8.0);
                }

                let tarjetas = app.tarjetas_de_casos();
                let mut capitulo_visto: Option<String> = None;

                for tarjeta in &tarjetas {
                    if capitulo_visto.as_deref() != Some(tarjeta.chapter.as_str()) {
                        ui.add_space(10.0);
                        ui.heading(format!("📚 {}", tarjeta.chapter));
                        capitulo_visto = Some(tarjeta.chapter.clone());
                    }

                    ui.add_space(6.0);
                    ui.group(|ui| {
                        ui.set_width(content_width);
                        ui.label(RichText::new(format!("🔍 {}", tarjeta.key)).strong());
                        ui.label(&tarjeta.description);
                        ui.add_space(4.0);
                        if ui
                            .add_sized(
                                [content_width * 0.9, 32.0],
                                Button::new(format!("🚨 Investigar {}", tarjeta.key)),
                            )
                            .clicked()
                        {
                            app.seleccionar_caso(&tarjeta.chapter, &tarjeta.key);
                        }
                    });
                }

                ui.add_space(16.0);
            });
        });
    });
}
