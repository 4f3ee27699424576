use super::*;
use eframe::egui;

impl QuizApp {
    /// Reinicio completo de la sesión de caso: respuestas, banderas y
    /// posición. La caché de preguntas se conserva (es de solo lectura).
    /// Un resultado de pista en vuelo se descarta al soltar el canal.
    pub fn reiniciar_sesion(&mut self) {
        self.progress = CaseProgress::default();
        self.hint_text = None;
        self.hint_pending = false;
        self.hint_rx = None;
        self.confirm_reset = false;
        self.message.clear();
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirmar abandono")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(
                    "¿Seguro que quieres abandonar el caso? \
                     Se perderán todas las respuestas de esta sesión.",
                );
                ui.horizontal(|ui| {
                    if ui.button("Sí, abandonar").clicked() {
                        self.volver_al_cuartel();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}
