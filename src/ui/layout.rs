use crate::QuizApp;
use crate::model::AppState;
use egui::{Button, CentralPanel, Context, Frame, RichText, Ui, Visuals};

/// Nombre e ilusión del detective de guardia.
pub const DETECTIVE: &str = "Markat";
pub const LEMA: &str = "💪 Usa tus puntos fuertes para vencer tus debilidades";

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("🏠 Abandonar caso").clicked() {
                if app.progress.responses.is_empty() || app.state == AppState::Results {
                    app.volver_al_cuartel();
                } else {
                    app.confirm_reset = true;
                }
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Modo oscuro").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Modo claro").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Tarjeta de perfil del detective, presente en todas las vistas de
/// contenido.
pub fn profile_section(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(format!("🕵 Detective {DETECTIVE}")).strong());
        ui.label(RichText::new(LEMA).italics().small());
    });
    ui.add_space(8.0);
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                // Ajusta anchura
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                // Ejecuta contenido
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        // espacio para centrar la fila en su panel
        ui.add_space((ui.available_width() - panel_width).max(0.0) / 2.0);
        clicked_left = ui
            .add_sized([btn_w, 36.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 36.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}

/// Fila de tarjetas métricas (valor grande + etiqueta pequeña).
pub fn metric_row(ui: &mut Ui, metricas: &[(String, &str)]) {
    ui.columns(metricas.len(), |columnas| {
        for (col, (valor, etiqueta)) in columnas.iter_mut().zip(metricas) {
            col.vertical_centered(|ui| {
                ui.label(RichText::new(valor).heading().strong());
                ui.label(RichText::new(*etiqueta).small());
            });
        }
    });
}
