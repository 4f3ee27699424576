#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clue_to_solve::QuizApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 740.0])
            .with_min_inner_size([680.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "ClueToSolve",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new()))),
    )
}

// Entrada para la versión web: engancha el runner al canvas de index.html
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No hay window")
            .document()
            .expect("No hay document");

        let canvas = document
            .get_element_by_id("clue_to_solve_canvas")
            .expect("No se encontró el canvas clue_to_solve_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("clue_to_solve_canvas no es un HtmlCanvasElement");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::new(QuizApp::new()))),
            )
            .await
            .expect("No se pudo arrancar eframe en el navegador");
    });
}
