use super::*;
use crate::advisor;
use crate::model::InvalidSelection;

impl QuizApp {
    /// Corrige y registra la selección enviada para la pregunta en curso.
    /// `now` son los segundos del reloj de egui en el momento del envío.
    pub fn procesar_respuesta(&mut self, seleccion: &str, now: f64) {
        if seleccion.trim().is_empty() {
            self.message = "⚠ Elige una opción antes de enviar.".into();
            return;
        }

        let pregunta = match self.pregunta_actual().cloned() {
            Some(q) => q,
            None => {
                self.message = "Error interno: no hay pregunta seleccionada.".into();
                return;
            }
        };

        if self.ya_respondida(&pregunta.id) && self.revisit_policy == RevisitPolicy::ViewOnly {
            self.message = "🔒 Esta pregunta ya quedó registrada en el expediente.".into();
            return;
        }

        let transcurrido = self.tiempo_transcurrido(now);
        match Response::evaluate(&pregunta, seleccion, transcurrido) {
            Ok(respuesta) => {
                let correcta = respuesta.is_correct;
                self.progress.upsert_response(respuesta);
                self.progress.question_started_at = None;
                self.message = if correcta {
                    "🎉 ¡Brillante trabajo, detective! Pista asegurada.".into()
                } else {
                    "❌ No exactamente, detective. Revisa la explicación.".into()
                };
            }
            Err(InvalidSelection) => {
                self.message = format!("⚠ La opción «{seleccion}» no existe en esta pregunta.");
            }
        }
    }

    // --- Pistas del asesor ---

    /// Las pistas solo se ofrecen en el tramo intermedio, con al menos una
    /// respuesta intermedia registrada y la pregunta actual sin responder.
    pub fn pista_disponible(&self) -> bool {
        if self.state != AppState::Quiz
            || self.progress.current_difficulty != Difficulty::Intermediate
        {
            return false;
        }
        let tiene_intermedias = self
            .progress
            .responses
            .iter()
            .any(|r| r.difficulty == Difficulty::Intermediate);
        let actual_sin_responder = self
            .pregunta_actual()
            .map(|q| !self.ya_respondida(&q.id))
            .unwrap_or(false);
        tiene_intermedias && actual_sin_responder
    }

    /// Lanza la petición de pista sin bloquear la interfaz: hilo + canal
    /// en escritorio, future local en WASM. El resultado lo recoge
    /// [`QuizApp::poll_pista`] en un frame posterior.
    pub fn solicitar_pista(&mut self) {
        if self.hint_pending {
            self.message = "⏳ El asesor sigue analizando tu historial. Espera un momento.".into();
            return;
        }
        let pregunta = match self.pregunta_actual().cloned() {
            Some(q) => q,
            None => return,
        };

        let peticion = advisor::construir_peticion(&pregunta, &self.progress.responses);
        let (tx, rx) = std::sync::mpsc::channel();
        self.hint_rx = Some(rx);
        self.hint_pending = true;
        self.hint_text = None;

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let _ = tx.send(advisor::pedir_pista(&peticion));
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let _ = tx.send(advisor::pedir_pista(&peticion).await);
        });
    }

    /// Recoge el resultado del asesor si ya llegó. Cualquier fallo degrada
    /// a la pista fija: nunca se muestra como error duro.
    pub fn poll_pista(&mut self) {
        let resultado = self.hint_rx.as_ref().and_then(|rx| rx.try_recv().ok());
        if let Some(resultado) = resultado {
            self.hint_pending = false;
            self.hint_rx = None;
            self.hint_text = Some(match resultado {
                Ok(texto) => texto,
                Err(err) => {
                    log::warn!("El asesor de pistas falló: {}", err.message);
                    advisor::PISTA_FALLBACK.to_string()
                }
            });
        }
    }
}
