use super::*;

impl QuizApp {
    /// Abre el ancla de tiempo de la pregunta en curso si aún no existe.
    /// La UI la fija al mostrar una pregunta sin responder.
    pub fn anclar_tiempo(&mut self, now: f64) {
        if self.progress.question_started_at.is_none() {
            self.progress.question_started_at = Some(now);
        }
    }

    /// Cierra el ancla y descarta la selección a medio marcar.
    pub fn limpiar_ancla(&mut self) {
        self.progress.question_started_at = None;
        self.progress.seleccion = None;
    }

    /// Segundos desde que se mostró la pregunta. Sin ancla abierta se
    /// registra 0 y se deja constancia del dato degradado.
    pub fn tiempo_transcurrido(&self, now: f64) -> f64 {
        match self.progress.question_started_at {
            Some(inicio) => (now - inicio).max(0.0),
            None => {
                log::warn!("Pregunta sin ancla de tiempo: se registra 0 s");
                0.0
            }
        }
    }

    pub fn ya_respondida(&self, question_id: &str) -> bool {
        self.progress.respuesta_de(question_id).is_some()
    }
}
