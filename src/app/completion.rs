use super::*;

impl QuizApp {
    /// Cierra el tramo en curso: marca su bandera (monótona) y decide la
    /// ruta. Básico e intermedio pasan por un descanso; el avanzado va
    /// directo al informe.
    pub fn finalizar_tramo(&mut self) {
        let tramo = self.progress.current_difficulty;
        self.progress.marcar_completado(tramo);
        self.limpiar_ancla();
        self.hint_text = None;
        self.message.clear();
        self.state = match tramo {
            Difficulty::Basic | Difficulty::Intermediate => AppState::TierBreak,
            Difficulty::Advanced => AppState::Results,
        };
    }
}
