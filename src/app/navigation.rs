use super::*;

impl QuizApp {
    /// Abre un caso desde el cuartel: reinicia la sesión entera y carga
    /// las preguntas. Si la fuente falla, el usuario se queda en el
    /// cuartel con el aviso.
    pub fn seleccionar_caso(&mut self, capitulo: &str, subtema: &str) {
        self.reiniciar_sesion();
        self.progress.current_chapter = Some(capitulo.to_string());
        self.progress.current_subtopic = Some(subtema.to_string());

        match self.cargar_caso_actual() {
            Ok(()) => {
                self.state = AppState::CaseBriefing;
                self.message.clear();
            }
            Err(err) => {
                log::warn!("No se pudo abrir el caso {capitulo}/{subtema}: {err:?}");
                self.progress.current_chapter = None;
                self.progress.current_subtopic = None;
                self.state = AppState::Home;
                self.message = err.mensaje_usuario();
            }
        }
    }

    /// Arranca la investigación por el tramo básico.
    pub fn empezar_investigacion(&mut self) {
        if self.preguntas_del_caso().is_none() {
            self.message = "Error interno: no hay un caso cargado.".into();
            return;
        }
        self.progress.current_difficulty = Difficulty::Basic;
        self.progress.current_question_index = 0;
        self.limpiar_ancla();
        self.hint_text = None;
        self.state = AppState::Quiz;
        self.message.clear();
    }

    pub fn pregunta_anterior(&mut self) {
        if self.progress.current_question_index > 0 {
            self.progress.current_question_index -= 1;
            self.limpiar_ancla();
            self.hint_text = None;
            self.message.clear();
        }
    }

    /// Avanza dentro del tramo; en la última pregunta cierra el tramo y
    /// delega la ruta en el manejador de finalización.
    pub fn pregunta_siguiente(&mut self) {
        let total = self.total_del_tramo();
        if total == 0 {
            return;
        }
        if self.progress.current_question_index + 1 < total {
            self.progress.current_question_index += 1;
            self.limpiar_ancla();
            self.hint_text = None;
            self.message.clear();
        } else {
            self.finalizar_tramo();
        }
    }

    /// Sale del descanso hacia el siguiente tramo. El orden es
    /// estrictamente secuencial: sin la bandera del tramo actual no hay
    /// avance.
    pub fn continuar_tras_descanso(&mut self) {
        let actual = self.progress.current_difficulty;
        if !self.progress.completado(actual) {
            self.message = "🔒 Aún quedan preguntas por cerrar en este tramo.".into();
            return;
        }
        match actual.siguiente() {
            Some(siguiente) => {
                self.progress.current_difficulty = siguiente;
                self.progress.current_question_index = 0;
                self.limpiar_ancla();
                self.hint_text = None;
                self.state = AppState::Quiz;
                self.message.clear();
            }
            None => self.state = AppState::Results,
        }
    }

    /// Vuelve al expediente del caso sin tocar las respuestas.
    pub fn volver_al_caso(&mut self) {
        self.limpiar_ancla();
        self.hint_text = None;
        self.state = AppState::CaseBriefing;
        self.message.clear();
    }

    /// Abandona el caso: reinicio completo de la sesión y vuelta al
    /// cuartel.
    pub fn volver_al_cuartel(&mut self) {
        self.reiniciar_sesion();
        self.state = AppState::Home;
    }

    /// Desde el informe final, abre otro subtema del mismo capítulo.
    pub fn investigar_otro_caso(&mut self, subtema: &str) {
        let capitulo = match self.progress.current_chapter.clone() {
            Some(c) => c,
            None => return,
        };
        self.seleccionar_caso(&capitulo, subtema);
    }
}
