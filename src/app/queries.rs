use super::*;

impl QuizApp {
    /// Clave de la caché de preguntas del caso seleccionado.
    pub fn clave_cache(&self) -> Option<String> {
        let capitulo = self.progress.current_chapter.as_deref()?;
        let subtema = self.progress.current_subtopic.as_deref()?;
        Some(format!("{capitulo}_{subtema}"))
    }

    /// Rellena la caché con las preguntas del caso actual si hace falta.
    pub fn cargar_caso_actual(&mut self) -> Result<(), DataError> {
        let (capitulo, subtema) = match (
            self.progress.current_chapter.clone(),
            self.progress.current_subtopic.clone(),
        ) {
            (Some(c), Some(s)) => (c, s),
            _ => return Ok(()), // sin caso seleccionado no hay nada que cargar
        };

        let clave = format!("{capitulo}_{subtema}");
        if self.question_cache.contains_key(&clave) {
            return Ok(());
        }
        let preguntas = data::cargar_preguntas(&self.catalog, &capitulo, &subtema)?;
        self.question_cache.insert(clave, preguntas);
        Ok(())
    }

    /// Todas las preguntas del caso seleccionado, en orden de fuente.
    pub fn preguntas_del_caso(&self) -> Option<&[Question]> {
        let clave = self.clave_cache()?;
        self.question_cache.get(&clave).map(|v| v.as_slice())
    }

    /// Preguntas del tramo actual, en orden.
    pub fn preguntas_del_tramo(&self) -> Vec<&Question> {
        let dificultad = self.progress.current_difficulty;
        self.preguntas_del_caso()
            .map(|qs| {
                qs.iter()
                    .filter(|q| q.difficulty_level == dificultad)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn total_del_tramo(&self) -> usize {
        self.preguntas_del_tramo().len()
    }

    pub fn pregunta_actual(&self) -> Option<&Question> {
        self.preguntas_del_tramo()
            .get(self.progress.current_question_index)
            .copied()
    }

    /// Primer caso avanzado del subtema: lleva el expediente narrativo
    /// que se muestra en la pantalla de briefing.
    pub fn caso_avanzado(&self) -> Option<&Question> {
        self.preguntas_del_caso()?
            .iter()
            .find(|q| q.difficulty_level == Difficulty::Advanced)
    }
}
