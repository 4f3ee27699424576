use super::*;

impl QuizApp {
    /// Tarjetas de todos los casos del catálogo, por capítulo.
    pub fn tarjetas_de_casos(&self) -> Vec<SubtopicCard> {
        self.catalog
            .chapters
            .iter()
            .flat_map(|capitulo| {
                capitulo.subtopics.iter().map(|subtema| SubtopicCard {
                    chapter: capitulo.name.clone(),
                    key: subtema.key.clone(),
                    description: subtema.description.clone(),
                })
            })
            .collect()
    }

    /// Estado de los tres tramos del caso seleccionado, para las insignias
    /// de progreso del briefing.
    pub fn info_de_tramos(&self) -> Vec<TierInfo> {
        let preguntas = self.preguntas_del_caso().unwrap_or_default();
        [
            Difficulty::Basic,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ]
        .into_iter()
        .map(|dificultad| {
            let total = preguntas
                .iter()
                .filter(|q| q.difficulty_level == dificultad)
                .count();
            let answered = self
                .progress
                .responses
                .iter()
                .filter(|r| r.difficulty == dificultad)
                .count();
            TierInfo {
                difficulty: dificultad,
                completed: self.progress.completado(dificultad),
                answered,
                total,
            }
        })
        .collect()
    }

    /// Filas para la tabla de revisión del informe final.
    pub fn filas_de_respuestas(&self) -> Vec<ResponseRow> {
        self.progress
            .responses
            .iter()
            .enumerate()
            .map(|(i, r)| ResponseRow {
                index_1based: i + 1,
                topic: r.topic.clone(),
                selected: format!("{}. {}", r.selected_option, r.selected_text),
                correct_option: r.correct_option.clone(),
                is_correct: r.is_correct,
                time_spent: r.time_spent,
            })
            .collect()
    }

    /// Otros subtemas del capítulo actual, para recomendarlos al cerrar
    /// el caso.
    pub fn otros_subtemas(&self) -> Vec<SubtopicCard> {
        let capitulo_actual = match self.progress.current_chapter.as_deref() {
            Some(c) => c,
            None => return Vec::new(),
        };
        let subtema_actual = self.progress.current_subtopic.as_deref().unwrap_or("");

        self.catalog
            .chapters
            .iter()
            .filter(|c| c.name == capitulo_actual)
            .flat_map(|capitulo| {
                capitulo
                    .subtopics
                    .iter()
                    .filter(|s| s.key != subtema_actual)
                    .map(|subtema| SubtopicCard {
                        chapter: capitulo.name.clone(),
                        key: subtema.key.clone(),
                        description: subtema.description.clone(),
                    })
            })
            .collect()
    }
}
