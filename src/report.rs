use crate::model::{Difficulty, Response};

/// Umbral canónico: precisión ≥ 0.7 cuenta como punto fuerte, por debajo
/// el tema pasa a la lista de práctica pendiente.
pub const UMBRAL_DOMINIO: f64 = 0.7;

/// Cuántos puntos de confusión se muestran como máximo en el informe.
pub const MAX_PUNTOS_CONFUSION: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rank {
    MasterDetective,
    ExpertInvestigator,
    SeniorDetective,
    Detective,
    Apprentice,
}

impl Rank {
    pub fn por_precision(precision: f64) -> Rank {
        if precision >= 0.9 {
            Rank::MasterDetective
        } else if precision >= 0.8 {
            Rank::ExpertInvestigator
        } else if precision >= 0.7 {
            Rank::SeniorDetective
        } else if precision >= 0.6 {
            Rank::Detective
        } else {
            Rank::Apprentice
        }
    }

    pub fn etiqueta(self) -> &'static str {
        match self {
            Rank::MasterDetective => "🥇 Detective maestro",
            Rank::ExpertInvestigator => "🥈 Investigador experto",
            Rank::SeniorDetective => "🥉 Detective sénior",
            Rank::Detective => "🎖 Detective",
            Rank::Apprentice => "🔰 Detective aprendiz",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TopicStats {
    pub correct: usize,
    pub total: usize,
}

impl TopicStats {
    pub fn precision(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }

    pub fn fallos(&self) -> usize {
        self.total - self.correct
    }
}

/// Informe derivado de la lista de respuestas; nunca se almacena, se
/// recalcula bajo demanda.
#[derive(Clone, Debug)]
pub struct PerformanceReport {
    pub total: usize,
    pub correct: usize,
    pub accuracy: f64,
    pub avg_time: f64,
    pub streak: usize,
    pub per_topic: Vec<(String, TopicStats)>,
    pub rank: Rank,
    pub confusion_points: Vec<(String, usize)>,
}

impl PerformanceReport {
    pub fn fortalezas(&self) -> Vec<(&str, TopicStats)> {
        self.per_topic
            .iter()
            .filter(|(_, s)| s.precision() >= UMBRAL_DOMINIO)
            .map(|(t, s)| (t.as_str(), *s))
            .collect()
    }

    pub fn debilidades(&self) -> Vec<(&str, TopicStats)> {
        self.per_topic
            .iter()
            .filter(|(_, s)| s.precision() < UMBRAL_DOMINIO)
            .map(|(t, s)| (t.as_str(), *s))
            .collect()
    }
}

/// Agrupa respuestas por tema conservando el orden de primera aparición.
pub fn agrupar_por_tema(responses: &[Response]) -> Vec<(String, TopicStats)> {
    let mut temas: Vec<(String, TopicStats)> = Vec::new();
    for r in responses {
        match temas.iter_mut().find(|(t, _)| t == &r.topic) {
            Some((_, stats)) => {
                stats.total += 1;
                if r.is_correct {
                    stats.correct += 1;
                }
            }
            None => temas.push((
                r.topic.clone(),
                TopicStats {
                    correct: usize::from(r.is_correct),
                    total: 1,
                },
            )),
        }
    }
    temas
}

pub fn compute_report(responses: &[Response]) -> PerformanceReport {
    let total = responses.len();
    let correct = responses.iter().filter(|r| r.is_correct).count();
    let accuracy = if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64
    };
    let avg_time = if total == 0 {
        0.0
    } else {
        responses.iter().map(|r| r.time_spent).sum::<f64>() / total as f64
    };

    // Racha: correctas consecutivas contando desde la última respuesta
    // hacia atrás, hasta el primer fallo.
    let streak = responses.iter().rev().take_while(|r| r.is_correct).count();

    let per_topic = agrupar_por_tema(responses);

    let mut confusion_points: Vec<(String, usize)> = per_topic
        .iter()
        .filter(|(_, s)| s.fallos() > 0)
        .map(|(t, s)| (t.clone(), s.fallos()))
        .collect();
    confusion_points.sort_by(|a, b| b.1.cmp(&a.1));
    confusion_points.truncate(MAX_PUNTOS_CONFUSION);

    PerformanceReport {
        total,
        correct,
        accuracy,
        avg_time,
        streak,
        per_topic,
        rank: Rank::por_precision(accuracy),
        confusion_points,
    }
}

/// Resumen de un tramo concreto, para las pantallas de descanso.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TierSummary {
    pub answered: usize,
    pub correct: usize,
    pub accuracy: f64,
    pub avg_time: f64,
}

pub fn resumen_de_tramo(responses: &[Response], difficulty: Difficulty) -> TierSummary {
    let del_tramo: Vec<&Response> = responses
        .iter()
        .filter(|r| r.difficulty == difficulty)
        .collect();
    if del_tramo.is_empty() {
        return TierSummary::default();
    }
    let answered = del_tramo.len();
    let correct = del_tramo.iter().filter(|r| r.is_correct).count();
    TierSummary {
        answered,
        correct,
        accuracy: correct as f64 / answered as f64,
        avg_time: del_tramo.iter().map(|r| r.time_spent).sum::<f64>() / answered as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn respuesta(id: &str, topic: &str, is_correct: bool, time_spent: f64) -> Response {
        Response {
            question_id: id.to_string(),
            difficulty: Difficulty::Basic,
            topic: topic.to_string(),
            selected_option: "A".into(),
            selected_text: "texto".into(),
            correct_option: "A".into(),
            is_correct,
            time_spent,
        }
    }

    #[test]
    fn precision_es_correctas_entre_total() {
        let rs = vec![
            respuesta("1", "Factorización", true, 10.0),
            respuesta("2", "Factorización", false, 20.0),
            respuesta("3", "Discriminante", true, 30.0),
            respuesta("4", "Discriminante", true, 40.0),
        ];
        let informe = compute_report(&rs);
        assert_eq!(informe.total, 4);
        assert_eq!(informe.correct, 3);
        assert_eq!(informe.accuracy, 3.0 / 4.0);
        assert_eq!(informe.avg_time, 25.0);
    }

    #[test]
    fn lista_vacia_da_valores_neutros() {
        let informe = compute_report(&[]);
        assert_eq!(informe.total, 0);
        assert_eq!(informe.accuracy, 0.0);
        assert_eq!(informe.avg_time, 0.0);
        assert_eq!(informe.streak, 0);
        assert!(informe.per_topic.is_empty());
        assert!(informe.confusion_points.is_empty());
        assert_eq!(informe.rank, Rank::Apprentice);
    }

    #[test]
    fn la_racha_solo_cuenta_las_correctas_finales() {
        // [correcta, correcta, incorrecta, correcta] -> racha 1
        let rs = vec![
            respuesta("1", "T", true, 1.0),
            respuesta("2", "T", true, 1.0),
            respuesta("3", "T", false, 1.0),
            respuesta("4", "T", true, 1.0),
        ];
        assert_eq!(compute_report(&rs).streak, 1);
    }

    #[test]
    fn limites_del_rango() {
        assert_eq!(Rank::por_precision(0.9), Rank::MasterDetective);
        assert_eq!(Rank::por_precision(0.89999), Rank::ExpertInvestigator);
        assert_eq!(Rank::por_precision(0.8), Rank::ExpertInvestigator);
        assert_eq!(Rank::por_precision(0.7), Rank::SeniorDetective);
        assert_eq!(Rank::por_precision(0.6), Rank::Detective);
        assert_eq!(Rank::por_precision(0.0), Rank::Apprentice);
    }

    #[test]
    fn fortalezas_y_debilidades_usan_el_umbral() {
        // Factorización 1/2 = 0.5 (debilidad), Discriminante 2/2 (fortaleza)
        let rs = vec![
            respuesta("1", "Factorización", true, 1.0),
            respuesta("2", "Factorización", false, 1.0),
            respuesta("3", "Discriminante", true, 1.0),
            respuesta("4", "Discriminante", true, 1.0),
        ];
        let informe = compute_report(&rs);
        let fuertes: Vec<&str> = informe.fortalezas().iter().map(|(t, _)| *t).collect();
        let flojos: Vec<&str> = informe.debilidades().iter().map(|(t, _)| *t).collect();
        assert_eq!(fuertes, vec!["Discriminante"]);
        assert_eq!(flojos, vec!["Factorización"]);
    }

    #[test]
    fn puntos_de_confusion_ordenados_y_acotados() {
        let mut rs = vec![
            respuesta("1", "Grado", false, 1.0),
            respuesta("2", "Grado", false, 1.0),
            respuesta("3", "Suma", false, 1.0),
            respuesta("4", "Producto", false, 1.0),
            respuesta("5", "Producto", false, 1.0),
            respuesta("6", "Producto", false, 1.0),
            respuesta("7", "Identidades", false, 1.0),
        ];
        rs.push(respuesta("8", "Raíces", true, 1.0));
        let informe = compute_report(&rs);
        assert_eq!(informe.confusion_points.len(), MAX_PUNTOS_CONFUSION);
        assert_eq!(informe.confusion_points[0], ("Producto".to_string(), 3));
        assert_eq!(informe.confusion_points[1], ("Grado".to_string(), 2));
    }

    #[test]
    fn resumen_de_tramo_filtra_por_dificultad() {
        let mut rs = vec![
            respuesta("1", "T", true, 10.0),
            respuesta("2", "T", false, 20.0),
        ];
        rs.push(Response {
            difficulty: Difficulty::Intermediate,
            ..respuesta("3", "T", true, 99.0)
        });
        let resumen = resumen_de_tramo(&rs, Difficulty::Basic);
        assert_eq!(resumen.answered, 2);
        assert_eq!(resumen.correct, 1);
        assert_eq!(resumen.accuracy, 0.5);
        assert_eq!(resumen.avg_time, 15.0);

        assert_eq!(resumen_de_tramo(&rs, Difficulty::Advanced), TierSummary::default());
    }
}
