use crate::advisor::AdvisorFailure;
use crate::data::{self, Catalog, DataError};
use crate::model::{AppState, Difficulty, Question, Response};
use std::collections::HashMap;
use std::sync::mpsc::Receiver;

// Submódulos
pub mod actions;
pub mod completion;
pub mod navigation;
pub mod progress;
pub mod queries;
pub mod resets;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{ResponseRow, SubtopicCard, TierInfo};

/// Qué pasa al volver a una pregunta ya corregida: solo consultarla, o
/// poder reenviar una respuesta (que sobrescribe la anterior).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RevisitPolicy {
    ViewOnly,
    Reanswer,
}

/// Estado de la sesión de caso en curso. Se reinicia por completo cuando
/// el usuario abandona el caso y vuelve al cuartel.
#[derive(Clone, Debug)]
pub struct CaseProgress {
    pub current_chapter: Option<String>,
    pub current_subtopic: Option<String>,
    pub current_difficulty: Difficulty,
    pub current_question_index: usize,
    pub responses: Vec<Response>,
    /// Ancla de tiempo de la pregunta en curso (segundos del reloj de egui).
    pub question_started_at: Option<f64>,
    /// Etiqueta marcada en el radio, aún sin enviar.
    pub seleccion: Option<String>,
    pub basic_completed: bool,
    pub intermediate_completed: bool,
    pub advanced_completed: bool,
}

impl Default for CaseProgress {
    fn default() -> Self {
        Self {
            current_chapter: None,
            current_subtopic: None,
            current_difficulty: Difficulty::Basic,
            current_question_index: 0,
            responses: Vec::new(),
            question_started_at: None,
            seleccion: None,
            basic_completed: false,
            intermediate_completed: false,
            advanced_completed: false,
        }
    }
}

impl CaseProgress {
    pub fn completado(&self, tramo: Difficulty) -> bool {
        match tramo {
            Difficulty::Basic => self.basic_completed,
            Difficulty::Intermediate => self.intermediate_completed,
            Difficulty::Advanced => self.advanced_completed,
        }
    }

    /// Las banderas son monótonas: solo un reinicio explícito las borra.
    pub fn marcar_completado(&mut self, tramo: Difficulty) {
        match tramo {
            Difficulty::Basic => self.basic_completed = true,
            Difficulty::Intermediate => self.intermediate_completed = true,
            Difficulty::Advanced => self.advanced_completed = true,
        }
    }

    pub fn respuesta_de(&self, question_id: &str) -> Option<&Response> {
        self.responses.iter().find(|r| r.question_id == question_id)
    }

    /// Inserta o sustituye la respuesta de una pregunta. Al sustituir se
    /// conserva la posición original en la lista.
    pub fn upsert_response(&mut self, respuesta: Response) {
        match self
            .responses
            .iter_mut()
            .find(|r| r.question_id == respuesta.question_id)
        {
            Some(existente) => *existente = respuesta,
            None => self.responses.push(respuesta),
        }
    }
}

pub struct QuizApp {
    pub catalog: Catalog,
    pub catalog_error: Option<DataError>,
    /// Caché de preguntas por "capítulo_subtema", viva toda la sesión.
    pub question_cache: HashMap<String, Vec<Question>>,
    pub progress: CaseProgress,
    pub state: AppState,
    pub message: String,
    pub revisit_policy: RevisitPolicy,
    pub hint_text: Option<String>,
    pub hint_pending: bool,
    pub hint_rx: Option<Receiver<Result<String, AdvisorFailure>>>,
    pub confirm_reset: bool,
}

impl QuizApp {
    pub fn new() -> Self {
        match data::cargar_catalogo() {
            Ok(catalogo) => Self::con_catalogo(catalogo),
            Err(err) => {
                log::error!("Catálogo no disponible: {}", err.mensaje_usuario());
                let mut app = Self::con_catalogo(Catalog::default());
                app.catalog_error = Some(err);
                app
            }
        }
    }

    pub fn con_catalogo(catalogo: Catalog) -> Self {
        Self {
            catalog: catalogo,
            catalog_error: None,
            question_cache: HashMap::new(),
            progress: CaseProgress::default(),
            state: AppState::Home,
            message: String::new(),
            revisit_policy: RevisitPolicy::ViewOnly,
            hint_text: None,
            hint_pending: false,
            hint_rx: None,
            confirm_reset: false,
        }
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor;
    use crate::data::{Chapter, Subtopic};
    use crate::model::{AnswerKey, ChoiceOption};
    use crate::report::compute_report;

    fn pregunta(id: &str, dificultad: Difficulty, topic: &str) -> Question {
        Question {
            id: id.to_string(),
            question: format!("Pregunta {id}"),
            options: vec![
                ChoiceOption { label: "A".into(), text: "primera".into() },
                ChoiceOption { label: "B".into(), text: "segunda".into() },
            ],
            difficulty_level: dificultad,
            topic: topic.to_string(),
            answer: Some(AnswerKey {
                correct_option: "A".into(),
                explanation: String::new(),
                steps: vec![],
            }),
            case_title: None,
            case_number: None,
            case_file: None,
        }
    }

    // Caso de prueba del capítulo "Quadratics": 2 básicas, 2 intermedias
    // y 1 avanzada en el subtema "Roots".
    fn app_de_prueba() -> QuizApp {
        let catalogo = Catalog {
            chapters: vec![Chapter {
                name: "Quadratics".into(),
                subtopics: vec![Subtopic {
                    key: "Roots".into(),
                    description: "raíces".into(),
                    questions_file: "roots.yaml".into(),
                }],
            }],
        };
        let mut app = QuizApp::con_catalogo(catalogo);
        app.question_cache.insert(
            "Quadratics_Roots".into(),
            vec![
                pregunta("B1", Difficulty::Basic, "Factorización"),
                pregunta("B2", Difficulty::Basic, "Fórmula general"),
                pregunta("I1", Difficulty::Intermediate, "Discriminante"),
                pregunta("I2", Difficulty::Intermediate, "Discriminante"),
                pregunta("A1", Difficulty::Advanced, "Caso final"),
            ],
        );
        app
    }

    #[test]
    fn responder_las_basicas_completa_el_tramo() {
        let mut app = app_de_prueba();
        app.seleccionar_caso("Quadratics", "Roots");
        assert_eq!(app.state, AppState::CaseBriefing);

        app.empezar_investigacion();
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.progress.current_difficulty, Difficulty::Basic);

        // Primera básica correcta, segunda incorrecta
        app.anclar_tiempo(10.0);
        app.procesar_respuesta("A", 15.0);
        app.pregunta_siguiente();
        app.anclar_tiempo(20.0);
        app.procesar_respuesta("B", 32.0);
        app.pregunta_siguiente();

        assert!(app.progress.basic_completed);
        assert_eq!(app.state, AppState::TierBreak);

        let informe = compute_report(&app.progress.responses);
        assert_eq!(informe.total, 2);
        assert_eq!(informe.correct, 1);
        assert_eq!(informe.accuracy, 0.5);
    }

    #[test]
    fn reenviar_sustituye_sin_cambiar_longitud_ni_orden() {
        let mut app = app_de_prueba();
        app.revisit_policy = RevisitPolicy::Reanswer;
        app.seleccionar_caso("Quadratics", "Roots");
        app.empezar_investigacion();

        app.anclar_tiempo(0.0);
        app.procesar_respuesta("B", 5.0);
        app.pregunta_siguiente();
        app.anclar_tiempo(5.0);
        app.procesar_respuesta("A", 9.0);

        // Volvemos a la primera y corregimos
        app.pregunta_anterior();
        app.anclar_tiempo(9.0);
        app.procesar_respuesta("A", 12.0);

        assert_eq!(app.progress.responses.len(), 2);
        assert_eq!(app.progress.responses[0].question_id, "B1");
        assert!(app.progress.responses[0].is_correct);
        assert_eq!(app.progress.responses[1].question_id, "B2");
    }

    #[test]
    fn con_politica_de_solo_lectura_no_se_reenvia() {
        let mut app = app_de_prueba();
        app.seleccionar_caso("Quadratics", "Roots");
        app.empezar_investigacion();

        app.anclar_tiempo(0.0);
        app.procesar_respuesta("B", 3.0);
        app.procesar_respuesta("A", 6.0); // rechazada: ya registrada

        assert_eq!(app.progress.responses.len(), 1);
        assert_eq!(app.progress.responses[0].selected_option, "B");
    }

    #[test]
    fn seleccion_invalida_no_muta_el_expediente() {
        let mut app = app_de_prueba();
        app.seleccionar_caso("Quadratics", "Roots");
        app.empezar_investigacion();

        app.anclar_tiempo(0.0);
        app.procesar_respuesta("Z", 3.0);

        assert!(app.progress.responses.is_empty());
        assert!(app.message.contains("no existe"));
    }

    #[test]
    fn las_banderas_de_tramo_son_monotonas() {
        let mut app = app_de_prueba();
        app.seleccionar_caso("Quadratics", "Roots");
        app.empezar_investigacion();
        app.procesar_respuesta("A", 1.0);
        app.pregunta_siguiente();
        app.procesar_respuesta("A", 2.0);
        app.pregunta_siguiente();
        assert!(app.progress.basic_completed);

        // Navegar fuera y volver no borra la bandera
        app.volver_al_caso();
        assert!(app.progress.basic_completed);
        app.continuar_tras_descanso();
        assert_eq!(app.progress.current_difficulty, Difficulty::Intermediate);
        assert!(app.progress.basic_completed);

        // El reinicio explícito sí la borra
        app.volver_al_cuartel();
        assert!(!app.progress.basic_completed);
        assert_eq!(app.state, AppState::Home);
        assert!(app.progress.responses.is_empty());
        assert!(app.progress.current_chapter.is_none());
    }

    #[test]
    fn el_orden_de_tramos_es_estricto() {
        let mut app = app_de_prueba();
        app.seleccionar_caso("Quadratics", "Roots");
        app.empezar_investigacion();

        // Sin completar el tramo básico no se puede avanzar
        app.continuar_tras_descanso();
        assert_eq!(app.progress.current_difficulty, Difficulty::Basic);
    }

    #[test]
    fn navegar_limpia_el_ancla_y_recorta_en_los_limites() {
        let mut app = app_de_prueba();
        app.seleccionar_caso("Quadratics", "Roots");
        app.empezar_investigacion();

        // En el índice 0, "anterior" no se mueve
        app.pregunta_anterior();
        assert_eq!(app.progress.current_question_index, 0);

        app.anclar_tiempo(7.0);
        app.procesar_respuesta("A", 8.0);
        app.anclar_tiempo(8.0);
        app.pregunta_siguiente();
        assert_eq!(app.progress.current_question_index, 1);
        assert!(app.progress.question_started_at.is_none());
    }

    #[test]
    fn sin_ancla_el_tiempo_registrado_es_cero() {
        let mut app = app_de_prueba();
        app.seleccionar_caso("Quadratics", "Roots");
        app.empezar_investigacion();

        app.procesar_respuesta("A", 42.0);
        assert_eq!(app.progress.responses[0].time_spent, 0.0);
    }

    #[test]
    fn el_fallo_del_asesor_degrada_a_la_pista_fija() {
        let mut app = app_de_prueba();
        app.seleccionar_caso("Quadratics", "Roots");
        app.empezar_investigacion();

        // Simula una petición en vuelo que termina en fallo
        let (tx, rx) = std::sync::mpsc::channel();
        app.hint_rx = Some(rx);
        app.hint_pending = true;
        tx.send(Err(AdvisorFailure { message: "sin red".into() })).unwrap();

        app.poll_pista();
        assert_eq!(app.hint_text.as_deref(), Some(advisor::PISTA_FALLBACK));
        assert!(!app.hint_pending);

        // La navegación sigue plenamente operativa
        app.anclar_tiempo(0.0);
        app.procesar_respuesta("A", 1.0);
        app.pregunta_siguiente();
        assert_eq!(app.progress.current_question_index, 1);
    }

    #[test]
    fn la_pista_solo_se_ofrece_en_el_tramo_intermedio() {
        let mut app = app_de_prueba();
        app.seleccionar_caso("Quadratics", "Roots");
        app.empezar_investigacion();

        // Tramo básico: nunca
        assert!(!app.pista_disponible());
        app.procesar_respuesta("A", 1.0);
        app.pregunta_siguiente();
        app.procesar_respuesta("A", 2.0);
        app.pregunta_siguiente();
        app.continuar_tras_descanso();

        // Intermedio, pero aún sin respuestas intermedias
        assert!(!app.pista_disponible());
        app.procesar_respuesta("B", 3.0);
        app.pregunta_siguiente();

        // Segunda intermedia sin responder: ahora sí
        assert!(app.pista_disponible());
        app.procesar_respuesta("A", 4.0);
        assert!(!app.pista_disponible());
    }

    #[test]
    fn la_cache_evita_releer_la_fuente() {
        // "roots.yaml" no existe como fuente embebida: abrir el caso solo
        // puede funcionar si la caché precargada tiene prioridad.
        let mut app = app_de_prueba();
        app.seleccionar_caso("Quadratics", "Roots");
        assert_eq!(app.state, AppState::CaseBriefing);

        let antes = app.preguntas_del_caso().unwrap().len();
        app.cargar_caso_actual().unwrap();
        assert_eq!(app.preguntas_del_caso().unwrap().len(), antes);
    }

    #[test]
    fn una_peticion_en_vuelo_bloquea_la_siguiente() {
        let mut app = app_de_prueba();
        app.seleccionar_caso("Quadratics", "Roots");
        app.empezar_investigacion();

        let (_tx, rx) = std::sync::mpsc::channel();
        app.hint_rx = Some(rx);
        app.hint_pending = true;

        app.solicitar_pista();
        assert!(app.message.contains("Espera"));
        assert!(app.hint_pending);
    }

    #[test]
    fn un_caso_desconocido_deja_al_usuario_en_el_cuartel() {
        let mut app = app_de_prueba();
        app.seleccionar_caso("Quadratics", "Inventado");
        assert_eq!(app.state, AppState::Home);
        assert!(app.message.contains("Inventado"));
        assert!(app.progress.current_subtopic.is_none());
    }

    #[test]
    fn el_tramo_avanzado_termina_en_el_informe() {
        let mut app = app_de_prueba();
        app.seleccionar_caso("Quadratics", "Roots");
        app.empezar_investigacion();

        // Básico
        app.procesar_respuesta("A", 1.0);
        app.pregunta_siguiente();
        app.procesar_respuesta("A", 2.0);
        app.pregunta_siguiente();
        app.continuar_tras_descanso();
        // Intermedio
        app.procesar_respuesta("A", 3.0);
        app.pregunta_siguiente();
        app.procesar_respuesta("A", 4.0);
        app.pregunta_siguiente();
        assert_eq!(app.state, AppState::TierBreak);
        app.continuar_tras_descanso();
        // Avanzado
        assert_eq!(app.progress.current_difficulty, Difficulty::Advanced);
        app.procesar_respuesta("A", 5.0);
        app.pregunta_siguiente();

        assert!(app.progress.advanced_completed);
        assert_eq!(app.state, AppState::Results);
    }
}
