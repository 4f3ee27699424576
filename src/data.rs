// src/data.rs

use crate::model::{Question, RawOptions, normalizar_opciones};
use serde::Deserialize;

// Banco embebido: el catálogo y cada fuente de preguntas viajan dentro del
// binario, igual en escritorio que en WASM.
const CATALOGO_YAML: &str = include_str!("data/catalog.yaml");

fn fuente_embebida(fichero: &str) -> Option<&'static str> {
    match fichero {
        "cuadraticas_raices.yaml" => Some(include_str!("data/questions/cuadraticas_raices.yaml")),
        "cuadraticas_discriminante.yaml" => {
            Some(include_str!("data/questions/cuadraticas_discriminante.yaml"))
        }
        "polinomios_operaciones.yaml" => {
            Some(include_str!("data/questions/polinomios_operaciones.yaml"))
        }
        _ => None,
    }
}

#[derive(Clone, Debug, Deserialize, Default)]
pub struct Catalog {
    pub chapters: Vec<Chapter>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Chapter {
    pub name: String,
    pub subtopics: Vec<Subtopic>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Subtopic {
    pub key: String,
    pub description: String,
    pub questions_file: String,
}

impl Catalog {
    pub fn subtema(&self, capitulo: &str, clave: &str) -> Option<&Subtopic> {
        self.chapters
            .iter()
            .find(|c| c.name == capitulo)?
            .subtopics
            .iter()
            .find(|s| s.key == clave)
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataError {
    /// El catálogo no se pudo leer o está malformado.
    CatalogUnavailable { message: String },
    /// La fuente de preguntas de un subtema no existe o no parsea.
    QuestionSourceUnavailable { subtopic: String, message: String },
}

impl DataError {
    pub fn mensaje_usuario(&self) -> String {
        match self {
            DataError::CatalogUnavailable { message } => {
                format!("❌ ¡Archivo de casos no disponible! ({message})")
            }
            DataError::QuestionSourceUnavailable { subtopic, message } => {
                format!("❌ No se pudieron cargar las preguntas de «{subtopic}» ({message})")
            }
        }
    }
}

// Forma cruda de una pregunta tal como viene en el YAML; las opciones se
// normalizan aquí y el resto del sistema no vuelve a ver esta representación.
#[derive(Deserialize)]
struct RawQuestion {
    id: String,
    question: String,
    options: RawOptions,
    difficulty_level: crate::model::Difficulty,
    #[serde(default)]
    topic: String,
    #[serde(default)]
    answer: Option<crate::model::AnswerKey>,
    #[serde(default)]
    case_title: Option<String>,
    #[serde(default)]
    case_number: Option<String>,
    #[serde(default)]
    case_file: Option<crate::model::CaseFile>,
}

#[derive(Deserialize)]
struct RawQuestionFile {
    questions: Vec<RawQuestion>,
}

/// Carga el catálogo de capítulos y subtemas.
pub fn cargar_catalogo() -> Result<Catalog, DataError> {
    parsear_catalogo(CATALOGO_YAML)
}

pub(crate) fn parsear_catalogo(yaml: &str) -> Result<Catalog, DataError> {
    let catalogo: Catalog =
        serde_yaml::from_str(yaml).map_err(|e| DataError::CatalogUnavailable {
            message: e.to_string(),
        })?;
    if catalogo.is_empty() {
        return Err(DataError::CatalogUnavailable {
            message: "el catálogo no contiene capítulos".to_string(),
        });
    }
    Ok(catalogo)
}

/// Carga la secuencia ordenada de preguntas de un subtema. Sin efectos:
/// la caché por (capítulo, subtema) la mantiene la sesión.
pub fn cargar_preguntas(
    catalogo: &Catalog,
    capitulo: &str,
    subtema: &str,
) -> Result<Vec<Question>, DataError> {
    let entrada =
        catalogo
            .subtema(capitulo, subtema)
            .ok_or_else(|| DataError::QuestionSourceUnavailable {
                subtopic: subtema.to_string(),
                message: format!("el subtema no figura en el capítulo «{capitulo}»"),
            })?;

    let contenido = fuente_embebida(&entrada.questions_file).ok_or_else(|| {
        DataError::QuestionSourceUnavailable {
            subtopic: subtema.to_string(),
            message: format!("fuente «{}» no encontrada", entrada.questions_file),
        }
    })?;

    parsear_preguntas(contenido).map_err(|message| DataError::QuestionSourceUnavailable {
        subtopic: subtema.to_string(),
        message,
    })
}

pub(crate) fn parsear_preguntas(yaml: &str) -> Result<Vec<Question>, String> {
    let fichero: RawQuestionFile = serde_yaml::from_str(yaml).map_err(|e| e.to_string())?;
    Ok(fichero
        .questions
        .into_iter()
        .map(|cruda| Question {
            id: cruda.id,
            question: cruda.question,
            options: normalizar_opciones(cruda.options),
            difficulty_level: cruda.difficulty_level,
            topic: cruda.topic,
            answer: cruda.answer,
            case_title: cruda.case_title,
            case_number: cruda.case_number,
            case_file: cruda.case_file,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    #[test]
    fn el_catalogo_embebido_parsea() {
        let catalogo = cargar_catalogo().unwrap();
        assert!(!catalogo.is_empty());
        assert!(
            catalogo
                .subtema("Ecuaciones cuadráticas", "Raíces y factorización")
                .is_some()
        );
    }

    #[test]
    fn catalogo_malformado_devuelve_error_tipado() {
        let err = parsear_catalogo("esto no es: [un catálogo").unwrap_err();
        assert!(matches!(err, DataError::CatalogUnavailable { .. }));

        // YAML válido pero vacío también cuenta como catálogo no disponible
        let err = parsear_catalogo("chapters: []").unwrap_err();
        assert!(matches!(err, DataError::CatalogUnavailable { .. }));
    }

    #[test]
    fn subtema_desconocido_devuelve_fuente_no_disponible() {
        let catalogo = cargar_catalogo().unwrap();
        let err = cargar_preguntas(&catalogo, "Ecuaciones cuadráticas", "Inventado").unwrap_err();
        assert!(matches!(
            err,
            DataError::QuestionSourceUnavailable { ref subtopic, .. } if subtopic == "Inventado"
        ));
    }

    #[test]
    fn las_fuentes_embebidas_cargan_y_normalizan() {
        let catalogo = cargar_catalogo().unwrap();
        for capitulo in &catalogo.chapters {
            for subtema in &capitulo.subtopics {
                let preguntas =
                    cargar_preguntas(&catalogo, &capitulo.name, &subtema.key).unwrap();
                assert!(!preguntas.is_empty(), "subtema sin preguntas: {}", subtema.key);
                for q in &preguntas {
                    assert!(q.options.len() >= 2, "pregunta {} con pocas opciones", q.id);
                    // Toda clave de respuesta del banco real referencia una opción
                    assert!(q.respuesta_canonica().is_ok(), "clave inválida en {}", q.id);
                }
                // El expediente narrativo va en el primer caso avanzado
                let avanzada = preguntas
                    .iter()
                    .find(|q| q.difficulty_level == Difficulty::Advanced)
                    .unwrap();
                assert!(avanzada.case_file.is_some());
            }
        }
    }

    #[test]
    fn las_opciones_en_lista_reciben_etiquetas() {
        let catalogo = cargar_catalogo().unwrap();
        let preguntas =
            cargar_preguntas(&catalogo, "Polinomios", "Operaciones con polinomios").unwrap();
        let etiquetas: Vec<&str> = preguntas[0].options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(etiquetas, vec!["A", "B", "C", "D"]);
    }
}
