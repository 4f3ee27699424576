use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Tramo que sigue a este en el flujo del caso, si existe.
    pub fn siguiente(self) -> Option<Difficulty> {
        match self {
            Difficulty::Basic => Some(Difficulty::Intermediate),
            Difficulty::Intermediate => Some(Difficulty::Advanced),
            Difficulty::Advanced => None,
        }
    }

    pub fn titulo(self) -> &'static str {
        match self {
            Difficulty::Basic => "🔍 Reuniendo pistas",
            Difficulty::Intermediate => "🔎 Analizando la evidencia",
            Difficulty::Advanced => "🚨 ¡Resolviendo el caso!",
        }
    }

    pub fn nombre(self) -> &'static str {
        match self {
            Difficulty::Basic => "Pistas básicas",
            Difficulty::Intermediate => "Evidencia",
            Difficulty::Advanced => "Caso final",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    Home,
    CaseBriefing,
    Quiz,
    TierBreak,
    Results,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Home
    }
}

/// Opción ya normalizada: etiqueta ("A", "B"…) + texto visible.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChoiceOption {
    pub label: String,
    pub text: String,
}

/// Forma cruda de las opciones en la fuente: mapa etiquetado o lista plana.
/// Solo el cargador trabaja con esta representación.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum RawOptions {
    Labeled(serde_yaml::Mapping),
    Listed(Vec<String>),
}

/// Normaliza ambas formas a una lista ordenada de opciones etiquetadas.
/// Una lista plana recibe etiquetas A, B, C… por posición.
pub fn normalizar_opciones(raw: RawOptions) -> Vec<ChoiceOption> {
    match raw {
        RawOptions::Labeled(mapping) => mapping
            .into_iter()
            .filter_map(|(clave, valor)| {
                let label = clave.as_str()?.trim().to_string();
                let text = valor.as_str()?.to_string();
                if label.is_empty() {
                    None
                } else {
                    Some(ChoiceOption { label, text })
                }
            })
            .collect(),
        RawOptions::Listed(textos) => textos
            .into_iter()
            .enumerate()
            .map(|(i, text)| ChoiceOption {
                label: ((b'A' + (i % 26) as u8) as char).to_string(),
                text,
            })
            .collect(),
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnswerKey {
    pub correct_option: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub steps: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Evidence {
    pub name: String,
    pub detail: String,
}

/// Expediente narrativo que acompaña al primer caso avanzado de cada subtema.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CaseFile {
    #[serde(default)]
    pub briefing: String,
    #[serde(default)]
    pub crime_scene: String,
    #[serde(default)]
    pub evidence_found: Vec<Evidence>,
    #[serde(default)]
    pub mystery: String,
}

/// Etiqueta usada cuando la clave de respuesta falta o no referencia
/// ninguna opción existente: la corrección degrada a comparar contra esta.
pub const OPCION_POR_DEFECTO: &str = "A";

/// La clave de respuesta falta o apunta a una opción inexistente.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MalformedAnswerKey;

/// La etiqueta enviada no pertenece al conjunto de opciones de la pregunta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidSelection;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub question: String,
    pub options: Vec<ChoiceOption>,
    pub difficulty_level: Difficulty,
    #[serde(default)]
    pub topic: String,
    pub answer: Option<AnswerKey>,
    #[serde(default)]
    pub case_title: Option<String>,
    #[serde(default)]
    pub case_number: Option<String>,
    #[serde(default)]
    pub case_file: Option<CaseFile>,
}

impl Question {
    pub fn tiene_opcion(&self, label: &str) -> bool {
        self.options.iter().any(|o| o.label == label)
    }

    pub fn texto_de(&self, label: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.label == label)
            .map(|o| o.text.as_str())
    }

    /// Etiqueta correcta según la clave de respuesta. Si la clave falta o
    /// no referencia una opción existente devuelve `MalformedAnswerKey`;
    /// la política degradada (comparar contra "A") la decide quien llama.
    pub fn respuesta_canonica(&self) -> Result<&str, MalformedAnswerKey> {
        let clave = self.answer.as_ref().ok_or(MalformedAnswerKey)?;
        let etiqueta = clave.correct_option.trim();
        if etiqueta.is_empty() || !self.tiene_opcion(etiqueta) {
            return Err(MalformedAnswerKey);
        }
        Ok(etiqueta)
    }
}

/// Registro de una respuesta del usuario a una pregunta concreta.
/// Como mucho hay una por `question_id` dentro de la sesión.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub question_id: String,
    pub difficulty: Difficulty,
    pub topic: String,
    pub selected_option: String,
    pub selected_text: String,
    pub correct_option: String,
    pub is_correct: bool,
    pub time_spent: f64,
}

impl Response {
    /// Evalúa una selección contra la pregunta. Rechaza etiquetas que no
    /// existen en las opciones; una clave de respuesta malformada degrada
    /// a la opción por defecto en vez de invalidar la pregunta.
    pub fn evaluate(
        question: &Question,
        selected_label: &str,
        time_spent: f64,
    ) -> Result<Response, InvalidSelection> {
        let selected_text = question
            .texto_de(selected_label)
            .ok_or(InvalidSelection)?
            .to_string();

        let correct_option = match question.respuesta_canonica() {
            Ok(etiqueta) => etiqueta.to_string(),
            Err(MalformedAnswerKey) => {
                log::warn!(
                    "Pregunta {} sin clave de respuesta válida; se corrige contra la opción {}",
                    question.id,
                    OPCION_POR_DEFECTO
                );
                OPCION_POR_DEFECTO.to_string()
            }
        };

        Ok(Response {
            question_id: question.id.clone(),
            difficulty: question.difficulty_level,
            topic: question.topic.clone(),
            selected_option: selected_label.to_string(),
            selected_text,
            is_correct: selected_label == correct_option,
            correct_option,
            time_spent: time_spent.max(0.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pregunta(answer: Option<AnswerKey>) -> Question {
        Question {
            id: "Q1".into(),
            question: "¿2 + 2?".into(),
            options: vec![
                ChoiceOption { label: "A".into(), text: "4".into() },
                ChoiceOption { label: "B".into(), text: "5".into() },
            ],
            difficulty_level: Difficulty::Basic,
            topic: "Aritmética".into(),
            answer,
            case_title: None,
            case_number: None,
            case_file: None,
        }
    }

    #[test]
    fn lista_plana_recibe_etiquetas_por_posicion() {
        let opciones = normalizar_opciones(RawOptions::Listed(vec![
            "uno".into(),
            "dos".into(),
            "tres".into(),
        ]));
        let etiquetas: Vec<&str> = opciones.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(etiquetas, vec!["A", "B", "C"]);
        assert_eq!(opciones[2].text, "tres");
    }

    #[test]
    fn mapa_etiquetado_conserva_el_orden() {
        let yaml = "B: segunda\nA: primera\nC: tercera\n";
        let mapping: serde_yaml::Mapping = serde_yaml::from_str(yaml).unwrap();
        let opciones = normalizar_opciones(RawOptions::Labeled(mapping));
        let etiquetas: Vec<&str> = opciones.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(etiquetas, vec!["B", "A", "C"]);
    }

    #[test]
    fn seleccion_inexistente_se_rechaza() {
        let q = pregunta(Some(AnswerKey {
            correct_option: "A".into(),
            explanation: String::new(),
            steps: vec![],
        }));
        assert_eq!(Response::evaluate(&q, "Z", 1.0), Err(InvalidSelection));
    }

    #[test]
    fn clave_malformada_degrada_a_opcion_por_defecto() {
        // Sin clave de respuesta
        let q = pregunta(None);
        let r = Response::evaluate(&q, "A", 2.0).unwrap();
        assert_eq!(r.correct_option, OPCION_POR_DEFECTO);
        assert!(r.is_correct);

        // Clave que apunta a una opción que no existe
        let q = pregunta(Some(AnswerKey {
            correct_option: "Z".into(),
            explanation: String::new(),
            steps: vec![],
        }));
        let r = Response::evaluate(&q, "B", 2.0).unwrap();
        assert_eq!(r.correct_option, OPCION_POR_DEFECTO);
        assert!(!r.is_correct);
    }

    #[test]
    fn evaluar_marca_correcta_e_incorrecta() {
        let q = pregunta(Some(AnswerKey {
            correct_option: "A".into(),
            explanation: "2 + 2 = 4".into(),
            steps: vec!["Suma los sumandos".into()],
        }));
        assert!(Response::evaluate(&q, "A", 3.0).unwrap().is_correct);
        assert!(!Response::evaluate(&q, "B", 3.0).unwrap().is_correct);
    }

    #[test]
    fn tiempo_negativo_se_recorta_a_cero() {
        let q = pregunta(None);
        let r = Response::evaluate(&q, "A", -5.0).unwrap();
        assert_eq!(r.time_spent, 0.0);
    }
}
