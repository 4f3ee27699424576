use crate::model::{Question, Response};
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
const DEFAULT_ENDPOINT: &str = "/api/hint";
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_NATIVE_ENDPOINT: &str = "http://127.0.0.1:8788/api/hint";

#[cfg(not(target_arch = "wasm32"))]
const TIMEOUT_SEGUNDOS: u64 = 12;

/// Mensaje fijo cuando el asesor falla o tarda demasiado. Nunca bloquea
/// ni rompe la sesión: la pista degradada siempre se puede mostrar.
pub const PISTA_FALLBACK: &str = "🤖 El detective IA está tomando un descanso. \
Repasa las pistas que ya resolviste: ¡la respuesta está más cerca de lo que crees!";

/// Petición que recibe el asesor: la pregunta actual y un resumen de los
/// temas que el usuario ya domina. El asesor no ve nada más de la sesión.
#[derive(Debug, Clone, Serialize)]
pub struct HintRequest {
    pub question: String,
    pub topic: String,
    pub similar_solved: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength_topic: Option<String>,
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum HintResponse {
    Ok { hint: String },
    Error { message: String },
}

/// El asesor no pudo producir una pista. Quien llama degrada a
/// [`PISTA_FALLBACK`]; esto nunca se muestra como error duro.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdvisorFailure {
    pub message: String,
}

impl AdvisorFailure {
    fn nueva(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Temas de respuestas acertadas que se parecen al tema actual: basta con
/// que compartan alguna palabra.
fn temas_similares(tema_actual: &str, responses: &[Response]) -> Vec<String> {
    let actual = tema_actual.to_lowercase();
    let mut similares: Vec<String> = Vec::new();
    for r in responses.iter().filter(|r| r.is_correct) {
        let parecido = r
            .topic
            .to_lowercase()
            .split_whitespace()
            .any(|palabra| actual.contains(palabra));
        if parecido && !similares.contains(&r.topic) {
            similares.push(r.topic.clone());
        }
    }
    similares
}

/// Tema con más aciertos acumulados, si hay alguno.
fn tema_fuerte(responses: &[Response]) -> Option<String> {
    let mut conteos: Vec<(String, usize)> = Vec::new();
    for r in responses.iter().filter(|r| r.is_correct) {
        match conteos.iter_mut().find(|(t, _)| t == &r.topic) {
            Some((_, n)) => *n += 1,
            None => conteos.push((r.topic.clone(), 1)),
        }
    }
    conteos
        .into_iter()
        .max_by_key(|(_, n)| *n)
        .map(|(tema, _)| tema)
}

pub(crate) fn construir_prompt(
    question: &Question,
    similares: &[String],
    fuerte: Option<&str>,
) -> String {
    let mut contexto = format!(
        "Eres un detective IA amistoso que ayuda a un estudiante de secundaria \
         nervioso por los exámenes.\n\nPregunta actual: {}\nTema: {}\n",
        question.question, question.topic
    );

    if !similares.is_empty() {
        contexto.push_str(&format!(
            "\n✨ Ya resolvió preguntas parecidas sobre: {}",
            similares.join(", ")
        ));
    }
    if let Some(tema) = fuerte {
        contexto.push_str(&format!("\n💪 Su punto fuerte: {tema}"));
    }

    contexto.push_str(
        "\n\nDa una pista CORTA y AMISTOSA (2-3 frases como máximo) que:\n\
         1. Le recuerde alguna pregunta parecida que ya resolvió (si la hay)\n\
         2. Conecte su punto fuerte con este problema\n\
         3. Anime sin revelar la respuesta\n\n\
         Tono cercano y motivador, sin listas: solo conversación natural.",
    );
    contexto
}

/// Prepara la petición completa a partir de la pregunta actual y el
/// historial de respuestas de la sesión.
pub fn construir_peticion(question: &Question, responses: &[Response]) -> HintRequest {
    let similares = temas_similares(&question.topic, responses);
    let fuerte = tema_fuerte(responses);
    let prompt = construir_prompt(question, &similares, fuerte.as_deref());
    HintRequest {
        question: question.question.clone(),
        topic: question.topic.clone(),
        similar_solved: similares,
        strength_topic: fuerte,
        prompt,
    }
}

/// Variantes razonables del endpoint configurado: si llega solo el origen
/// se prueban las rutas conocidas, y se normaliza la barra final.
fn endpoint_candidates(primario: &str) -> Vec<String> {
    fn push_unique(candidatos: &mut Vec<String>, valor: String) {
        if !valor.trim().is_empty() && !candidatos.iter().any(|c| c == &valor) {
            candidatos.push(valor);
        }
    }

    let primario = {
        let recortado = primario.trim();
        if recortado == "/" {
            recortado.to_string()
        } else {
            recortado.trim_end_matches('/').to_string()
        }
    };

    let mut candidatos = Vec::new();
    push_unique(&mut candidatos, primario.clone());

    let es_origen_sin_ruta = (primario.starts_with("http://") || primario.starts_with("https://"))
        && !primario[primario.find("://").map(|i| i + 3).unwrap_or(0)..].contains('/');

    if es_origen_sin_ruta {
        push_unique(&mut candidatos, format!("{primario}/api/hint"));
        push_unique(&mut candidatos, format!("{primario}/hint"));
    } else if primario == "/" || primario.is_empty() {
        push_unique(&mut candidatos, "/api/hint".to_string());
        push_unique(&mut candidatos, "/hint".to_string());
    }

    if let Some(base) = primario.strip_suffix("/api/hint") {
        push_unique(&mut candidatos, format!("{base}/hint"));
    }

    candidatos
}

#[cfg(not(target_arch = "wasm32"))]
fn endpoint_configurado() -> String {
    std::env::var("CLUE_QUIZ_HINT_ENDPOINT")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_NATIVE_ENDPOINT.to_string())
}

#[cfg(target_arch = "wasm32")]
fn endpoint_configurado() -> String {
    endpoint_desde_build_env()
        .or_else(endpoint_desde_querystring)
        .or_else(endpoint_desde_meta)
        .or_else(endpoint_desde_local_storage)
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

#[cfg(target_arch = "wasm32")]
fn normalizar_endpoint(valor: &str) -> Option<String> {
    let recortado = valor.trim();
    if recortado.is_empty() {
        None
    } else {
        Some(recortado.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
fn endpoint_desde_build_env() -> Option<String> {
    option_env!("CLUE_QUIZ_HINT_ENDPOINT").and_then(normalizar_endpoint)
}

#[cfg(target_arch = "wasm32")]
fn endpoint_desde_querystring() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(search.as_str());

    for par in query.split('&') {
        let (clave, valor) = match par.split_once('=') {
            Some((k, v)) => (k, v),
            None => (par, ""),
        };
        if clave == "hint_endpoint" {
            return normalizar_endpoint(valor);
        }
    }
    None
}

#[cfg(target_arch = "wasm32")]
fn endpoint_desde_meta() -> Option<String> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let meta = document
        .query_selector("meta[name='clue-quiz-hint-endpoint']")
        .ok()??;
    meta.get_attribute("content")
        .as_deref()
        .and_then(normalizar_endpoint)
}

#[cfg(target_arch = "wasm32")]
fn endpoint_desde_local_storage() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage
        .get_item("clue_quiz_hint_endpoint")
        .ok()?
        .as_deref()
        .and_then(normalizar_endpoint)
}

fn map_response(resp: HintResponse) -> Result<String, AdvisorFailure> {
    match resp {
        HintResponse::Ok { hint } => Ok(hint),
        HintResponse::Error { message } => Err(AdvisorFailure::nueva(message)),
    }
}

/// Pide la pista al asesor. Un único intento, con tiempo acotado: el que
/// llama degrada cualquier fallo a [`PISTA_FALLBACK`].
#[cfg(not(target_arch = "wasm32"))]
pub fn pedir_pista(peticion: &HintRequest) -> Result<String, AdvisorFailure> {
    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(TIMEOUT_SEGUNDOS))
        .build()
        .map_err(|err| AdvisorFailure::nueva(format!("No se pudo crear el cliente HTTP: {err}")))?;

    let mut ultimo_error_http = None;

    for candidato in endpoint_candidates(&endpoint_configurado()) {
        let response = match client.post(&candidato).json(peticion).send() {
            Ok(response) => response,
            Err(err) => {
                return Err(AdvisorFailure::nueva(format!(
                    "Error conectando con el asesor de pistas: {err}"
                )));
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            ultimo_error_http = Some(format!(
                "El asesor devolvió HTTP {status} en {candidato}"
            ));
            if matches!(status.as_u16(), 404 | 405) {
                continue;
            }
            return Err(AdvisorFailure::nueva(ultimo_error_http.unwrap_or_default()));
        }

        return match response.json::<HintResponse>() {
            Ok(body) => map_response(body),
            Err(err) => Err(AdvisorFailure::nueva(format!(
                "Respuesta JSON inválida del asesor: {err}"
            ))),
        };
    }

    Err(AdvisorFailure::nueva(ultimo_error_http.unwrap_or_else(|| {
        "El asesor de pistas no respondió correctamente.".to_string()
    })))
}

#[cfg(target_arch = "wasm32")]
pub async fn pedir_pista(peticion: &HintRequest) -> Result<String, AdvisorFailure> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let payload_json = serde_json::to_string(peticion).map_err(|err| {
        AdvisorFailure::nueva(format!("No se pudo serializar la petición de pista: {err}"))
    })?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&payload_json));

    let window = web_sys::window()
        .ok_or_else(|| AdvisorFailure::nueva("No existe window en entorno WASM."))?;

    let mut ultimo_error_http = None;

    for candidato in endpoint_candidates(&endpoint_configurado()) {
        let request = Request::new_with_str_and_init(&candidato, &opts)
            .map_err(|err| AdvisorFailure::nueva(format!("No se pudo crear el request: {err:?}")))?;

        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|err| {
                AdvisorFailure::nueva(format!("No se pudieron fijar las cabeceras: {err:?}"))
            })?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|err| AdvisorFailure::nueva(format!("Fetch al asesor falló: {err:?}")))?;

        let response: Response = resp_value.dyn_into().map_err(|_| {
            AdvisorFailure::nueva("La respuesta fetch no es un Response válido.")
        })?;

        let text_js = match response.text() {
            Ok(promise) => JsFuture::from(promise).await,
            Err(err) => Err(err),
        };
        let texto = text_js
            .ok()
            .and_then(|v| v.as_string())
            .ok_or_else(|| AdvisorFailure::nueva("No se pudo leer el cuerpo de la respuesta."))?;

        if !response.ok() {
            ultimo_error_http = Some(format!(
                "El asesor devolvió HTTP {} en {candidato}",
                response.status()
            ));
            if matches!(response.status(), 404 | 405) {
                continue;
            }
            return Err(AdvisorFailure::nueva(ultimo_error_http.unwrap_or_default()));
        }

        return match serde_json::from_str::<HintResponse>(&texto) {
            Ok(body) => map_response(body),
            Err(err) => Err(AdvisorFailure::nueva(format!(
                "Respuesta JSON inválida del asesor: {err}"
            ))),
        };
    }

    Err(AdvisorFailure::nueva(ultimo_error_http.unwrap_or_else(|| {
        "El asesor de pistas no respondió correctamente.".to_string()
    })))
}
