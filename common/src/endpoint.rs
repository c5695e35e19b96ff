//! Endpoints da API AgroLens
//!
//! POST `{base}/imageDiagnosis` (multipart, campo `file`)
//! GET  `{base}/treatment?diseaseName=...`

use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://agrolens-api.hf.space";
pub const DIAGNOSIS_PATH: &str = "/imageDiagnosis";
pub const TREATMENT_PATH: &str = "/treatment";

/// Nome do campo multipart com a imagem
pub const IMAGE_FORM_FIELD: &str = "file";

pub fn diagnosis_url(base_url: &str) -> String {
    format!("{}{}", trim_base(base_url), DIAGNOSIS_PATH)
}

/// URL do tratamento com o nome da doença codificado
///
/// ```
/// use agrolens_common::endpoint::treatment_url;
///
/// let url = treatment_url("https://api.example/", "Alternaria solani");
/// assert_eq!(url, "https://api.example/treatment?diseaseName=Alternaria%20solani");
/// ```
pub fn treatment_url(base_url: &str, disease_name: &str) -> String {
    format!(
        "{}{}?diseaseName={}",
        trim_base(base_url),
        TREATMENT_PATH,
        urlencoding::encode(disease_name)
    )
}

fn trim_base(base_url: &str) -> &str {
    base_url.trim().trim_end_matches('/')
}

/// Corpo de erro do backend (`CommonError`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    pub code: Option<u16>,
    pub datetime: Option<String>,
    pub message: Option<String>,
    pub details: Option<String>,
}

#[derive(Deserialize)]
struct DetailWrapper {
    detail: ApiErrorBody,
}

/// Extrai o erro do corpo da resposta
///
/// O FastAPI embrulha o erro em `{"detail": {...}}`; o objeto solto também é aceito.
pub fn parse_api_error(body: &str) -> Option<ApiErrorBody> {
    if let Ok(wrapper) = serde_json::from_str::<DetailWrapper>(body) {
        return Some(wrapper.detail);
    }
    let error = serde_json::from_str::<ApiErrorBody>(body).ok()?;
    if error.message.is_none() && error.details.is_none() {
        return None;
    }
    Some(error)
}

impl std::fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = self.message.as_deref().unwrap_or("sem mensagem");
        match self.details.as_deref() {
            Some(details) => write!(f, "{} ({})", message, details),
            None => write!(f, "{}", message),
        }
    }
}
