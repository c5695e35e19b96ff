//! Fluxo de diagnóstico
//!
//! POST da imagem -> (se houver doença) GET dos tratamentos.
//! As duas chamadas são sequenciais; não há retry, timeout nem cancelamento.
//! O transporte fica atrás de `PlantApi` (fetch no navegador, reqwest na CLI).

use serde::Serialize;
use serde_json::Value;

use crate::diagnosis::{result_message, treatment_query, FAILURE_MESSAGE};
use crate::error::Result;
use crate::treatment::{normalize_treatments, TreatmentRecord};
use crate::types::Diagnosis;

/// Resposta HTTP: corpo de sucesso ou status de falha
#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply<T> {
    Success(T),
    Status { code: u16, text: String },
}

/// Texto do status; HTTP/2 não tem reason phrase, então cai para o código
pub fn status_message(code: u16, text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        format!("Erro {}", code)
    } else {
        text.to_string()
    }
}

/// Transporte até a API AgroLens
///
/// `Err` representa falha "lançada" (rede, JSON inválido); um status HTTP
/// de erro volta como `ApiReply::Status`.
#[allow(async_fn_in_trait)]
pub trait PlantApi {
    type Image;

    /// POST multipart para o endpoint de diagnóstico
    async fn diagnose(&self, image: &Self::Image) -> Result<ApiReply<Diagnosis>>;

    /// GET no endpoint de tratamento
    async fn treatments(&self, disease_name: &str) -> Result<ApiReply<Value>>;
}

/// Resultado de uma execução completa do fluxo
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisOutcome {
    /// Mensagem principal exibida ao usuário
    pub message: String,
    pub diagnosis: Option<Diagnosis>,
    pub treatments: Vec<TreatmentRecord>,
    /// Texto para alerta bloqueante (falha HTTP no tratamento)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
    /// Erro engolido; só vai para o log
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
    /// Nome consultado no endpoint de tratamento
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment_query: Option<String>,
}

impl DiagnosisOutcome {
    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }
}

/// Executa o fluxo completo; nunca falha
///
/// Qualquer erro vira a mensagem genérica de falha, com o texto do erro em
/// `failure`. Campos de diagnóstico já obtidos são mantidos.
pub async fn run_diagnosis<A: PlantApi>(api: &A, image: &A::Image) -> DiagnosisOutcome {
    let mut outcome = DiagnosisOutcome::default();

    if let Err(err) = drive(api, image, &mut outcome).await {
        outcome.message = FAILURE_MESSAGE.to_string();
        outcome.treatments.clear();
        outcome.failure = Some(err.to_string());
    }

    outcome
}

async fn drive<A: PlantApi>(
    api: &A,
    image: &A::Image,
    outcome: &mut DiagnosisOutcome,
) -> Result<()> {
    let diagnosis = match api.diagnose(image).await? {
        ApiReply::Success(diagnosis) => diagnosis,
        ApiReply::Status { code, text } => {
            outcome.message = status_message(code, &text);
            return Ok(());
        }
    };

    outcome.message = result_message(&diagnosis);
    let query = treatment_query(diagnosis.scientific_name.as_deref()).map(str::to_string);
    outcome.diagnosis = Some(diagnosis);

    let Some(query) = query else {
        return Ok(());
    };
    outcome.treatment_query = Some(query.clone());

    match api.treatments(&query).await? {
        ApiReply::Success(value) => outcome.treatments = normalize_treatments(value),
        ApiReply::Status { code, text } => {
            outcome.alert = Some(format!(
                "Erro ao buscar tratamento: {}",
                status_message(code, &text)
            ));
        }
    }

    Ok(())
}
