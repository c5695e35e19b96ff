//! Regras de exibição do diagnóstico
//!
//! Valores sentinela, mensagens de resultado e campos formatados para a tela.

use serde::Serialize;

use crate::types::Diagnosis;

/// Nome científico devolvido para plantas sem doença
pub const HEALTHY_SENTINEL: &str = "Saudável";

/// Valores que significam "sem doença" em vez de dado real
pub const SENTINEL_VALUES: &[&str] = &["—", "-", HEALTHY_SENTINEL];

/// Campo ausente
pub const EMPTY_FIELD: &str = "—";

pub const HEALTHY_MESSAGE: &str = "Planta saudável! Nenhuma doença detectada.";
pub const DISEASE_MESSAGE: &str = "Doença detectada.";
pub const FAILURE_MESSAGE: &str = "Erro ao analisar a imagem.";
pub const INVALID_IMAGE_MESSAGE: &str = "Por favor, selecione uma imagem JPG.";
pub const LOADING_MESSAGE: &str = "Analisando imagem...";

/// `true` se o nome científico é o sentinela de planta saudável
pub fn is_healthy(scientific_name: Option<&str>) -> bool {
    scientific_name == Some(HEALTHY_SENTINEL)
}

/// `true` se o nome é sentinela (vazio, traço ou saudável)
///
/// Comparação exata, sem normalizar espaços ou caixa.
pub fn is_sentinel(name: &str) -> bool {
    name.is_empty() || SENTINEL_VALUES.contains(&name)
}

/// Decide se o endpoint de tratamento deve ser consultado
///
/// Retorna o nome a consultar exatamente como veio da API.
pub fn treatment_query(scientific_name: Option<&str>) -> Option<&str> {
    let name = scientific_name?;
    if is_sentinel(name) {
        None
    } else {
        Some(name)
    }
}

/// Mensagem principal após um diagnóstico bem-sucedido
pub fn result_message(diagnosis: &Diagnosis) -> String {
    if is_healthy(diagnosis.scientific_name.as_deref()) {
        return HEALTHY_MESSAGE.to_string();
    }
    non_empty(diagnosis.resultado.as_deref())
        .unwrap_or(DISEASE_MESSAGE)
        .to_string()
}

/// Confiança 0.0-1.0 -> porcentagem com quatro casas decimais
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.4}%", confidence * 100.0)
}

/// Campos exibidos na tela
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisFields {
    /// nomeDoenca
    pub disease_name: String,
    /// cultura
    pub crop: String,
    /// confiabilidade
    pub confidence: String,
    pub common_name: String,
    /// descDoenca
    pub description: String,
}

impl DiagnosisFields {
    pub fn from_diagnosis(diagnosis: &Diagnosis) -> Self {
        Self {
            disease_name: or_empty(diagnosis.scientific_name.as_deref()),
            crop: or_empty(diagnosis.crop.as_deref()),
            confidence: diagnosis
                .confidence
                .map(format_confidence)
                .unwrap_or_else(|| EMPTY_FIELD.to_string()),
            common_name: or_empty(diagnosis.common_name.as_deref()),
            description: or_empty(diagnosis.description.as_deref()),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn or_empty(value: Option<&str>) -> String {
    non_empty(value).unwrap_or(EMPTY_FIELD).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagnosis(name: Option<&str>) -> Diagnosis {
        Diagnosis {
            scientific_name: name.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_is_healthy() {
        assert!(is_healthy(Some("Saudável")));
        assert!(!is_healthy(Some(" Saudável ")));
        assert!(!is_healthy(Some("saudável")));
        assert!(!is_healthy(Some("Venturia inaequalis")));
        assert!(!is_healthy(None));
    }

    #[test]
    fn test_treatment_query_skips_sentinels() {
        assert_eq!(treatment_query(None), None);
        assert_eq!(treatment_query(Some("")), None);
        assert_eq!(treatment_query(Some("—")), None);
        assert_eq!(treatment_query(Some("-")), None);
        assert_eq!(treatment_query(Some("Saudável")), None);
    }

    #[test]
    fn test_treatment_query_real_name() {
        assert_eq!(
            treatment_query(Some("Alternaria solani")),
            Some("Alternaria solani")
        );
    }

    #[test]
    fn test_treatment_query_keeps_name_as_returned() {
        assert_eq!(
            treatment_query(Some(" Alternaria solani ")),
            Some(" Alternaria solani ")
        );
        assert_eq!(treatment_query(Some(" Saudável")), Some(" Saudável"));
        assert_eq!(treatment_query(Some("   ")), Some("   "));
    }

    #[test]
    fn test_result_message_healthy() {
        let mut d = diagnosis(Some("Saudável"));
        d.resultado = Some("ignorado".to_string());
        assert_eq!(result_message(&d), HEALTHY_MESSAGE);
    }

    #[test]
    fn test_result_message_uses_resultado() {
        let mut d = diagnosis(Some("Phytophthora infestans"));
        d.resultado = Some("Requeima detectada".to_string());
        assert_eq!(result_message(&d), "Requeima detectada");
    }

    #[test]
    fn test_result_message_default_disease() {
        let mut d = diagnosis(Some("Phytophthora infestans"));
        assert_eq!(result_message(&d), DISEASE_MESSAGE);

        d.resultado = Some("  ".to_string());
        assert_eq!(result_message(&d), DISEASE_MESSAGE);
    }

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(0.5), "50.0000%");
        assert_eq!(format_confidence(0.9731), "97.3100%");
        assert_eq!(format_confidence(1.0), "100.0000%");
        assert_eq!(format_confidence(0.0), "0.0000%");
        assert_eq!(format_confidence(0.123456789), "12.3457%");
    }

    #[test]
    fn test_fields_from_full_diagnosis() {
        let d = Diagnosis {
            scientific_name: Some("Venturia inaequalis".to_string()),
            common_name: Some("Sarna".to_string()),
            crop: Some("Maçã".to_string()),
            confidence: Some(0.25),
            description: Some("Fungo".to_string()),
            resultado: None,
        };

        let fields = DiagnosisFields::from_diagnosis(&d);
        assert_eq!(fields.disease_name, "Venturia inaequalis");
        assert_eq!(fields.crop, "Maçã");
        assert_eq!(fields.confidence, "25.0000%");
        assert_eq!(fields.common_name, "Sarna");
        assert_eq!(fields.description, "Fungo");
    }

    #[test]
    fn test_fields_fallback_to_dash() {
        let fields = DiagnosisFields::from_diagnosis(&Diagnosis {
            crop: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(fields.disease_name, EMPTY_FIELD);
        assert_eq!(fields.crop, EMPTY_FIELD);
        assert_eq!(fields.confidence, EMPTY_FIELD);
        assert_eq!(fields.common_name, EMPTY_FIELD);
        assert_eq!(fields.description, EMPTY_FIELD);
    }
}
