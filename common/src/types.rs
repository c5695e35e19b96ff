//! Tipos compartilhados entre CLI e Web
//!
//! - Diagnosis: resposta do endpoint de diagnóstico
//! - ImageSource: imagem escolhida pelo usuário (arquivo do navegador ou da CLI)
//! - ImageFile: imagem carregada em memória (CLI e testes)

use serde::{Deserialize, Serialize};

/// MIME aceito no upload
pub const JPEG_MIME_TYPE: &str = "image/jpeg";

/// Resposta do endpoint `/imageDiagnosis`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Diagnosis {
    pub scientific_name: Option<String>,
    pub common_name: Option<String>,
    pub crop: Option<String>,
    /// 0.0 - 1.0
    pub confidence: Option<f64>,
    pub description: Option<String>,
    pub resultado: Option<String>,
}

/// Imagem selecionada pelo usuário
///
/// Só o tipo MIME é validado (lado cliente); o conteúdo nunca é inspecionado.
pub trait ImageSource {
    fn file_name(&self) -> String;
    fn mime_type(&self) -> String;

    fn is_jpeg(&self) -> bool {
        self.mime_type() == JPEG_MIME_TYPE
    }
}

/// Imagem em memória
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Atalho para uma imagem JPEG
    pub fn jpeg(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(file_name, JPEG_MIME_TYPE, bytes)
    }
}

impl ImageSource for ImageFile {
    fn file_name(&self) -> String {
        self.file_name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnosis_deserialize() {
        let json = r#"{
            "scientificName": "Venturia inaequalis",
            "commonName": "Sarna da macieira",
            "crop": "Maçã",
            "description": "Manchas escuras nas folhas",
            "confidence": 0.9731
        }"#;

        let diagnosis: Diagnosis = serde_json::from_str(json).expect("falha ao desserializar");
        assert_eq!(diagnosis.scientific_name.as_deref(), Some("Venturia inaequalis"));
        assert_eq!(diagnosis.common_name.as_deref(), Some("Sarna da macieira"));
        assert_eq!(diagnosis.crop.as_deref(), Some("Maçã"));
        assert_eq!(diagnosis.confidence, Some(0.9731));
        assert_eq!(diagnosis.resultado, None);
    }

    #[test]
    fn test_diagnosis_deserialize_missing_fields() {
        let diagnosis: Diagnosis = serde_json::from_str("{}").expect("falha ao desserializar");
        assert_eq!(diagnosis, Diagnosis::default());
    }

    #[test]
    fn test_diagnosis_deserialize_null_fields() {
        let json = r#"{"scientificName": null, "confidence": null, "resultado": "Doença detectada"}"#;
        let diagnosis: Diagnosis = serde_json::from_str(json).expect("falha ao desserializar");
        assert!(diagnosis.scientific_name.is_none());
        assert!(diagnosis.confidence.is_none());
        assert_eq!(diagnosis.resultado.as_deref(), Some("Doença detectada"));
    }

    #[test]
    fn test_image_file_is_jpeg() {
        assert!(ImageFile::jpeg("folha.jpg", vec![]).is_jpeg());
        assert!(!ImageFile::new("folha.png", "image/png", vec![]).is_jpeg());
        assert!(!ImageFile::new("folha.jpg", "image/jpg", vec![]).is_jpeg());
    }
}
