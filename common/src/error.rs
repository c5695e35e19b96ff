//! Tipos de erro compartilhados

use thiserror::Error;

/// Erro comum entre CLI e Web
#[derive(Error, Debug)]
pub enum Error {
    #[error("Por favor, selecione uma imagem JPG. (recebido: {0})")]
    InvalidImageType(String),

    #[error("Carregue uma imagem primeiro!")]
    NoImageSelected,

    #[error("Uma análise já está em andamento")]
    DiagnosisInProgress,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Texto exibido no alerta bloqueante
    pub fn alert_text(&self) -> String {
        match self {
            Error::InvalidImageType(_) => crate::diagnosis::INVALID_IMAGE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

/// Alias de Result
pub type Result<T> = std::result::Result<T, Error>;
