use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgroLensError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Arquivo não encontrado: {0}")]
    FileNotFound(String),

    #[error("Erro HTTP: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Erro no modo interativo: {0}")]
    Interactive(String),

    #[error("Erro de JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] agrolens_common::Error),
}

impl From<AgroLensError> for agrolens_common::Error {
    fn from(err: AgroLensError) -> Self {
        match err {
            AgroLensError::Common(inner) => inner,
            AgroLensError::JsonParse(inner) => agrolens_common::Error::Json(inner),
            AgroLensError::Io(inner) => agrolens_common::Error::Io(inner),
            other => agrolens_common::Error::Transport(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AgroLensError>;
