//! Casos de erro
//!
//! Verifica as conversões e mensagens dos tipos de erro

use agrolens::error::AgroLensError;
use agrolens::image_file;
use agrolens_common::{DiagnosisSession, ImageFile};
use std::path::Path;
use tempfile::tempdir;

/// Foto inexistente
#[test]
fn test_load_nonexistent_image() {
    let result = image_file::load_image(Path::new("/nonexistent/path/folha.jpg"));
    assert!(matches!(result, Err(AgroLensError::FileNotFound(_))));
}

/// Diretório no lugar da foto
#[test]
fn test_load_directory_as_image() {
    let dir = tempdir().expect("falha ao criar diretório temporário");
    let result = image_file::load_image(dir.path());
    assert!(matches!(result, Err(AgroLensError::FileNotFound(_))));
}

/// PNG é rejeitado pela sessão com a mensagem do alerta
#[test]
fn test_png_rejected_by_session() {
    let dir = tempdir().expect("falha ao criar diretório temporário");
    let path = dir.path().join("folha.png");
    std::fs::write(&path, b"dummy").unwrap();

    let image = image_file::load_image(&path).unwrap();
    let mut session: DiagnosisSession<ImageFile> = DiagnosisSession::new();
    let err = session.select_image(image).unwrap_err();

    assert_eq!(err.alert_text(), "Por favor, selecione uma imagem JPG.");
    assert!(!session.has_image());
}

/// Display de todos os erros
#[test]
fn test_error_display() {
    let errors = vec![
        AgroLensError::Config("configuração inválida".to_string()),
        AgroLensError::FileNotFound("folha.jpg".to_string()),
        AgroLensError::Interactive("terminal fechado".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "mensagem vazia: {:?}", err);
    }
}

/// Conversão de erro de IO
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: AgroLensError = io_err.into();

    assert!(matches!(err, AgroLensError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// Conversão de erro de JSON
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: AgroLensError = json_err.into();

    assert!(matches!(err, AgroLensError::JsonParse(_)));
}

/// common::Error é transparente
#[test]
fn test_common_error_transparent() {
    let err: AgroLensError = agrolens_common::Error::NoImageSelected.into();

    assert!(matches!(err, AgroLensError::Common(_)));
    assert_eq!(format!("{}", err), "Carregue uma imagem primeiro!");
}

/// Volta para common::Error (usado pela implementação de PlantApi)
#[test]
fn test_back_into_common_error() {
    let err: agrolens_common::Error = AgroLensError::Config("x".to_string()).into();
    assert!(matches!(err, agrolens_common::Error::Transport(_)));

    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: agrolens_common::Error = AgroLensError::JsonParse(json_err).into();
    assert!(matches!(err, agrolens_common::Error::Json(_)));

    let err: agrolens_common::Error =
        AgroLensError::Common(agrolens_common::Error::DiagnosisInProgress).into();
    assert!(matches!(err, agrolens_common::Error::DiagnosisInProgress));
}
