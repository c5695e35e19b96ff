//! Configuração da CLI

use agrolens::config::Config;
use agrolens::error::AgroLensError;
use agrolens_common::endpoint::DEFAULT_API_BASE_URL;
use tempfile::tempdir;

/// Arquivo ausente -> padrão
#[test]
fn test_load_missing_file_is_default() {
    let dir = tempdir().expect("falha ao criar diretório temporário");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, Config::default());
}

/// Gravação e leitura
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("falha ao criar diretório temporário");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config
        .set_api_url_in("https://api.example/".to_string(), &path)
        .expect("falha ao gravar");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.api_url.as_deref(), Some("https://api.example"));

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"apiUrl\""));
}

/// URL sem esquema é rejeitada
#[test]
fn test_invalid_url_rejected() {
    let dir = tempdir().expect("falha ao criar diretório temporário");
    let path = dir.path().join("config.json");

    let mut config = Config::default();
    let err = config
        .set_api_url_in("api.example".to_string(), &path)
        .unwrap_err();

    assert!(matches!(err, AgroLensError::Config(_)));
    assert!(config.api_url.is_none());
    assert!(!path.exists());
}

/// JSON inválido no arquivo
#[test]
fn test_load_invalid_json() {
    let dir = tempdir().expect("falha ao criar diretório temporário");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(Config::load_from(&path), Err(AgroLensError::JsonParse(_))));
}

/// Arquivo corrompido pode ser regravado pelo comando `config`
#[test]
fn test_corrupt_file_can_be_repaired() {
    let dir = tempdir().expect("falha ao criar diretório temporário");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut config = Config::load_or_default_from(&path);
    assert_eq!(config, Config::default());

    config
        .set_api_url_in("http://localhost:8000".to_string(), &path)
        .expect("falha ao gravar");

    let repaired = Config::load_from(&path).expect("arquivo continua inválido");
    assert_eq!(repaired.api_url.as_deref(), Some("http://localhost:8000"));
}

/// Precedência: --api-url > ambiente > arquivo > padrão
#[test]
fn test_api_url_precedence() {
    let config = Config {
        api_url: Some("https://from-file".to_string()),
    };

    assert_eq!(
        config.resolve_api_url_with(Some("https://from-cli"), Some("https://from-env")),
        "https://from-cli"
    );
    assert_eq!(
        config.resolve_api_url_with(None, Some("https://from-env")),
        "https://from-env"
    );
    assert_eq!(config.resolve_api_url_with(None, None), "https://from-file");
    assert_eq!(
        Config::default().resolve_api_url_with(None, None),
        DEFAULT_API_BASE_URL
    );
}

/// Valores vazios são ignorados
#[test]
fn test_blank_values_skipped() {
    let config = Config {
        api_url: Some("https://from-file".to_string()),
    };
    assert_eq!(config.resolve_api_url_with(Some("  "), Some("")), "https://from-file");
}
