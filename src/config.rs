use crate::error::{AgroLensError, Result};
use agrolens_common::endpoint::DEFAULT_API_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Variável de ambiente com a URL base da API
pub const API_URL_ENV: &str = "AGROLENS_API_URL";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub api_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Como `load_from`, mas um arquivo ilegível vira o padrão
    ///
    /// Usado pelo comando `config`, que precisa conseguir regravar o arquivo.
    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            warn!("configuração ignorada ({}): {}", path.display(), e);
            Self::default()
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AgroLensError::Config("diretório home não encontrado".into()))?;
        Ok(home.join(".config").join("agrolens").join("config.json"))
    }

    /// URL base da API: `--api-url` > AGROLENS_API_URL > arquivo > padrão
    pub fn resolve_api_url(&self, cli_override: Option<&str>) -> String {
        let from_env = std::env::var(API_URL_ENV).ok();
        self.resolve_api_url_with(cli_override, from_env.as_deref())
    }

    pub fn resolve_api_url_with(&self, cli_override: Option<&str>, from_env: Option<&str>) -> String {
        [cli_override, from_env, self.api_url.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string()
    }

    /// Valida e grava a URL base no arquivo de configuração
    pub fn set_api_url_in(&mut self, url: String, path: &Path) -> Result<()> {
        validate_api_url(&url)?;
        self.api_url = Some(url.trim().trim_end_matches('/').to_string());
        self.save_to(path)
    }
}

fn validate_api_url(url: &str) -> Result<()> {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(AgroLensError::Config(format!(
            "URL inválida (use http:// ou https://): {}",
            url
        )))
    }
}
