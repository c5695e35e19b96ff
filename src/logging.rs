//! Inicialização do log (tracing)

use crate::error::{AgroLensError, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Inicializa o subscriber
///
/// RUST_LOG tem prioridade; sem ele o nível é `info` (`debug` com --verbose).
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AgroLensError::Config(format!("falha ao iniciar o log: {}", e)))
}
