//! Leitura da foto a partir do disco

use crate::error::{AgroLensError, Result};
use agrolens_common::types::JPEG_MIME_TYPE;
use agrolens_common::ImageFile;
use std::path::Path;

const JPEG_EXTENSIONS: &[&str] = &["jpg", "jpeg"];
const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Tipo MIME pela extensão (sem olhar o conteúdo)
pub fn mime_type_for(path: &Path) -> &'static str {
    let is_jpeg = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| JPEG_EXTENSIONS.contains(&ext.as_str()));

    if is_jpeg {
        JPEG_MIME_TYPE
    } else {
        FALLBACK_MIME_TYPE
    }
}

/// Carrega a foto em memória
pub fn load_image(path: &Path) -> Result<ImageFile> {
    if !path.is_file() {
        return Err(AgroLensError::FileNotFound(path.display().to_string()));
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let bytes = std::fs::read(path)?;

    Ok(ImageFile::new(file_name, mime_type_for(path), bytes))
}
