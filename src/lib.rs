//! AgroLens CLI
//!
//! Envia a foto de uma planta para a API de diagnóstico e mostra a doença,
//! a cultura, a confiança e os tratamentos recomendados.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod image_file;
pub mod logging;
pub mod pager;
pub mod report;
