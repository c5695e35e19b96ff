//! AgroLens Common Library
//!
//! Tipos, estado da tela e fluxo de diagnóstico compartilhados entre a CLI
//! e a página Web (WASM).

pub mod diagnosis;
pub mod endpoint;
pub mod error;
pub mod flow;
pub mod session;
pub mod treatment;
pub mod types;

pub use diagnosis::{format_confidence, is_healthy, result_message, treatment_query, DiagnosisFields};
pub use endpoint::{diagnosis_url, parse_api_error, treatment_url, ApiErrorBody};
pub use error::{Error, Result};
pub use flow::{run_diagnosis, status_message, ApiReply, DiagnosisOutcome, PlantApi};
pub use session::DiagnosisSession;
pub use treatment::{normalize_treatments, TreatmentPager, TreatmentRecord};
pub use types::{Diagnosis, ImageFile, ImageSource};
