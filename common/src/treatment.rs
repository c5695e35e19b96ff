//! Registros de tratamento e paginação
//!
//! O endpoint `/treatment` devolve um objeto ou um array de objetos com
//! campos arbitrários. Três deles têm exibição própria; o resto é mostrado
//! como veio, na ordem da resposta.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::diagnosis::EMPTY_FIELD;

pub const BRAND_KEY: &str = "marca_comercial";
pub const REGISTRATION_KEY: &str = "numero_registro";
pub const REFERENCE_URL_KEY: &str = "url_agrofit";

const DEDICATED_KEYS: &[&str] = &[BRAND_KEY, REGISTRATION_KEY, REFERENCE_URL_KEY];

/// Um produto recomendado (registro do Agrofit)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TreatmentRecord(Map<String, Value>);

impl TreatmentRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// marca_comercial
    pub fn brand(&self) -> Option<String> {
        self.text(BRAND_KEY)
    }

    /// numero_registro
    pub fn registration_number(&self) -> Option<String> {
        self.text(REGISTRATION_KEY)
    }

    /// url_agrofit
    pub fn reference_url(&self) -> Option<String> {
        self.text(REFERENCE_URL_KEY)
    }

    /// Demais campos, na ordem da resposta
    pub fn extra_fields(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter(|(key, _)| !DEDICATED_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), display_value(value)))
            .collect()
    }

    fn text(&self, key: &str) -> Option<String> {
        let value = self.0.get(key)?;
        if value.is_null() {
            return None;
        }
        Some(display_value(value))
    }
}

/// Converte um valor JSON em texto para exibição
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => EMPTY_FIELD.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

/// Normaliza a resposta do endpoint em uma sequência ordenada
///
/// - objeto -> um registro
/// - array -> um registro por objeto (demais elementos são ignorados)
/// - qualquer outra coisa -> vazio
pub fn normalize_treatments(value: Value) -> Vec<TreatmentRecord> {
    match value {
        Value::Object(map) => vec![TreatmentRecord(map)],
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(map) => Some(TreatmentRecord(map)),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Índice (base zero) sobre a lista de tratamentos
///
/// `next`/`previous` param nos limites, sem dar a volta.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreatmentPager {
    records: Vec<TreatmentRecord>,
    index: usize,
}

impl TreatmentPager {
    pub fn new(records: Vec<TreatmentRecord>) -> Self {
        Self { records, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&TreatmentRecord> {
        self.records.get(self.index)
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.records.len()
    }

    /// Avança uma posição; `false` se já está no último
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Volta uma posição; `false` se já está no primeiro
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Posição atual em base 1: (atual, total)
    pub fn position(&self) -> Option<(usize, usize)> {
        if self.records.is_empty() {
            None
        } else {
            Some((self.index + 1, self.records.len()))
        }
    }

    /// Rótulo "n de m"
    pub fn position_label(&self) -> String {
        match self.position() {
            Some((current, total)) => format!("{} de {}", current, total),
            None => String::new(),
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.index = 0;
    }
}
