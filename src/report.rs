//! Saída em texto do resultado

use agrolens_common::{DiagnosisSession, TreatmentPager};
use agrolens_common::diagnosis::EMPTY_FIELD;
use std::fmt::Write;

const LABEL_WIDTH: usize = 20;

/// Mensagem principal + campos do diagnóstico
pub fn render_result<I>(session: &DiagnosisSession<I>) -> String {
    let mut out = String::new();

    if let Some(result) = session.result() {
        let _ = writeln!(out, "{}", result);
    }

    if let Some(fields) = session.fields() {
        let _ = writeln!(out);
        push_line(&mut out, "Nome da Doença:", &fields.disease_name);
        push_line(&mut out, "Nome Comum:", &fields.common_name);
        push_line(&mut out, "Cultura:", &fields.crop);
        push_line(&mut out, "Confiabilidade:", &fields.confidence);
        push_line(&mut out, "Descrição:", &fields.description);
    }

    out
}

/// Tratamento atual ("n de m")
pub fn render_treatment(pager: &TreatmentPager) -> String {
    let mut out = String::new();

    let Some(record) = pager.current() else {
        return out;
    };

    let _ = writeln!(out, "💊 Tratamento Recomendado ({})", pager.position_label());
    push_line(&mut out, "Marca comercial:", &record.brand().unwrap_or_else(|| EMPTY_FIELD.into()));
    push_line(&mut out, "Nº de registro:", &record.registration_number().unwrap_or_else(|| EMPTY_FIELD.into()));
    push_line(&mut out, "Agrofit:", &record.reference_url().unwrap_or_else(|| EMPTY_FIELD.into()));

    for (key, value) in record.extra_fields() {
        push_line(&mut out, &format!("{}:", key), &value);
    }

    out
}

fn push_line(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {:<width$} {}", label, value, width = LABEL_WIDTH);
}

#[cfg(test)]
mod tests {
    use super::*;
    use agrolens_common::{normalize_treatments, Diagnosis, DiagnosisOutcome, ImageFile};
    use serde_json::json;

    fn completed_session(outcome: DiagnosisOutcome) -> DiagnosisSession<ImageFile> {
        let mut session = DiagnosisSession::new();
        session.select_image(ImageFile::jpeg("folha.jpg", vec![])).unwrap();
        session.begin_diagnosis().unwrap();
        session.complete(outcome);
        session
    }

    #[test]
    fn test_render_result_with_fields() {
        let session = completed_session(DiagnosisOutcome {
            message: "Doença detectada.".to_string(),
            diagnosis: Some(Diagnosis {
                scientific_name: Some("Alternaria solani".to_string()),
                crop: Some("Tomate".to_string()),
                confidence: Some(0.9731),
                ..Default::default()
            }),
            ..Default::default()
        });

        let text = render_result(&session);
        assert!(text.starts_with("Doença detectada.\n"));
        assert!(text.contains("Alternaria solani"));
        assert!(text.contains("Tomate"));
        assert!(text.contains("97.3100%"));
        assert!(text.contains("Nome Comum:"));
    }

    #[test]
    fn test_render_result_message_only() {
        let session = completed_session(DiagnosisOutcome {
            message: "Not Found".to_string(),
            ..Default::default()
        });

        assert_eq!(render_result(&session), "Not Found\n");
    }

    #[test]
    fn test_render_treatment() {
        let mut pager = TreatmentPager::new(normalize_treatments(json!([
            {"marca_comercial": "A", "numero_registro": "001", "url_agrofit": "https://agrofit/1"},
            {"marca_comercial": "B", "titular_registro": "Empresa Y"}
        ])));
        pager.next();

        let text = render_treatment(&pager);
        assert!(text.contains("(2 de 2)"));
        assert!(text.contains("B"));
        assert!(text.contains("titular_registro:"));
        assert!(text.contains("Empresa Y"));
        assert!(text.contains("Agrofit:"));
    }

    #[test]
    fn test_render_treatment_empty() {
        assert_eq!(render_treatment(&TreatmentPager::default()), "");
    }
}
