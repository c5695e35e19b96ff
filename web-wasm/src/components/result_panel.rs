//! Mensagem de resultado e campos do diagnóstico

use agrolens_common::DiagnosisFields;
use leptos::prelude::*;

/// Linhas (rótulo, valor) exibidas no painel
pub fn field_rows(fields: &DiagnosisFields) -> Vec<(&'static str, String)> {
    vec![
        ("Nome da Doença:", fields.disease_name.clone()),
        ("Nome Comum:", fields.common_name.clone()),
        ("Cultura:", fields.crop.clone()),
        ("Confiabilidade:", fields.confidence.clone()),
        ("Descrição:", fields.description.clone()),
    ]
}

#[component]
pub fn ResultPanel(
    result: Signal<Option<String>>,
    fields: Signal<Option<DiagnosisFields>>,
) -> impl IntoView {
    view! {
        <Show when=move || result.get().is_some()>
            <div class="result-message">{move || result.get().unwrap_or_default()}</div>
        </Show>

        {move || fields.get().map(|fields| view! {
            <div class="diagnosis-card">
                {field_rows(&fields)
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="diagnosis-field">
                            <h2>{label}</h2>
                            <p>{value}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        })}
    }
}
