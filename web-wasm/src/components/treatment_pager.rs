//! Tratamento recomendado com navegação anterior/próximo

use agrolens_common::diagnosis::EMPTY_FIELD;
use agrolens_common::TreatmentRecord;
use leptos::prelude::*;

/// Campos com exibição própria: (rótulo, valor, é link)
pub fn dedicated_rows(record: &TreatmentRecord) -> Vec<(&'static str, String, bool)> {
    let or_empty = |value: Option<String>| value.unwrap_or_else(|| EMPTY_FIELD.to_string());
    let url = record.reference_url();
    let is_link = url.is_some();
    vec![
        ("Marca comercial", or_empty(record.brand()), false),
        ("Nº de registro", or_empty(record.registration_number()), false),
        ("Agrofit", or_empty(url), is_link),
    ]
}

#[component]
pub fn TreatmentPager<FP, FN>(
    current: Signal<Option<TreatmentRecord>>,
    position: Signal<String>,
    has_previous: Signal<bool>,
    has_next: Signal<bool>,
    on_previous: FP,
    on_next: FN,
) -> impl IntoView
where
    FP: Fn(()) + 'static + Clone,
    FN: Fn(()) + 'static + Clone,
{
    view! {
        <div class=move || {
            if current.get().is_some() { "treatment-card" } else { "treatment-card hidden" }
        }>
            <h2>"Tratamento Recomendado:"</h2>

            {move || current.get().map(|record| view! {
                <dl class="treatment-fields">
                    {dedicated_rows(&record)
                        .into_iter()
                        .map(|(label, value, is_link)| view! {
                            <dt>{label}</dt>
                            <dd>
                                {if is_link {
                                    view! {
                                        <a href=value.clone() target="_blank" rel="noopener noreferrer">
                                            {value.clone()}
                                        </a>
                                    }
                                    .into_any()
                                } else {
                                    view! { <span>{value}</span> }.into_any()
                                }}
                            </dd>
                        })
                        .collect_view()}
                    {record
                        .extra_fields()
                        .into_iter()
                        .map(|(key, value)| view! {
                            <dt class="extra">{key}</dt>
                            <dd class="extra">{value}</dd>
                        })
                        .collect_view()}
                </dl>
            })}

            <div class="pager">
                <button
                    class="btn btn-secondary"
                    disabled=move || !has_previous.get()
                    on:click={
                        let on_previous = on_previous.clone();
                        move |_| on_previous(())
                    }
                >
                    "← Anterior"
                </button>
                <span class="pager-position">{move || position.get()}</span>
                <button
                    class="btn btn-secondary"
                    disabled=move || !has_next.get()
                    on:click={
                        let on_next = on_next.clone();
                        move |_| on_next(())
                    }
                >
                    "Próximo →"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agrolens_common::normalize_treatments;
    use serde_json::json;

    #[test]
    fn test_dedicated_rows_with_link() {
        let record = normalize_treatments(json!({
            "marca_comercial": "Cuprozeb",
            "numero_registro": "01234",
            "url_agrofit": "https://agrofit.example/01234"
        }))
        .remove(0);

        let rows = dedicated_rows(&record);
        assert_eq!(rows[0], ("Marca comercial", "Cuprozeb".to_string(), false));
        assert_eq!(rows[1], ("Nº de registro", "01234".to_string(), false));
        assert_eq!(rows[2], ("Agrofit", "https://agrofit.example/01234".to_string(), true));
    }

    #[test]
    fn test_dedicated_rows_missing_values() {
        let record = normalize_treatments(json!({"titular_registro": "Empresa"})).remove(0);
        let rows = dedicated_rows(&record);
        assert!(rows.iter().all(|(_, value, _)| value == EMPTY_FIELD));
        assert!(!rows[2].2);
    }
}
