//! Botão "Pesquisar Doença"

use agrolens_common::diagnosis::LOADING_MESSAGE;
use leptos::prelude::*;

#[component]
pub fn DiagnoseButton<F>(
    can_diagnose: Signal<bool>,
    is_loading: Signal<bool>,
    on_diagnose: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <button
            class=move || {
                if can_diagnose.get() {
                    "btn btn-primary btn-diagnose"
                } else {
                    "btn btn-disabled btn-diagnose"
                }
            }
            disabled=move || !can_diagnose.get()
            on:click={
                let on_diagnose = on_diagnose.clone();
                move |_| on_diagnose(())
            }
        >
            <Show
                when=move || is_loading.get()
                fallback=|| view! { "Pesquisar Doença" }
            >
                <span class="spinner"></span>
                <span>{LOADING_MESSAGE}</span>
            </Show>
        </button>
    }
}
