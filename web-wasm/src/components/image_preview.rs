//! Pré-visualização da imagem selecionada

use leptos::prelude::*;

#[component]
pub fn ImagePreview(preview: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || preview.get().is_some()>
            <div class="preview">
                <img
                    src=move || preview.get().unwrap_or_default()
                    alt="Pré-visualização"
                />
            </div>
        </Show>
    }
}
