//! Seleção da imagem JPG

use leptos::prelude::*;
use web_sys::{Event, File, HtmlInputElement};

#[component]
pub fn UploadArea<F>(on_file_selected: F) -> impl IntoView
where
    F: Fn(Option<File>) + 'static + Clone,
{
    let on_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        // permite escolher o mesmo arquivo de novo
        input.set_value("");
        on_file_selected(file);
    };

    view! {
        <div class="upload-area">
            <input
                type="file"
                accept="image/jpeg"
                id="upload"
                class="hidden"
                on:change=on_change
            />
            <label for="upload" class="btn btn-upload">
                "Carregar Imagem JPG"
            </label>
        </div>
    }
}
