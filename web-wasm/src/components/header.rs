//! Cabeçalho

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"🌿 Reconhecimento de Doenças de Plantas por Imagem"</h1>
        </header>
    }
}
