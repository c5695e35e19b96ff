use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">"© 2025 AgroLensLabs – Todos os direitos reservados."</footer>
    }
}
