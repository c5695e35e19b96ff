//! Componente principal

use agrolens_common::endpoint::DEFAULT_API_BASE_URL;
use agrolens_common::{run_diagnosis, DiagnosisSession};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::api::FetchApi;
use crate::components::{
    diagnose_button::DiagnoseButton,
    footer::Footer,
    header::Header,
    image_preview::ImagePreview,
    result_panel::ResultPanel,
    treatment_pager::TreatmentPager,
    upload_area::UploadArea,
};
use crate::image::{create_preview, release_preview, selected_file, SelectedFile};

/// Alerta bloqueante do navegador
fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn App() -> impl IntoView {
    // web_sys::File não é Send: sinal local
    let session = RwSignal::new_local(DiagnosisSession::<SelectedFile>::new());
    let (preview, set_preview) = signal(None::<String>);
    let api = FetchApi::new(DEFAULT_API_BASE_URL);

    let can_diagnose = Signal::derive(move || session.with(|s| s.can_diagnose()));
    let is_loading = Signal::derive(move || session.with(|s| s.is_loading()));
    let result = Signal::derive(move || session.with(|s| s.result().map(str::to_string)));
    let fields = Signal::derive(move || session.with(|s| s.fields().cloned()));
    let current_treatment = Signal::derive(move || session.with(|s| s.current_treatment().cloned()));
    let position = Signal::derive(move || session.with(|s| s.treatments().position_label()));
    let has_previous = Signal::derive(move || session.with(|s| s.treatments().has_previous()));
    let has_next = Signal::derive(move || session.with(|s| s.treatments().has_next()));

    // Seleção de arquivo
    let on_file_selected = move |file: Option<File>| {
        let selected = match selected_file(file) {
            Ok(selected) => selected,
            Err(err) => {
                show_alert(&err.alert_text());
                return;
            }
        };
        let file = selected.file().clone();
        match session.try_update(|s| s.select_image(selected)) {
            Some(Ok(())) => {
                if let Some(old) = preview.get_untracked() {
                    release_preview(&old);
                }
                set_preview.set(create_preview(&file));
            }
            Some(Err(err)) => show_alert(&err.alert_text()),
            None => {}
        }
    };

    // Diagnóstico
    let on_diagnose = move |_| {
        let image = match session.try_update(|s| s.begin_diagnosis()) {
            Some(Ok(image)) => image,
            Some(Err(err)) => {
                show_alert(&err.alert_text());
                return;
            }
            None => return,
        };

        let api = api.clone();
        spawn_local(async move {
            let outcome = run_diagnosis(&api, &image).await;

            if let Some(failure) = &outcome.failure {
                gloo::console::error!(format!("Erro ao analisar a imagem: {}", failure));
            }
            if let Some(alert) = &outcome.alert {
                show_alert(alert);
            }

            session.update(|s| s.complete(outcome));
        });
    };

    let on_previous = move |_| session.update(|s| {
        s.previous_treatment();
    });
    let on_next = move |_| session.update(|s| {
        s.next_treatment();
    });

    view! {
        <div class="container">
            <div class="card">
                <Header />

                <UploadArea on_file_selected=on_file_selected />

                <ImagePreview preview=preview />

                <DiagnoseButton
                    can_diagnose=can_diagnose
                    is_loading=is_loading
                    on_diagnose=on_diagnose
                />

                <ResultPanel result=result fields=fields />

                <TreatmentPager
                    current=current_treatment
                    position=position
                    has_previous=has_previous
                    has_next=has_next
                    on_previous=on_previous
                    on_next=on_next
                />
            </div>

            <Footer />
        </div>
    }
}
