//! Arquivo escolhido no `<input type="file">` e sua pré-visualização

use agrolens_common::{Error, ImageSource, Result};
use web_sys::{File, Url};

/// Arquivo do navegador
#[derive(Clone, Debug)]
pub struct SelectedFile(File);

impl SelectedFile {
    pub fn new(file: File) -> Self {
        Self(file)
    }

    pub fn file(&self) -> &File {
        &self.0
    }
}

impl ImageSource for SelectedFile {
    fn file_name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }
}

/// Resultado do evento `change`; diálogo fechado sem arquivo conta como tipo inválido
pub fn selected_file(file: Option<File>) -> Result<SelectedFile> {
    file.map(SelectedFile::new)
        .ok_or_else(|| Error::InvalidImageType(String::new()))
}

/// Cria a object URL usada como `src` da pré-visualização
pub fn create_preview(file: &File) -> Option<String> {
    Url::create_object_url_with_blob(file).ok()
}

/// Libera a object URL anterior
pub fn release_preview(url: &str) {
    let _ = Url::revoke_object_url(url);
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use agrolens_common::diagnosis::INVALID_IMAGE_MESSAGE;
    use agrolens_common::DiagnosisSession;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;
    use web_sys::FilePropertyBag;

    wasm_bindgen_test_configure!(run_in_browser);

    fn browser_file(name: &str, mime_type: &str) -> File {
        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str("conteudo"));
        let options = FilePropertyBag::new();
        options.set_type(mime_type);
        File::new_with_str_sequence_and_options(&parts, name, &options).expect("falha ao criar File")
    }

    #[wasm_bindgen_test]
    fn wasm_selected_file_reports_name_and_type() {
        let selected = SelectedFile::new(browser_file("folha.jpg", "image/jpeg"));
        assert_eq!(selected.file_name(), "folha.jpg");
        assert_eq!(selected.mime_type(), "image/jpeg");
        assert!(selected.is_jpeg());
    }

    #[wasm_bindgen_test]
    fn wasm_png_rejected_without_state_change() {
        let mut session = DiagnosisSession::new();
        session
            .select_image(SelectedFile::new(browser_file("folha.jpg", "image/jpeg")))
            .expect("JPG recusado");

        let err = session
            .select_image(SelectedFile::new(browser_file("folha.png", "image/png")))
            .unwrap_err();

        assert_eq!(err.alert_text(), INVALID_IMAGE_MESSAGE);
        assert_eq!(session.image().map(|i| i.file_name()).as_deref(), Some("folha.jpg"));
        assert!(session.can_diagnose());
    }

    #[wasm_bindgen_test]
    fn wasm_dialog_closed_without_file() {
        let err = selected_file(None).unwrap_err();
        assert_eq!(err.alert_text(), INVALID_IMAGE_MESSAGE);
    }

    #[wasm_bindgen_test]
    fn wasm_preview_is_blob_url() {
        let file = browser_file("folha.jpg", "image/jpeg");
        let url = create_preview(&file).expect("object URL não criada");
        assert!(url.starts_with("blob:"));
        release_preview(&url);
    }
}
