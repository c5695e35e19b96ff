//! API AgroLens via fetch do navegador
//!
//! POST /imageDiagnosis (FormData, campo `file`) e GET /treatment.

use agrolens_common::endpoint::{self, IMAGE_FORM_FIELD};
use agrolens_common::{parse_api_error, ApiReply, Diagnosis, Error, ImageSource, PlantApi, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

use crate::image::SelectedFile;

#[derive(Clone, Debug)]
pub struct FetchApi {
    base_url: String,
}

impl FetchApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn post_diagnosis(&self, image: &SelectedFile) -> Result<ApiReply<Diagnosis>> {
        let form = diagnosis_form(image)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from(form));

        let url = endpoint::diagnosis_url(&self.base_url);
        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;

        let resp = send(&request).await?;
        read_reply(resp).await
    }

    async fn get_treatments(&self, disease_name: &str) -> Result<ApiReply<Value>> {
        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let url = endpoint::treatment_url(&self.base_url, disease_name);
        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(js_error)?;

        let resp = send(&request).await?;
        read_reply(resp).await
    }
}

impl PlantApi for FetchApi {
    type Image = SelectedFile;

    async fn diagnose(&self, image: &SelectedFile) -> Result<ApiReply<Diagnosis>> {
        self.post_diagnosis(image).await
    }

    async fn treatments(&self, disease_name: &str) -> Result<ApiReply<Value>> {
        self.get_treatments(disease_name).await
    }
}

/// Corpo multipart do diagnóstico: o arquivo no campo `file`
fn diagnosis_form(image: &SelectedFile) -> Result<FormData> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(IMAGE_FORM_FIELD, image.file(), &image.file_name())
        .map_err(js_error)?;
    Ok(form)
}

async fn send(request: &Request) -> Result<Response> {
    let window = web_sys::window().ok_or_else(|| Error::Transport("window indisponível".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(js_error)?;
    resp_value.dyn_into::<Response>().map_err(js_error)
}

async fn read_reply<T: DeserializeOwned>(resp: Response) -> Result<ApiReply<T>> {
    if !resp.ok() {
        let body = read_text(&resp).await.unwrap_or_default();
        if let Some(api_error) = parse_api_error(&body) {
            gloo::console::warn!(format!("API respondeu {}: {}", resp.status(), api_error));
        }
        return Ok(ApiReply::Status {
            code: resp.status(),
            text: resp.status_text(),
        });
    }

    let body = read_text(&resp).await?;
    let value = serde_json::from_str(&body)?;
    Ok(ApiReply::Success(value))
}

async fn read_text(resp: &Response) -> Result<String> {
    let promise = resp.text().map_err(js_error)?;
    let text = JsFuture::from(promise).await.map_err(js_error)?;
    Ok(text.as_string().unwrap_or_default())
}

fn js_error(value: JsValue) -> Error {
    Error::Transport(format!("{:?}", value))
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::{File, FilePropertyBag, ResponseInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn response(status: u16, status_text: &str, body: &str) -> Response {
        let init = ResponseInit::new();
        init.set_status(status);
        init.set_status_text(status_text);
        Response::new_with_opt_str_and_init(Some(body), &init).expect("falha ao criar Response")
    }

    #[wasm_bindgen_test]
    fn wasm_form_carries_file_field() {
        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str("conteudo"));
        let options = FilePropertyBag::new();
        options.set_type("image/jpeg");
        let file = File::new_with_str_sequence_and_options(&parts, "folha.jpg", &options)
            .expect("falha ao criar File");

        let form = diagnosis_form(&SelectedFile::new(file)).expect("falha ao montar o form");
        let sent: File = form.get(IMAGE_FORM_FIELD).dyn_into().expect("campo não é File");
        assert_eq!(sent.name(), "folha.jpg");
        assert_eq!(sent.type_(), "image/jpeg");
    }

    #[wasm_bindgen_test]
    async fn wasm_error_status_maps_to_status_text() {
        let body = r#"{"detail": {"code": 404, "message": "Praga não encontrada"}}"#;
        let reply = read_reply::<Value>(response(404, "Not Found", body))
            .await
            .expect("erro inesperado");

        assert_eq!(
            reply,
            ApiReply::Status {
                code: 404,
                text: "Not Found".to_string()
            }
        );
    }

    #[wasm_bindgen_test]
    async fn wasm_success_body_is_parsed() {
        let body = r#"{"scientificName": "Alternaria solani", "confidence": 0.9}"#;
        let reply = read_reply::<Diagnosis>(response(200, "OK", body))
            .await
            .expect("erro inesperado");

        match reply {
            ApiReply::Success(diagnosis) => {
                assert_eq!(diagnosis.scientific_name.as_deref(), Some("Alternaria solani"));
            }
            other => panic!("resposta inesperada: {:?}", other),
        }
    }

    #[wasm_bindgen_test]
    async fn wasm_malformed_body_is_error() {
        let result = read_reply::<Diagnosis>(response(200, "OK", "<html>")).await;
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
