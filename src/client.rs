//! Cliente HTTP da API AgroLens (reqwest)
//!
//! - POST /imageDiagnosis: multipart, campo `file`
//! - GET  /treatment?diseaseName=...
//!
//! Sem retry e sem timeout.

use crate::error::Result;
use agrolens_common::endpoint::{self, IMAGE_FORM_FIELD};
use agrolens_common::{parse_api_error, ApiReply, Diagnosis, ImageFile, ImageSource, PlantApi};
use reqwest::multipart::{Form, Part};
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct AgroLensClient {
    client: reqwest::Client,
    base_url: String,
}

impl AgroLensClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("agrolens/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let base_url = base_url.into();
        debug!("cliente HTTP apontando para {}", base_url);

        Ok(Self { client, base_url })
    }

    pub async fn post_diagnosis(&self, image: &ImageFile) -> Result<ApiReply<Diagnosis>> {
        let url = endpoint::diagnosis_url(&self.base_url);
        let file_name = image.file_name();
        info!("enviando {} ({} bytes) para {}", file_name, image.bytes.len(), url);

        let part = Part::bytes(image.bytes.clone())
            .file_name(file_name)
            .mime_str(&image.mime_type)?;
        let form = Form::new().part(IMAGE_FORM_FIELD, part);

        let started = Instant::now();
        let response = self.client.post(&url).multipart(form).send().await?;
        debug!("diagnóstico respondeu {} em {:?}", response.status(), started.elapsed());

        read_reply(response).await
    }

    pub async fn get_treatments(&self, disease_name: &str) -> Result<ApiReply<Value>> {
        let url = endpoint::treatment_url(&self.base_url, disease_name);
        info!("buscando tratamentos: {}", url);

        let started = Instant::now();
        let response = self.client.get(&url).send().await?;
        debug!("tratamento respondeu {} em {:?}", response.status(), started.elapsed());

        read_reply(response).await
    }
}

async fn read_reply<T: DeserializeOwned>(response: Response) -> Result<ApiReply<T>> {
    let status = response.status();

    if !status.is_success() {
        let text = status.canonical_reason().unwrap_or_default().to_string();
        let body = response.text().await.unwrap_or_default();
        match parse_api_error(&body) {
            Some(api_error) => warn!("API respondeu {}: {}", status, api_error),
            None => warn!("API respondeu {}", status),
        }
        return Ok(ApiReply::Status {
            code: status.as_u16(),
            text,
        });
    }

    let body = response.text().await?;
    let value = serde_json::from_str(&body)?;
    Ok(ApiReply::Success(value))
}

impl PlantApi for AgroLensClient {
    type Image = ImageFile;

    async fn diagnose(&self, image: &ImageFile) -> agrolens_common::Result<ApiReply<Diagnosis>> {
        self.post_diagnosis(image).await.map_err(Into::into)
    }

    async fn treatments(&self, disease_name: &str) -> agrolens_common::Result<ApiReply<Value>> {
        self.get_treatments(disease_name).await.map_err(Into::into)
    }
}
