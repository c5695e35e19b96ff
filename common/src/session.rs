//! Estado da tela de diagnóstico
//!
//! Guarda a imagem escolhida, o estado de carregamento, a mensagem de
//! resultado, os campos do diagnóstico e a paginação dos tratamentos.
//! Genérico sobre o tipo da imagem (`SelectedFile` no navegador,
//! `ImageFile` na CLI).

use crate::diagnosis::DiagnosisFields;
use crate::error::{Error, Result};
use crate::flow::DiagnosisOutcome;
use crate::treatment::{TreatmentPager, TreatmentRecord};
use crate::types::{Diagnosis, ImageSource};

#[derive(Debug, Clone)]
pub struct DiagnosisSession<I> {
    image: Option<I>,
    loading: bool,
    result: Option<String>,
    diagnosis: Option<Diagnosis>,
    fields: Option<DiagnosisFields>,
    treatments: TreatmentPager,
}

impl<I> Default for DiagnosisSession<I> {
    fn default() -> Self {
        Self {
            image: None,
            loading: false,
            result: None,
            diagnosis: None,
            fields: None,
            treatments: TreatmentPager::default(),
        }
    }
}

impl<I> DiagnosisSession<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> Option<&I> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Botão "Pesquisar Doença" habilitado?
    pub fn can_diagnose(&self) -> bool {
        self.image.is_some() && !self.loading
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn diagnosis(&self) -> Option<&Diagnosis> {
        self.diagnosis.as_ref()
    }

    pub fn fields(&self) -> Option<&DiagnosisFields> {
        self.fields.as_ref()
    }

    pub fn treatments(&self) -> &TreatmentPager {
        &self.treatments
    }

    pub fn current_treatment(&self) -> Option<&TreatmentRecord> {
        self.treatments.current()
    }

    pub fn next_treatment(&mut self) -> bool {
        self.treatments.next()
    }

    pub fn previous_treatment(&mut self) -> bool {
        self.treatments.previous()
    }

    /// Limpa mensagem, campos e tratamentos (índice volta a 0)
    pub fn clear_results(&mut self) {
        self.result = None;
        self.diagnosis = None;
        self.fields = None;
        self.treatments.clear();
    }

    /// Aplica o resultado do fluxo e sai do estado de carregamento
    pub fn complete(&mut self, outcome: DiagnosisOutcome) {
        self.result = Some(outcome.message);
        self.fields = outcome.diagnosis.as_ref().map(DiagnosisFields::from_diagnosis);
        self.diagnosis = outcome.diagnosis;
        self.treatments = TreatmentPager::new(outcome.treatments);
        self.loading = false;
    }
}

impl<I: ImageSource> DiagnosisSession<I> {
    /// Seleciona uma nova imagem
    ///
    /// Só aceita `image/jpeg`. Em caso de erro o estado não muda.
    pub fn select_image(&mut self, image: I) -> Result<()> {
        if !image.is_jpeg() {
            return Err(Error::InvalidImageType(image.mime_type()));
        }
        self.image = Some(image);
        self.clear_results();
        Ok(())
    }
}

impl<I: Clone> DiagnosisSession<I> {
    /// Entra no estado de carregamento e devolve a imagem a enviar
    pub fn begin_diagnosis(&mut self) -> Result<I> {
        if self.loading {
            return Err(Error::DiagnosisInProgress);
        }
        let image = self.image.clone().ok_or(Error::NoImageSelected)?;
        self.clear_results();
        self.loading = true;
        Ok(image)
    }
}
