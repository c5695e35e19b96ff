//! Navegação interativa pelos tratamentos

use crate::error::{AgroLensError, Result};
use crate::report::render_treatment;
use agrolens_common::DiagnosisSession;
use dialoguer::Select;

/// Ação do usuário
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerAction {
    /// Próximo tratamento
    Next,
    /// Tratamento anterior
    Previous,
    /// Sair
    Quit,
}

/// Opções do menu, na ordem exibida
pub fn pager_options(has_previous: bool, has_next: bool) -> Vec<(&'static str, PagerAction)> {
    let mut options = Vec::new();
    if has_next {
        options.push(("Próximo", PagerAction::Next));
    }
    if has_previous {
        options.push(("Anterior", PagerAction::Previous));
    }
    options.push(("Sair", PagerAction::Quit));
    options
}

/// Mostra um tratamento por vez até o usuário sair
pub fn browse_treatments<I>(session: &mut DiagnosisSession<I>) -> Result<()> {
    if session.treatments().is_empty() {
        return Ok(());
    }

    loop {
        println!("\n{}", render_treatment(session.treatments()));

        if session.treatments().len() == 1 {
            return Ok(());
        }

        match prompt_action(session.treatments().has_previous(), session.treatments().has_next())? {
            PagerAction::Next => {
                session.next_treatment();
            }
            PagerAction::Previous => {
                session.previous_treatment();
            }
            PagerAction::Quit => return Ok(()),
        }
    }
}

fn prompt_action(has_previous: bool, has_next: bool) -> Result<PagerAction> {
    let options = pager_options(has_previous, has_next);
    let labels: Vec<&str> = options.iter().map(|(label, _)| *label).collect();

    let selection = Select::new()
        .with_prompt("Tratamentos")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| AgroLensError::Interactive(e.to_string()))?;

    options
        .get(selection)
        .map(|(_, action)| *action)
        .ok_or_else(|| AgroLensError::Interactive(format!("opção inexistente: {}", selection)))
}
