use agrolens::{cli, client, config, image_file, logging, pager, report};
use agrolens_common::diagnosis::LOADING_MESSAGE;
use agrolens_common::{
    normalize_treatments, run_diagnosis, status_message, ApiReply, DiagnosisSession, ImageSource, TreatmentPager,
};
use anyhow::{bail, Context};
use clap::Parser;
use cli::{Cli, Commands};
use client::AgroLensClient;
use config::Config;
use indicatif::ProgressBar;
use std::io::IsTerminal;
use std::time::Duration;
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    match cli.command {
        Commands::Diagnose { image, json, no_interactive } => {
            let api_url = load_config()?.resolve_api_url(cli.api_url.as_deref());

            let mut session = DiagnosisSession::new();
            let file = image_file::load_image(&image)?;
            session.select_image(file)?;
            let image = session.begin_diagnosis()?;

            if !json {
                println!("🌿 agrolens - Reconhecimento de Doenças de Plantas\n");
                println!("📷 {}", image.file_name());
            }

            let client = AgroLensClient::new(api_url)?;
            let spinner = (!json).then(|| start_spinner(LOADING_MESSAGE));
            let outcome = run_diagnosis(&client, &image).await;
            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }

            if let Some(failure) = &outcome.failure {
                error!("falha no diagnóstico: {}", failure);
            }
            if let Some(alert) = &outcome.alert {
                eprintln!("⚠️  {}", alert);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
                return Ok(());
            }

            session.complete(outcome);
            println!("\n{}", report::render_result(&session));

            if session.treatments().is_empty() {
                return Ok(());
            }

            if !no_interactive && std::io::stdout().is_terminal() {
                pager::browse_treatments(&mut session)?;
            } else {
                print_all_treatments(session.treatments().clone());
            }
        }

        Commands::Treatment { disease_name, json } => {
            let api_url = load_config()?.resolve_api_url(cli.api_url.as_deref());
            let client = AgroLensClient::new(api_url)?;

            let records = match client.get_treatments(disease_name.trim()).await? {
                ApiReply::Success(value) => normalize_treatments(value),
                ApiReply::Status { code, text } => {
                    bail!("Erro ao buscar tratamento: {}", status_message(code, &text));
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
                return Ok(());
            }

            if records.is_empty() {
                println!("Nenhum tratamento encontrado para {}", disease_name);
                return Ok(());
            }

            print_all_treatments(TreatmentPager::new(records));
        }

        Commands::Config { set_api_url, show } => {
            let path = Config::config_path()?;
            let mut config = Config::load_or_default_from(&path);

            if let Some(url) = set_api_url {
                config.set_api_url_in(url, &path)?;
                println!("✔ URL da API configurada");
            }

            if show {
                println!("Configuração:");
                println!("  Arquivo: {}", path.display());
                println!("  URL da API (arquivo): {}", config.api_url.as_deref().unwrap_or("não definida"));
                println!("  URL da API (efetiva): {}", config.resolve_api_url(cli.api_url.as_deref()));
            }
        }
    }

    Ok(())
}

fn load_config() -> anyhow::Result<Config> {
    Config::load().context("falha ao carregar a configuração (corrija com `agrolens config --set-api-url`)")
}

fn start_spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn print_all_treatments(mut pager: TreatmentPager) {
    loop {
        println!("{}", report::render_treatment(&pager));
        if !pager.next() {
            break;
        }
    }
}
