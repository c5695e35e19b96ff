use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "agrolens")]
#[command(about = "Reconhecimento de doenças de plantas por imagem", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log detalhado
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// URL base da API (sobrepõe AGROLENS_API_URL e o arquivo de configuração)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Envia uma foto JPG e mostra o diagnóstico e os tratamentos
    Diagnose {
        /// Foto da planta (.jpg/.jpeg)
        #[arg(required = true)]
        image: PathBuf,

        /// Imprime o resultado como JSON
        #[arg(long)]
        json: bool,

        /// Não abre a navegação interativa dos tratamentos
        #[arg(long)]
        no_interactive: bool,
    },

    /// Consulta os tratamentos de uma doença pelo nome científico
    Treatment {
        /// Nome científico da doença
        #[arg(required = true)]
        disease_name: String,

        /// Imprime o resultado como JSON
        #[arg(long)]
        json: bool,
    },

    /// Mostra/edita a configuração
    Config {
        /// Define a URL base da API
        #[arg(long)]
        set_api_url: Option<String>,

        /// Mostra a configuração
        #[arg(long)]
        show: bool,
    },
}
