use crate::historico::TipoConsulta;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "helpdanfe")]
#[command(about = "Consulta de NFe e boletos via API HelpDanfe", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Logs detalhados
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Consulta uma NFe pela chave de acesso (44 dígitos)
    Nfe {
        #[arg(required = true)]
        chave: String,

        /// Certificado digital A1 (.pfx); sem ele, usa o certificado do sistema
        #[arg(short, long)]
        certificado: Option<PathBuf>,

        /// Senha do certificado (pode ser vazia)
        #[arg(short, long, default_value = "")]
        senha: String,
    },

    /// Consulta boletos por código de barras ou linha digitável
    Boletos {
        /// Um ou mais códigos
        #[arg(required = true)]
        codigos: Vec<String>,
    },

    /// Baixa o XML ou o DANFE (PDF) de uma NFe
    Baixar {
        #[arg(required = true)]
        chave: String,

        /// Formato do arquivo (xml/pdf)
        #[arg(short, long, default_value = "xml")]
        formato: FormatoDownload,

        /// Diretório de saída (padrão: diretório atual)
        #[arg(short, long)]
        saida: Option<PathBuf>,
    },

    /// Lista o histórico de consultas
    Historico {
        /// Filtra por data (AAAA-MM-DD)
        #[arg(short, long)]
        data: Option<String>,

        /// Filtra por tipo de consulta (nfe/boleto)
        #[arg(short, long)]
        tipo: Option<TipoConsulta>,

        /// Remove todo o histórico
        #[arg(long)]
        limpar: bool,
    },

    /// Exibe ou altera as configurações
    Config {
        /// URL base da API
        #[arg(long)]
        api_url: Option<String>,

        /// Tempo limite das requisições, em segundos
        #[arg(long)]
        timeout: Option<u64>,

        /// Exibe a configuração atual
        #[arg(long)]
        mostrar: bool,

        /// Restaura os padrões
        #[arg(long)]
        restaurar: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatoDownload {
    Xml,
    Pdf,
}
