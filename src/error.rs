use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelpDanfeError {
    #[error("Dados inválidos: {0}")]
    Validacao(String),

    #[error("Erro de certificado: {0}")]
    Certificado(String),

    #[error("Erro na consulta: {0}")]
    Consulta(String),

    #[error("{0}")]
    Conexao(String),

    #[error("Tempo limite de {0}ms excedido")]
    Timeout(u64),

    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro ao interpretar JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Erro de E/S: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HelpDanfeError>;
