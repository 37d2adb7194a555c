//! HelpDanfe - cliente de consulta de documentos fiscais
//!
//! Consulta NFe pela chave de acesso e boletos por código junto à API
//! HelpDanfe, com histórico local das consultas realizadas.

pub mod api;
pub mod certificado;
pub mod cli;
pub mod config;
pub mod consulta;
pub mod error;
pub mod historico;
pub mod models;
pub mod validador;

pub use api::{ApiClient, ProvedorApi};
pub use certificado::Autenticacao;
pub use config::Config;
pub use consulta::Sessao;
pub use error::{HelpDanfeError, Result};
pub use historico::{Entrada, Historico, TipoConsulta};
