//! Autenticação junto à SEFAZ: certificado A1 em arquivo ou certificado
//! do sistema (selecionado pelo ambiente, sem payload na requisição).

use crate::error::{HelpDanfeError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum Autenticacao {
    /// Certificado A1 (.pfx) enviado junto com a consulta; a senha pode
    /// ser vazia
    Arquivo { certificado: Vec<u8>, senha: String },
    /// Certificado do sistema: a seleção acontece no servidor e a
    /// requisição não carrega o certificado
    Sistema,
}

impl Autenticacao {
    /// Carrega um certificado A1 do disco
    pub fn do_arquivo(caminho: &Path, senha: &str) -> Result<Self> {
        let certificado = std::fs::read(caminho).map_err(|_| {
            HelpDanfeError::Certificado(format!(
                "certificado não encontrado: {}",
                caminho.display()
            ))
        })?;

        Ok(Self::Arquivo {
            certificado,
            senha: senha.to_string(),
        })
    }

    /// Valor do campo `tipo_certificado` esperado pela API
    pub fn tipo(&self) -> &'static str {
        match self {
            Autenticacao::Arquivo { .. } => "arquivo",
            Autenticacao::Sistema => "sistema",
        }
    }
}
