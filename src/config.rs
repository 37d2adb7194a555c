use crate::error::{HelpDanfeError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const API_URL_PADRAO: &str = "http://localhost:8080/api/v1";
const TIMEOUT_PADRAO_MS: u64 = 30_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// URL base da API (ex.: http://localhost:8080/api/v1)
    pub api_url: String,
    /// Tempo limite das requisições, em milissegundos
    pub timeout: u64,
}

impl Config {
    pub fn carregar() -> Result<Self> {
        Self::carregar_de(&Self::caminho_config()?)
    }

    pub fn carregar_de(caminho: &Path) -> Result<Self> {
        if caminho.exists() {
            let conteudo = std::fs::read_to_string(caminho)?;
            let config: Config = serde_json::from_str(&conteudo)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn salvar(&self) -> Result<()> {
        self.salvar_em(&Self::caminho_config()?)
    }

    pub fn salvar_em(&self, caminho: &Path) -> Result<()> {
        if let Some(pai) = caminho.parent() {
            std::fs::create_dir_all(pai)?;
        }

        let conteudo = serde_json::to_string_pretty(self)?;
        std::fs::write(caminho, conteudo)?;
        Ok(())
    }

    /// Restaura os padrões e remove o arquivo de configuração
    pub fn restaurar() -> Result<Self> {
        let caminho = Self::caminho_config()?;
        if caminho.exists() {
            std::fs::remove_file(&caminho)?;
        }
        Ok(Self::default())
    }

    pub fn caminho_config() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| HelpDanfeError::Config("diretório home não encontrado".into()))?;
        Ok(home.join(".config").join("helpdanfe").join("config.json"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: API_URL_PADRAO.into(),
            timeout: TIMEOUT_PADRAO_MS,
        }
    }
}
