//! Histórico de consultas.
//!
//! Registro persistente, limitado a 50 entradas, ordenado da mais recente
//! para a mais antiga. Um arquivo ilegível ou corrompido é tratado como
//! histórico vazio, nunca como erro.

use crate::error::{HelpDanfeError, Result};
use chrono::{DateTime, Local, NaiveDate, Utc};
use clap::ValueEnum;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::PathBuf;

/// Número máximo de entradas mantidas
pub const LIMITE_ENTRADAS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TipoConsulta {
    Nfe,
    Boleto,
}

impl std::fmt::Display for TipoConsulta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TipoConsulta::Nfe => write!(f, "NFE"),
            TipoConsulta::Boleto => write!(f, "BOLETO"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entrada {
    /// Identificador derivado do timestamp, estritamente crescente
    pub id: i64,
    pub tipo: TipoConsulta,
    /// Chave de acesso ou lista de códigos consultada
    pub chave: String,
    /// Resumo do resultado da consulta
    pub resultado: String,
    pub data: DateTime<Utc>,
}

pub struct Historico {
    caminho: PathBuf,
}

impl Historico {
    pub fn novo(caminho: PathBuf) -> Self {
        Self { caminho }
    }

    /// Histórico no local padrão (`~/.config/helpdanfe/historico.json`)
    pub fn padrao() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| HelpDanfeError::Config("diretório home não encontrado".into()))?;
        Ok(Self::novo(
            home.join(".config").join("helpdanfe").join("historico.json"),
        ))
    }

    /// Registra uma consulta no topo do histórico e devolve a entrada
    /// criada. Leitura-modificação-escrita sob lock exclusivo: duas
    /// invocações simultâneas do CLI não perdem registros.
    pub fn adicionar(&self, tipo: TipoConsulta, chave: &str, resultado: &str) -> Result<Entrada> {
        if let Some(pai) = self.caminho.parent() {
            std::fs::create_dir_all(pai)?;
        }

        let mut arquivo = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(&self.caminho)?;
        arquivo.lock_exclusive()?;

        let mut conteudo = String::new();
        arquivo.read_to_string(&mut conteudo)?;
        let mut entradas = Self::interpretar(&conteudo);

        let entrada = Entrada {
            id: Self::proximo_id(&entradas),
            tipo,
            chave: chave.to_string(),
            resultado: resultado.to_string(),
            data: Utc::now(),
        };

        entradas.insert(0, entrada.clone());
        entradas.truncate(LIMITE_ENTRADAS);

        let json = serde_json::to_string_pretty(&entradas)?;
        arquivo.seek(SeekFrom::Start(0))?;
        arquivo.set_len(0)?;
        arquivo.write_all(json.as_bytes())?;
        arquivo.unlock()?;

        Ok(entrada)
    }

    /// Entradas na ordem armazenada (mais recente primeiro)
    pub fn listar(&self) -> Vec<Entrada> {
        match std::fs::read_to_string(&self.caminho) {
            Ok(conteudo) => Self::interpretar(&conteudo),
            Err(_) => Vec::new(),
        }
    }

    /// Filtra por data do calendário (hora do dia ignorada) e/ou tipo;
    /// um filtro ausente aceita qualquer entrada
    pub fn filtrar(&self, data: Option<NaiveDate>, tipo: Option<TipoConsulta>) -> Vec<Entrada> {
        self.listar()
            .into_iter()
            .filter(|entrada| {
                data.is_none_or(|d| entrada.data.with_timezone(&Local).date_naive() == d)
            })
            .filter(|entrada| tipo.is_none_or(|t| entrada.tipo == t))
            .collect()
    }

    /// Remove todo o histórico
    pub fn limpar(&self) -> Result<()> {
        if self.caminho.exists() {
            std::fs::remove_file(&self.caminho)?;
        }
        Ok(())
    }

    fn interpretar(conteudo: &str) -> Vec<Entrada> {
        serde_json::from_str(conteudo).unwrap_or_default()
    }

    /// Id derivado do relógio; se duas inserções caírem no mesmo
    /// milissegundo, avança a partir do maior id armazenado
    fn proximo_id(entradas: &[Entrada]) -> i64 {
        let agora = Utc::now().timestamp_millis();
        match entradas.iter().map(|e| e.id).max() {
            Some(maior) if agora <= maior => maior + 1,
            _ => agora,
        }
    }
}
