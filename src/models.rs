//! Modelos de dados retornados pela API HelpDanfe.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope padrão de sucesso/erro da API
#[derive(Debug, Clone, Deserialize)]
pub struct Resposta<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Nota Fiscal Eletrônica
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Nfe {
    pub chave_acesso: String,
    pub numero: String,
    pub serie: String,
    pub data_emissao: Option<DateTime<Utc>>,
    pub data_autorizacao: Option<DateTime<Utc>>,
    pub status: String,
    pub ambiente: String,
    pub uf: String,

    // Dados do emitente
    pub emitente_cnpj: String,
    pub emitente_nome: String,
    pub emitente_ie: String,

    // Dados do destinatário
    pub destinatario_cnpj: String,
    pub destinatario_nome: String,
    pub destinatario_ie: String,

    // Valores
    pub valor_total: f64,
    pub valor_produtos: f64,
    pub valor_impostos: f64,
}

/// Boleto bancário vinculado a uma NFe ou consultado por código
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Boleto {
    pub banco: String,
    pub numero: String,
    pub codigo_barras: String,
    pub linha_digitavel: String,
    pub valor: f64,
    pub vencimento: Option<DateTime<Utc>>,
    pub status: String,
}

/// Corpo de `GET /nfe/{chave}/boletos`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BoletosNfe {
    pub boletos: Vec<Boleto>,
}

/// Certificado digital detectado ou selecionado pelo servidor
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CertificadoInfo {
    pub subject: String,
    pub issuer: String,
    pub serial_number: String,
    pub not_before: String,
    pub not_after: String,
    pub valid: bool,
}
