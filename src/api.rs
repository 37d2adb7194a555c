//! Cliente HTTP da API HelpDanfe.
//!
//! Normaliza o envelope `{success, data, error}` da API em `Result`:
//! `success=false` vira `Consulta`, corpo ilegível em status de erro vira
//! `Conexao`, e o tempo limite configurado vira `Timeout`.

use crate::certificado::Autenticacao;
use crate::config::Config;
use crate::error::{HelpDanfeError, Result};
use crate::models::{Boleto, BoletosNfe, CertificadoInfo, Nfe, Resposta};
use reqwest::multipart;
use serde::de::DeserializeOwned;
use std::time::Duration;

const ERRO_CONEXAO: &str = "Erro de conexão com a API";

/// Operações da API consumidas pelo orquestrador de consultas.
///
/// A implementação real é [`ApiClient`]; os testes usam uma implementação
/// em memória.
#[allow(async_fn_in_trait)]
pub trait ProvedorApi {
    async fn consultar_nfe(&self, chave: &str, auth: &Autenticacao) -> Result<Nfe>;
    async fn consultar_boletos_nfe(&self, chave: &str) -> Result<Vec<Boleto>>;
    async fn consultar_boletos(&self, codigos: &[String]) -> Result<Vec<Boleto>>;
    async fn verificar_certificado(&self) -> bool;
    async fn selecionar_certificado(&self) -> Result<CertificadoInfo>;
    async fn baixar_xml(&self, chave: &str) -> Result<Vec<u8>>;
    async fn baixar_pdf(&self, chave: &str) -> Result<Vec<u8>>;
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout_ms: u64,
}

impl ApiClient {
    pub fn novo(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout))
            .build()
            .map_err(|e| HelpDanfeError::Conexao(format!("{ERRO_CONEXAO}: {e}")))?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            timeout_ms: config.timeout,
        })
    }

    fn url(&self, rota: &str) -> String {
        format!("{}{}", self.base_url, rota)
    }

    fn erro_transporte(&self, erro: reqwest::Error) -> HelpDanfeError {
        if erro.is_timeout() {
            HelpDanfeError::Timeout(self.timeout_ms)
        } else {
            HelpDanfeError::Conexao(ERRO_CONEXAO.into())
        }
    }

    /// Envia a requisição e normaliza o envelope da API
    async fn envelope<T: DeserializeOwned + Default>(
        &self,
        requisicao: reqwest::RequestBuilder,
    ) -> Result<T> {
        let resposta = requisicao
            .send()
            .await
            .map_err(|e| self.erro_transporte(e))?;
        let status = resposta.status();
        let corpo = resposta.text().await.map_err(|e| self.erro_transporte(e))?;

        match serde_json::from_str::<Resposta<T>>(&corpo) {
            Ok(envelope) => Self::extrair(envelope),
            Err(_) if !status.is_success() => Err(HelpDanfeError::Conexao(ERRO_CONEXAO.into())),
            Err(e) => Err(HelpDanfeError::Consulta(format!(
                "resposta inválida da API: {e}"
            ))),
        }
    }

    fn extrair<T>(envelope: Resposta<T>) -> Result<T> {
        if envelope.success {
            envelope
                .data
                .ok_or_else(|| HelpDanfeError::Consulta("resposta da API sem dados".into()))
        } else {
            let mensagem = envelope
                .error
                .or(envelope.message)
                .unwrap_or_else(|| ERRO_CONEXAO.into());
            Err(HelpDanfeError::Consulta(mensagem))
        }
    }

    async fn baixar(&self, rota: String, descricao: &str) -> Result<Vec<u8>> {
        let resposta = self
            .http
            .get(self.url(&rota))
            .send()
            .await
            .map_err(|e| self.erro_transporte(e))?;

        if !resposta.status().is_success() {
            return Err(HelpDanfeError::Conexao(format!(
                "Erro ao baixar {descricao}"
            )));
        }

        let bytes = resposta.bytes().await.map_err(|e| self.erro_transporte(e))?;
        Ok(bytes.to_vec())
    }
}

impl ProvedorApi for ApiClient {
    /// `POST /nfe/consultar` — multipart para certificado em arquivo,
    /// JSON para certificado do sistema
    async fn consultar_nfe(&self, chave: &str, auth: &Autenticacao) -> Result<Nfe> {
        let requisicao = match auth {
            Autenticacao::Arquivo { certificado, senha } => {
                let form = multipart::Form::new()
                    .text("chave_acesso", chave.to_string())
                    .part(
                        "certificado",
                        multipart::Part::bytes(certificado.clone())
                            .file_name("certificado.pfx"),
                    )
                    .text("senha", senha.clone())
                    .text("tipo_certificado", auth.tipo());
                self.http.post(self.url("/nfe/consultar")).multipart(form)
            }
            Autenticacao::Sistema => self.http.post(self.url("/nfe/consultar")).json(
                &serde_json::json!({
                    "chave_acesso": chave,
                    "tipo_certificado": auth.tipo(),
                }),
            ),
        };

        self.envelope(requisicao).await
    }

    /// `GET /nfe/{chave}/boletos`
    async fn consultar_boletos_nfe(&self, chave: &str) -> Result<Vec<Boleto>> {
        let requisicao = self.http.get(self.url(&format!("/nfe/{chave}/boletos")));
        let dados: BoletosNfe = self.envelope(requisicao).await?;
        Ok(dados.boletos)
    }

    /// `POST /boletos/consultar`
    async fn consultar_boletos(&self, codigos: &[String]) -> Result<Vec<Boleto>> {
        let requisicao = self
            .http
            .post(self.url("/boletos/consultar"))
            .json(&serde_json::json!({ "codigos": codigos }));
        self.envelope(requisicao).await
    }

    /// `GET /certificados/verificar` — 2xx indica certificado disponível
    async fn verificar_certificado(&self) -> bool {
        match self.http.get(self.url("/certificados/verificar")).send().await {
            Ok(resposta) => resposta.status().is_success(),
            Err(_) => false,
        }
    }

    /// `POST /certificados/selecionar` — dispara a seleção de certificado
    /// no servidor
    async fn selecionar_certificado(&self) -> Result<CertificadoInfo> {
        let resposta = self
            .http
            .post(self.url("/certificados/selecionar"))
            .json(&serde_json::json!({ "acao": "selecionar_certificado" }))
            .send()
            .await
            .map_err(|e| self.erro_transporte(e))?;

        if !resposta.status().is_success() {
            return Err(HelpDanfeError::Certificado(
                "Erro ao selecionar certificado".into(),
            ));
        }

        resposta.json::<CertificadoInfo>().await.map_err(|_| {
            HelpDanfeError::Certificado("resposta inválida ao selecionar certificado".into())
        })
    }

    async fn baixar_xml(&self, chave: &str) -> Result<Vec<u8>> {
        self.baixar(format!("/nfe/{chave}/xml"), "XML").await
    }

    async fn baixar_pdf(&self, chave: &str) -> Result<Vec<u8>> {
        self.baixar(format!("/nfe/{chave}/pdf"), "PDF").await
    }
}
