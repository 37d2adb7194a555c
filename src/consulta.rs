//! Orquestrador de consultas.
//!
//! A [`Sessao`] concentra o estado de uma sessão de uso (resultado atual,
//! certificado selecionado) e coordena validação, chamadas à API e o
//! registro no histórico. Toda chamada bem-sucedida iniciada pelo usuário
//! gera exatamente um registro; falhas não registram nada.

use crate::api::ProvedorApi;
use crate::certificado::Autenticacao;
use crate::error::{HelpDanfeError, Result};
use crate::historico::{Historico, TipoConsulta};
use crate::models::{Boleto, CertificadoInfo, Nfe};
use crate::validador::{normalizar_chave, normalizar_codigos, validar_chave_acesso};
use tracing::{debug, warn};

pub struct Sessao<P: ProvedorApi> {
    api: P,
    historico: Historico,
    nfe_atual: Option<Nfe>,
    boletos_atuais: Vec<Boleto>,
    certificado_selecionado: Option<CertificadoInfo>,
}

impl<P: ProvedorApi> Sessao<P> {
    pub fn nova(api: P, historico: Historico) -> Self {
        Self {
            api,
            historico,
            nfe_atual: None,
            boletos_atuais: Vec::new(),
            certificado_selecionado: None,
        }
    }

    /// Consulta uma NFe pela chave de acesso.
    ///
    /// A chave é normalizada (somente dígitos) e precisa ter exatamente
    /// 44 dígitos; caso contrário a chamada falha antes de qualquer
    /// requisição. Com autenticação pelo sistema, um certificado é
    /// selecionado na primeira consulta e reutilizado nas seguintes.
    /// Em caso de sucesso os boletos vinculados são buscados em seguida
    /// (uma falha aí é apenas registrada em log) e a consulta entra no
    /// histórico.
    pub async fn consultar_nfe(&mut self, chave: &str, auth: &Autenticacao) -> Result<Nfe> {
        let chave = self.chave_valida(chave)?;

        if matches!(auth, Autenticacao::Sistema) && self.certificado_selecionado.is_none() {
            match self.api.selecionar_certificado().await {
                Ok(info) => {
                    debug!(subject = %info.subject, "certificado do sistema selecionado");
                    self.certificado_selecionado = Some(info);
                }
                Err(e) => {
                    return Err(HelpDanfeError::Certificado(format!(
                        "Erro ao acessar certificado do sistema: {e}"
                    )));
                }
            }
        }

        let nfe = self.api.consultar_nfe(&chave, auth).await?;
        self.nfe_atual = Some(nfe.clone());

        // Busca secundária: uma falha aqui não invalida a consulta
        match self.api.consultar_boletos_nfe(&chave).await {
            Ok(boletos) => self.boletos_atuais = boletos,
            Err(e) => {
                self.boletos_atuais.clear();
                warn!(chave = %chave, erro = %e, "falha ao consultar boletos vinculados");
            }
        }

        self.historico
            .adicionar(TipoConsulta::Nfe, &chave, "Consulta realizada com sucesso")?;

        Ok(nfe)
    }

    /// Consulta boletos por uma lista de códigos. Códigos vazios são
    /// descartados após o trim; uma lista efetivamente vazia falha antes
    /// de qualquer requisição.
    pub async fn consultar_boletos(&mut self, codigos: &[String]) -> Result<Vec<Boleto>> {
        let efetivos = normalizar_codigos(codigos);
        if efetivos.is_empty() {
            return Err(HelpDanfeError::Validacao(
                "Digite pelo menos um código de boleto".into(),
            ));
        }

        let boletos = self.api.consultar_boletos(&efetivos).await?;

        self.historico.adicionar(
            TipoConsulta::Boleto,
            &efetivos.join(", "),
            &format!("{} boletos consultados", boletos.len()),
        )?;

        Ok(boletos)
    }

    /// Baixa o XML da NFe; o chamador decide onde gravar
    /// (`nfe_{chave}.xml` por convenção)
    pub async fn baixar_xml(&self, chave: &str) -> Result<Vec<u8>> {
        let chave = self.chave_valida(chave)?;
        self.api.baixar_xml(&chave).await
    }

    /// Baixa o DANFE em PDF (`danfe_{chave}.pdf` por convenção)
    pub async fn baixar_pdf(&self, chave: &str) -> Result<Vec<u8>> {
        let chave = self.chave_valida(chave)?;
        self.api.baixar_pdf(&chave).await
    }

    /// Verifica se o ambiente tem um certificado disponível
    pub async fn verificar_certificado(&self) -> bool {
        self.api.verificar_certificado().await
    }

    /// Resultado da última consulta de NFe bem-sucedida
    pub fn nfe_atual(&self) -> Option<&Nfe> {
        self.nfe_atual.as_ref()
    }

    /// Boletos vinculados à última NFe consultada
    pub fn boletos_atuais(&self) -> &[Boleto] {
        &self.boletos_atuais
    }

    pub fn certificado_selecionado(&self) -> Option<&CertificadoInfo> {
        self.certificado_selecionado.as_ref()
    }

    /// Descarta o resultado atual e o certificado selecionado
    /// (equivalente a limpar o formulário)
    pub fn limpar(&mut self) {
        self.nfe_atual = None;
        self.boletos_atuais.clear();
        self.certificado_selecionado = None;
    }

    fn chave_valida(&self, chave: &str) -> Result<String> {
        let chave = normalizar_chave(chave);
        if !validar_chave_acesso(&chave) {
            return Err(HelpDanfeError::Validacao(
                "A chave de acesso deve ter exatamente 44 dígitos".into(),
            ));
        }
        Ok(chave)
    }
}
