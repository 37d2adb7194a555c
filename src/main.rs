use chrono::{DateTime, Local, NaiveDate, Utc};
use clap::Parser;
use helpdanfe::api::ApiClient;
use helpdanfe::certificado::Autenticacao;
use helpdanfe::cli::{Cli, Commands, FormatoDownload};
use helpdanfe::config::Config;
use helpdanfe::consulta::Sessao;
use helpdanfe::error::{HelpDanfeError, Result};
use helpdanfe::historico::Historico;
use helpdanfe::models::{Boleto, Nfe};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    iniciar_tracing(cli.verbose);

    let config = Config::carregar()?;

    match cli.command {
        Commands::Nfe { chave, certificado, senha } => {
            println!("📄 helpdanfe - Consulta de NFe\n");

            let api = ApiClient::novo(&config)?;
            let mut sessao = Sessao::nova(api, Historico::padrao()?);

            let auth = match certificado {
                Some(caminho) => Autenticacao::do_arquivo(&caminho, &senha)?,
                None => Autenticacao::Sistema,
            };

            if matches!(auth, Autenticacao::Sistema) {
                println!("[1/2] Verificando certificado do sistema...");
                if sessao.verificar_certificado().await {
                    println!("✔ Certificado detectado automaticamente\n");
                } else {
                    println!("- Nenhum certificado detectado; a seleção será solicitada\n");
                }
            } else {
                println!("[1/2] Usando certificado de arquivo\n");
            }

            println!("[2/2] Consultando NFe...");
            let nfe = sessao.consultar_nfe(&chave, &auth).await?;
            println!("✔ Consulta concluída\n");

            imprimir_nfe(&nfe);

            let boletos = sessao.boletos_atuais();
            if boletos.is_empty() {
                println!("\nNenhum boleto encontrado para esta NFe.");
            } else {
                println!("\nBoletos vinculados:");
                imprimir_boletos(boletos);
            }

            println!("\n✅ Consulta registrada no histórico");
        }

        Commands::Boletos { codigos } => {
            println!("🧾 helpdanfe - Consulta de boletos\n");

            let api = ApiClient::novo(&config)?;
            let mut sessao = Sessao::nova(api, Historico::padrao()?);

            println!("[1/1] Consultando boletos...");
            let boletos = sessao.consultar_boletos(&codigos).await?;
            println!("✔ {} boletos consultados\n", boletos.len());

            if boletos.is_empty() {
                println!("Nenhum boleto encontrado.");
            } else {
                imprimir_boletos(&boletos);
            }
        }

        Commands::Baixar { chave, formato, saida } => {
            println!("📥 helpdanfe - Download\n");

            let api = ApiClient::novo(&config)?;
            let sessao = Sessao::nova(api, Historico::padrao()?);

            let (bytes, nome) = match formato {
                FormatoDownload::Xml => {
                    let bytes = sessao.baixar_xml(&chave).await?;
                    (bytes, format!("nfe_{}.xml", chave))
                }
                FormatoDownload::Pdf => {
                    let bytes = sessao.baixar_pdf(&chave).await?;
                    (bytes, format!("danfe_{}.pdf", chave))
                }
            };

            let destino = saida.unwrap_or_else(|| PathBuf::from(".")).join(nome);
            std::fs::write(&destino, &bytes)?;
            println!("✔ Arquivo salvo: {}", destino.display());
        }

        Commands::Historico { data, tipo, limpar } => {
            let historico = Historico::padrao()?;

            if limpar {
                historico.limpar()?;
                println!("✔ Histórico removido");
                return Ok(());
            }

            let filtro_data = data
                .map(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d"))
                .transpose()
                .map_err(|_| {
                    HelpDanfeError::Validacao("Data inválida, use o formato AAAA-MM-DD".into())
                })?;

            let entradas = historico.filtrar(filtro_data, tipo);

            if entradas.is_empty() {
                println!("Nenhum histórico disponível.");
                return Ok(());
            }

            for entrada in &entradas {
                println!(
                    "{} [{}]",
                    entrada.tipo,
                    formatar_data_hora(entrada.data)
                );
                println!("  Chave/Código: {}", entrada.chave);
                println!("  Resultado: {}", entrada.resultado);
            }
        }

        Commands::Config { api_url, timeout, mostrar, restaurar } => {
            let mut config = config;

            if restaurar {
                config = Config::restaurar()?;
                println!("✔ Configurações restauradas");
            }

            if api_url.is_some() || timeout.is_some() {
                if let Some(url) = api_url {
                    config.api_url = url;
                }
                if let Some(segundos) = timeout {
                    config.timeout = segundos * 1000;
                }
                config.salvar()?;
                println!("✔ Configurações salvas");
            }

            if mostrar {
                println!("Configuração:");
                println!("  URL da API: {}", config.api_url);
                println!("  Timeout: {}s", config.timeout / 1000);
                println!(
                    "  Arquivo: {}",
                    Config::caminho_config()?.display()
                );
            }
        }
    }

    Ok(())
}

fn iniciar_tracing(verbose: bool) {
    let filtro = if verbose { "helpdanfe=debug" } else { "helpdanfe=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filtro)),
        )
        .with_target(false)
        .init();
}

fn imprimir_nfe(nfe: &Nfe) {
    println!("Informações Básicas  [{}]", nfe.status);
    println!("  Chave de Acesso: {}", nfe.chave_acesso);
    println!("  Número: {}  Série: {}", nfe.numero, nfe.serie);
    println!("  Data de Emissão: {}", formatar_data(nfe.data_emissao));
    println!("  Ambiente: {}  UF: {}", nfe.ambiente, nfe.uf);
    println!("\nEmitente");
    println!("  CNPJ: {}", nfe.emitente_cnpj);
    println!("  Nome: {}", nfe.emitente_nome);
    println!("  IE: {}", nfe.emitente_ie);
    println!("\nDestinatário");
    println!("  CNPJ: {}", nfe.destinatario_cnpj);
    println!("  Nome: {}", nfe.destinatario_nome);
    println!("  IE: {}", nfe.destinatario_ie);
    println!("\nValores");
    println!("  Valor Total: R$ {}", formatar_valor(nfe.valor_total));
    println!("  Valor dos Produtos: R$ {}", formatar_valor(nfe.valor_produtos));
    println!("  Valor dos Impostos: R$ {}", formatar_valor(nfe.valor_impostos));
}

fn imprimir_boletos(boletos: &[Boleto]) {
    for boleto in boletos {
        println!(
            "  {} nº {} - R$ {} - vencimento {} - {}",
            boleto.banco,
            boleto.numero,
            formatar_valor(boleto.valor),
            formatar_data(boleto.vencimento),
            boleto.status
        );
        if !boleto.codigo_barras.is_empty() {
            println!("    Código de barras: {}", boleto.codigo_barras);
        }
    }
}

fn formatar_data(data: Option<DateTime<Utc>>) -> String {
    match data {
        Some(d) => d.with_timezone(&Local).format("%d/%m/%Y").to_string(),
        None => "-".into(),
    }
}

fn formatar_data_hora(data: DateTime<Utc>) -> String {
    data.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string()
}

fn formatar_valor(valor: f64) -> String {
    format!("{:.2}", valor).replace('.', ",")
}
