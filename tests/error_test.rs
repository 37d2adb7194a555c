//! Testes de tratamento de erros

use helpdanfe::certificado::Autenticacao;
use helpdanfe::error::HelpDanfeError;
use std::path::Path;

/// Certificado inexistente no disco vira erro de certificado, não de E/S
#[test]
fn test_certificado_inexistente() {
    let resultado = Autenticacao::do_arquivo(Path::new("/nao/existe/cert.pfx"), "senha");

    assert!(matches!(
        resultado,
        Err(HelpDanfeError::Certificado(_))
    ));
}

/// As mensagens de erro são descritivas e em português
#[test]
fn test_error_display() {
    let erros = vec![
        HelpDanfeError::Validacao("A chave de acesso deve ter exatamente 44 dígitos".into()),
        HelpDanfeError::Certificado("Erro ao selecionar certificado".into()),
        HelpDanfeError::Consulta("Erro ao consultar NFe".into()),
        HelpDanfeError::Conexao("Erro de conexão com a API".into()),
        HelpDanfeError::Config("diretório home não encontrado".into()),
    ];

    for erro in erros {
        let display = format!("{}", erro);
        assert!(!display.is_empty());
    }

    assert_eq!(
        format!("{}", HelpDanfeError::Timeout(30_000)),
        "Tempo limite de 30000ms excedido"
    );
}
