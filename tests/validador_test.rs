//! Testes de validação de chaves e códigos

use helpdanfe::validador::{
    normalizar_chave, normalizar_codigos, validar_chave_acesso, validar_codigo_barras,
    validar_linha_digitavel,
};

const CHAVE_VALIDA: &str = "35200114200166000187550010000000046550000015";

/// Chave de acesso precisa ter exatamente 44 dígitos
#[test]
fn test_chave_acesso() {
    assert!(validar_chave_acesso(CHAVE_VALIDA));

    assert!(!validar_chave_acesso(""));
    assert!(!validar_chave_acesso(&CHAVE_VALIDA[..43]));
    assert!(!validar_chave_acesso(&format!("{CHAVE_VALIDA}0")));
    // Com letra no meio, nem o comprimento certo salva
    assert!(!validar_chave_acesso(
        "3520011420016600018755001000000004655000001X"
    ));
}

/// A normalização descarta tudo que não é dígito
#[test]
fn test_normalizar_chave() {
    assert_eq!(normalizar_chave("12ab34 56-78"), "12345678");
    assert_eq!(normalizar_chave(""), "");

    // Chave digitada com separadores continua válida após normalizar
    let com_espacos = "3520 0114 2001 6600 0187 5500 1000 0000 0465 5000 0015";
    assert!(validar_chave_acesso(&normalizar_chave(com_espacos)));
}

/// Trim em cada código e descarte dos vazios, preservando a ordem
#[test]
fn test_normalizar_codigos() {
    let entrada = vec![
        "AB12".to_string(),
        "".to_string(),
        "  ".to_string(),
        " CD34 ".to_string(),
    ];

    assert_eq!(normalizar_codigos(&entrada), vec!["AB12", "CD34"]);
    assert!(normalizar_codigos(&[]).is_empty());
    assert!(normalizar_codigos(&["   ".to_string()]).is_empty());
}

/// Código de barras: 44 ou 47 dígitos, espaços ignorados
#[test]
fn test_codigo_barras() {
    let codigo_44 = "0".repeat(44);
    let codigo_47 = "1".repeat(47);

    assert!(validar_codigo_barras(&codigo_44));
    assert!(validar_codigo_barras(&codigo_47));
    assert!(validar_codigo_barras(&format!(
        "{} {}",
        &codigo_44[..22],
        &codigo_44[22..]
    )));

    assert!(!validar_codigo_barras(&"0".repeat(45)));
    assert!(!validar_codigo_barras(&format!("{}X", &codigo_44[..43])));
}

/// Linha digitável: 47 dígitos, espaços e pontos ignorados
#[test]
fn test_linha_digitavel() {
    let linha = "2".repeat(47);

    assert!(validar_linha_digitavel(&linha));
    assert!(validar_linha_digitavel(&format!(
        "{}.{} {}",
        &linha[..5],
        &linha[5..10],
        &linha[10..]
    )));

    assert!(!validar_linha_digitavel(&"2".repeat(44)));
    assert!(!validar_linha_digitavel(""));
}
