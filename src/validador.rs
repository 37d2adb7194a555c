//! Validação de chaves e códigos no padrão da SEFAZ/FEBRABAN.

/// Remove tudo que não for dígito (mesma normalização aplicada ao campo de
/// entrada da chave de acesso)
pub fn normalizar_chave(entrada: &str) -> String {
    entrada.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Chave de acesso de NFe: exatamente 44 dígitos
pub fn validar_chave_acesso(chave: &str) -> bool {
    chave.len() == 44 && chave.chars().all(|c| c.is_ascii_digit())
}

/// Remove espaços em branco de cada código e descarta os vazios,
/// preservando a ordem
pub fn normalizar_codigos(codigos: &[String]) -> Vec<String> {
    codigos
        .iter()
        .map(|codigo| codigo.trim().to_string())
        .filter(|codigo| !codigo.is_empty())
        .collect()
}

/// Código de barras de boleto: 44 ou 47 dígitos (padrão FEBRABAN)
pub fn validar_codigo_barras(codigo: &str) -> bool {
    let codigo: String = codigo.chars().filter(|c| !c.is_whitespace()).collect();
    (codigo.len() == 44 || codigo.len() == 47) && codigo.chars().all(|c| c.is_ascii_digit())
}

/// Linha digitável: 47 dígitos, ignorando espaços e pontos
pub fn validar_linha_digitavel(linha: &str) -> bool {
    let linha: String = linha
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect();
    linha.len() == 47 && linha.chars().all(|c| c.is_ascii_digit())
}
