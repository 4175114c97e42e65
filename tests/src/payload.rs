#![cfg(test)]
use cnpjr_common::record::{CompanyRecord, PartnerId};

/// A trimmed but shape-faithful registry payload.
const PAYLOAD: &str = r#"{
    "razao_social": "BANCO DO BRASIL SA",
    "nome_fantasia": "DIRECAO GERAL",
    "cnpj": "00000000000191",
    "capital_social": 1500000.5,
    "data_inicio_atividade": "1966-08-01",
    "ddd_telefone_1": "6134939002",
    "ddd_telefone_2": "",
    "descricao_tipo_de_logradouro": "QUADRA",
    "logradouro": "SAUN QUADRA 5 LOTE B TORRES I, II E III",
    "numero": "SN",
    "complemento": "ANDAR 1 A 16 SALA 101 A 1601",
    "bairro": "ASA NORTE",
    "municipio": "BRASILIA",
    "uf": "DF",
    "cep": "70040912",
    "email": "secex@bb.com.br",
    "descricao_situacao_cadastral": "ATIVA",
    "data_situacao_cadastral": "2005-11-03",
    "regime_tributario": [
        {"forma_de_tributacao": "LUCRO PRESUMIDO"},
        {"forma_de_tributacao": "LUCRO REAL"}
    ],
    "qsa": [
        {
            "nome_socio": "TARCIANA PAULA GOMES MEDEIROS",
            "qualificacao_socio": "Presidente",
            "cnpj_cpf_do_socio": "***456789**",
            "faixa_etaria": "Entre 41 a 50 anos",
            "data_entrada_sociedade": "2023-01-16"
        },
        {
            "nome_socio": "HOLDING EXEMPLO SA",
            "qualificacao_socio": "Sócio Pessoa Jurídica",
            "cnpj_cpf_do_socio": "11.222.333/0001-81",
            "faixa_etaria": "Não se aplica",
            "data_entrada_sociedade": "2010-05-20"
        },
        {
            "nome_socio": "MARIA DA SILVA",
            "qualificacao_socio": "Diretora",
            "cnpj_cpf_do_socio": "12345678909",
            "faixa_etaria": "Entre 51 a 60 anos",
            "data_entrada_sociedade": "2018-03-12"
        }
    ],
    "cnae_fiscal_descricao": "Bancos múltiplos, com carteira comercial",
    "cnaes_secundarios": [
        {"descricao": "Corretoras de títulos e valores mobiliários"},
        {"descricao": "Administração de cartões de crédito"}
    ]
}"#;

#[test]
fn full_payload_decodes_and_projects() {
    let record: CompanyRecord = serde_json::from_str(PAYLOAD).expect("payload decodes");

    assert_eq!(record.legal_name.as_deref(), Some("BANCO DO BRASIL SA"));
    assert_eq!(record.share_capital, Some(1_500_000.5));
    assert_eq!(record.postal_code.as_deref(), Some("70040912"));

    // Only the last regime entry is current.
    assert_eq!(record.current_tax_regime(), Some("LUCRO REAL"));

    // The empty second phone is dropped from the concatenation.
    assert_eq!(record.phones(), "6134939002");

    assert_eq!(record.locality_line(), "ASA NORTE, BRASILIA - DF");
    assert_eq!(record.secondary_activities.len(), 2);
}

#[test]
fn partner_identifiers_classify_by_digit_count() {
    let record: CompanyRecord = serde_json::from_str(PAYLOAD).expect("payload decodes");
    assert_eq!(record.partners.len(), 3);

    // Masked CPF cleans to 6 digits: no identifier on the report.
    assert_eq!(record.partners[0].registry_kind(), None);

    assert_eq!(
        record.partners[1].registry_kind(),
        Some(PartnerId::Company("11222333000181".into()))
    );
    assert_eq!(
        record.partners[2].registry_kind(),
        Some(PartnerId::Person("12345678909".into()))
    );
}
