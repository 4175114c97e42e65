//! # Registry payload model
//!
//! The decoded shape of a successful registry response, plus the projection
//! rules the report is built from. Every field is optional on the wire and
//! list fields may arrive as an explicit JSON `null`, so decoding never
//! fails on a sparse record.

use serde::{Deserialize, Deserializer};

/// Accepts `null` where the registry sometimes sends it instead of `[]`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One entry of the company's tax regime history.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxRegime {
    #[serde(rename = "forma_de_tributacao")]
    pub taxation_form: Option<String>,
}

/// One partner/shareholder entry of the QSA roster.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Partner {
    #[serde(rename = "nome_socio")]
    pub name: Option<String>,
    #[serde(rename = "qualificacao_socio")]
    pub role: Option<String>,
    /// Either a 14-digit company number or an 11-digit person number;
    /// which one is decided purely by digit count, see [`Partner::registry_kind`].
    #[serde(rename = "cnpj_cpf_do_socio")]
    pub registry_id: Option<String>,
    #[serde(rename = "faixa_etaria")]
    pub age_bracket: Option<String>,
    #[serde(rename = "data_entrada_sociedade")]
    pub entry_date: Option<String>,
}

/// The partner identifier, classified by digit count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartnerId {
    /// 14 cleaned digits: another company.
    Company(String),
    /// 11 cleaned digits: a natural person.
    Person(String),
}

impl Partner {
    /// Cleans the partner identifier and classifies it.
    ///
    /// Any digit count other than 14 or 11 yields `None` and the identifier
    /// is left off the report.
    pub fn registry_kind(&self) -> Option<PartnerId> {
        let digits = crate::ident::strip_non_digits(self.registry_id.as_deref().unwrap_or(""));
        match digits.len() {
            crate::ident::CNPJ_LEN => Some(PartnerId::Company(digits)),
            crate::ident::CPF_LEN => Some(PartnerId::Person(digits)),
            _ => None,
        }
    }
}

/// A secondary economic activity (CNAE) entry.
#[derive(Debug, Clone, Deserialize)]
pub struct SideActivity {
    #[serde(rename = "descricao")]
    pub description: Option<String>,
}

/// A successful registry response.
///
/// Owned by the current request; nothing here outlives the render.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyRecord {
    #[serde(rename = "razao_social")]
    pub legal_name: Option<String>,
    #[serde(rename = "nome_fantasia")]
    pub trade_name: Option<String>,
    pub cnpj: Option<String>,
    #[serde(rename = "capital_social")]
    pub share_capital: Option<f64>,
    #[serde(rename = "data_inicio_atividade")]
    pub opening_date: Option<String>,
    #[serde(rename = "ddd_telefone_1")]
    pub phone_1: Option<String>,
    #[serde(rename = "ddd_telefone_2")]
    pub phone_2: Option<String>,
    #[serde(rename = "descricao_tipo_de_logradouro")]
    pub street_type: Option<String>,
    #[serde(rename = "logradouro")]
    pub street: Option<String>,
    #[serde(rename = "numero")]
    pub number: Option<String>,
    #[serde(rename = "complemento")]
    pub complement: Option<String>,
    #[serde(rename = "bairro")]
    pub neighborhood: Option<String>,
    #[serde(rename = "municipio")]
    pub city: Option<String>,
    #[serde(rename = "uf")]
    pub state: Option<String>,
    #[serde(rename = "cep")]
    pub postal_code: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "descricao_situacao_cadastral")]
    pub registration_status: Option<String>,
    #[serde(rename = "data_situacao_cadastral")]
    pub status_date: Option<String>,
    #[serde(rename = "regime_tributario", default, deserialize_with = "null_as_default")]
    pub tax_regimes: Vec<TaxRegime>,
    #[serde(rename = "qsa", default, deserialize_with = "null_as_default")]
    pub partners: Vec<Partner>,
    #[serde(rename = "cnae_fiscal_descricao")]
    pub primary_activity: Option<String>,
    #[serde(rename = "cnaes_secundarios", default, deserialize_with = "null_as_default")]
    pub secondary_activities: Vec<SideActivity>,
}

impl CompanyRecord {
    /// The regime currently in force.
    ///
    /// The registry sends the regime history in order; only the last entry
    /// is current, the earlier ones are intentionally ignored.
    pub fn current_tax_regime(&self) -> Option<&str> {
        self.tax_regimes
            .last()
            .and_then(|regime| regime.taxation_form.as_deref())
    }

    /// First address line: street type, street, number, complement.
    pub fn street_line(&self) -> String {
        let opt = |field: &Option<String>| field.clone().unwrap_or_default();
        format!(
            "{} {}, {}, {}",
            opt(&self.street_type),
            opt(&self.street),
            opt(&self.number),
            opt(&self.complement)
        )
        .trim()
        .trim_end_matches(',')
        .to_string()
    }

    /// Second address line: neighborhood, city - state.
    pub fn locality_line(&self) -> String {
        let opt = |field: &Option<String>| field.clone().unwrap_or_default();
        format!(
            "{}, {} - {}",
            opt(&self.neighborhood),
            opt(&self.city),
            opt(&self.state)
        )
    }

    /// Up to two phone numbers, space-separated, skipping blanks.
    pub fn phones(&self) -> String {
        [&self.phone_1, &self.phone_2]
            .into_iter()
            .filter_map(|phone| phone.as_deref())
            .filter(|phone| !phone.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
