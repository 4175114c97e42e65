//! Projection of registry records into colored report lines.

use colored::*;
use cnpjr_common::ident::{format_cep, format_cnpj, format_cpf};
use cnpjr_common::record::{CompanyRecord, Partner, PartnerId};

use crate::terminal::colors;
use crate::terminal::print::Detail;

/// `R$ 1,500,000.50`: two decimals, comma thousands separators.
pub fn currency_brl(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("R$ {sign}{grouped}.{frac_part}")
}

/// A present value, or a dimmed "N/A" so the block keeps its shape.
fn field(value: Option<&str>) -> ColoredString {
    match value {
        Some(v) if !v.trim().is_empty() => v.color(colors::VALUE),
        _ => "N/A".color(colors::MISSING).italic(),
    }
}

fn owned_field(value: String) -> ColoredString {
    field(Some(value.as_str()))
}

/// The two-column company-info block, left and right.
pub fn company_columns(record: &CompanyRecord) -> (Vec<Detail>, Vec<Detail>) {
    let capital = record.share_capital.map(currency_brl);

    let left: Vec<Detail> = vec![
        ("Legal name".into(), field(record.legal_name.as_deref())),
        ("Trade name".into(), field(record.trade_name.as_deref())),
        (
            "CNPJ".into(),
            field(record.cnpj.as_deref().map(format_cnpj).as_deref()),
        ),
        ("Share capital".into(), field(capital.as_deref())),
        ("Opened".into(), field(record.opening_date.as_deref())),
        ("Phones".into(), owned_field(record.phones())),
    ];

    let right: Vec<Detail> = vec![
        ("Address".into(), owned_field(record.street_line())),
        ("Location".into(), owned_field(record.locality_line())),
        (
            "CEP".into(),
            field(record.postal_code.as_deref().map(format_cep).as_deref()),
        ),
        ("E-mail".into(), field(record.email.as_deref())),
        ("Status".into(), field(record.registration_status.as_deref())),
        ("Status date".into(), field(record.status_date.as_deref())),
        ("Tax regime".into(), field(record.current_tax_regime())),
    ];

    (left, right)
}

/// Branch lines for one partner; the name goes on the tree head.
pub fn partner_details(partner: &Partner) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![(
        "Role".into(),
        field(partner.role.as_deref()),
    )];

    // Identifier line only when the digit count pins the kind down.
    match partner.registry_kind() {
        Some(PartnerId::Company(digits)) => {
            details.push(("CNPJ".into(), format_cnpj(&digits).color(colors::VALUE)));
        }
        Some(PartnerId::Person(digits)) => {
            details.push(("CPF".into(), format_cpf(&digits).color(colors::VALUE)));
        }
        None => {}
    }

    details.push(("Age bracket".into(), field(partner.age_bracket.as_deref())));
    details.push(("Joined".into(), field(partner.entry_date.as_deref())));
    details
}
