//! Renders lookup outcomes: the full company report on success, a
//! category-specific message otherwise. Never mutates the record and never
//! escalates a failed lookup into a program failure.

use cnpjr_common::config::Config;
use cnpjr_common::error::LookupError;
use cnpjr_common::ident::IdentError;
use cnpjr_common::record::CompanyRecord;
use cnpjr_common::{error, success, warn};

use crate::mprint;
use crate::terminal::{format, print};

/// Full report for a successful lookup.
pub fn company(record: &CompanyRecord, cfg: &Config) {
    success!("Company data retrieved from the registry");

    print::header("company information", cfg.quiet);
    let (left, right) = format::company_columns(record);
    print::two_column(&left, &right);

    partners(record, cfg);
    activities(record, cfg);

    print::end_of_program();
}

fn partners(record: &CompanyRecord, cfg: &Config) {
    print::header("partners", cfg.quiet);

    if record.partners.is_empty() {
        print::print_status("No partners on file for this company.");
        return;
    }

    for (idx, partner) in record.partners.iter().enumerate() {
        let name = partner.name.as_deref().unwrap_or("Unnamed partner");
        print::tree_head(idx, name);
        print::as_tree_one_level(format::partner_details(partner));

        if idx + 1 != record.partners.len() {
            mprint!();
        }
    }
}

fn activities(record: &CompanyRecord, cfg: &Config) {
    print::header("activities", cfg.quiet);

    let key_width = "Secondary".chars().count();
    print::aligned_line(
        "Primary",
        record
            .primary_activity
            .clone()
            .unwrap_or_else(|| "N/A".to_string()),
        key_width,
    );

    for activity in &record.secondary_activities {
        if let Some(description) = activity.description.as_deref() {
            print::aligned_line("Secondary", description.to_string(), key_width);
        }
    }
}

/// Local validation failure: the lookup was rejected before any network call.
pub fn rejected(reason: &IdentError) {
    error!("{reason}");
}

/// A lookup that reached (or tried to reach) the registry and failed.
///
/// Rate limiting is a warning, not an error: the caller is expected to wait
/// and resubmit. Everything else renders at error severity.
pub fn lookup_failed(failure: &LookupError) {
    match failure {
        LookupError::RateLimited => warn!("{failure}"),
        other => error!("{other}"),
    }
}
