#![cfg(test)]
use std::time::Duration;

use cnpjr_common::config::Config;
use cnpjr_common::error::LookupError;
use cnpjr_common::ident::{Cnpj, IdentError};
use cnpjr_core::RegistryClient;

/// Punctuated input cleans to 14 digits and becomes eligible for lookup.
#[test]
fn punctuated_cnpj_is_accepted() {
    let cnpj: Cnpj = "11.222.333/0001-81".parse().expect("valid CNPJ");
    assert_eq!(cnpj.as_digits(), "11222333000181");
}

/// Too few digits is rejected locally; no client is ever involved.
#[test]
fn short_input_is_rejected_before_any_network_call() {
    let result = "123".parse::<Cnpj>();
    assert_eq!(result, Err(IdentError::WrongLength(3)));

    let result = "".parse::<Cnpj>();
    assert_eq!(result, Err(IdentError::Empty));
}

/// The status taxonomy is exhaustive over the categories the registry uses.
#[test]
fn status_codes_map_to_distinct_categories() {
    assert_eq!(LookupError::from_status(200), None);
    assert_eq!(LookupError::from_status(404), Some(LookupError::NotFound));
    assert_eq!(LookupError::from_status(429), Some(LookupError::RateLimited));
    assert_eq!(LookupError::from_status(502), Some(LookupError::Http(502)));

    // Rate limiting must stay distinguishable from generic HTTP failures.
    assert_ne!(
        LookupError::from_status(429),
        LookupError::from_status(500)
    );
}

/// The client hits the documented endpoint template.
#[test]
fn client_builds_the_registry_url() {
    let client = RegistryClient::new(&Config::default()).expect("client builds");
    let cnpj: Cnpj = "11222333000181".parse().expect("valid CNPJ");

    assert_eq!(
        client.lookup_url(&cnpj),
        "https://brasilapi.com.br/api/cnpj/v1/11222333000181"
    );
}

/// An unreachable registry surfaces as a transport failure, not a panic.
#[tokio::test]
async fn unreachable_registry_is_a_transport_error() {
    let cfg = Config {
        // A port nothing listens on; keep the timeout tight so a dropped
        // (rather than refused) connection cannot stall the suite.
        base_url: "http://127.0.0.1:59123/api/cnpj/v1".into(),
        timeout: Duration::from_secs(1),
        ..Config::default()
    };
    let client = RegistryClient::new(&cfg).expect("client builds");
    let cnpj: Cnpj = "11222333000181".parse().expect("valid CNPJ");

    let outcome = client.lookup(&cnpj).await;
    assert!(
        matches!(outcome, Err(LookupError::Transport(_))),
        "expected a transport error, got {outcome:?}"
    );
}
