use cnpjr_common::config::Config;
use cnpjr_common::ident::Cnpj;
use cnpjr_core::RegistryClient;

use crate::terminal::{report, spinner};

/// One-shot lookup: validate, fetch, render.
pub async fn lookup(raw: &str, cfg: &Config) -> anyhow::Result<()> {
    let cnpj: Cnpj = match raw.parse() {
        Ok(cnpj) => cnpj,
        Err(reason) => {
            report::rejected(&reason);
            return Ok(());
        }
    };

    let client = RegistryClient::new(cfg)?;
    execute(&client, &cnpj, cfg).await;
    Ok(())
}

/// Runs a single validated lookup under a spinner and renders the outcome.
///
/// Blocks until the registry answers or the configured timeout fires; the
/// caller owns pacing, there is never more than one request in flight.
pub async fn execute(client: &RegistryClient, cnpj: &Cnpj, cfg: &Config) {
    let pb = spinner::start(format!("Looking up {} in the registry...", cnpj.formatted()));
    let outcome = client.lookup(cnpj).await;
    pb.finish_and_clear();

    match outcome {
        Ok(record) => report::company(&record, cfg),
        Err(failure) => report::lookup_failed(&failure),
    }
}
