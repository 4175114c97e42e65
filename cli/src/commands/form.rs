//! The interactive single-field form, default mode of the tool.
//!
//! The field text persists across submissions: pressing enter on an empty
//! line re-submits whatever is currently in the field, and `:clear` is the
//! explicit reset. One lookup at a time; the prompt blocks while a request
//! is in flight.

use std::io::{BufRead, stdin};

use colored::Colorize;
use console::Term;

use cnpjr_common::config::Config;
use cnpjr_common::ident::{Cnpj, IdentError};
use cnpjr_core::RegistryClient;

use crate::commands::lookup;
use crate::terminal::{colors, print, report};

#[derive(Default)]
struct Form {
    input: String,
}

impl Form {
    fn submit(&self) -> Result<Cnpj, IdentError> {
        self.input.parse()
    }

    fn clear(&mut self) {
        self.input.clear();
    }
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let term = Term::stdout();
    let client = RegistryClient::new(cfg)?;
    let mut form = Form::default();

    print::print_status("Type a CNPJ and press enter to search. Punctuation is fine.");
    print::print_status("':clear' resets the field, ':quit' leaves, enter alone re-runs the search.");

    let mut lines = stdin().lock().lines();
    loop {
        term.write_str(&format!("{} ", "cnpj>".color(colors::PRIMARY).bold()))?;

        // None is EOF: leave like an explicit ':quit'.
        let Some(line) = lines.next().transpose()? else {
            break;
        };

        match line.trim() {
            ":quit" | ":q" => break,
            ":clear" | ":c" => {
                form.clear();
                term.clear_screen()?;
                print::header("company registry lookup", cfg.quiet);
                continue;
            }
            // Keep the field as-is and re-submit it.
            "" => {}
            text => form.input = text.to_string(),
        }

        match form.submit() {
            Ok(cnpj) => lookup::execute(&client, &cnpj, cfg).await,
            Err(reason) => report::rejected(&reason),
        }
    }

    print::end_of_program();
    Ok(())
}
