mod commands;
mod terminal;

use commands::{CommandLine, Commands, form, lookup};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = commands.config();

    match commands.command {
        Some(Commands::Lookup { cnpj }) => {
            print::header("company registry lookup", cfg.quiet);
            lookup::lookup(&cnpj, &cfg).await
        }
        Some(Commands::Form) | None => {
            print::header("company registry lookup", cfg.quiet);
            form::run(&cfg).await
        }
    }
}
