use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{init::init, locales::locales, quote::quote, translate::translate},
    exit_status::ExitStatus,
};

/// Dispatch a parsed command line to its handler.
///
/// `serve` is handled by the binary before this is called, since it owns
/// its own runtime.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Quote(cmd)) => quote(cmd),
        Some(Command::Translate(cmd)) => translate(cmd),
        Some(Command::Locales(cmd)) => locales(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            bail!("Serve command should be handled before run()")
        }
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
