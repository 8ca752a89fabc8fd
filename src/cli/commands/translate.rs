use anyhow::{Ok, Result};

use super::super::{
    args::TranslateArgs,
    exit_status::ExitStatus,
    report::{print_verbose, print_warning},
};
use super::helper::{load_context, parse_params, resolver_for};
use crate::core::i18n::placeholder_names;

pub fn translate(cmd: TranslateArgs) -> Result<ExitStatus> {
    let ctx = load_context(&cmd.common)?;
    let resolver = resolver_for(&ctx, &cmd.common);
    let params = parse_params(&cmd.params)?;

    match resolver.lookup(&cmd.key) {
        Some(found) => {
            print_verbose(
                &format!("\"{}\" resolved in {}", cmd.key, found.locale),
                ctx.verbose,
            );
            let missing: Vec<&str> = placeholder_names(found.template)
                .into_iter()
                .filter(|name| !params.contains_key(*name))
                .collect();
            if !missing.is_empty() {
                print_verbose(
                    &format!("no value for placeholder(s): {}", missing.join(", ")),
                    ctx.verbose,
                );
            }
        }
        None => {
            print_warning(&format!(
                "no translation for \"{}\" in {} or {}",
                cmd.key,
                resolver.get_locale(),
                resolver.fallback_locale()
            ));
            if cmd.strict {
                return Ok(ExitStatus::Failure);
            }
        }
    }

    println!("{}", resolver.translate(&cmd.key, &params));
    Ok(ExitStatus::Success)
}
