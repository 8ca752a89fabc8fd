use anyhow::{Context, Ok, Result};
use serde::Serialize;

use super::super::{args::LocalesArgs, exit_status::ExitStatus, report::print_locales};
use super::helper::{load_context, resolver_for};
use crate::core::i18n::LocaleInfo;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LocaleEntry {
    #[serde(flatten)]
    info: LocaleInfo,
    key_count: usize,
    current: bool,
    fallback: bool,
}

pub fn locales(cmd: LocalesArgs) -> Result<ExitStatus> {
    let ctx = load_context(&cmd.common)?;
    let resolver = resolver_for(&ctx, &cmd.common);

    let counted: Vec<(LocaleInfo, usize)> = resolver
        .available_locales()
        .into_iter()
        .map(|info| {
            let key_count = ctx
                .catalog
                .get(&info.code)
                .map_or(0, |messages| messages.key_count());
            (info, key_count)
        })
        .collect();

    if cmd.json {
        let entries: Vec<LocaleEntry> = counted
            .into_iter()
            .map(|(info, key_count)| LocaleEntry {
                current: info.code == resolver.get_locale(),
                fallback: info.code == resolver.fallback_locale(),
                info,
                key_count,
            })
            .collect();
        let json =
            serde_json::to_string_pretty(&entries).context("Failed to serialize locales")?;
        println!("{}", json);
    } else {
        print_locales(&counted, resolver.get_locale());
    }

    Ok(ExitStatus::Success)
}
