use std::env;

use anyhow::{Ok, Result, bail};

use super::super::{
    args::CommonArgs,
    report::{print_catalog_warnings, print_skipped_values, print_verbose, print_warning},
};
use crate::core::{
    AppContext, CatalogSource,
    i18n::{Params, TranslationResolver},
};

/// Environment variable consulted for the system language (`es_ES.UTF-8`).
pub const SYSTEM_LOCALE_ENV: &str = "LANG";

/// Load config and catalog for a command, reporting skipped message files.
pub fn load_context(common: &CommonArgs) -> Result<AppContext> {
    let ctx = AppContext::new(common)?;

    if let Some(path) = &ctx.config_path {
        print_verbose(&format!("using config {}", path.display()), ctx.verbose);
    }
    match &ctx.catalog_source {
        CatalogSource::Builtin => print_verbose("using built-in messages", ctx.verbose),
        CatalogSource::Directory(dir) => print_verbose(
            &format!("loaded {} locale(s) from {}", ctx.catalog.len(), dir.display()),
            ctx.verbose,
        ),
    }
    print_catalog_warnings(&ctx.catalog_warnings, ctx.verbose);
    print_skipped_values(&ctx.catalog, ctx.verbose);

    if ctx.catalog.is_empty() {
        bail!("No locales found. Check 'messagesRoot' in .voyagerrc.json");
    }

    Ok(ctx)
}

/// Resolver for `--locale`, warning when the catalog does not know it.
pub fn resolver_for(ctx: &AppContext, common: &CommonArgs) -> TranslationResolver {
    let requested = common.locale.as_deref();
    if let Some(locale) = requested
        && !ctx.catalog.contains_locale(locale)
    {
        print_warning(&format!(
            "unknown locale \"{}\", available: {}",
            locale,
            ctx.catalog.locales().collect::<Vec<_>>().join(", ")
        ));
    }

    let system = env::var(SYSTEM_LOCALE_ENV).ok();
    let resolver = ctx.resolver(requested, system.as_deref());
    print_verbose(
        &format!(
            "locale {} (fallback {})",
            resolver.get_locale(),
            resolver.fallback_locale()
        ),
        ctx.verbose,
    );
    resolver
}

/// Parse `NAME=VALUE` pairs into placeholder parameters.
pub fn parse_params(raw: &[String]) -> Result<Params> {
    let mut params = Params::new();
    for pair in raw {
        let Some((name, value)) = pair.split_once('=') else {
            bail!("Invalid parameter \"{}\": expected NAME=VALUE", pair);
        };
        let name = name.trim();
        if name.is_empty() {
            bail!("Invalid parameter \"{}\": name is empty", pair);
        }
        params.insert(name.to_string(), value.to_string());
    }
    Ok(params)
}
