use serde::Serialize;

use super::Catalog;

/// Display metadata for a locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleInfo {
    pub code: String,
    pub name: String,
    pub flag: String,
}

impl LocaleInfo {
    pub fn for_code(code: &str) -> Self {
        Self {
            code: code.to_string(),
            name: locale_name(code).to_string(),
            flag: locale_flag(code).to_string(),
        }
    }
}

/// Native name of a locale; unknown codes name themselves.
pub fn locale_name(code: &str) -> &str {
    match code {
        "es" => "Español",
        "en" => "English",
        "fr" => "Français",
        "de" => "Deutsch",
        "it" => "Italiano",
        "pt" => "Português",
        "ja" => "日本語",
        "zh" => "中文",
        other => other,
    }
}

pub fn locale_flag(code: &str) -> &'static str {
    match code {
        "es" => "🇪🇸",
        "en" => "🇺🇸",
        "fr" => "🇫🇷",
        "de" => "🇩🇪",
        "it" => "🇮🇹",
        "pt" => "🇧🇷",
        "ja" => "🇯🇵",
        "zh" => "🇨🇳",
        _ => "🌍",
    }
}

/// Language part of a system locale tag: `es-ES` -> `es`, `fr_FR.UTF-8` -> `fr`.
pub fn language_of(tag: &str) -> Option<String> {
    let language = tag.trim().split(['-', '_', '.', '@']).next()?;
    if language.is_empty() || language.eq_ignore_ascii_case("c") || language == "POSIX" {
        return None;
    }
    Some(language.to_ascii_lowercase())
}

/// Pick the starting locale.
///
/// A saved preference wins when the catalog knows it, then the language of
/// the system tag, then `default`.
pub fn detect_locale(
    saved: Option<&str>,
    system: Option<&str>,
    catalog: &Catalog,
    default: &str,
) -> String {
    if let Some(saved) = saved
        && catalog.contains_locale(saved)
    {
        return saved.to_string();
    }
    if let Some(language) = system.and_then(language_of)
        && catalog.contains_locale(&language)
    {
        return language;
    }
    default.to_string()
}
