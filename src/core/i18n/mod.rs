//! Translation lookup with locale fallback and placeholder substitution.
//!
//! - `catalog`: locale message trees, including the built-in catalog
//! - `resolver`: `TranslationResolver`, the key -> text entry point
//! - `placeholder`: `{name}` substitution
//! - `locale`: locale names, flags and detection
//! - `format`: number, currency and date formatting per locale

mod catalog;
mod format;
mod locale;
mod placeholder;
mod resolver;

pub use catalog::{Catalog, LocaleMessages, MessageNode, MessageTree};
pub use format::{DateStyle, LocaleFormat, StandardFormat};
pub use locale::{LocaleInfo, detect_locale, language_of, locale_flag, locale_name};
pub use placeholder::{Params, placeholder_names, substitute};
pub use resolver::{ListenerId, Translation, TranslationResolver};
