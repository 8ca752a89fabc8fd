use std::{fmt, sync::Arc};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{
    Catalog, DateStyle, LocaleFormat, LocaleInfo, Params, StandardFormat, placeholder::substitute,
};

/// Handle returned by [`TranslationResolver::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn(&str) + Send + Sync>;

/// A template found for a key, and the locale that supplied it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation<'a> {
    pub locale: &'a str,
    pub template: &'a str,
}

/// Resolves dotted keys against a shared [`Catalog`].
///
/// Lookup order is the current locale, then the fallback locale, then the
/// key itself. Missing keys and missing parameters never fail; the gap
/// stays visible in the returned text instead.
pub struct TranslationResolver {
    catalog: Arc<Catalog>,
    current_locale: String,
    fallback_locale: String,
    format: Box<dyn LocaleFormat>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl fmt::Debug for TranslationResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationResolver")
            .field("current_locale", &self.current_locale)
            .field("fallback_locale", &self.fallback_locale)
            .field("locales", &self.catalog.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl TranslationResolver {
    pub fn new(
        catalog: Arc<Catalog>,
        locale: impl Into<String>,
        fallback_locale: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            current_locale: locale.into(),
            fallback_locale: fallback_locale.into(),
            format: Box::new(StandardFormat),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Replace the number/currency/date formatter.
    pub fn with_format(mut self, format: impl LocaleFormat + 'static) -> Self {
        self.format = Box::new(format);
        self
    }

    pub fn get_locale(&self) -> &str {
        &self.current_locale
    }

    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    /// Switch the current locale.
    ///
    /// Unknown locales are ignored and `false` is returned; the current
    /// locale stays as it was. Listeners run only when the locale changes.
    pub fn set_locale(&mut self, locale: &str) -> bool {
        if !self.catalog.contains_locale(locale) {
            return false;
        }
        if self.current_locale != locale {
            self.current_locale = locale.to_string();
            for (_, listener) in &self.listeners {
                listener(&self.current_locale);
            }
        }
        true
    }

    /// Run `listener` with the new locale code on every locale change.
    pub fn subscribe(&mut self, listener: impl Fn(&str) + Send + Sync + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Find the template for `key`, trying the current locale first and the
    /// fallback locale second.
    pub fn lookup(&self, key: &str) -> Option<Translation<'_>> {
        [&self.current_locale, &self.fallback_locale]
            .into_iter()
            .find_map(|locale| {
                self.catalog
                    .lookup(locale, key)
                    .map(|template| Translation {
                        locale: locale.as_str(),
                        template,
                    })
            })
    }

    /// Translate `key`, substituting `{name}` placeholders from `params`.
    ///
    /// Returns `key` unchanged when neither locale has it.
    pub fn translate(&self, key: &str, params: &Params) -> String {
        match self.lookup(key) {
            Some(translation) => substitute(translation.template, params).into_owned(),
            None => key.to_string(),
        }
    }

    /// [`translate`](Self::translate) without parameters.
    pub fn t(&self, key: &str) -> String {
        self.translate(key, &Params::new())
    }

    pub fn format_number(&self, value: Decimal) -> String {
        self.format.format_number(&self.current_locale, value)
    }

    pub fn format_currency(&self, amount: Decimal, currency: &str) -> String {
        self.format
            .format_currency(&self.current_locale, amount, currency)
    }

    pub fn format_date(&self, date: NaiveDate, style: DateStyle) -> String {
        self.format.format_date(&self.current_locale, date, style)
    }

    pub fn available_locales(&self) -> Vec<LocaleInfo> {
        self.catalog.locales().map(LocaleInfo::for_code).collect()
    }
}
