//! Shared Quill semantic tables used by both the runtime library and the CLI.
//!
//! This crate centralizes the closed enumerations (currency codes, number
//! locales, recognized option names, directive type characters) so the
//! formatting gate and the diagnostics built on top of it can never drift
//! apart.

/// Currency codes accepted by the currency formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrencyCode {
    Usd,
    Eur,
}

/// Currency used when the `code` option is omitted.
pub const DEFAULT_CURRENCY: CurrencyCode = CurrencyCode::Usd;

impl CurrencyCode {
    /// Every supported currency, in display order.
    pub const ALL: [CurrencyCode; 2] = [CurrencyCode::Usd, CurrencyCode::Eur];

    /// The ISO 4217 code as written in templates.
    pub fn as_str(self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
        }
    }

    /// The raw currency symbol. Escaping for markup is the caller's job.
    pub fn symbol(self) -> &'static str {
        match self {
            CurrencyCode::Usd => "$",
            CurrencyCode::Eur => "\u{20ac}",
        }
    }

    /// The locale used when no recognized `locale` option is supplied.
    pub fn native_locale(self) -> NumberLocale {
        match self {
            CurrencyCode::Usd => NumberLocale::En,
            CurrencyCode::Eur => NumberLocale::De,
        }
    }
}

/// Number formatting conventions known to the currency formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberLocale {
    /// Comma grouping, period decimal, symbol prefixed.
    En,
    /// Period grouping, comma decimal, symbol suffixed after a space.
    De,
}

/// Where a locale places the currency symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

impl NumberLocale {
    pub fn as_str(self) -> &'static str {
        match self {
            NumberLocale::En => "en",
            NumberLocale::De => "de",
        }
    }

    pub fn grouping_separator(self) -> char {
        match self {
            NumberLocale::En => ',',
            NumberLocale::De => '.',
        }
    }

    pub fn decimal_separator(self) -> char {
        match self {
            NumberLocale::En => '.',
            NumberLocale::De => ',',
        }
    }

    pub fn symbol_position(self) -> SymbolPosition {
        match self {
            NumberLocale::En => SymbolPosition::Prefix,
            NumberLocale::De => SymbolPosition::Suffix,
        }
    }
}

/// Name of the option selecting the currency.
pub const CODE_OPTION: &str = "code";

/// Name of the option overriding the number locale.
pub const LOCALE_OPTION: &str = "locale";

/// The only option names the currency formatter ever reads.
pub const CURRENCY_OPTIONS: &[&str] = &[CODE_OPTION, LOCALE_OPTION];

/// Locale tags accepted as an explicit `locale` override.
pub const OVERRIDE_LOCALES: &[&str] = &["en"];

const CURRENCY_CODE_NAMES: &[&str] = &["USD", "EUR"];

/// Resolve a currency code. Matching is exact: `usd` is not `USD`.
pub fn resolve_currency_code(code: &str) -> Option<CurrencyCode> {
    match code {
        "USD" => Some(CurrencyCode::Usd),
        "EUR" => Some(CurrencyCode::Eur),
        _ => None,
    }
}

/// Resolve an explicit locale override.
///
/// Returns `None` for anything that is not a recognized override, including
/// tags that name a locale the formatter knows natively (such as `de`).
pub fn resolve_locale_override(tag: &str) -> Option<NumberLocale> {
    match tag {
        "en" => Some(NumberLocale::En),
        _ => None,
    }
}

/// Whether `name` is on the currency option allow-list.
pub fn is_currency_option(name: &str) -> bool {
    CURRENCY_OPTIONS.contains(&name)
}

/// Accepted currency code spellings.
///
/// Used for diagnostics and typo suggestions.
pub fn accepted_currency_codes() -> &'static [&'static str] {
    CURRENCY_CODE_NAMES
}

/// Value type requested by a format directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// `s`: the value's plain text.
    String,
    /// `d`: the value coerced to an integer.
    Integer,
}

impl DirectiveKind {
    pub fn as_char(self) -> char {
        match self {
            DirectiveKind::String => 's',
            DirectiveKind::Integer => 'd',
        }
    }
}

/// Resolve a directive type character.
pub fn resolve_directive_kind(c: char) -> Option<DirectiveKind> {
    match c {
        's' => Some(DirectiveKind::String),
        'd' => Some(DirectiveKind::Integer),
        _ => None,
    }
}
