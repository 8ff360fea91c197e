//! Display locales and the fixed day-name tables.
//!
//! French is the portal's default display language.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::day::DayCode;
use crate::error::{AvailabilityError, Result};

/// Serialized as its tag (`"fr"`, `"en"`); parsed case-insensitively, the same
/// way for serde input and `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    #[default]
    French,
    English,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::French => "fr",
            Locale::English => "en",
        }
    }
}

impl FromStr for Locale {
    type Err = AvailabilityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fr" => Ok(Locale::French),
            "en" => Ok(Locale::English),
            _ => Err(AvailabilityError::UnknownLocale(s.to_string())),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = AvailabilityError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.tag().to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Display name of `code` in `locale`.
pub fn localize_day_name(code: DayCode, locale: Locale) -> &'static str {
    match locale {
        Locale::French => match code {
            DayCode::Mon => "Lundi",
            DayCode::Tue => "Mardi",
            DayCode::Wed => "Mercredi",
            DayCode::Thu => "Jeudi",
            DayCode::Fri => "Vendredi",
            DayCode::Sat => "Samedi",
            DayCode::Sun => "Dimanche",
        },
        Locale::English => match code {
            DayCode::Mon => "Monday",
            DayCode::Tue => "Tuesday",
            DayCode::Wed => "Wednesday",
            DayCode::Thu => "Thursday",
            DayCode::Fri => "Friday",
            DayCode::Sat => "Saturday",
            DayCode::Sun => "Sunday",
        },
    }
}

/// Localize a raw day symbol such as `"Mon"`.
///
/// Symbols outside the seven known codes are returned unchanged.
pub fn localize_day_symbol(symbol: &str, locale: Locale) -> String {
    match symbol.parse::<DayCode>() {
        Ok(code) => localize_day_name(code, locale).to_string(),
        Err(_) => symbol.to_string(),
    }
}
