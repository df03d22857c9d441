//! Built-in system entity tags.
//!
//! The remote platform ships a fixed vocabulary of `sys.*` entity categories
//! that training phrases may reference without creating them first. This is
//! configuration data mirroring the vendor's current tag list; keep it in
//! sync when the vendor adds categories.

use serde::{Deserialize, Serialize};

/// A vendor-defined system entity category (`sys.*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SystemEntity {
    Email,
    Language,
    DatePeriod,
    Duration,
    StreetAddress,
    Date,
    TimePeriod,
    UnitWeight,
    MusicArtist,
    Percentage,
    Number,
    Location,
    DateTime,
    UnitVolume,
    GeoCity,
    Color,
    LastName,
    Address,
    FlightNumber,
    GivenName,
    PhoneNumber,
    Any,
    CurrencyName,
    Url,
    ZipCode,
    Time,
    GeoCountry,
    GeoStateDe,
    UnitCurrency,
}

impl SystemEntity {
    /// Every system entity, in matcher precedence order.
    ///
    /// Order matters: the annotator builds a regex alternation from this
    /// slice, and leftmost alternatives win — `date-period` must come
    /// before `date`, `time-period` before `time`, and so on.
    pub const ALL: &'static [SystemEntity] = &[
        Self::Email,
        Self::Language,
        Self::DatePeriod,
        Self::Duration,
        Self::StreetAddress,
        Self::Date,
        Self::TimePeriod,
        Self::UnitWeight,
        Self::MusicArtist,
        Self::Percentage,
        Self::Number,
        Self::Location,
        Self::DateTime,
        Self::UnitVolume,
        Self::GeoCity,
        Self::Color,
        Self::LastName,
        Self::Address,
        Self::FlightNumber,
        Self::GivenName,
        Self::PhoneNumber,
        Self::Any,
        Self::CurrencyName,
        Self::Url,
        Self::ZipCode,
        Self::Time,
        Self::GeoCountry,
        Self::GeoStateDe,
        Self::UnitCurrency,
    ];

    /// Bare category name without the `sys.` prefix.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Language => "language",
            Self::DatePeriod => "date-period",
            Self::Duration => "duration",
            Self::StreetAddress => "street-address",
            Self::Date => "date",
            Self::TimePeriod => "time-period",
            Self::UnitWeight => "unit-weight",
            Self::MusicArtist => "music-artist",
            Self::Percentage => "percentage",
            Self::Number => "number",
            Self::Location => "location",
            Self::DateTime => "date-time",
            Self::UnitVolume => "unit-volume",
            Self::GeoCity => "geo-city",
            Self::Color => "color",
            Self::LastName => "last-name",
            Self::Address => "address",
            Self::FlightNumber => "flight-number",
            Self::GivenName => "given-name",
            Self::PhoneNumber => "phone-number",
            Self::Any => "any",
            Self::CurrencyName => "currency-name",
            Self::Url => "url",
            Self::ZipCode => "zip-code",
            Self::Time => "time",
            Self::GeoCountry => "geo-country",
            Self::GeoStateDe => "geo-state-de",
            Self::UnitCurrency => "unit-currency",
        }
    }

    /// Full tag as it appears in training phrases (`sys.email`).
    pub fn tag(&self) -> String {
        format!("sys.{}", self.category())
    }

    /// Parse a full `sys.*` tag back into its enum value.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let category = tag.strip_prefix("sys.")?;
        Self::ALL.iter().copied().find(|s| s.category() == category)
    }

    /// Regex fragment matching any built-in tag: `sys\.(email|language|…)`.
    pub fn alternation() -> String {
        let categories: Vec<&str> = Self::ALL.iter().map(|s| s.category()).collect();
        format!(r"sys\.({})", categories.join("|"))
    }
}

impl std::fmt::Display for SystemEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sys.{}", self.category())
    }
}
