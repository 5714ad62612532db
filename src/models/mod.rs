mod form;

pub use form::{FormState, PassengerListError};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display language of a voucher
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pt,
    En,
}

impl Language {
    /// Resolve a language code, falling back to Portuguese for anything unknown
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Language::En,
            _ => Language::Pt,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
        }
    }
}

/// One airport entry from the dataset, keyed by `code`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AirportRecord {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
}

impl AirportRecord {
    /// Text the autocomplete filter searches in
    pub fn searchable_text(&self) -> String {
        [
            self.code.as_str(),
            self.name.as_str(),
            self.city.as_str(),
            self.country.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }
}

/// A wall-clock date or date/time exactly as entered, with no timezone attached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum LocalTimestamp {
    DateTime(NaiveDateTime),
    Date(NaiveDate),
}

impl LocalTimestamp {
    /// Parse `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM` or `YYYY-MM-DDTHH:MM:SS`
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        for format in ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
                return Some(LocalTimestamp::DateTime(dt));
            }
        }
        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .ok()
            .map(LocalTimestamp::Date)
    }

    /// Date-only values compare as midnight
    pub fn as_naive(&self) -> NaiveDateTime {
        match self {
            LocalTimestamp::DateTime(dt) => *dt,
            LocalTimestamp::Date(date) => date.and_time(NaiveTime::MIN),
        }
    }
}

impl fmt::Display for LocalTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalTimestamp::DateTime(dt) => write!(f, "{}", dt.format("%d/%m/%Y %H:%M")),
            LocalTimestamp::Date(date) => write!(f, "{}", date.format("%d/%m/%Y")),
        }
    }
}

/// A finalized travel voucher.
///
/// Only `VoucherBuilder` creates these from form input, so a record always
/// has at least one passenger, an outbound leg and date, a non-negative
/// amount and a return date that is not before the outbound date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoucherRecord {
    passengers: Vec<String>,
    language: Language,
    outbound: String,
    outbound_at: LocalTimestamp,
    return_leg: Option<String>,
    return_at: Option<LocalTimestamp>,
    hotel: Option<String>,
    check_in: Option<LocalTimestamp>,
    check_out: Option<LocalTimestamp>,
    total_amount: Decimal,
    issued_at: DateTime<Utc>,
}

/// Field values for a new record, checked by the builder before assembly
pub(crate) struct VoucherParts {
    pub passengers: Vec<String>,
    pub language: Language,
    pub outbound: String,
    pub outbound_at: LocalTimestamp,
    pub return_leg: Option<String>,
    pub return_at: Option<LocalTimestamp>,
    pub hotel: Option<String>,
    pub check_in: Option<LocalTimestamp>,
    pub check_out: Option<LocalTimestamp>,
    pub total_amount: Decimal,
    pub issued_at: DateTime<Utc>,
}

impl VoucherRecord {
    pub(crate) fn from_parts(parts: VoucherParts) -> Self {
        Self {
            passengers: parts.passengers,
            language: parts.language,
            outbound: parts.outbound,
            outbound_at: parts.outbound_at,
            return_leg: parts.return_leg,
            return_at: parts.return_at,
            hotel: parts.hotel,
            check_in: parts.check_in,
            check_out: parts.check_out,
            total_amount: parts.total_amount,
            issued_at: parts.issued_at,
        }
    }

    pub fn passengers(&self) -> &[String] {
        &self.passengers
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn outbound(&self) -> &str {
        &self.outbound
    }

    pub fn outbound_at(&self) -> LocalTimestamp {
        self.outbound_at
    }

    pub fn return_leg(&self) -> Option<&str> {
        self.return_leg.as_deref()
    }

    pub fn return_at(&self) -> Option<LocalTimestamp> {
        self.return_at
    }

    pub fn hotel(&self) -> Option<&str> {
        self.hotel.as_deref()
    }

    pub fn check_in(&self) -> Option<LocalTimestamp> {
        self.check_in
    }

    pub fn check_out(&self) -> Option<LocalTimestamp> {
        self.check_out
    }

    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}
