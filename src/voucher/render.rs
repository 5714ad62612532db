//! Pure mapping from a voucher record to a language-specific layout tree.
//!
//! Nothing here touches the filesystem or a browser; exporters serialize the
//! tree (see [`crate::voucher::html`]) and turn it into a document.

use crate::models::{Language, VoucherRecord};
use crate::voucher::labels::labels;
use crate::voucher::money::format_brl;
use crate::voucher::qr::ContactCode;
use chrono::Local;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    pub value: String,
}

impl Field {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Table {
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Fields(Vec<Field>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub body: SectionBody,
}

/// Scannable code block shown next to the issue line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactBlock {
    pub label: String,
    pub code: ContactCode,
}

/// Everything a voucher page shows, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoucherLayout {
    pub language: Language,
    pub title: String,
    pub sections: Vec<Section>,
    pub contact: Option<ContactBlock>,
    pub issued: Field,
}

/// Lay out `record` in `language`.
///
/// The return leg and its date appear only when present, and accommodation
/// only lists the fields that were filled in (the section is dropped when
/// none were). The issue line always comes from the record.
pub fn render(
    record: &VoucherRecord,
    language: Language,
    contact: Option<&ContactCode>,
) -> VoucherLayout {
    let t = labels(language);
    let mut sections = Vec::with_capacity(4);

    sections.push(Section {
        heading: t.passengers.to_string(),
        body: SectionBody::Table {
            columns: vec![t.passenger_name.to_string()],
            rows: record
                .passengers()
                .iter()
                .map(|name| vec![name.clone()])
                .collect(),
        },
    });

    let mut trip = vec![
        Field::new(t.departure, record.outbound()),
        Field::new(t.departure_at, record.outbound_at().to_string()),
    ];
    if let Some(leg) = record.return_leg() {
        trip.push(Field::new(t.return_leg, leg));
    }
    if let Some(at) = record.return_at() {
        trip.push(Field::new(t.return_at, at.to_string()));
    }
    sections.push(Section {
        heading: t.trip.to_string(),
        body: SectionBody::Fields(trip),
    });

    let mut stay = Vec::new();
    if let Some(hotel) = record.hotel() {
        stay.push(Field::new(t.hotel, hotel));
    }
    if let Some(at) = record.check_in() {
        stay.push(Field::new(t.check_in, at.to_string()));
    }
    if let Some(at) = record.check_out() {
        stay.push(Field::new(t.check_out, at.to_string()));
    }
    if !stay.is_empty() {
        sections.push(Section {
            heading: t.accommodation.to_string(),
            body: SectionBody::Fields(stay),
        });
    }

    sections.push(Section {
        heading: t.payment.to_string(),
        body: SectionBody::Fields(vec![Field::new(
            t.total_amount,
            format_brl(record.total_amount()),
        )]),
    });

    let issued_at = record.issued_at().with_timezone(&Local);

    VoucherLayout {
        language,
        title: t.title.to_string(),
        sections,
        contact: contact.map(|code| ContactBlock {
            label: t.contact.to_string(),
            code: code.clone(),
        }),
        issued: Field::new(t.issued_on, issued_at.format("%d/%m/%Y %H:%M").to_string()),
    }
}

/// Plain-text rendering used for terminal previews
impl fmt::Display for VoucherLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "{}", section.heading)?;
            match &section.body {
                SectionBody::Table { rows, .. } => {
                    for row in rows {
                        writeln!(f, "  - {}", row.join(" | "))?;
                    }
                }
                SectionBody::Fields(fields) => {
                    for field in fields {
                        writeln!(f, "  {}: {}", field.label, field.value)?;
                    }
                }
            }
        }
        if let Some(contact) = &self.contact {
            writeln!(f)?;
            writeln!(f, "{}: {}", contact.label, contact.code.payload())?;
        }
        writeln!(f)?;
        write!(f, "{}: {}", self.issued.label, self.issued.value)
    }
}
