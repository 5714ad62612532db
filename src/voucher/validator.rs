use crate::models::{FormState, Language, LocalTimestamp};
use crate::voucher::labels::labels;
use crate::voucher::money::parse_amount;
use rust_decimal::Decimal;
use thiserror::Error;

/// Date inputs on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Outbound,
    Return,
    CheckIn,
    CheckOut,
}

impl DateField {
    fn label(self, language: Language) -> &'static str {
        let labels = labels(language);
        match self {
            DateField::Outbound => labels.departure_at,
            DateField::Return => labels.return_at,
            DateField::CheckIn => labels.check_in,
            DateField::CheckOut => labels.check_out,
        }
    }
}

/// First rule a form breaks, in the order the rules are checked
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("every passenger needs a name")]
    MissingPassengerName,
    #[error("outbound origin/destination is required")]
    MissingOutbound,
    #[error("outbound date/time is required")]
    MissingOutboundDate,
    #[error("total amount must be a non-negative number")]
    InvalidAmount,
    #[error("{field:?} date is not a valid date")]
    InvalidDate { field: DateField },
    #[error("outbound date/time is after the return")]
    ReturnBeforeOutbound,
}

impl ValidationError {
    /// Message shown to the user above the form
    pub fn message(&self, language: Language) -> String {
        match language {
            Language::Pt => match self {
                ValidationError::MissingPassengerName => {
                    "Por favor, preencha o nome de todos os passageiros.".to_string()
                }
                ValidationError::MissingOutbound => {
                    "Por favor, preencha a origem/destino da ida.".to_string()
                }
                ValidationError::MissingOutboundDate => {
                    "Por favor, preencha a data e hora da ida.".to_string()
                }
                ValidationError::InvalidAmount => {
                    "Por favor, preencha um valor total válido e positivo.".to_string()
                }
                ValidationError::InvalidDate { field } => {
                    format!("Data inválida em \"{}\".", field.label(language))
                }
                ValidationError::ReturnBeforeOutbound => {
                    "A data/hora da ida não pode ser depois da volta.".to_string()
                }
            },
            Language::En => match self {
                ValidationError::MissingPassengerName => {
                    "Please fill in the name of every passenger.".to_string()
                }
                ValidationError::MissingOutbound => {
                    "Please fill in the outbound origin/destination.".to_string()
                }
                ValidationError::MissingOutboundDate => {
                    "Please fill in the outbound date and time.".to_string()
                }
                ValidationError::InvalidAmount => {
                    "Please enter a valid, non-negative total amount.".to_string()
                }
                ValidationError::InvalidDate { field } => {
                    format!("Invalid date in \"{}\".", field.label(language))
                }
                ValidationError::ReturnBeforeOutbound => {
                    "The outbound date/time cannot be after the return.".to_string()
                }
            },
        }
    }
}

/// Form contents that passed every rule, with dates and amount parsed
#[derive(Debug, Clone, PartialEq)]
pub struct ValidForm {
    pub(crate) passengers: Vec<String>,
    pub(crate) language: Language,
    pub(crate) outbound: String,
    pub(crate) outbound_at: LocalTimestamp,
    pub(crate) return_leg: Option<String>,
    pub(crate) return_at: Option<LocalTimestamp>,
    pub(crate) hotel: Option<String>,
    pub(crate) check_in: Option<LocalTimestamp>,
    pub(crate) check_out: Option<LocalTimestamp>,
    pub(crate) total_amount: Decimal,
}

/// Check the form rules in fixed order and stop at the first failure:
/// passenger names, outbound, outbound date, amount, then date order.
pub fn validate(form: &FormState) -> Result<ValidForm, ValidationError> {
    if form.passengers.is_empty() || form.passengers.iter().any(|name| name.trim().is_empty()) {
        return Err(ValidationError::MissingPassengerName);
    }

    let outbound = form.outbound.trim();
    if outbound.is_empty() {
        return Err(ValidationError::MissingOutbound);
    }

    if form.outbound_at.trim().is_empty() {
        return Err(ValidationError::MissingOutboundDate);
    }
    let outbound_at = LocalTimestamp::parse(&form.outbound_at).ok_or(
        ValidationError::InvalidDate {
            field: DateField::Outbound,
        },
    )?;

    let total_amount = if form.amount.trim().is_empty() {
        Decimal::ZERO
    } else {
        match parse_amount(&form.amount) {
            Some(value) if !value.is_sign_negative() || value.is_zero() => value,
            _ => return Err(ValidationError::InvalidAmount),
        }
    };

    let return_at = optional_date(&form.return_at, DateField::Return)?;
    let check_in = optional_date(&form.check_in, DateField::CheckIn)?;
    let check_out = optional_date(&form.check_out, DateField::CheckOut)?;

    if let Some(return_at) = return_at {
        if outbound_at.as_naive() > return_at.as_naive() {
            return Err(ValidationError::ReturnBeforeOutbound);
        }
    }

    Ok(ValidForm {
        passengers: form.passengers.clone(),
        language: form.language(),
        outbound: outbound.to_string(),
        outbound_at,
        return_leg: optional_text(&form.return_leg),
        return_at,
        hotel: optional_text(&form.hotel),
        check_in,
        check_out,
        total_amount,
    })
}

fn optional_date(input: &str, field: DateField) -> Result<Option<LocalTimestamp>, ValidationError> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    LocalTimestamp::parse(input)
        .map(Some)
        .ok_or(ValidationError::InvalidDate { field })
}

fn optional_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Validation plus the error line the form currently shows
#[derive(Debug, Default)]
pub struct FormValidator {
    displayed: Option<ValidationError>,
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and update the displayed error: set on failure, cleared on success
    pub fn check(&mut self, form: &FormState) -> Result<ValidForm, ValidationError> {
        let result = validate(form);
        self.displayed = result.as_ref().err().cloned();
        result
    }

    pub fn displayed_error(&self) -> Option<&ValidationError> {
        self.displayed.as_ref()
    }
}
