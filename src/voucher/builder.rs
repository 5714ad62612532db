use crate::models::{FormState, VoucherParts, VoucherRecord};
use crate::voucher::validator::{validate, ValidForm, ValidationError};
use chrono::{DateTime, Utc};

/// Turns form input into an immutable [`VoucherRecord`]
pub struct VoucherBuilder;

impl VoucherBuilder {
    /// Validate `form` and snapshot it as a record issued now.
    pub fn build(form: &FormState) -> Result<VoucherRecord, ValidationError> {
        Self::build_at(form, Utc::now())
    }

    /// Same as [`VoucherBuilder::build`] with an explicit issue time
    pub fn build_at(
        form: &FormState,
        issued_at: DateTime<Utc>,
    ) -> Result<VoucherRecord, ValidationError> {
        let valid = validate(form)?;
        Ok(Self::assemble(valid, issued_at))
    }

    /// Names are trimmed and upper-cased; dates are kept exactly as entered.
    pub fn assemble(form: ValidForm, issued_at: DateTime<Utc>) -> VoucherRecord {
        let passengers = form
            .passengers
            .iter()
            .map(|name| name.trim().to_uppercase())
            .collect();

        VoucherRecord::from_parts(VoucherParts {
            passengers,
            language: form.language,
            outbound: form.outbound,
            outbound_at: form.outbound_at,
            return_leg: form.return_leg,
            return_at: form.return_at,
            hotel: form.hotel,
            check_in: form.check_in,
            check_out: form.check_out,
            total_amount: form.total_amount,
            issued_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Language, LocalTimestamp};
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn builds_normalized_record() {
        let form = FormState {
            passengers: vec!["  joão silva ".to_string(), "Maria Souza".to_string()],
            language: "en".to_string(),
            outbound: " GRU - Guarulhos ".to_string(),
            outbound_at: "2024-05-01T10:00".to_string(),
            return_leg: "LIS - Lisbon".to_string(),
            return_at: "2024-05-10T18:30".to_string(),
            hotel: "Hotel Avenida".to_string(),
            check_in: "2024-05-01".to_string(),
            amount: "R$ 2.500,00".to_string(),
            ..FormState::default()
        };
        let issued_at = Utc.with_ymd_and_hms(2024, 4, 20, 12, 0, 0).unwrap();

        let record = VoucherBuilder::build_at(&form, issued_at).unwrap();

        assert_eq!(record.passengers(), ["JOÃO SILVA", "MARIA SOUZA"]);
        assert_eq!(record.language(), Language::En);
        assert_eq!(record.outbound(), "GRU - Guarulhos");
        assert_eq!(
            record.outbound_at(),
            LocalTimestamp::parse("2024-05-01T10:00").unwrap()
        );
        assert_eq!(record.return_leg(), Some("LIS - Lisbon"));
        assert_eq!(record.check_in(), LocalTimestamp::parse("2024-05-01"));
        assert_eq!(record.check_out(), None);
        assert_eq!(record.total_amount(), dec!(2500.00));
        assert_eq!(record.issued_at(), issued_at);
    }

    #[test]
    fn refuses_invalid_form() {
        let form = FormState {
            passengers: vec!["Ana".to_string()],
            outbound: "GRU".to_string(),
            ..FormState::default()
        };
        assert_eq!(
            VoucherBuilder::build(&form),
            Err(ValidationError::MissingOutboundDate)
        );
    }

    #[test]
    fn english_grouped_amount_keeps_its_scale() {
        let form = FormState {
            passengers: vec!["Ana".to_string()],
            outbound: "GRU".to_string(),
            outbound_at: "2024-05-01T10:00".to_string(),
            amount: "1,234.56".to_string(),
            ..FormState::default()
        };
        let record = VoucherBuilder::build(&form).unwrap();
        assert_eq!(record.total_amount(), dec!(1234.56));
    }

    #[test]
    fn blank_amount_is_zero() {
        let form = FormState {
            passengers: vec!["Ana".to_string()],
            outbound: "GRU".to_string(),
            outbound_at: "2024-05-01T10:00".to_string(),
            ..FormState::default()
        };
        let record = VoucherBuilder::build(&form).unwrap();
        assert!(record.total_amount().is_zero());
    }
}
