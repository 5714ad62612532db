use super::Language;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw, unvalidated contents of the voucher form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormState {
    pub passengers: Vec<String>,
    /// Language code as selected; unknown codes render in Portuguese
    pub language: String,
    pub outbound: String,
    pub outbound_at: String,
    pub return_leg: String,
    pub return_at: String,
    pub hotel: String,
    pub check_in: String,
    pub check_out: String,
    pub amount: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            passengers: vec![String::new()],
            language: Language::Pt.code().to_string(),
            outbound: String::new(),
            outbound_at: String::new(),
            return_leg: String::new(),
            return_at: String::new(),
            hotel: String::new(),
            check_in: String::new(),
            check_out: String::new(),
            amount: String::new(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PassengerListError {
    #[error("at least one passenger must be provided")]
    LastPassenger,
    #[error("no passenger at position {0}")]
    OutOfRange(usize),
}

impl PassengerListError {
    pub fn message(&self, language: Language) -> String {
        match (self, language) {
            (PassengerListError::LastPassenger, Language::Pt) => {
                "Pelo menos um passageiro deve ser informado.".to_string()
            }
            (PassengerListError::LastPassenger, Language::En) => {
                "At least one passenger must be provided.".to_string()
            }
            (PassengerListError::OutOfRange(index), Language::Pt) => {
                format!("Nenhum passageiro na posição {}.", index + 1)
            }
            (PassengerListError::OutOfRange(index), Language::En) => {
                format!("No passenger at position {}.", index + 1)
            }
        }
    }
}

impl FormState {
    pub fn language(&self) -> Language {
        Language::from_code(&self.language)
    }

    /// Append an empty passenger row and return its index
    pub fn add_passenger(&mut self) -> usize {
        self.passengers.push(String::new());
        self.passengers.len() - 1
    }

    /// Remove a passenger row; the last remaining row cannot be removed
    pub fn remove_passenger(&mut self, index: usize) -> Result<String, PassengerListError> {
        if index >= self.passengers.len() {
            return Err(PassengerListError::OutOfRange(index));
        }
        if self.passengers.len() == 1 {
            return Err(PassengerListError::LastPassenger);
        }
        Ok(self.passengers.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_has_one_blank_passenger() {
        let form = FormState::default();
        assert_eq!(form.passengers, vec![String::new()]);
        assert_eq!(form.language(), Language::Pt);
    }

    #[test]
    fn keeps_at_least_one_passenger() {
        let mut form = FormState::default();
        assert_eq!(form.remove_passenger(0), Err(PassengerListError::LastPassenger));

        let second = form.add_passenger();
        form.passengers[second] = "Maria".to_string();
        assert_eq!(form.remove_passenger(0), Ok(String::new()));
        assert_eq!(form.passengers, vec!["Maria".to_string()]);
        assert_eq!(form.remove_passenger(3), Err(PassengerListError::OutOfRange(3)));
    }

    #[test]
    fn passenger_errors_are_localized() {
        assert_eq!(
            PassengerListError::LastPassenger.message(Language::Pt),
            "Pelo menos um passageiro deve ser informado."
        );
        assert_eq!(
            PassengerListError::LastPassenger.message(Language::En),
            "At least one passenger must be provided."
        );
    }
}
