use crate::models::Language;

/// Section and field captions for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub passengers: &'static str,
    pub passenger_name: &'static str,
    pub trip: &'static str,
    pub departure: &'static str,
    pub return_leg: &'static str,
    pub departure_at: &'static str,
    pub return_at: &'static str,
    pub accommodation: &'static str,
    pub hotel: &'static str,
    pub check_in: &'static str,
    pub check_out: &'static str,
    pub payment: &'static str,
    pub total_amount: &'static str,
    pub contact: &'static str,
    pub issued_on: &'static str,
}

const PT: Labels = Labels {
    title: "Voucher de Viagem",
    passengers: "Passageiros",
    passenger_name: "Nome",
    trip: "Dados da Viagem",
    departure: "Ida",
    return_leg: "Volta",
    departure_at: "Data/Hora Ida",
    return_at: "Data/Hora Volta",
    accommodation: "Hospedagem",
    hotel: "Hotel",
    check_in: "Check-in",
    check_out: "Check-out",
    payment: "Pagamento",
    total_amount: "Valor Total",
    contact: "Contato",
    issued_on: "Emitido em",
};

const EN: Labels = Labels {
    title: "Travel Voucher",
    passengers: "Passengers",
    passenger_name: "Name",
    trip: "Trip Details",
    departure: "Departure",
    return_leg: "Return",
    departure_at: "Departure Date/Time",
    return_at: "Return Date/Time",
    accommodation: "Accommodation",
    hotel: "Hotel",
    check_in: "Check-in",
    check_out: "Check-out",
    payment: "Payment",
    total_amount: "Total Amount",
    contact: "Contact",
    issued_on: "Issued on",
};

pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::Pt => &PT,
        Language::En => &EN,
    }
}
