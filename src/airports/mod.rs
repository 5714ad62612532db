pub mod autocomplete;
pub mod directory;

pub use autocomplete::{AutocompleteMatcher, Suggestion, SuggestionPanel, MAX_SUGGESTIONS};
pub use directory::{http_client, AirportDirectory, AirportSource};
