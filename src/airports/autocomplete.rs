use crate::airports::directory::AirportDirectory;
use crate::models::AirportRecord;
use std::sync::Arc;

/// Most suggestions shown under a route field
pub const MAX_SUGGESTIONS: usize = 10;

/// One entry in the suggestion list
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub airport: AirportRecord,
}

impl Suggestion {
    /// Text shown in the list: `CODE - name (city, country)`
    pub fn label(&self) -> String {
        format!(
            "{} - {} ({}, {})",
            self.airport.code, self.airport.name, self.airport.city, self.airport.country
        )
    }

    /// Text written into the field when picked: `CODE - name`
    pub fn selection_text(&self) -> String {
        format!("{} - {}", self.airport.code, self.airport.name)
    }
}

/// Substring search over the airport directory
#[derive(Clone)]
pub struct AutocompleteMatcher {
    directory: Arc<AirportDirectory>,
}

impl AutocompleteMatcher {
    pub fn new(directory: Arc<AirportDirectory>) -> Self {
        Self { directory }
    }

    /// Up to [`MAX_SUGGESTIONS`] airports whose code, name, city or country
    /// contain `query`, ignoring case, in dataset order.
    pub fn suggest(&self, query: &str) -> Vec<Suggestion> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.directory
            .snapshot()
            .values()
            .filter(|airport| airport.searchable_text().contains(&needle))
            .take(MAX_SUGGESTIONS)
            .map(|airport| Suggestion {
                airport: airport.clone(),
            })
            .collect()
    }
}

/// Suggestion list attached to one route input
pub struct SuggestionPanel {
    matcher: AutocompleteMatcher,
    input: String,
    suggestions: Vec<Suggestion>,
}

impl SuggestionPanel {
    pub fn new(matcher: AutocompleteMatcher) -> Self {
        Self {
            matcher,
            input: String::new(),
            suggestions: Vec::new(),
        }
    }

    /// The user typed; refresh the list for the new field contents
    pub fn on_input(&mut self, text: &str) -> &[Suggestion] {
        self.input = text.to_string();
        self.suggestions = self.matcher.suggest(text);
        &self.suggestions
    }

    /// Pick a suggestion: the field takes its selection text and the list closes
    pub fn select(&mut self, index: usize) -> Option<&str> {
        let picked = self.suggestions.get(index)?.selection_text();
        self.input = picked;
        self.suggestions.clear();
        Some(&self.input)
    }

    /// Interaction outside the field and the list hides suggestions
    pub fn dismiss(&mut self) {
        self.suggestions.clear();
    }

    pub fn is_visible(&self) -> bool {
        !self.suggestions.is_empty()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airport(code: &str, name: &str, city: &str, country: &str) -> AirportRecord {
        AirportRecord {
            code: code.to_string(),
            name: name.to_string(),
            city: city.to_string(),
            country: country.to_string(),
        }
    }

    fn matcher() -> AutocompleteMatcher {
        let mut records = vec![
            airport("SBGR", "Guarulhos International Airport", "Sao Paulo", "BR"),
            airport("SBSP", "Congonhas Airport", "Sao Paulo", "BR"),
            airport("LPPT", "Humberto Delgado Airport", "Lisbon", "PT"),
        ];
        for i in 0..20 {
            records.push(airport(&format!("XP{i:02}"), "Paulo Field", "Nowhere", "ZZ"));
        }
        AutocompleteMatcher::new(Arc::new(AirportDirectory::from_records(records)))
    }

    #[test]
    fn matches_any_field_case_insensitively() {
        let codes = |q: &str| -> Vec<String> {
            matcher()
                .suggest(q)
                .into_iter()
                .map(|s| s.airport.code)
                .collect()
        };

        assert_eq!(codes("lisbon"), vec!["LPPT"]);
        assert_eq!(codes("sbgr"), vec!["SBGR"]);
        assert_eq!(codes("  CONGONHAS "), vec!["SBSP"]);
        assert_eq!(codes("pt"), vec!["LPPT"]);
        assert!(codes("atlantis").is_empty());
    }

    #[test]
    fn results_are_capped_and_in_dataset_order() {
        let results = matcher().suggest("paulo");
        assert_eq!(results.len(), MAX_SUGGESTIONS);
        assert_eq!(results[0].airport.code, "SBGR");
        assert_eq!(results[1].airport.code, "SBSP");
        assert_eq!(results[2].airport.code, "XP00");
        for suggestion in &results {
            assert!(suggestion.airport.searchable_text().contains("paulo"));
        }
    }

    #[test]
    fn empty_query_or_directory_yields_nothing() {
        assert!(matcher().suggest("").is_empty());
        assert!(matcher().suggest("   ").is_empty());

        let empty = AutocompleteMatcher::new(Arc::new(AirportDirectory::new()));
        assert!(empty.suggest("gru").is_empty());
    }

    #[test]
    fn suggestion_texts() {
        let suggestion = Suggestion {
            airport: airport("LPPT", "Humberto Delgado Airport", "Lisbon", "PT"),
        };
        assert_eq!(
            suggestion.label(),
            "LPPT - Humberto Delgado Airport (Lisbon, PT)"
        );
        assert_eq!(suggestion.selection_text(), "LPPT - Humberto Delgado Airport");
    }

    #[test]
    fn panel_select_and_dismiss() {
        let mut panel = SuggestionPanel::new(matcher());

        assert_eq!(panel.on_input("lis").len(), 1);
        assert!(panel.is_visible());
        assert_eq!(panel.select(0), Some("LPPT - Humberto Delgado Airport"));
        assert_eq!(panel.input(), "LPPT - Humberto Delgado Airport");
        assert!(!panel.is_visible());

        panel.on_input("sao");
        assert_eq!(panel.suggestions().len(), 2);
        panel.dismiss();
        assert!(!panel.is_visible());
        assert_eq!(panel.input(), "sao");
        assert_eq!(panel.select(0), None);
    }
}
