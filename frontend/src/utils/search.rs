use crate::utils::messages;
use crate::utils::ui_state::{NotificationKind, UiAction};

/// A search term that is known to be non-empty after trimming.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn needle(&self) -> String {
        self.0.to_lowercase()
    }
}

/// The query to run for the search box contents, or the warning to show
/// instead. A rejected request must not start a lookup.
pub fn search_request(raw: &str) -> Result<SearchQuery, UiAction> {
    SearchQuery::parse(raw).ok_or_else(|| UiAction::Notify {
        message: messages::SEARCH_EMPTY.to_string(),
        kind: NotificationKind::Warning,
    })
}

/// What the page shows for one service card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceCardView {
    pub title: String,
    pub description: String,
    pub price: String,
}

impl ServiceCardView {
    pub fn matches(&self, query: &SearchQuery) -> bool {
        let needle = query.needle();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

/// Indices of the cards whose title or description contains the query,
/// ignoring case.
pub fn find_matches(query: &SearchQuery, cards: &[ServiceCardView]) -> Vec<usize> {
    cards
        .iter()
        .enumerate()
        .filter(|(_, card)| card.matches(query))
        .map(|(index, _)| index)
        .collect()
}

/// Notification shown once the simulated lookup finishes.
pub fn report(query: &SearchQuery, matches: usize) -> (String, NotificationKind) {
    if matches > 0 {
        (
            messages::search_matched(query.as_str(), matches),
            NotificationKind::Success,
        )
    } else {
        (
            messages::search_no_match(query.as_str()),
            NotificationKind::Info,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, description: &str) -> ServiceCardView {
        ServiceCardView {
            title: title.to_string(),
            description: description.to_string(),
            price: "৳৫০০".to_string(),
        }
    }

    fn catalog() -> Vec<ServiceCardView> {
        vec![
            card("Logo Design", "Professional brand identity"),
            card("Web Development", "Responsive sites for small business"),
        ]
    }

    #[test]
    fn blank_queries_are_rejected() {
        assert_eq!(SearchQuery::parse(""), None);
        assert_eq!(SearchQuery::parse("   \t\n"), None);
    }

    #[test]
    fn queries_are_trimmed() {
        let query = SearchQuery::parse("  SEO  ").unwrap();
        assert_eq!(query.as_str(), "SEO");
    }

    #[test]
    fn empty_search_box_warns() {
        let warning = UiAction::Notify {
            message: messages::SEARCH_EMPTY.to_string(),
            kind: NotificationKind::Warning,
        };
        assert_eq!(search_request(""), Err(warning.clone()));
        assert_eq!(search_request("  \t "), Err(warning));
    }

    #[test]
    fn filled_search_box_yields_trimmed_query() {
        let query = search_request("  design ").unwrap();
        assert_eq!(query.as_str(), "design");
    }

    #[test]
    fn matching_ignores_case() {
        let cards = catalog();
        for raw in ["design", "DESIGN", "DeSiGn"] {
            let query = SearchQuery::parse(raw).unwrap();
            assert_eq!(find_matches(&query, &cards), vec![0]);
        }
    }

    #[test]
    fn description_text_is_searched() {
        let cards = catalog();
        let query = SearchQuery::parse("small business").unwrap();
        assert_eq!(find_matches(&query, &cards), vec![1]);
    }

    #[test]
    fn price_is_not_searched() {
        let cards = catalog();
        let query = SearchQuery::parse("৫০০").unwrap();
        assert!(find_matches(&query, &cards).is_empty());
    }

    #[test]
    fn every_matching_card_is_counted() {
        let cards = vec![
            card("Logo Design", ""),
            card("UI Design", "Figma mockups"),
            card("Copywriting", "Design-aware product copy"),
            card("Video Editing", ""),
        ];
        let query = SearchQuery::parse("design").unwrap();
        assert_eq!(find_matches(&query, &cards), vec![0, 1, 2]);
    }

    #[test]
    fn report_kind_depends_on_count() {
        let query = SearchQuery::parse("design").unwrap();
        let (message, kind) = report(&query, 1);
        assert_eq!(kind, NotificationKind::Success);
        assert!(message.starts_with("1টি"));
        assert!(message.contains("\"design\""));

        let query = SearchQuery::parse("xyz").unwrap();
        let (message, kind) = report(&query, 0);
        assert_eq!(kind, NotificationKind::Info);
        assert!(message.contains("\"xyz\""));
    }
}
