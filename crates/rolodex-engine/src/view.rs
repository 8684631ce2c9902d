use std::collections::BTreeSet;

use rolodex_types::User;

use crate::filter::CompanyFilter;
use crate::sort::{SortSpec, sort_users};
use crate::term::SearchTerm;

/// The three view transforms bundled: search, company filter, sort.
///
/// The displayed list is always a pure function of (full user set, search
/// term, company filter, sort spec). The default query is the identity and
/// yields the input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryQuery {
    pub search: SearchTerm,
    pub company: CompanyFilter,
    pub sort: Option<SortSpec>,
}

impl DirectoryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, raw: &str) -> Self {
        self.search = SearchTerm::new(raw);
        self
    }

    pub fn company(mut self, filter: CompanyFilter) -> Self {
        self.company = filter;
        self
    }

    pub fn sort(mut self, spec: SortSpec) -> Self {
        self.sort = Some(spec);
        self
    }
}

/// Derive the displayed list: filters (search, company) apply before sort.
pub fn apply(users: &[User], query: &DirectoryQuery) -> Vec<User> {
    let mut visible: Vec<User> = users
        .iter()
        .filter(|user| query.search.matches(user) && query.company.matches(user))
        .cloned()
        .collect();
    if let Some(spec) = query.sort {
        sort_users(&mut visible, spec);
    }
    visible
}

/// Sorted, deduplicated projection of company names.
///
/// Backs the company-filter options, so it always derives from the full
/// user set, never from the filtered view.
pub fn unique_companies(users: &[User]) -> Vec<String> {
    let names: BTreeSet<String> = users.iter().map(|u| u.company.name.clone()).collect();
    names.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use rolodex_testing::fixtures::{sample_user, sample_users};

    use super::*;
    use crate::sort::SortKey;

    #[test]
    fn test_empty_term_is_identity() {
        let users = sample_users();
        let all = apply(&users, &DirectoryQuery::new());
        assert_eq!(all, users);

        // Re-filtering any result with the empty term changes nothing.
        let narrowed = apply(&users, &DirectoryQuery::new().search("erv"));
        let again = apply(&narrowed, &DirectoryQuery::new().search(""));
        assert_eq!(again, narrowed);
    }

    #[test]
    fn test_search_is_idempotent() {
        let users = sample_users();
        let query = DirectoryQuery::new().search("an");
        let once = apply(&users, &query);
        let twice = apply(&once, &query);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_search_scenario_erv_finds_ervin() {
        let users = vec![
            sample_user(1, "Leanne Graham", "Romaguera-Crona", "Gwenborough"),
            sample_user(2, "Ervin Howell", "Deckow-Crist", "Wisokyburgh"),
        ];
        let found = apply(&users, &DirectoryQuery::new().search("erv"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Ervin Howell");
    }

    #[test]
    fn test_company_all_is_passthrough() {
        let users = sample_users();
        let all = apply(&users, &DirectoryQuery::new().company(CompanyFilter::All));
        assert_eq!(all, users);
    }

    #[test]
    fn test_company_filter_keeps_exact_matches_only() {
        let users = sample_users();
        let query =
            DirectoryQuery::new().company(CompanyFilter::Company("Romaguera-Crona".to_string()));
        let filtered = apply(&users, &query);
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|u| u.company.name == "Romaguera-Crona"));
    }

    #[test]
    fn test_filters_compose_before_sort() {
        let users = vec![
            sample_user(1, "Carla", "Acme", "Zurich"),
            sample_user(2, "Abel", "Acme", "Oslo"),
            sample_user(3, "Badu", "Other", "Lima"),
        ];
        let query = DirectoryQuery::new()
            .search("a")
            .company(CompanyFilter::Company("Acme".to_string()))
            .sort(SortSpec::ascending(SortKey::Name));
        let visible = apply(&users, &query);
        let names: Vec<&str> = visible.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Abel", "Carla"]);
    }

    #[test]
    fn test_unique_companies_sorted_and_deduplicated() {
        let users = vec![
            sample_user(1, "A", "Zeta Works", "X"),
            sample_user(2, "B", "Acme", "Y"),
            sample_user(3, "C", "Acme", "Z"),
            sample_user(4, "D", "Midway", "W"),
        ];
        assert_eq!(unique_companies(&users), ["Acme", "Midway", "Zeta Works"]);
        assert!(unique_companies(&[]).is_empty());
    }
}
