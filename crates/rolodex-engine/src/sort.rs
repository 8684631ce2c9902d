use std::fmt;

use rolodex_types::User;

/// Field a directory listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Company,
    City,
}

impl SortKey {
    fn extract(self, user: &User) -> String {
        let raw = match self {
            SortKey::Name => &user.name,
            SortKey::Company => &user.company.name,
            SortKey::City => &user.address.city,
        };
        raw.to_lowercase()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Name => write!(f, "name"),
            SortKey::Company => write!(f, "company"),
            SortKey::City => write!(f, "city"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Ascending
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "asc"),
            SortDirection::Descending => write!(f, "desc"),
        }
    }
}

/// Sort specification: key plus direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn ascending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    pub fn descending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Descending)
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key, self.direction)
    }
}

/// Sort in place, case-insensitively on the chosen key.
///
/// `sort_by` is stable, so equal keys keep their input order in both
/// directions; descending swaps the comparator operands rather than
/// reversing the result, which preserves that guarantee.
pub fn sort_users(users: &mut [User], spec: SortSpec) {
    users.sort_by(|a, b| {
        let ka = spec.key.extract(a);
        let kb = spec.key.extract(b);
        match spec.direction {
            SortDirection::Ascending => ka.cmp(&kb),
            SortDirection::Descending => kb.cmp(&ka),
        }
    });
}

const SORT_RING: [SortSpec; 6] = [
    SortSpec { key: SortKey::Name, direction: SortDirection::Ascending },
    SortSpec { key: SortKey::Name, direction: SortDirection::Descending },
    SortSpec { key: SortKey::Company, direction: SortDirection::Ascending },
    SortSpec { key: SortKey::Company, direction: SortDirection::Descending },
    SortSpec { key: SortKey::City, direction: SortDirection::Ascending },
    SortSpec { key: SortKey::City, direction: SortDirection::Descending },
];

/// Step through the sort options: unsorted, each key in both directions,
/// back to unsorted.
pub fn cycle_sort(current: Option<SortSpec>) -> Option<SortSpec> {
    match current {
        None => Some(SORT_RING[0]),
        Some(spec) => match SORT_RING.iter().position(|s| *s == spec) {
            Some(idx) if idx + 1 < SORT_RING.len() => Some(SORT_RING[idx + 1]),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use rolodex_testing::fixtures::sample_user;

    use super::*;

    #[test]
    fn test_sort_is_case_insensitive() {
        let mut users = vec![
            sample_user(1, "zeta", "A Co", "Alpha"),
            sample_user(2, "Alpha", "B Co", "Beta"),
        ];
        sort_users(&mut users, SortSpec::ascending(SortKey::Name));
        assert_eq!(users[0].name, "Alpha");
        assert_eq!(users[1].name, "zeta");
    }

    #[test]
    fn test_descending_reverses_distinct_keys() {
        let mut users = vec![
            sample_user(1, "Ana", "A Co", "Alpha"),
            sample_user(2, "Bob", "B Co", "Beta"),
        ];
        sort_users(&mut users, SortSpec::descending(SortKey::Name));
        assert_eq!(users[0].name, "Bob");
        assert_eq!(users[1].name, "Ana");
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let mut users = vec![
            sample_user(1, "Ana", "Same Co", "Alpha"),
            sample_user(2, "Bob", "Same Co", "Beta"),
            sample_user(3, "Cid", "Aardvark", "Gamma"),
        ];
        sort_users(&mut users, SortSpec::ascending(SortKey::Company));
        assert_eq!(users[0].name, "Cid");
        // Ana and Bob share a key; their relative order is the input order.
        assert_eq!(users[1].name, "Ana");
        assert_eq!(users[2].name, "Bob");
    }

    #[test]
    fn test_equal_keys_keep_input_order_descending() {
        let mut users = vec![
            sample_user(1, "Ana", "Same Co", "Alpha"),
            sample_user(2, "Bob", "Same Co", "Beta"),
            sample_user(3, "Cid", "Aardvark", "Gamma"),
        ];
        sort_users(&mut users, SortSpec::descending(SortKey::Company));
        assert_eq!(users[0].name, "Ana");
        assert_eq!(users[1].name, "Bob");
        assert_eq!(users[2].name, "Cid");
    }

    #[test]
    fn test_cycle_sort_visits_every_spec_once() {
        let mut seen = Vec::new();
        let mut current = None;
        loop {
            current = cycle_sort(current);
            match current {
                Some(spec) => seen.push(spec),
                None => break,
            }
        }
        assert_eq!(seen.len(), 6);
        assert_eq!(seen[0], SortSpec::ascending(SortKey::Name));
        assert_eq!(seen[5], SortSpec::descending(SortKey::City));
    }
}
