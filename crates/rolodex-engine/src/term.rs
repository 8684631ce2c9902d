use rolodex_types::User;

/// Free-text search term, normalized at construction.
///
/// Normalization is trim + lowercase; an empty or whitespace-only input
/// produces the empty term, which matches every user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring match against the display name.
    pub fn matches(&self, user: &User) -> bool {
        self.0.is_empty() || user.name.to_lowercase().contains(&self.0)
    }
}

impl From<&str> for SearchTerm {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
