use std::fmt;

use rolodex_types::User;

/// Sentinel value that disables company filtering.
pub const ALL_COMPANIES: &str = "all";

/// Company filter over the displayed list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyFilter {
    /// Every company passes
    All,
    /// Exact match against the company name
    Company(String),
}

impl CompanyFilter {
    /// Parse a filter value; the literal sentinel "all" selects every company.
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_COMPANIES {
            CompanyFilter::All
        } else {
            CompanyFilter::Company(raw.to_string())
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        match self {
            CompanyFilter::All => true,
            CompanyFilter::Company(name) => user.company.name == *name,
        }
    }

    /// Step to the next option: All, each company ascending, back to All.
    ///
    /// `companies` is the sorted unique projection of the full user set. A
    /// current value no longer present there resets to All.
    pub fn cycle(&self, companies: &[String]) -> CompanyFilter {
        match self {
            CompanyFilter::All => match companies.first() {
                Some(first) => CompanyFilter::Company(first.clone()),
                None => CompanyFilter::All,
            },
            CompanyFilter::Company(name) => match companies.iter().position(|c| c == name) {
                Some(idx) if idx + 1 < companies.len() => {
                    CompanyFilter::Company(companies[idx + 1].clone())
                }
                _ => CompanyFilter::All,
            },
        }
    }
}

impl Default for CompanyFilter {
    fn default() -> Self {
        Self::All
    }
}

impl fmt::Display for CompanyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompanyFilter::All => write!(f, "{}", ALL_COMPANIES),
            CompanyFilter::Company(name) => write!(f, "{}", name),
        }
    }
}
