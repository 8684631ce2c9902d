//! ViewModels for the console commands
//!
//! Pure data containers built by presenters and rendered by views. They hold
//! raw values only; column widths, colors, and truncation belong to views.

use rolodex_types::UserId;
use serde::Serialize;

/// One row of the user table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRowViewModel {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub company: String,
    pub city: String,
}

/// The user table plus its filter summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserListViewModel {
    pub rows: Vec<UserRowViewModel>,
    /// Rows surviving the active filters
    pub shown: usize,
    /// Rows in the unfiltered directory
    pub total: usize,
}

/// One post under a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostItemViewModel {
    pub title: String,
    pub body: String,
}

/// A full profile: contact, address, company, and authored posts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDetailViewModel {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    /// Street and suite, comma-joined
    pub street_line: String,
    /// City and zipcode
    pub city_line: String,
    pub company: String,
    pub catch_phrase: String,
    pub posts: Vec<PostItemViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyListViewModel {
    pub companies: Vec<String>,
}
