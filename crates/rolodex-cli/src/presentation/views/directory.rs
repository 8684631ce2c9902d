//! Console views for the directory commands
//!
//! Layout and styling only. Each view wraps a ViewModel and implements
//! `fmt::Display`; handlers print the result verbatim. Tables stay uncolored
//! so column widths line up; freeform detail lines get light styling.

use crate::presentation::view_models::{
    CompanyListViewModel, UserDetailViewModel, UserListViewModel,
};
use owo_colors::OwoColorize;
use std::fmt;

// --------------------------------------------------------
// User List View
// --------------------------------------------------------

pub struct UserListView<'a> {
    data: &'a UserListViewModel,
}

impl<'a> UserListView<'a> {
    pub fn new(data: &'a UserListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for UserListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.rows.is_empty() {
            if self.data.total == 0 {
                return writeln!(f, "The directory is empty.");
            }
            return writeln!(
                f,
                "No users match the active filters ({} in the directory).",
                self.data.total
            );
        }

        writeln!(
            f,
            "{:<4} {:<22} {:<28} {:<22} CITY",
            "ID", "NAME", "EMAIL", "COMPANY"
        )?;
        writeln!(f, "{}", "-".repeat(92))?;

        for row in &self.data.rows {
            writeln!(
                f,
                "{:<4} {:<22} {:<28} {:<22} {}",
                row.id, row.name, row.email, row.company, row.city
            )?;
        }

        if self.data.shown < self.data.total {
            writeln!(f)?;
            writeln!(f, "{} of {} users shown", self.data.shown, self.data.total)?;
        }

        Ok(())
    }
}

// --------------------------------------------------------
// User Detail View
// --------------------------------------------------------

pub struct UserDetailView<'a> {
    data: &'a UserDetailViewModel,
}

impl<'a> UserDetailView<'a> {
    pub fn new(data: &'a UserDetailViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for UserDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} ({})",
            self.data.name.bold(),
            self.data.username.dimmed()
        )?;
        writeln!(f)?;

        // Pad before styling: escape codes would count toward the width
        writeln!(f, "  {} {}", format!("{:<8}", "email").dimmed(), self.data.email)?;
        writeln!(f, "  {} {}", format!("{:<8}", "phone").dimmed(), self.data.phone)?;
        writeln!(
            f,
            "  {} {}",
            format!("{:<8}", "website").dimmed(),
            self.data.website
        )?;
        writeln!(f)?;

        writeln!(f, "{}", "Address".bold())?;
        writeln!(f, "  {}", self.data.street_line)?;
        writeln!(f, "  {}", self.data.city_line)?;
        writeln!(f)?;

        writeln!(f, "{}", "Company".bold())?;
        writeln!(f, "  {}", self.data.company)?;
        writeln!(f, "  \"{}\"", self.data.catch_phrase)?;
        writeln!(f)?;

        writeln!(f, "{}", format!("Posts ({})", self.data.posts.len()).bold())?;
        if self.data.posts.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for (index, post) in self.data.posts.iter().enumerate() {
            writeln!(f, "  {}. {}", index + 1, post.title)?;
            for line in post.body.lines() {
                writeln!(f, "     {}", line.dimmed())?;
            }
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Company List View
// --------------------------------------------------------

pub struct CompanyListView<'a> {
    data: &'a CompanyListViewModel,
}

impl<'a> CompanyListView<'a> {
    pub fn new(data: &'a CompanyListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for CompanyListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.companies.is_empty() {
            return writeln!(f, "No companies found.");
        }

        // One per line, pipe-friendly
        for company in &self.data.companies {
            writeln!(f, "{}", company)?;
        }

        Ok(())
    }
}
