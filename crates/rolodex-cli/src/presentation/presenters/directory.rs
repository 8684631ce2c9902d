//! Presenters for the console commands
//!
//! Pure functions from domain types to ViewModels. No I/O and no layout
//! decisions; those belong to handlers and views respectively.

use crate::presentation::view_models::{
    CompanyListViewModel, PostItemViewModel, UserDetailViewModel, UserListViewModel,
    UserRowViewModel,
};
use rolodex_engine::unique_companies;
use rolodex_types::{User, UserDetail};

pub fn present_user_row(user: &User) -> UserRowViewModel {
    UserRowViewModel {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        company: user.company.name.clone(),
        city: user.address.city.clone(),
    }
}

pub fn present_user_list(visible: &[User], total: usize) -> UserListViewModel {
    UserListViewModel {
        rows: visible.iter().map(present_user_row).collect(),
        shown: visible.len(),
        total,
    }
}

pub fn present_user_detail(detail: &UserDetail) -> UserDetailViewModel {
    let user = &detail.user;

    UserDetailViewModel {
        id: user.id,
        name: user.name.clone(),
        username: user.username.clone(),
        email: user.email.clone(),
        phone: user.phone.clone(),
        website: user.website.clone(),
        street_line: format!("{}, {}", user.address.street, user.address.suite),
        city_line: format!("{} {}", user.address.city, user.address.zipcode),
        company: user.company.name.clone(),
        catch_phrase: user.company.catch_phrase.clone(),
        posts: detail
            .posts
            .iter()
            .map(|post| PostItemViewModel {
                title: post.title.clone(),
                body: post.body.clone(),
            })
            .collect(),
    }
}

pub fn present_companies(users: &[User]) -> CompanyListViewModel {
    CompanyListViewModel {
        companies: unique_companies(users),
    }
}
