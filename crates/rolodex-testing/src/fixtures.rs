//! Sample directory records mirroring the upstream API's fixture data.
//!
//! The first two users are the pair the search acceptance scenario is
//! written against; keep their names, companies, and cities verbatim.

use rolodex_types::{Address, Comment, Company, Geo, Post, PostId, User, UserId};

/// Build a complete user record from the fields the view transforms read.
///
/// Everything else is filled with stable placeholder data so tests can
/// construct users without spelling out the whole wire schema.
pub fn sample_user(id: u64, name: &str, company: &str, city: &str) -> User {
    let id = UserId::new(id).expect("sample ids are nonzero");
    let username = name.split_whitespace().next().unwrap_or("user").to_string();
    User {
        id,
        name: name.to_string(),
        username: username.clone(),
        email: format!("{}@example.com", username.to_lowercase()),
        address: Address {
            street: "Kulas Light".to_string(),
            suite: format!("Apt. {}", id),
            city: city.to_string(),
            zipcode: "92998-3874".to_string(),
            geo: Geo {
                lat: "-37.3159".to_string(),
                lng: "81.1496".to_string(),
            },
        },
        phone: "1-770-736-8031 x56442".to_string(),
        website: "example.org".to_string(),
        company: Company {
            name: company.to_string(),
            catch_phrase: "Multi-layered client-server neural-net".to_string(),
            bs: "harness real-time e-markets".to_string(),
        },
    }
}

/// The first five users of the upstream fixture set.
pub fn sample_users() -> Vec<User> {
    vec![
        sample_user(1, "Leanne Graham", "Romaguera-Crona", "Gwenborough"),
        sample_user(2, "Ervin Howell", "Deckow-Crist", "Wisokyburgh"),
        sample_user(3, "Clementine Bauch", "Romaguera-Jacobson", "McKenziehaven"),
        sample_user(4, "Patricia Lebsack", "Robel-Corkery", "South Elvis"),
        sample_user(5, "Chelsey Dietrich", "Keebler LLC", "Roscoeview"),
    ]
}

/// Three posts for one author, ids derived from the user id.
pub fn sample_posts(user_id: UserId) -> Vec<Post> {
    let titles = [
        "sunt aut facere repellat",
        "qui est esse",
        "ea molestias quasi exercitationem",
    ];
    titles
        .iter()
        .enumerate()
        .map(|(n, title)| Post {
            user_id,
            id: PostId::new(user_id.get() * 10 + n as u64 + 1).expect("derived ids are nonzero"),
            title: (*title).to_string(),
            body: "quia et suscipit suscipit recusandae consequuntur".to_string(),
        })
        .collect()
}

/// Two comments for one post.
pub fn sample_comments(post_id: PostId) -> Vec<Comment> {
    vec![
        Comment {
            post_id,
            id: post_id.get() * 100 + 1,
            name: "id labore ex et quam laborum".to_string(),
            email: "Eliseo@gardner.biz".to_string(),
            body: "laudantium enim quasi est quidem magnam".to_string(),
        },
        Comment {
            post_id,
            id: post_id.get() * 100 + 2,
            name: "quo vero reiciendis velit similique earum".to_string(),
            email: "Jayne_Kuhic@sydney.com".to_string(),
            body: "est natus enim nihil est dolore".to_string(),
        },
    ]
}
