pub mod browse;
pub mod directory;

pub use browse::build_screen_view_model;
pub use directory::{present_companies, present_user_detail, present_user_list, present_user_row};
