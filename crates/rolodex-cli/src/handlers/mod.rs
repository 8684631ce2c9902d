pub mod browse;
pub mod companies;
pub mod list;
pub mod show;
