pub mod browse;
pub mod directory;

pub use browse::*;
pub use directory::*;
