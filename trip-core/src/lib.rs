pub mod calculations;
pub mod models;
pub mod settings;

pub use models::*;
