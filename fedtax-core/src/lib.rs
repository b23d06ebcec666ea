pub mod calculations;
pub mod models;
pub mod tables;
pub mod taxpayer;

pub use models::*;
pub use taxpayer::Taxpayer;
