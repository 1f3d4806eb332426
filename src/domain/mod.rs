pub mod error;
pub mod language;
pub mod messages;
pub mod model;
pub mod traits;
