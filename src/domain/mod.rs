pub mod card;
pub mod column;
pub mod error;
pub mod status;

pub use card::Card;
pub use column::{Column, ColumnRole};
pub use error::EngineError;
pub use status::CardStatus;
