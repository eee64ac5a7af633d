pub mod normalized_user;
pub mod token_payload;

pub use normalized_user::*;
pub use token_payload::*;
