//! Request and response DTOs for the board API.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
