pub mod book;
pub mod csv;
pub mod domain;
pub mod dto;
pub mod error;
pub mod rules;

pub use book::{ContactBook, ContactRef, PendingDelete};
pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use rules::*;
