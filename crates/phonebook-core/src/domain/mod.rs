pub mod contact;
pub mod ids;
pub mod phone;

pub use contact::{Contact, ContactField, ContactInput};
pub use ids::ContactId;
pub use phone::{format_phone_number, strip_phone_separators};
