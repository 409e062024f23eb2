pub mod contact;
pub mod manager;

pub use contact::Contact;
pub use manager::{ContactStore, LoadSummary};
