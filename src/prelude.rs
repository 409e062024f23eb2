pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact},
    manager::{ContactStore, LoadSummary},
};
pub use crate::errors::AppError;
pub use crate::store::{self, ContactStorage, CsvStorage, TxtStorage};
