pub mod service;

pub use crate::domain::model::{ContactSubmission, Program, User};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
