//! Model error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Discipline already on sheet: {0}")]
    DuplicateDiscipline(String),

    #[error("No such XP entry at index {0}")]
    XpEntryOutOfRange(usize),

    #[error("No such session log at index {0}")]
    SessionOutOfRange(usize),
}
