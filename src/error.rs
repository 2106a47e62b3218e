use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Password length must be at least 1 (got {length})")]
    InvalidLength { length: usize },

    #[error("Character pool is empty")]
    EmptyPool,

    #[error("Seed phrase cannot be empty")]
    EmptySeed,
}

pub type Result<T> = std::result::Result<T, Error>;
