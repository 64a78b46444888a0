use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Config: {}", .0)]
    Config(String),

    #[error("IO::{:?}: {}", .0, .0)]
    Io(#[from] std::io::Error),
}
