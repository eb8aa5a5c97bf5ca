#[macro_use]
extern crate tracing;

mod models;
pub use models::*;

#[derive(thiserror::Error, Debug)]
pub enum FolioModelError {
    #[error("Could not deserialize certification list: {}", .0)]
    SerdeJson(#[from] serde_json::Error),
    #[error("IO Error: {}", .0)]
    IOError(#[from] std::io::Error),
}

pub type FolioModelResult<T> = std::result::Result<T, FolioModelError>;
