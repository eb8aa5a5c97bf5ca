use folio_dependencies::{
    axum::{
        headers::{ContentType, HeaderMapExt},
        http::HeaderMap,
        response::{IntoResponse, Response},
    },
    http::StatusCode,
};
use folio_models::FolioModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("IO Error: {0}")]
    IO(#[from] std::io::Error),
    #[error("Configuration Error: {0}")]
    Envy(#[from] envy::Error),
    #[error("Could not parse socket address: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
    #[error("Could not read certifications from {0:?}: {1}")]
    CertificationSource(std::path::PathBuf, FolioModelError),
    #[error("The page located under {0:?} could not be found")]
    PageNotFound(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type FolioResult<T> = std::result::Result<T, FolioError>;

impl IntoResponse for FolioError {
    fn into_response(self) -> Response {
        let status = match self {
            FolioError::PageNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error!("Error presented to user: {:?}", self);
        let c = maud::html! {
            @if status == StatusCode::NOT_FOUND {
                "Not Found"
            } @else {
                "Internal Error"
            }
            br;
        };
        let c: String = c.into_string();
        let mut hm = HeaderMap::new();
        hm.typed_insert(ContentType::html());
        (status, hm, c).into_response()
    }
}
