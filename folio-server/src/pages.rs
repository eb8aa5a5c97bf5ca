use axum::{http::Uri, Extension};
use axum_extra::routing::TypedPath;
use folio_common_html::{page::standalone_page, CertificationsView};
use folio_core::{error::FolioError, error::FolioResult, state::FolioState};
use maud::{Markup, Render};
use tracing::instrument;

#[derive(TypedPath, Debug)]
#[typed_path("/")]
pub struct PathIndex;

#[derive(TypedPath, Debug)]
#[typed_path("/certifications")]
pub struct PathCertifications;

#[derive(TypedPath, Debug)]
#[typed_path("/healthz")]
pub struct PathHealthz;

/// The bare certifications section for the configured list.
pub fn certifications_fragment(state: &FolioState) -> Markup {
    CertificationsView::new(state.certifications()).render()
}

/// A complete page around [`certifications_fragment`].
pub fn certifications_document(state: &FolioState) -> Markup {
    standalone_page(&state.config().page_title, certifications_fragment(state))
}

#[instrument(skip_all)]
pub async fn index(_path: PathIndex, Extension(state): Extension<FolioState>) -> FolioResult<Markup> {
    Ok(certifications_document(&state))
}

#[instrument(skip_all)]
pub async fn certifications(
    _path: PathCertifications,
    Extension(state): Extension<FolioState>,
) -> FolioResult<Markup> {
    Ok(certifications_fragment(&state))
}

pub async fn healthz(_path: PathHealthz) -> &'static str {
    "ok"
}

pub async fn not_found(uri: Uri) -> FolioError {
    debug!("no route for {}", uri.path());
    FolioError::PageNotFound(uri.path().to_string())
}
