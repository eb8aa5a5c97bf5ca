use std::sync::Arc;

use folio_models::CertificationRecord;

use crate::{config::Configuration, error::FolioResult, source::CertificationSource};

/// Shared, read-only application state handed to every request.
#[derive(Clone, Debug)]
pub struct FolioState {
    pub config: Configuration,
    certifications: Option<Arc<[CertificationRecord]>>,
}

impl FolioState {
    pub fn new(config: Configuration) -> FolioResult<Self> {
        let certifications = CertificationSource::from_config(&config).load()?;
        Ok(Self {
            config,
            certifications,
        })
    }

    pub fn with_certifications(
        config: Configuration,
        certifications: Option<Vec<CertificationRecord>>,
    ) -> Self {
        Self {
            config,
            certifications: certifications.map(Into::into),
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// The list the host supplied, if any.
    pub fn certifications(&self) -> Option<&[CertificationRecord]> {
        self.certifications.as_deref()
    }
}
