use std::{fs::File, io::BufReader, path::PathBuf, sync::Arc};

use folio_models::CertificationRecord;
use tracing::instrument;

use crate::{config::Configuration, error::FolioError, error::FolioResult};

/// Where the certification list shown on the page comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertificationSource {
    /// No list supplied, the view falls back to its built-in records
    BuiltIn,
    File(PathBuf),
}

impl CertificationSource {
    pub fn from_config(config: &Configuration) -> Self {
        match &config.certifications_file {
            Some(path) => Self::File(path.clone()),
            None => Self::BuiltIn,
        }
    }

    /// Loads the supplied list.
    ///
    /// `None` means nothing was supplied. A file holding `[]` is an explicit
    /// empty list and comes back as `Some`.
    #[instrument]
    pub fn load(&self) -> FolioResult<Option<Arc<[CertificationRecord]>>> {
        match self {
            Self::BuiltIn => {
                debug!("no certification file configured, using built-in list");
                Ok(None)
            }
            Self::File(path) => {
                let file = File::open(path)
                    .map_err(|e| FolioError::CertificationSource(path.clone(), e.into()))?;
                let records = CertificationRecord::list_from_reader(BufReader::new(file))
                    .map_err(|e| FolioError::CertificationSource(path.clone(), e))?;
                info!(
                    "loaded {} certifications from {}",
                    records.len(),
                    path.display()
                );
                Ok(Some(records.into()))
            }
        }
    }
}
