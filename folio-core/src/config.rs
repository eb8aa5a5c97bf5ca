use std::{net::SocketAddr, path::PathBuf, str::FromStr};

use crate::error::FolioResult;

pub const ENV_PREFIX: &str = "FOLIO_";

fn default_listen_on() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8000))
}

fn default_page_title() -> String {
    "Certifications".to_string()
}

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    #[serde(default = "default_listen_on")]
    pub listen_on: SocketAddr,
    /// JSON file holding an array of certification records.
    /// When unset the built-in list is shown.
    #[serde(default)]
    pub certifications_file: Option<PathBuf>,
    /// Used for the document `<title>` of the standalone page
    #[serde(default = "default_page_title")]
    pub page_title: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            listen_on: default_listen_on(),
            certifications_file: None,
            page_title: default_page_title(),
        }
    }
}

impl Configuration {
    /// Reads `FOLIO_*` variables from the process environment.
    pub fn from_env() -> FolioResult<Self> {
        Ok(envy::prefixed(ENV_PREFIX).from_env::<Self>()?)
    }

    pub fn from_iter<I: IntoIterator<Item = (String, String)>>(vars: I) -> FolioResult<Self> {
        Ok(envy::prefixed(ENV_PREFIX).from_iter::<_, Self>(vars)?)
    }

    pub fn set_listen_on<S: AsRef<str>>(&mut self, listen_on: S) -> FolioResult<()> {
        self.listen_on = SocketAddr::from_str(listen_on.as_ref())?;
        Ok(())
    }

    pub fn set_certifications_file<P: Into<PathBuf>>(&mut self, path: P) {
        self.certifications_file = Some(path.into());
    }
}
