use std::io::Read;

use crate::FolioModelResult;

/// A single professional certification as shown on the portfolio.
///
/// Records are plain values. Their position in a list is their identity,
/// nothing here is unique or validated beyond the optional fields being present.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    /// Free-form label, usually just the year
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Builds the public Credly badge page for a credential.
///
/// The identifier is pasted into the path as-is, callers own its well-formedness.
pub fn credly_verification_url<S: AsRef<str>>(credential_id: S) -> String {
    format!(
        "https://www.credly.com/badges/{}/public_url",
        credential_id.as_ref()
    )
}

impl CertificationRecord {
    pub fn new<S1: Into<String>, S2: Into<String>, S3: Into<String>>(
        name: S1,
        issuer: S2,
        date: S3,
    ) -> Self {
        Self {
            name: name.into(),
            issuer: issuer.into(),
            date: date.into(),
            credential_id: None,
            image_url: None,
        }
    }

    pub fn with_credential_id<S: Into<String>>(mut self, credential_id: S) -> Self {
        self.credential_id = Some(credential_id.into());
        self
    }

    pub fn with_image_url<S: Into<String>>(mut self, image_url: S) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// An empty identifier counts as absent.
    pub fn credential_id(&self) -> Option<&str> {
        self.credential_id.as_deref().filter(|x| !x.is_empty())
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|x| !x.is_empty())
    }

    /// The verification link target, if the record carries a credential id.
    pub fn verification_url(&self) -> Option<String> {
        self.credential_id().map(credly_verification_url)
    }

    /// Parses a JSON array of records.
    pub fn list_from_json<S: AsRef<str>>(data: S) -> FolioModelResult<Vec<Self>> {
        let list: Vec<Self> = serde_json::from_str(data.as_ref())?;
        trace!("parsed {} certification records", list.len());
        Ok(list)
    }

    pub fn list_from_reader<R: Read>(reader: R) -> FolioModelResult<Vec<Self>> {
        let list: Vec<Self> = serde_json::from_reader(reader)?;
        trace!("read {} certification records", list.len());
        Ok(list)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn test_verification_url_is_verbatim() {
        assert_eq!(
            "https://www.credly.com/badges/X/public_url",
            credly_verification_url("X")
        );
        assert_eq!(
            "https://www.credly.com/badges/a b/c?d/public_url",
            credly_verification_url("a b/c?d"),
            "identifiers must not be encoded"
        );
    }

    #[test]
    pub fn test_record_without_credential_has_no_link() {
        let record = CertificationRecord::new("Name", "Issuer", "2024");
        assert_eq!(None, record.verification_url());
        let record = record.with_credential_id("");
        assert_eq!(None, record.verification_url());
        let record = record.with_credential_id("abc");
        assert_eq!(
            Some("https://www.credly.com/badges/abc/public_url".to_string()),
            record.verification_url()
        );
    }

    #[test]
    pub fn test_json_uses_camel_case_and_tolerates_missing_fields() {
        let list = CertificationRecord::list_from_json(
            r#"[
                {"name": "A", "issuer": "B", "date": "2020", "credentialId": "id-1", "imageUrl": "https://example.com/a.png"},
                {"name": "C", "issuer": "D", "date": "2021", "imageUrl": null},
                {"name": "E"}
            ]"#,
        )
        .unwrap();
        assert_eq!(3, list.len());
        assert_eq!(Some("id-1"), list[0].credential_id());
        assert_eq!(Some("https://example.com/a.png"), list[0].image_url());
        assert_eq!(None, list[1].image_url());
        assert_eq!("E", list[2].name);
        assert_eq!("", list[2].issuer);
        assert_eq!("", list[2].date);
    }

    #[test]
    pub fn test_json_skips_absent_optionals() {
        let record = CertificationRecord::new("A", "B", "2020");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(r#"{"name":"A","issuer":"B","date":"2020"}"#, json);
    }

    #[test]
    pub fn test_list_from_reader() {
        let data = br#"[{"name": "A", "issuer": "B", "date": "2020"}]"#;
        let list = CertificationRecord::list_from_reader(&data[..]).unwrap();
        assert_eq!(vec![CertificationRecord::new("A", "B", "2020")], list);
    }

    #[test]
    pub fn test_invalid_json_is_an_error() {
        assert!(CertificationRecord::list_from_json("{not json").is_err());
    }
}
