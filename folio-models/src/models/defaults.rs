use folio_dependencies::lazy_static;

use crate::CertificationRecord;

lazy_static::lazy_static! {
    /// Shown whenever the host does not supply its own list.
    pub static ref DEFAULT_CERTIFICATIONS: Vec<CertificationRecord> = vec![
        CertificationRecord::new(
            "AWS Certified Solutions Architect - Associate",
            "Amazon Web Services",
            "2024",
        )
        .with_credential_id("9caedd49-5ae9-4531-b76b-6ec64bc556fc")
        .with_image_url("https://images.credly.com/size/340x340/images/0e284c3f-5164-4b21-8660-0d84737941bc/image.png"),
        CertificationRecord::new(
            "AWS Certified Data Engineer - Associate",
            "Amazon Web Services",
            "2023",
        )
        .with_credential_id("1b8a9a9e-3db5-488a-8fef-32a5ec86515a")
        .with_image_url("https://images.credly.com/images/e5c85d7f-4e50-431e-b5af-fa9d9b0596e7/image.png"),
        CertificationRecord::new(
            "AWS Certified Cloud Practitioner",
            "Amazon Web Services",
            "2023",
        )
        .with_credential_id("d1a348c7-6a37-4685-b732-62d011672af3")
        .with_image_url("https://images.credly.com/size/340x340/images/00634f82-b07f-4bbd-a6bb-53de397fc3a6/image.png"),
    ];
}

pub fn default_certifications() -> &'static [CertificationRecord] {
    DEFAULT_CERTIFICATIONS.as_slice()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn test_default_table() {
        let tuples: Vec<(&str, &str, &str, Option<&str>)> = default_certifications()
            .iter()
            .map(|c| (c.name.as_str(), c.issuer.as_str(), c.date.as_str(), c.credential_id()))
            .collect();
        assert_eq!(
            vec![
                (
                    "AWS Certified Solutions Architect - Associate",
                    "Amazon Web Services",
                    "2024",
                    Some("9caedd49-5ae9-4531-b76b-6ec64bc556fc")
                ),
                (
                    "AWS Certified Data Engineer - Associate",
                    "Amazon Web Services",
                    "2023",
                    Some("1b8a9a9e-3db5-488a-8fef-32a5ec86515a")
                ),
                (
                    "AWS Certified Cloud Practitioner",
                    "Amazon Web Services",
                    "2023",
                    Some("d1a348c7-6a37-4685-b732-62d011672af3")
                ),
            ],
            tuples
        );
    }

    #[test]
    pub fn test_default_table_is_shared() {
        assert!(std::ptr::eq(default_certifications(), default_certifications()));
        assert!(default_certifications().iter().all(|c| c.image_url().is_some()));
    }
}
