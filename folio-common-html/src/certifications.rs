use std::time::Duration;

use folio_core::reveal::{RevealChoreography, RevealTarget};
use folio_models::{default_certifications, CertificationRecord};
use maud::{html, Markup, Render};

use crate::icons;

pub const SECTION_TITLE: &str = "AWS Certifications";
pub const SECTION_SUBTITLE: &str =
    "Professional certifications demonstrating expertise in cloud technologies";
pub const VERIFY_LABEL: &str = "Verify on Credly";

/// The certifications section: a heading followed by one card per record.
///
/// Rendering is a pure function of the record list. The only mutable state
/// tied to the output is the reveal flags, which live with whoever tracks
/// visibility (the bundled script, or a [`RevealChoreography`]).
#[derive(Debug, Clone, Copy)]
pub struct CertificationsView<'a> {
    certifications: &'a [CertificationRecord],
}

/// One grid cell, in display order.
#[derive(Debug, Clone, Copy)]
pub struct CertificationCell<'a> {
    pub index: usize,
    pub record: &'a CertificationRecord,
}

impl<'a> CertificationsView<'a> {
    /// Falls back to the built-in list only when no list is supplied at all,
    /// an empty list renders an empty grid.
    pub fn new(certifications: Option<&'a [CertificationRecord]>) -> Self {
        let certifications = match certifications {
            Some(v) => v,
            None => {
                trace!("no certifications supplied, using defaults");
                default_certifications()
            }
        };
        Self { certifications }
    }

    pub fn certifications(&self) -> &'a [CertificationRecord] {
        self.certifications
    }

    pub fn cells(&self) -> impl Iterator<Item = CertificationCell<'a>> + 'a {
        self.certifications
            .iter()
            .enumerate()
            .map(|(index, record)| CertificationCell { index, record })
    }

    /// Fresh reveal flags for this render, everything unrevealed.
    pub fn choreography(&self) -> RevealChoreography {
        RevealChoreography::new(self.certifications.len())
    }

    fn heading(&self) -> Markup {
        html! {
            .certifications__header
                data-reveal=(RevealTarget::Heading.to_string())
                data-reveal-delay=(delay_ms(RevealTarget::Heading.delay())) {
                h2.certifications__title { (SECTION_TITLE) }
                p.certifications__subtitle { (SECTION_SUBTITLE) }
            }
        }
    }
}

impl<'a> CertificationCell<'a> {
    pub fn target(&self) -> RevealTarget {
        RevealTarget::Cell(self.index)
    }

    pub fn reveal_delay(&self) -> Duration {
        self.target().delay()
    }

    pub fn verification_url(&self) -> Option<String> {
        self.record.verification_url()
    }
}

impl Render for CertificationCell<'_> {
    fn render(&self) -> Markup {
        let record = self.record;
        html! {
            .certification
                data-reveal=(self.target().to_string())
                data-reveal-delay=(delay_ms(self.reveal_delay())) {
                article.certification__card {
                    @if let Some(image_url) = record.image_url() {
                        .certification__badge {
                            img src=(image_url) alt=(record.name) loading="lazy";
                        }
                    }
                    h3.certification__name { (record.name) }
                    .certification__meta {
                        (icons::award())
                        span.certification__issuer { (record.issuer) }
                    }
                    .certification__meta {
                        (icons::calendar())
                        span.certification__date { (record.date) }
                    }
                    @if let Some(url) = self.verification_url() {
                        .certification__verify {
                            a.certification__link href=(url) target="_blank" rel="noopener noreferrer" {
                                (VERIFY_LABEL)
                            }
                        }
                    }
                }
            }
        }
    }
}

impl Render for CertificationsView<'_> {
    fn render(&self) -> Markup {
        html! {
            section.certifications #certifications {
                .certifications__inner {
                    (self.heading())
                    .certifications__grid {
                        @for cell in self.cells() {
                            (cell)
                        }
                    }
                }
            }
        }
    }
}

fn delay_ms(delay: Duration) -> String {
    delay.as_millis().to_string()
}
