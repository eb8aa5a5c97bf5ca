#[macro_use]
extern crate tracing;

use folio_core::reveal::{REVEAL_DURATION, REVEAL_OFFSET_PX};
use folio_dependencies::lazy_static;

pub mod certifications;
pub mod icons;
pub mod page;

pub use certifications::CertificationsView;

/// Marks a reveal target, the value names the target (`heading`, `cell-N`).
pub const REVEAL_ATTR: &str = "data-reveal";
/// Stagger delay of a reveal target in milliseconds.
pub const REVEAL_DELAY_ATTR: &str = "data-reveal-delay";
/// Added to a reveal target once it has entered the viewport.
pub const REVEALED_CLASS: &str = "is-revealed";
/// Set on `<html>` while the reveal script is able to run.
pub const SCRIPTED_ROOT_CLASS: &str = "js-reveal";

const STYLESHEET_TEMPLATE: &str = include_str!("../assets/folio.css");
const REVEAL_SCRIPT_TEMPLATE: &str = include_str!("../assets/reveal.js");

lazy_static::lazy_static! {
    /// Stylesheet for the certifications section, including the reveal transition.
    pub static ref STYLESHEET: String = fill_template(STYLESHEET_TEMPLATE);

    /// Runs in `<head>`, hides reveal targets only when scripting is available.
    pub static ref REVEAL_BOOTSTRAP: String =
        format!("document.documentElement.classList.add('{SCRIPTED_ROOT_CLASS}');");

    /// Applies each target's stagger delay, then reveals it once on first
    /// intersection and stops observing it.
    pub static ref REVEAL_SCRIPT: String = fill_template(REVEAL_SCRIPT_TEMPLATE);
}

fn fill_template(template: &str) -> String {
    template
        .replace("__SCRIPTED_ROOT_CLASS__", SCRIPTED_ROOT_CLASS)
        .replace("__REVEALED_CLASS__", REVEALED_CLASS)
        .replace("__REVEAL_DELAY_ATTR__", REVEAL_DELAY_ATTR)
        .replace("__REVEAL_ATTR__", REVEAL_ATTR)
        .replace("__REVEAL_OFFSET_PX__", &REVEAL_OFFSET_PX.to_string())
        .replace(
            "__REVEAL_DURATION_MS__",
            &REVEAL_DURATION.as_millis().to_string(),
        )
}
