use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::{REVEAL_BOOTSTRAP, REVEAL_SCRIPT, STYLESHEET};

/// Wraps a fragment into a self-contained HTML document with the
/// stylesheet and the reveal script inlined.
pub fn standalone_page<S: AsRef<str>>(title: S, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="generator" content="folio";
                title { (title.as_ref()) }
                script { (PreEscaped(REVEAL_BOOTSTRAP.as_str())) }
                style { (PreEscaped(STYLESHEET.as_str())) }
            }
            body {
                main {
                    (body)
                }
                script { (PreEscaped(REVEAL_SCRIPT.as_str())) }
            }
        }
    }
}
