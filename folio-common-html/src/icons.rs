use maud::{html, Markup};

// Outline glyphs on a 24x24 grid, drawn with the current text color.

pub fn award() -> Markup {
    html! {
        svg.icon.icon--award xmlns="http://www.w3.org/2000/svg" width="16" height="16"
            viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" {
            circle cx="12" cy="8" r="6" {}
            path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11" {}
        }
    }
}

pub fn calendar() -> Markup {
    html! {
        svg.icon.icon--calendar xmlns="http://www.w3.org/2000/svg" width="16" height="16"
            viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" {
            rect width="18" height="18" x="3" y="4" rx="2" ry="2" {}
            line x1="16" x2="16" y1="2" y2="6" {}
            line x1="8" x2="8" y1="2" y2="6" {}
            line x1="3" x2="21" y1="10" y2="10" {}
        }
    }
}
