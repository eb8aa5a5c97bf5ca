use std::io::Write;

use folio_core::{config::Configuration, error::FolioResult, state::FolioState};

use crate::{cli::RenderCli, pages};

pub fn render(config: Configuration, cli: RenderCli) -> FolioResult<()> {
    let state = FolioState::new(config)?;
    let html = render_to_string(&state, cli.fragment);
    match cli.output {
        Some(path) => {
            std::fs::write(&path, html)?;
            info!("Wrote certifications to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

pub fn render_to_string(state: &FolioState, fragment: bool) -> String {
    if fragment {
        pages::certifications_fragment(state).into_string()
    } else {
        pages::certifications_document(state).into_string()
    }
}
