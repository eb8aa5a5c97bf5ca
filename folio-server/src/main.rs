#[macro_use]
extern crate tracing;

use clap::Parser;
use folio_core::config::Configuration;
use folio_core::error::FolioResult;

mod cli;
mod init;
mod pages;
#[cfg(test)]
mod tests;

use crate::cli::{AppCli, Command};

fn main() -> FolioResult<()> {
    crate::init::logging();
    let cli = AppCli::parse();
    let mut config = Configuration::from_env()?;
    if let Some(path) = &cli.certifications {
        config.set_certifications_file(path);
    }
    debug!("Using configuration {:?}", config);

    match cli.command {
        Command::Server(server) => {
            use tokio::runtime::Builder;
            let runtime = Builder::new_multi_thread()
                .thread_name_fn(|| {
                    use std::sync::atomic::{AtomicUsize, Ordering};
                    static ATOMIC_ID: AtomicUsize = AtomicUsize::new(0);
                    let id = ATOMIC_ID.fetch_add(1, Ordering::SeqCst);
                    format!("folio-{}", id)
                })
                .enable_all()
                .build()?;
            runtime.block_on(crate::cli::server::server_start(config, server))?;
            runtime.shutdown_timeout(std::time::Duration::from_secs(10));
            Ok(())
        }
        Command::Render(render) => crate::cli::render::render(config, render),
    }
}
