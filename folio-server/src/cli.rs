use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod render;
pub mod server;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Certification showcase for a portfolio page", long_about = None)]
pub struct AppCli {
    #[clap(subcommand)]
    pub command: Command,
    /// JSON file with the certifications to show, overrides FOLIO_CERTIFICATIONS_FILE
    #[clap(long, global = true, value_name = "FILE")]
    pub certifications: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the certifications page over HTTP
    Server(ServerCli),
    /// Write the rendered page to stdout or a file
    Render(RenderCli),
}

#[derive(Args, Debug)]
pub struct ServerCli {
    #[clap(long, short = 'l', value_name = "ADDR")]
    /// Address to listen on, overrides FOLIO_LISTEN_ON
    pub listen: Option<String>,
}

#[derive(Args, Debug)]
pub struct RenderCli {
    #[clap(long, short = 'f')]
    /// Emit only the certifications section instead of a full document
    pub fragment: bool,
    #[clap(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}
