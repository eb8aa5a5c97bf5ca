use tracing_subscriber::{prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "warn,folio=info";

pub fn logging() {
    better_panic::install();
    let dotenv = kankyo::load(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // stdout is reserved for `folio render`
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
    if let Err(e) = dotenv {
        debug!("couldn't load .env file: {}, this is probably fine", e);
    }
}
