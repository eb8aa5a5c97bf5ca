use anyhow::Context;
use axum::{Extension, Router};
use axum_extra::routing::RouterExt;
use folio_core::{config::Configuration, error::FolioResult, package_full, state::FolioState};

use crate::{cli::ServerCli, pages};

pub fn setup_all_routes(router: Router) -> Router {
    router
        .typed_get(pages::index)
        .typed_get(pages::certifications)
        .typed_get(pages::healthz)
}

pub fn app(state: FolioState) -> Router {
    setup_all_routes(Router::new())
        .fallback(pages::not_found)
        .layer(Extension(state))
}

pub async fn server_start(mut config: Configuration, cli: ServerCli) -> FolioResult<()> {
    if let Some(listen) = &cli.listen {
        config.set_listen_on(listen)?;
    }
    let listen_on = config.listen_on;
    let state = FolioState::new(config)?;
    match state.certifications() {
        Some(list) => info!("Serving {} configured certifications", list.len()),
        None => info!("Serving built-in certifications"),
    }
    info!("Starting {} on http://{}", package_full(), listen_on);
    axum::Server::try_bind(&listen_on)
        .with_context(|| format!("could not bind {listen_on}"))?
        .serve(app(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server terminated")?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("could not listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    warn!("Shutdown requested");
}
