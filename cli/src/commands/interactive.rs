//! Interactive mode command

use crate::interactive::pages::build_router;
use crate::interactive::App;
use anyhow::{Context, Result};
use folio_core::{MenuItem, Portfolio};
use iocraft::prelude::*;
use std::sync::Arc;
use tracing::{debug, warn};

/// Start the full-screen browser at `initial`
pub async fn interactive_command(portfolio: Portfolio, initial: MenuItem) -> Result<()> {
    let site = portfolio.site().clone();
    let title = site.full_title();

    if let Err(err) = crossterm::execute!(std::io::stdout(), crossterm::terminal::SetTitle(&title)) {
        warn!(error = %err, "could not set the terminal title");
    }

    let router = build_router(Arc::new(portfolio), initial).context("Failed to build the page router")?;
    debug!(page = %initial, "starting interactive mode");

    element! {
        App(site: site, router: router)
    }
    .fullscreen()
    .await
    .context("Terminal UI failed")
}
