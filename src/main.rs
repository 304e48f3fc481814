//! Storefront command line
//!
//! Loads a fixture set, renders every region to stdout and replays the given actions.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use storefront::{
    cart::ListKind,
    fixtures::Fixture,
    store::StorePage,
    surface::TerminalSurface,
    utils::{LogFormat, StorefrontArgs},
};

fn main() -> Result<()> {
    let args = StorefrontArgs::parse();

    init_tracing(args.log_format)?;

    let fixture = Fixture::from_set(&args.fixtures, &args.set)
        .with_context(|| format!("loading fixture set {:?}", args.set))?;
    let catalog = fixture.catalog()?;

    let mut page = StorePage::with_lists(
        catalog,
        fixture.list(ListKind::Cart)?,
        fixture.list(ListKind::Wishlist)?,
        TerminalSurface::new(io::stdout().lock()),
    );

    page.render_all()?;

    for scripted in &args.actions {
        let action = scripted.resolve(catalog)?;

        info!(?action, product = %scripted.product, "dispatching");

        page.dispatch(action)?;
    }

    Ok(())
}

fn init_tracing(format: LogFormat) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("storefront=info"));

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .try_init()?,
    }

    Ok(())
}
