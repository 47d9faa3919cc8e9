//! Subcommand handlers

use std::{
    io::{self, Write},
    time::Duration,
};

use jiff::{Timestamp, tz::TimeZone};
use promoswap::{
    catalog::{CatalogError, PromoCatalog},
    filters::{FilterCriteria, filter_promos, search_promos},
    fixtures::{Fixture, FixtureError},
    formatting::PromoFormatter,
    registration::RegistrationForm,
    render::{self, Copied, RenderError},
    sharing::{
        Clipboard, ClipboardError, CommandShareDialog, ShareDialog, ShareError, ShareOutcome,
        SharePayload, UnavailableClipboard, copy_promo_code, detect_sharer,
    },
};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{CatalogConfig, Command, Config, PromosArgs, RegisterArgs, ShareConfig};

/// Errors reported by the CLI.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// The catalog could not be loaded
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// Catalog lookup failed
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Sharing failed
    #[error(transparent)]
    Share(#[from] ShareError),

    /// Output could not be written
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The configured time zone is unknown
    #[error("Invalid time zone: {0}")]
    TimeZone(#[from] jiff::Error),

    /// The sign-up form fails at least one rule
    #[error("Registration form is incomplete or the password is too weak")]
    InvalidRegistration,
}

/// Run the selected subcommand, writing views to stdout.
pub(crate) fn run(config: Config) -> Result<(), CliError> {
    let now = Timestamp::now();
    let catalog = load_catalog(&config.catalog, now)?;
    let formatter = build_formatter(&config.catalog)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.command {
        Command::Promos(args) => list_promos(&mut out, &catalog, &formatter, &args, now),
        Command::Show { id } => show_promo(&mut out, &catalog, &formatter, &id, now),
        Command::Copy { id } => {
            let clipboard = open_clipboard(config.share.clipboard_hold());

            copy_code(&mut out, &catalog, &formatter, clipboard, &id, now)
        }
        Command::Share { id } => {
            share_promo(&mut out, &catalog, &formatter, &config.share, &id)
        }
        Command::Categories => Ok(render::write_categories(&mut out, &catalog)?),
        Command::Stores => Ok(render::write_stores(&mut out, &catalog)?),
        Command::Register(args) => register(&mut out, args),
    }
}

fn load_catalog(config: &CatalogConfig, now: Timestamp) -> Result<PromoCatalog, CliError> {
    let catalog = match &config.fixtures_dir {
        Some(dir) => {
            debug!(dir = %dir.display(), fixture = %config.fixture, "loading catalog fixture");

            Fixture::with_base_path(dir).load(&config.fixture, now)?
        }
        None => Fixture::seeded(now)?,
    };

    Ok(catalog)
}

fn build_formatter(config: &CatalogConfig) -> Result<PromoFormatter, CliError> {
    let time_zone = match &config.timezone {
        Some(name) => TimeZone::get(name)?,
        None => TimeZone::system(),
    };

    Ok(PromoFormatter::new(config.locale, time_zone))
}

fn list_promos(
    out: &mut impl Write,
    catalog: &PromoCatalog,
    formatter: &PromoFormatter,
    args: &PromosArgs,
    now: Timestamp,
) -> Result<(), CliError> {
    let categories = args.category.iter().map(|selected| {
        catalog
            .resolve_category(selected)
            .map_or(selected.as_str(), |category| category.name.as_str())
    });

    let criteria =
        FilterCriteria::from_selection(categories, args.store.iter().map(String::as_str));
    let mut promos = filter_promos(&criteria, catalog.list_promos());

    if let Some(query) = &args.search {
        promos = search_promos(query, promos);
    }

    render::write_promo_table(&mut *out, &promos, formatter, now)?;

    Ok(())
}

fn show_promo(
    out: &mut impl Write,
    catalog: &PromoCatalog,
    formatter: &PromoFormatter,
    id: &str,
    now: Timestamp,
) -> Result<(), CliError> {
    match catalog.get_promo(id) {
        Ok(promo) => render::write_promo_detail(&mut *out, promo, formatter, now)?,
        Err(CatalogError::PromoNotFound(_)) => {
            render::write_not_found(&mut *out, formatter.locale())?;
        }
        Err(error) => return Err(error.into()),
    }

    Ok(())
}

fn copy_code(
    out: &mut impl Write,
    catalog: &PromoCatalog,
    formatter: &PromoFormatter,
    mut clipboard: Box<dyn Clipboard>,
    id: &str,
    now: Timestamp,
) -> Result<(), CliError> {
    let promo = match catalog.get_promo(id) {
        Ok(promo) => promo,
        Err(CatalogError::PromoNotFound(_)) => {
            render::write_not_found(&mut *out, formatter.locale())?;

            return Ok(());
        }
        Err(error) => return Err(error.into()),
    };

    match copy_promo_code(clipboard.as_mut(), promo, now) {
        Ok(_feedback) => render::write_copied(&mut *out, formatter.locale(), Copied::Code)?,
        Err(ClipboardError::Unavailable(_)) => {
            render::write_manual_copy_hint(&mut *out, formatter.locale(), &promo.code)?;
        }
    }

    Ok(())
}

fn share_promo(
    out: &mut impl Write,
    catalog: &PromoCatalog,
    formatter: &PromoFormatter,
    config: &ShareConfig,
    id: &str,
) -> Result<(), CliError> {
    let promo = match catalog.get_promo(id) {
        Ok(promo) => promo,
        Err(CatalogError::PromoNotFound(_)) => {
            render::write_not_found(&mut *out, formatter.locale())?;

            return Ok(());
        }
        Err(error) => return Err(error.into()),
    };

    let dialog = config
        .share_command
        .as_deref()
        .and_then(CommandShareDialog::detect)
        .map(|dialog| Box::new(dialog) as Box<dyn ShareDialog>);

    let payload = SharePayload::for_promo(promo, config.promo_url(&promo.id), formatter.locale());
    let mut sharer = detect_sharer(dialog, open_clipboard(config.clipboard_hold()));

    match sharer.share(&payload) {
        Ok(ShareOutcome::Shared) => render::write_shared(&mut *out, formatter.locale())?,
        Ok(ShareOutcome::LinkCopied) => {
            render::write_copied(&mut *out, formatter.locale(), Copied::Link)?;
        }
        Err(ShareError::Clipboard(_)) => {
            render::write_manual_copy_hint(&mut *out, formatter.locale(), &payload.url)?;
        }
        Err(error) => return Err(error.into()),
    }

    Ok(())
}

fn register(out: &mut impl Write, args: RegisterArgs) -> Result<(), CliError> {
    let form = RegistrationForm {
        name: args.name,
        email: args.email,
        password: args.password,
        confirm_password: args.confirm_password,
    };

    render::write_password_rules(&mut *out, &form)?;

    if !form.can_submit() {
        return Err(CliError::InvalidRegistration);
    }

    info!(email = %form.email, "registration form ready to submit");

    Ok(())
}

#[cfg(feature = "system-clipboard")]
fn open_clipboard(hold: Duration) -> Box<dyn Clipboard> {
    match promoswap::sharing::SystemClipboard::connect_holding(hold) {
        Ok(clipboard) => Box::new(clipboard),
        Err(ClipboardError::Unavailable(reason)) => Box::new(UnavailableClipboard::new(reason)),
    }
}

#[cfg(not(feature = "system-clipboard"))]
fn open_clipboard(_hold: Duration) -> Box<dyn Clipboard> {
    Box::new(UnavailableClipboard::new(
        "built without system clipboard support",
    ))
}
