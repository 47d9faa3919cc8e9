//! CLI configuration

use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand};
use promoswap::formatting::Locale;

/// PromoSwap configuration
#[derive(Debug, Parser)]
#[command(name = "promoswap", about = "Browse, filter and share promo codes", long_about = None)]
pub(crate) struct Config {
    /// Logging output settings.
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    /// Catalog source and display settings.
    #[command(flatten)]
    pub(crate) catalog: CatalogConfig,

    /// Share target settings.
    #[command(flatten)]
    pub(crate) share: ShareConfig,

    #[command(subcommand)]
    pub(crate) command: Command,
}

impl Config {
    /// Load configuration from `.env`, the environment and CLI arguments
    pub(crate) fn load() -> Self {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::parse()
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub(crate) log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub(crate) log_format: LogFormat,
}

/// Catalog settings.
#[derive(Debug, Args)]
pub(crate) struct CatalogConfig {
    /// Directory holding `catalog/<name>.yml` fixture sets; the embedded seed is used when unset
    #[arg(long, env = "PROMOSWAP_FIXTURES_DIR", global = true)]
    pub(crate) fixtures_dir: Option<PathBuf>,

    /// Fixture set name
    #[arg(long, env = "PROMOSWAP_FIXTURE", default_value = "default", global = true)]
    pub(crate) fixture: String,

    /// Display language
    #[arg(long, env = "PROMOSWAP_LOCALE", value_enum, default_value_t = Locale::En, global = true)]
    pub(crate) locale: Locale,

    /// IANA time zone for dates; the system zone when unset
    #[arg(long, env = "PROMOSWAP_TIMEZONE", global = true)]
    pub(crate) timezone: Option<String>,
}

/// Share settings.
#[derive(Debug, Args)]
pub(crate) struct ShareConfig {
    /// Program invoked as `<program> <title> <text> <url>` to share natively
    #[arg(long, env = "PROMOSWAP_SHARE_COMMAND", global = true)]
    pub(crate) share_command: Option<String>,

    /// Public base URL of promo pages
    #[arg(
        long,
        env = "PROMOSWAP_BASE_URL",
        default_value = "https://promoswap.fr",
        global = true
    )]
    pub(crate) base_url: String,

    /// Seconds a copy may wait for another program to take the text over before exiting (0 to
    /// return at once)
    #[arg(
        long,
        env = "PROMOSWAP_CLIPBOARD_HOLD_SECS",
        default_value_t = 10,
        global = true
    )]
    pub(crate) clipboard_hold_secs: u64,
}

impl ShareConfig {
    /// Public URL of a promo detail page.
    pub(crate) fn promo_url(&self, id: &str) -> String {
        format!("{}/promo/{id}", self.base_url.trim_end_matches('/'))
    }

    /// How long a clipboard copy may block before the process exits.
    pub(crate) fn clipboard_hold(&self) -> Duration {
        Duration::from_secs(self.clipboard_hold_secs)
    }
}

/// Subcommands
#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List promo codes, optionally filtered
    Promos(PromosArgs),

    /// Show one promo code
    Show {
        /// Promo id
        id: String,
    },

    /// Copy a promo code to the clipboard
    Copy {
        /// Promo id
        id: String,
    },

    /// Share a promo page, or copy its link when sharing is unavailable
    Share {
        /// Promo id
        id: String,
    },

    /// List categories
    Categories,

    /// List stores with their number of codes
    Stores,

    /// Check a sign-up form against the password rules
    Register(RegisterArgs),
}

/// Listing filters
#[derive(Debug, Args)]
pub(crate) struct PromosArgs {
    /// Category id or name; repeat to match any of several
    #[arg(short, long)]
    pub(crate) category: Vec<String>,

    /// Store id; repeat to match any of several
    #[arg(short, long)]
    pub(crate) store: Vec<String>,

    /// Free-text search over code, description, store and category
    #[arg(short = 'q', long)]
    pub(crate) search: Option<String>,
}

/// Sign-up form fields
#[derive(Debug, Args)]
pub(crate) struct RegisterArgs {
    /// Display name
    #[arg(long)]
    pub(crate) name: String,

    /// Email address
    #[arg(long)]
    pub(crate) email: String,

    /// Password
    #[arg(long, env = "PROMOSWAP_PASSWORD", hide_env_values = true)]
    pub(crate) password: String,

    /// Password confirmation
    #[arg(long, env = "PROMOSWAP_CONFIRM_PASSWORD", hide_env_values = true)]
    pub(crate) confirm_password: String,
}
