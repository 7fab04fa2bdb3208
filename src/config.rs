//! Environment-driven configuration
//!
//! Nothing is persisted: every knob is read from the environment when the
//! binary starts.

use crate::artifacts::objects::commit::Timestamp;
use anyhow::Context;

pub const AUTHOR_NAME_VAR: &str = "VCS_AUTHOR_NAME";
pub const AUTHOR_DATE_VAR: &str = "VCS_AUTHOR_DATE";
pub const LOG_FILTER_VAR: &str = "VCS_LOG";
pub const FALLBACK_LOG_FILTER_VAR: &str = "RUST_LOG";
pub const NO_PAGER_VAR: &str = "NO_PAGER";

const DEFAULT_AUTHOR: &str = "user";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Author recorded on commits when none is given explicitly
    pub author: String,
    /// Fixed commit timestamp, mostly useful for reproducible addresses
    pub author_date: Option<Timestamp>,
    /// `tracing` filter directive
    pub log_filter: String,
    /// Whether long output may go through the pager
    pub pager: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            author: DEFAULT_AUTHOR.to_string(),
            author_date: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            pager: true,
        }
    }
}

impl Config {
    pub fn load_from_env() -> anyhow::Result<Self> {
        Self::load_from(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Config::default();

        let author = lookup(AUTHOR_NAME_VAR)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(defaults.author);

        let author_date = lookup(AUTHOR_DATE_VAR)
            .map(|date| {
                Timestamp::parse(&date)
                    .with_context(|| format!("{AUTHOR_DATE_VAR} is not a valid timestamp: {date}"))
            })
            .transpose()?;

        let log_filter = lookup(LOG_FILTER_VAR)
            .or_else(|| lookup(FALLBACK_LOG_FILTER_VAR))
            .unwrap_or(defaults.log_filter);

        let pager = lookup(NO_PAGER_VAR).is_none();

        Ok(Config {
            author,
            author_date,
            log_filter,
            pager,
        })
    }
}
