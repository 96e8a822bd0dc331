//! Runtime settings read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `CHARTLINT_QUIET` | off; `1` or `true` hides the per-file success lines |
//! | `CHARTLINT_MANIFEST_NAME` | `Chart.yaml` |

pub const QUIET_ENV: &str = "CHARTLINT_QUIET";
pub const MANIFEST_NAME_ENV: &str = "CHARTLINT_MANIFEST_NAME";

/// Macro to generate default functions
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

default_fn!(default_manifest_name, String, "Chart.yaml".to_string());
default_fn!(default_quiet, bool, false);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File name a path must have to be validated; anything else is skipped
    pub manifest_name: String,
    /// Suppress success lines
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest_name: default_manifest_name(),
            quiet: default_quiet(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let manifest_name = lookup(MANIFEST_NAME_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_manifest_name);

        let quiet = lookup(QUIET_ENV)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or_else(default_quiet);

        Self {
            manifest_name,
            quiet,
        }
    }
}
