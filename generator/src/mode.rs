//! Process-wide generation switches.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when parsing a mode string from upstream configuration fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode: {0}")]
pub struct ParseModeError(pub String);

/// Which external build orchestrator integration behaviors are active.
///
/// Set once per run from upstream configuration and immutable for the
/// duration of a synthesis call.
///
/// # Examples
///
/// ```
/// use xcautogen::BuildMode;
///
/// assert!(BuildMode::Bazel.uses_bazel_mode_build_scripts());
/// assert!(!BuildMode::Xcode.uses_bazel_environment_variables());
/// assert_eq!("bazel".parse::<BuildMode>().unwrap(), BuildMode::Bazel);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Bazel drives the build; schemes carry the out-of-band signaling
    /// hooks and launch environment the orchestrator expects.
    #[default]
    Bazel,
    /// Xcode builds natively; no orchestrator integration.
    Xcode,
}

impl BuildMode {
    /// Whether launch actions receive the build-system environment
    /// variables declared by the target provider.
    pub fn uses_bazel_environment_variables(self) -> bool {
        self == Self::Bazel
    }

    /// Whether build actions carry the output-groups signaling
    /// pre-action script.
    pub fn uses_bazel_mode_build_scripts(self) -> bool {
        self == Self::Bazel
    }
}

impl FromStr for BuildMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bazel" => Ok(Self::Bazel),
            "xcode" => Ok(Self::Xcode),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// Whether and how schemes are autogenerated.
///
/// `None` disables the generation step entirely; synthesis returns an
/// empty collection before any per-target work. `Auto` and `All` both
/// generate here — the distinction (only autogenerate when no custom
/// schemes are declared) is decided upstream and carried per target via
/// `should_create_scheme`.
///
/// # Examples
///
/// ```
/// use xcautogen::SchemeAutogenerationMode;
///
/// assert_eq!(
///     "none".parse::<SchemeAutogenerationMode>().unwrap(),
///     SchemeAutogenerationMode::None,
/// );
/// assert!("sometimes".parse::<SchemeAutogenerationMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SchemeAutogenerationMode {
    /// Never autogenerate.
    None,
    /// Autogenerate unless custom schemes take precedence.
    #[default]
    Auto,
    /// Always autogenerate.
    All,
}

impl FromStr for SchemeAutogenerationMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "auto" => Ok(Self::Auto),
            "all" => Ok(Self::All),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}
