//! The scheme descriptor itself.

use serde::{Deserialize, Serialize};

use crate::{
    AnalyzeAction, ArchiveAction, BuildAction, LaunchAction, ProfileAction, TestAction,
};

/// A named bundle of run/test/build configuration for one target.
///
/// One scheme is produced per eligible target; schemes share no state,
/// and every reference inside a scheme points at that scheme's target.
/// The two version fields are fixed by the synthesizer and identical
/// across all generated schemes.
///
/// # Examples
///
/// ```
/// use xcautogen_core::*;
///
/// let reference = BuildableReference::new(
///     "container:App.xcodeproj", "ID", "App.app", "App",
/// ).unwrap();
/// let scheme = Scheme {
///     name: "App".to_string(),
///     last_upgrade_version: "1320".to_string(),
///     version: "1.7".to_string(),
///     build_action: BuildAction {
///         entries: vec![BuildActionEntry::new(reference, BuildFor::ALL.to_vec())],
///         pre_actions: Vec::new(),
///         parallelize_build: true,
///         build_implicit_dependencies: true,
///     },
///     test_action: TestAction {
///         build_configuration: "Debug".to_string(),
///         macro_expansion: None,
///         testables: Vec::new(),
///         custom_lldb_init_file: None,
///     },
///     launch_action: LaunchAction {
///         runnable: None,
///         build_configuration: "Debug".to_string(),
///         macro_expansion: None,
///         environment_variables: None,
///         custom_lldb_init_file: None,
///     },
///     profile_action: ProfileAction {
///         runnable: None,
///         build_configuration: "Debug".to_string(),
///     },
///     analyze_action: AnalyzeAction { build_configuration: "Debug".to_string() },
///     archive_action: ArchiveAction {
///         build_configuration: "Debug".to_string(),
///         reveal_archive_in_organizer: true,
///     },
///     was_created_for_app_extension: false,
/// };
/// assert_eq!(scheme.build_action.entries.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
    /// Scheme name shown in the IDE.
    pub name: String,
    /// IDE tooling version the scheme was last upgraded for.
    pub last_upgrade_version: String,
    /// Scheme format version.
    pub version: String,
    /// Build sub-action.
    pub build_action: BuildAction,
    /// Test sub-action.
    pub test_action: TestAction,
    /// Launch sub-action.
    pub launch_action: LaunchAction,
    /// Profile sub-action.
    pub profile_action: ProfileAction,
    /// Analyze sub-action.
    pub analyze_action: AnalyzeAction,
    /// Archive sub-action.
    pub archive_action: ArchiveAction,
    /// Whether the scheme was created for an app-extension context.
    /// Always false for autogenerated schemes.
    pub was_created_for_app_extension: bool,
}
