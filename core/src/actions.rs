//! Sub-action types that make up a scheme.
//!
//! A scheme bundles six sub-actions: build, test, launch, profile,
//! analyze, and archive. The types here are plain serde-serializable
//! data; deciding what goes into them is the synthesizer's job, and
//! writing them out in whatever project format the IDE expects is the
//! serializer's.

use serde::{Deserialize, Serialize};

use crate::BuildableReference;

/// Purpose a build-action entry participates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildFor {
    /// Build when running the product.
    Running,
    /// Build when testing.
    Testing,
    /// Build when profiling.
    Profiling,
    /// Build when archiving.
    Archiving,
    /// Build when analyzing.
    Analyzing,
}

impl BuildFor {
    /// All five build purposes, in their canonical order.
    pub const ALL: [BuildFor; 5] = [
        BuildFor::Running,
        BuildFor::Testing,
        BuildFor::Profiling,
        BuildFor::Archiving,
        BuildFor::Analyzing,
    ];
}

/// One entry of a build action: a product and the purposes it builds
/// for.
///
/// # Examples
///
/// ```
/// use xcautogen_core::{BuildActionEntry, BuildFor, BuildableReference};
///
/// let reference = BuildableReference::new(
///     "container:App.xcodeproj", "ID", "App.app", "App",
/// ).unwrap();
/// let entry = BuildActionEntry::new(reference, BuildFor::ALL.to_vec());
/// assert_eq!(entry.build_for.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildActionEntry {
    /// Product this entry builds.
    pub buildable_reference: BuildableReference,
    /// Purposes the entry participates in.
    pub build_for: Vec<BuildFor>,
}

impl BuildActionEntry {
    /// Creates an entry for the given reference and purposes.
    pub fn new(buildable_reference: BuildableReference, build_for: Vec<BuildFor>) -> Self {
        Self {
            buildable_reference,
            build_for,
        }
    }
}

/// Script hook run before or after a scheme action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionAction {
    /// Shell script body.
    pub script_text: String,
    /// Title shown in the scheme editor.
    pub title: String,
    /// Buildable whose build settings the script runs under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_buildable: Option<BuildableReference>,
}

/// The build sub-action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildAction {
    /// Products built by this action.
    pub entries: Vec<BuildActionEntry>,
    /// Scripts run before the build.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pre_actions: Vec<ExecutionAction>,
    /// Whether the IDE may build entries in parallel.
    pub parallelize_build: bool,
    /// Whether implicit dependencies are resolved automatically.
    pub build_implicit_dependencies: bool,
}

/// A test bundle included in the test action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestableReference {
    /// Whether the bundle is excluded from test runs.
    pub skipped: bool,
    /// The test bundle's product.
    pub buildable_reference: BuildableReference,
}

/// The product launched by the launch and profile actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildableProductRunnable {
    /// The product to launch.
    pub buildable_reference: BuildableReference,
}

/// One environment variable passed to a launched product.
///
/// # Examples
///
/// ```
/// use xcautogen_core::EnvironmentVariable;
///
/// let var = EnvironmentVariable::new("KEY", "VALUE");
/// assert!(var.enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentVariable {
    /// Variable name.
    pub variable: String,
    /// Variable value.
    pub value: String,
    /// Whether the variable is active in the scheme.
    pub enabled: bool,
}

impl EnvironmentVariable {
    /// Creates an enabled environment variable.
    pub fn new(variable: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            value: value.into(),
            enabled: true,
        }
    }
}

/// The test sub-action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestAction {
    /// Build configuration used for testing.
    pub build_configuration: String,
    /// Reference used for debugger variable substitution. Left unset by
    /// the synthesizer even when the launch action carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macro_expansion: Option<BuildableReference>,
    /// Test bundles run by this action.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub testables: Vec<TestableReference>,
    /// Custom LLDB init file indirection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_lldb_init_file: Option<String>,
}

/// The launch (run) sub-action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchAction {
    /// Product launched when the scheme is run; unset for targets that
    /// are not launchable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runnable: Option<BuildableProductRunnable>,
    /// Build configuration used for running.
    pub build_configuration: String,
    /// Reference used for debugger variable substitution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macro_expansion: Option<BuildableReference>,
    /// Environment passed to the launched product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_variables: Option<Vec<EnvironmentVariable>>,
    /// Custom LLDB init file indirection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_lldb_init_file: Option<String>,
}

/// The profile sub-action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileAction {
    /// Product profiled when the scheme is profiled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runnable: Option<BuildableProductRunnable>,
    /// Build configuration used for profiling.
    pub build_configuration: String,
}

/// The analyze sub-action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeAction {
    /// Build configuration used for static analysis.
    pub build_configuration: String,
}

/// The archive sub-action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveAction {
    /// Build configuration used for archiving.
    pub build_configuration: String,
    /// Whether the finished archive is revealed in the organizer.
    pub reveal_archive_in_organizer: bool,
}
