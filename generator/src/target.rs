//! Target descriptors consumed by scheme synthesis.
//!
//! Targets are supplied by an upstream target provider and are
//! read-only here. Capability flags are an explicit record rather than
//! something derived at this layer; the provider knows which product
//! types are testable or launchable.

use std::fmt;

use serde::{Deserialize, Serialize};
use xcautogen_core::{BuildableReference, EnvironmentVariable, ReferenceError};

/// Unique key of a target, e.g. a Bazel label like `//app:App`.
///
/// # Examples
///
/// ```
/// use xcautogen::TargetId;
///
/// let id = TargetId::from("//app:App");
/// assert_eq!(id.to_string(), "//app:App");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(String);

impl TargetId {
    /// Returns the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TargetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TargetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of target, as a closed variant.
///
/// Only `Native` targets produce something the build orchestrator can
/// be pointed at; `Aggregate` and `Other` targets get the clearing
/// variant of the pre-action script instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// A native target with a real product.
    Native,
    /// An aggregate target grouping other targets.
    Aggregate,
    /// Anything else (e.g. legacy/external targets).
    Other,
}

/// One build target as seen by scheme synthesis.
///
/// Built with the constructor plus `with_*`/flag methods; all fields
/// are public so the upstream provider can also assemble one directly.
///
/// # Examples
///
/// ```
/// use xcautogen::{Target, TargetKind};
///
/// let target = Target::new("//app:App", TargetKind::Native)
///     .with_product("App.app")
///     .with_blueprint_identifier("FEEDFACE00000001")
///     .launchable();
///
/// assert!(target.launchable);
/// assert!(target.should_create_scheme);
/// assert_eq!(target.scheme_name(), "__app_App");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Display/target name, typically the target's label.
    pub name: String,
    /// Target kind.
    pub kind: TargetKind,
    /// Whether the target is a test bundle.
    pub testable: bool,
    /// Whether the target's product can be launched.
    pub launchable: bool,
    /// Gating flag; targets with this false are skipped silently.
    pub should_create_scheme: bool,
    /// Build configuration the scheme's actions use.
    pub default_build_configuration_name: String,
    /// Identifier of the target object inside the container.
    pub blueprint_identifier: String,
    /// Product file name, if the target has a product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    /// Launch environment declared for the target's product type; only
    /// consumed when the build mode uses build-system environment
    /// variables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_environment_variables: Option<Vec<EnvironmentVariable>>,
}

impl Target {
    /// Creates a target with default gating (scheme created) and the
    /// `Debug` build configuration.
    pub fn new(name: impl Into<String>, kind: TargetKind) -> Self {
        Self {
            name: name.into(),
            kind,
            testable: false,
            launchable: false,
            should_create_scheme: true,
            default_build_configuration_name: "Debug".to_string(),
            blueprint_identifier: String::new(),
            product_name: None,
            launch_environment_variables: None,
        }
    }

    /// Sets the product file name.
    pub fn with_product(mut self, product_name: impl Into<String>) -> Self {
        self.product_name = Some(product_name.into());
        self
    }

    /// Sets the blueprint identifier.
    pub fn with_blueprint_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.blueprint_identifier = identifier.into();
        self
    }

    /// Sets the build configuration the scheme's actions use.
    pub fn with_build_configuration(mut self, name: impl Into<String>) -> Self {
        self.default_build_configuration_name = name.into();
        self
    }

    /// Sets the launch environment declared for the product type.
    pub fn with_launch_environment(mut self, variables: Vec<EnvironmentVariable>) -> Self {
        self.launch_environment_variables = Some(variables);
        self
    }

    /// Marks the target as a test bundle.
    pub fn testable(mut self) -> Self {
        self.testable = true;
        self
    }

    /// Marks the target's product as launchable.
    pub fn launchable(mut self) -> Self {
        self.launchable = true;
        self
    }

    /// Excludes the target from scheme autogeneration.
    pub fn skip_scheme(mut self) -> Self {
        self.should_create_scheme = false;
        self
    }

    /// Whether the target is of native kind.
    pub fn is_native(&self) -> bool {
        self.kind == TargetKind::Native
    }

    /// Scheme name derived from the target name.
    ///
    /// Labels contain `/` and `:`, which are not valid in scheme names;
    /// both are replaced with `_`.
    pub fn scheme_name(&self) -> String {
        self.name.replace(['/', ':'], "_")
    }

    /// Builds the buildable reference tying this target's product to
    /// the given container.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::MissingProduct`] when the target has no
    /// product, and propagates container/name validation failures from
    /// [`BuildableReference::new`].
    pub fn buildable_reference(
        &self,
        container_reference: &str,
    ) -> Result<BuildableReference, ReferenceError> {
        let product = self
            .product_name
            .as_deref()
            .ok_or_else(|| ReferenceError::MissingProduct(self.name.clone()))?;
        BuildableReference::new(
            container_reference,
            self.blueprint_identifier.clone(),
            product,
            self.name.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_name_sanitizes_label_characters() {
        let target = Target::new("//pkg/sub:Tool", TargetKind::Native);
        assert_eq!(target.scheme_name(), "__pkg_sub_Tool");
    }

    #[test]
    fn test_buildable_reference_requires_product() {
        let target = Target::new("//app:App", TargetKind::Native);
        let err = target
            .buildable_reference("container:App.xcodeproj")
            .unwrap_err();
        assert_eq!(err, ReferenceError::MissingProduct("//app:App".to_string()));
    }

    #[test]
    fn test_buildable_reference_carries_identity() {
        let target = Target::new("//app:App", TargetKind::Native)
            .with_product("App.app")
            .with_blueprint_identifier("ID");

        let reference = target
            .buildable_reference("container:App.xcodeproj")
            .unwrap();
        assert_eq!(reference.blueprint_identifier, "ID");
        assert_eq!(reference.buildable_name, "App.app");
        assert_eq!(reference.blueprint_name, "//app:App");
    }
}
