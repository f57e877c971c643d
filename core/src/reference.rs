//! Buildable references and their construction rules.
//!
//! A [`BuildableReference`] ties a target's product to the project
//! container it lives in. Every sub-action of a scheme that needs to
//! point at a product does so through one of these references, and all
//! references for one scheme describe the same target.
//!
//! Construction is the only place this crate can fail: a malformed
//! container string or a target without a product yields a
//! [`ReferenceError`], which callers propagate unmodified.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix every container reference must carry (e.g.
/// `container:App.xcodeproj`).
pub const CONTAINER_PREFIX: &str = "container:";

/// Buildable-reference construction errors.
///
/// This is the single failure class of scheme synthesis. The first
/// failing target aborts the whole batch; there is no partial-success
/// mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    /// Container reference is empty or whitespace-only.
    #[error("container reference cannot be empty")]
    EmptyContainer,
    /// Container reference does not start with `container:`.
    #[error("container reference must start with \"container:\": {0}")]
    MalformedContainer(String),
    /// The target has no product to point the reference at.
    #[error("target {0} has no product to reference")]
    MissingProduct(String),
    /// The target name (blueprint name) is empty.
    #[error("buildable reference requires a target name")]
    EmptyTargetName,
}

/// Opaque association between a target's product and its container.
///
/// Created once per target during synthesis and then shared (by clone)
/// across the scheme's six sub-actions. Never mutated after creation.
///
/// # Examples
///
/// ```
/// use xcautogen_core::BuildableReference;
///
/// let reference = BuildableReference::new(
///     "container:App.xcodeproj",
///     "FEEDFACE00000001",
///     "App.app",
///     "App",
/// ).unwrap();
/// assert_eq!(reference.buildable_name, "App.app");
///
/// // Missing the container: prefix is a construction failure.
/// assert!(BuildableReference::new("App.xcodeproj", "X", "App.app", "App").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildableReference {
    /// Container string, `container:`-prefixed.
    pub referenced_container: String,
    /// Identifier of the target object inside the container.
    pub blueprint_identifier: String,
    /// Product file name (e.g. `App.app`).
    pub buildable_name: String,
    /// Target name inside the container.
    pub blueprint_name: String,
}

impl BuildableReference {
    /// Creates a reference, validating the container string and names.
    ///
    /// # Errors
    ///
    /// Returns a [`ReferenceError`] when the container reference is
    /// empty or lacks the `container:` prefix, when the product name is
    /// empty, or when the target name is empty.
    pub fn new(
        referenced_container: impl Into<String>,
        blueprint_identifier: impl Into<String>,
        buildable_name: impl Into<String>,
        blueprint_name: impl Into<String>,
    ) -> Result<Self, ReferenceError> {
        let referenced_container = referenced_container.into();
        if referenced_container.trim().is_empty() {
            return Err(ReferenceError::EmptyContainer);
        }
        if !referenced_container.starts_with(CONTAINER_PREFIX) {
            return Err(ReferenceError::MalformedContainer(referenced_container));
        }

        let blueprint_name = blueprint_name.into();
        if blueprint_name.trim().is_empty() {
            return Err(ReferenceError::EmptyTargetName);
        }

        let buildable_name = buildable_name.into();
        if buildable_name.trim().is_empty() {
            return Err(ReferenceError::MissingProduct(blueprint_name));
        }

        Ok(Self {
            referenced_container,
            blueprint_identifier: blueprint_identifier.into(),
            buildable_name,
            blueprint_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Result<BuildableReference, ReferenceError> {
        BuildableReference::new("container:App.xcodeproj", "ID", "App.app", "App")
    }

    #[test]
    fn test_valid_reference() {
        let reference = reference().unwrap();
        assert_eq!(reference.referenced_container, "container:App.xcodeproj");
        assert_eq!(reference.blueprint_name, "App");
    }

    #[test]
    fn test_empty_container_rejected() {
        let err = BuildableReference::new("  ", "ID", "App.app", "App").unwrap_err();
        assert_eq!(err, ReferenceError::EmptyContainer);
    }

    #[test]
    fn test_unprefixed_container_rejected() {
        let err = BuildableReference::new("App.xcodeproj", "ID", "App.app", "App").unwrap_err();
        assert_eq!(
            err,
            ReferenceError::MalformedContainer("App.xcodeproj".to_string())
        );
    }

    #[test]
    fn test_missing_product_rejected() {
        let err = BuildableReference::new("container:App.xcodeproj", "ID", "", "App").unwrap_err();
        assert_eq!(err, ReferenceError::MissingProduct("App".to_string()));
    }

    #[test]
    fn test_empty_target_name_rejected() {
        let err = BuildableReference::new("container:App.xcodeproj", "ID", "App.app", " ")
            .unwrap_err();
        assert_eq!(err, ReferenceError::EmptyTargetName);
    }
}
