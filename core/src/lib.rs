//! Core scheme descriptor types.
//!
//! This crate defines the data model for autogenerated Xcode schemes:
//!
//! - [`Scheme`] — a named bundle of the six sub-actions (build, test,
//!   launch, profile, analyze, archive) for one target.
//! - [`BuildableReference`] — the opaque handle tying a target's product
//!   to the container it lives in, shared across a scheme's sub-actions.
//! - Sub-action types ([`BuildAction`], [`TestAction`], [`LaunchAction`],
//!   [`ProfileAction`], [`AnalyzeAction`], [`ArchiveAction`]) and their
//!   parts ([`BuildActionEntry`], [`TestableReference`],
//!   [`BuildableProductRunnable`], [`ExecutionAction`],
//!   [`EnvironmentVariable`]).
//!
//! Everything is plain serde-serializable data. The only failure this
//! crate knows is [`ReferenceError`], raised when a buildable reference
//! cannot be constructed from a target's identity and container.
//!
//! The decision logic that fills these types in lives in the `xcautogen`
//! crate; serializing them to the IDE's on-disk project format is left
//! to the consumer.
//!
//! # Example
//!
//! ```
//! use xcautogen_core::{BuildFor, BuildableReference};
//!
//! let reference = BuildableReference::new(
//!     "container:App.xcodeproj",
//!     "FEEDFACE00000001",
//!     "App.app",
//!     "App",
//! ).unwrap();
//! assert_eq!(reference.blueprint_name, "App");
//! assert_eq!(BuildFor::ALL.len(), 5);
//! ```

mod actions;
mod reference;
mod scheme;

pub use actions::{
    AnalyzeAction, ArchiveAction, BuildAction, BuildActionEntry, BuildFor,
    BuildableProductRunnable, EnvironmentVariable, ExecutionAction, LaunchAction, ProfileAction,
    TestAction, TestableReference,
};
pub use reference::{BuildableReference, CONTAINER_PREFIX, ReferenceError};
pub use scheme::Scheme;
