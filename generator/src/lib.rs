//! Autogenerated Xcode scheme synthesis for Bazel-driven projects.
//!
//! This crate turns build targets into scheme descriptors — per-target
//! run/test/build configurations an IDE consumes. Which sub-actions a
//! scheme carries depends on the target's capability flags (testable,
//! launchable, native-vs-aggregate kind), and in Bazel build mode each
//! build action gains a pre-action script that signals the external
//! orchestrator which target the IDE is about to build.
//!
//! # Main entry point
//!
//! [`autogenerate_schemes`] — maps a set of targets to scheme
//! descriptors under a process-wide [`BuildMode`] and
//! [`SchemeAutogenerationMode`]. Synthesis is purely computational;
//! discovering targets and serializing the resulting
//! [`Scheme`](xcautogen_core::Scheme)s to the on-disk project format
//! are left to upstream and downstream collaborators.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use xcautogen::*;
//!
//! let mut targets = HashMap::new();
//! targets.insert(
//!     TargetId::from("//app:App"),
//!     Target::new("//app:App", TargetKind::Native)
//!         .with_product("App.app")
//!         .with_blueprint_identifier("FEEDFACE00000001")
//!         .launchable(),
//! );
//! targets.insert(
//!     TargetId::from("//app:Tests"),
//!     Target::new("//app:Tests", TargetKind::Native)
//!         .with_product("Tests.xctest")
//!         .testable(),
//! );
//!
//! let schemes = autogenerate_schemes(
//!     SchemeAutogenerationMode::Auto,
//!     BuildMode::Bazel,
//!     "container:App.xcodeproj",
//!     &targets,
//! ).unwrap();
//!
//! assert_eq!(schemes.len(), 2);
//! let app = schemes.iter().find(|s| s.name == "__app_App").unwrap();
//! assert!(app.launch_action.runnable.is_some());
//! assert_eq!(app.build_action.pre_actions.len(), 1);
//! ```

mod mode;
mod pre_actions;
mod synthesize;
mod target;

pub use mode::{BuildMode, ParseModeError, SchemeAutogenerationMode};
pub use pre_actions::build_pre_actions;
pub use synthesize::autogenerate_schemes;
pub use target::{Target, TargetId, TargetKind};
