//! Scheme synthesis.
//!
//! Maps each eligible target to one scheme descriptor. Purely
//! computational: all inputs are immutable for the duration of a call
//! and every output is freshly allocated, so the per-target work is
//! farmed out with rayon. Collecting into `Result` keeps the fail-fast
//! contract — the first reference-construction failure aborts the whole
//! batch with no partial results.

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::debug;
use xcautogen_core::{
    AnalyzeAction, ArchiveAction, BuildAction, BuildActionEntry, BuildFor,
    BuildableProductRunnable, LaunchAction, ProfileAction, ReferenceError, Scheme, TestAction,
    TestableReference,
};

use crate::{BuildMode, SchemeAutogenerationMode, Target, TargetId, build_pre_actions};

// TODO: derive the last-upgrade version from the project instead of
// pinning it.
const DEFAULT_LAST_UPGRADE_VERSION: &str = "1320";
const LLDB_INIT_VERSION: &str = "1.7";
const CUSTOM_LLDB_INIT_FILE: &str = "$(BAZEL_LLDB_INIT)";

/// Synthesizes one scheme per eligible target.
///
/// Returns an empty collection when `mode` is
/// [`SchemeAutogenerationMode::None`]; otherwise every target with
/// `should_create_scheme` set yields exactly one scheme. Output order
/// is not significant.
///
/// # Errors
///
/// The first target whose buildable reference cannot be constructed
/// aborts the call with its [`ReferenceError`]; no schemes are
/// returned in that case.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use xcautogen::*;
///
/// let mut targets = HashMap::new();
/// targets.insert(
///     TargetId::from("//app:App"),
///     Target::new("//app:App", TargetKind::Native)
///         .with_product("App.app")
///         .launchable(),
/// );
///
/// let schemes = autogenerate_schemes(
///     SchemeAutogenerationMode::Auto,
///     BuildMode::Bazel,
///     "container:App.xcodeproj",
///     &targets,
/// ).unwrap();
/// assert_eq!(schemes.len(), 1);
/// assert!(schemes[0].launch_action.runnable.is_some());
/// ```
pub fn autogenerate_schemes(
    mode: SchemeAutogenerationMode,
    build_mode: BuildMode,
    container_reference: &str,
    targets: &HashMap<TargetId, Target>,
) -> Result<Vec<Scheme>, ReferenceError> {
    if mode == SchemeAutogenerationMode::None {
        return Ok(Vec::new());
    }

    targets
        .par_iter()
        .filter_map(|(_, target)| create_scheme(build_mode, container_reference, target).transpose())
        .collect()
}

/// Builds the scheme for one target, or `None` when the target opts
/// out of scheme creation.
fn create_scheme(
    build_mode: BuildMode,
    container_reference: &str,
    target: &Target,
) -> Result<Option<Scheme>, ReferenceError> {
    if !target.should_create_scheme {
        debug!(target = %target.name, "Skipping scheme autogeneration");
        return Ok(None);
    }

    let buildable_reference = target.buildable_reference(container_reference)?;
    let build_configuration = target.default_build_configuration_name.clone();

    let (runnable, macro_expansion, testables) = if target.testable {
        let testables = vec![TestableReference {
            skipped: false,
            buildable_reference: buildable_reference.clone(),
        }];
        (None, Some(buildable_reference.clone()), testables)
    } else {
        let runnable = target.launchable.then(|| BuildableProductRunnable {
            buildable_reference: buildable_reference.clone(),
        });
        (runnable, None, Vec::new())
    };

    let build_action = BuildAction {
        entries: vec![BuildActionEntry::new(
            buildable_reference.clone(),
            BuildFor::ALL.to_vec(),
        )],
        pre_actions: build_pre_actions(build_mode, target, &buildable_reference),
        parallelize_build: true,
        build_implicit_dependencies: true,
    };
    let test_action = TestAction {
        build_configuration: build_configuration.clone(),
        // Kept unset even when the launch action has a macro expansion.
        macro_expansion: None,
        testables,
        custom_lldb_init_file: Some(CUSTOM_LLDB_INIT_FILE.to_string()),
    };
    let launch_action = LaunchAction {
        runnable: runnable.clone(),
        build_configuration: build_configuration.clone(),
        macro_expansion,
        environment_variables: if build_mode.uses_bazel_environment_variables() {
            target.launch_environment_variables.clone()
        } else {
            None
        },
        custom_lldb_init_file: Some(CUSTOM_LLDB_INIT_FILE.to_string()),
    };
    let profile_action = ProfileAction {
        runnable,
        build_configuration: build_configuration.clone(),
    };
    let analyze_action = AnalyzeAction {
        build_configuration: build_configuration.clone(),
    };
    let archive_action = ArchiveAction {
        build_configuration,
        reveal_archive_in_organizer: true,
    };

    Ok(Some(Scheme {
        name: target.scheme_name(),
        last_upgrade_version: DEFAULT_LAST_UPGRADE_VERSION.to_string(),
        version: LLDB_INIT_VERSION.to_string(),
        build_action,
        test_action,
        launch_action,
        profile_action,
        analyze_action,
        archive_action,
        was_created_for_app_extension: false,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TargetKind;

    fn targets(target: Target) -> HashMap<TargetId, Target> {
        let mut map = HashMap::new();
        map.insert(TargetId::from(target.name.clone()), target);
        map
    }

    fn synthesize_one(build_mode: BuildMode, target: Target) -> Scheme {
        let schemes = autogenerate_schemes(
            SchemeAutogenerationMode::Auto,
            build_mode,
            "container:App.xcodeproj",
            &targets(target),
        )
        .unwrap();
        assert_eq!(schemes.len(), 1);
        schemes.into_iter().next().unwrap()
    }

    #[test]
    fn test_mode_none_short_circuits() {
        let target = Target::new("//app:App", TargetKind::Native).with_product("App.app");
        let schemes = autogenerate_schemes(
            SchemeAutogenerationMode::None,
            BuildMode::Bazel,
            "container:App.xcodeproj",
            &targets(target),
        )
        .unwrap();
        assert!(schemes.is_empty());
    }

    #[test]
    fn test_mode_none_skips_per_target_validation() {
        // A target that would fail reference construction must not be
        // touched when autogeneration is off.
        let broken = Target::new("//app:App", TargetKind::Native);
        let schemes = autogenerate_schemes(
            SchemeAutogenerationMode::None,
            BuildMode::Bazel,
            "container:App.xcodeproj",
            &targets(broken),
        )
        .unwrap();
        assert!(schemes.is_empty());
    }

    #[test]
    fn test_opted_out_target_is_skipped_silently() {
        let target = Target::new("//app:App", TargetKind::Native)
            .with_product("App.app")
            .skip_scheme();
        let schemes = autogenerate_schemes(
            SchemeAutogenerationMode::All,
            BuildMode::Bazel,
            "container:App.xcodeproj",
            &targets(target),
        )
        .unwrap();
        assert!(schemes.is_empty());
    }

    #[test]
    fn test_testable_target_shape() {
        let target = Target::new("//test:Tests", TargetKind::Native)
            .with_product("Tests.xctest")
            .testable();
        let scheme = synthesize_one(BuildMode::Bazel, target);

        assert!(scheme.launch_action.runnable.is_none());
        assert_eq!(scheme.test_action.testables.len(), 1);
        assert!(!scheme.test_action.testables[0].skipped);
        assert_eq!(
            scheme.launch_action.macro_expansion.as_ref(),
            Some(&scheme.test_action.testables[0].buildable_reference),
        );
        // The test action never carries the macro expansion itself.
        assert!(scheme.test_action.macro_expansion.is_none());
    }

    #[test]
    fn test_launchable_target_shape() {
        let target = Target::new("//app:App", TargetKind::Native)
            .with_product("App.app")
            .launchable();
        let scheme = synthesize_one(BuildMode::Bazel, target);

        let runnable = scheme.launch_action.runnable.as_ref().unwrap();
        assert_eq!(runnable.buildable_reference.buildable_name, "App.app");
        assert!(scheme.test_action.testables.is_empty());
        assert!(scheme.launch_action.macro_expansion.is_none());
        assert_eq!(scheme.profile_action.runnable.as_ref(), Some(runnable));
    }

    #[test]
    fn test_plain_target_has_no_runnable_or_expansion() {
        let target = Target::new("//lib:Lib", TargetKind::Native).with_product("libLib.a");
        let scheme = synthesize_one(BuildMode::Bazel, target);

        assert!(scheme.launch_action.runnable.is_none());
        assert!(scheme.launch_action.macro_expansion.is_none());
        assert!(scheme.profile_action.runnable.is_none());
        assert!(scheme.test_action.testables.is_empty());
    }

    #[test]
    fn test_build_action_builds_for_all_purposes() {
        let target = Target::new("//app:App", TargetKind::Aggregate).with_product("App");
        let scheme = synthesize_one(BuildMode::Xcode, target);

        assert_eq!(scheme.build_action.entries.len(), 1);
        assert_eq!(scheme.build_action.entries[0].build_for, BuildFor::ALL.to_vec());
        assert!(scheme.build_action.parallelize_build);
        assert!(scheme.build_action.build_implicit_dependencies);
    }

    #[test]
    fn test_fixed_fields() {
        let target = Target::new("//app:App", TargetKind::Native).with_product("App.app");
        let scheme = synthesize_one(BuildMode::Bazel, target);

        assert_eq!(scheme.last_upgrade_version, "1320");
        assert_eq!(scheme.version, "1.7");
        assert!(!scheme.was_created_for_app_extension);
        assert!(scheme.archive_action.reveal_archive_in_organizer);
        assert_eq!(
            scheme.test_action.custom_lldb_init_file.as_deref(),
            Some("$(BAZEL_LLDB_INIT)"),
        );
        assert_eq!(
            scheme.launch_action.custom_lldb_init_file.as_deref(),
            Some("$(BAZEL_LLDB_INIT)"),
        );
    }

    #[test]
    fn test_reference_failure_aborts_batch() {
        let mut map = HashMap::new();
        map.insert(
            TargetId::from("//app:App"),
            Target::new("//app:App", TargetKind::Native).with_product("App.app"),
        );
        map.insert(
            TargetId::from("//bad:NoProduct"),
            Target::new("//bad:NoProduct", TargetKind::Native),
        );

        let err = autogenerate_schemes(
            SchemeAutogenerationMode::Auto,
            BuildMode::Bazel,
            "container:App.xcodeproj",
            &map,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ReferenceError::MissingProduct("//bad:NoProduct".to_string()),
        );
    }

    #[test]
    fn test_synthesis_is_idempotent() {
        let target = Target::new("//app:App", TargetKind::Native)
            .with_product("App.app")
            .launchable();
        let map = targets(target);

        let first = autogenerate_schemes(
            SchemeAutogenerationMode::Auto,
            BuildMode::Bazel,
            "container:App.xcodeproj",
            &map,
        )
        .unwrap();
        let second = autogenerate_schemes(
            SchemeAutogenerationMode::Auto,
            BuildMode::Bazel,
            "container:App.xcodeproj",
            &map,
        )
        .unwrap();
        assert_eq!(first, second);
    }
}
