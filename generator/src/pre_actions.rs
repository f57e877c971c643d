//! Pre-build script hooks for Bazel-driven builds.
//!
//! Before each IDE-triggered build, the external orchestrator needs to
//! learn which target the IDE is about to build. The scheme's build
//! action carries a pre-action script that writes (or clears) a
//! well-known signal file the orchestrator inspects.

use xcautogen_core::{BuildableReference, ExecutionAction};

use crate::{BuildMode, Target};

const PRE_ACTION_TITLE: &str = "Set Bazel Build Output Groups";

/// Script for native targets: overwrite the signal file with the id of
/// the target about to build.
const WRITE_OUTPUT_GROUPS_SCRIPT: &str = r#"mkdir -p "${BAZEL_BUILD_OUTPUT_GROUPS_FILE%/*}"
echo "b $BAZEL_TARGET_ID" > "$BAZEL_BUILD_OUTPUT_GROUPS_FILE"
"#;

/// Script for aggregate/other targets: clear a stale signal file.
const CLEAR_OUTPUT_GROUPS_SCRIPT: &str = r#"if [[ -s "$BAZEL_BUILD_OUTPUT_GROUPS_FILE" ]]; then
    rm "$BAZEL_BUILD_OUTPUT_GROUPS_FILE"
fi
"#;

/// Builds the pre-action list for a target's build action.
///
/// Empty unless the build mode uses Bazel-mode build scripts; otherwise
/// exactly one entry whose script text depends on the target kind.
///
/// # Examples
///
/// ```
/// use xcautogen::{BuildMode, Target, TargetKind, build_pre_actions};
///
/// let target = Target::new("//app:App", TargetKind::Native).with_product("App.app");
/// let reference = target.buildable_reference("container:App.xcodeproj").unwrap();
///
/// assert!(build_pre_actions(BuildMode::Xcode, &target, &reference).is_empty());
///
/// let actions = build_pre_actions(BuildMode::Bazel, &target, &reference);
/// assert_eq!(actions.len(), 1);
/// assert!(actions[0].script_text.contains("b $BAZEL_TARGET_ID"));
/// ```
pub fn build_pre_actions(
    build_mode: BuildMode,
    target: &Target,
    buildable_reference: &BuildableReference,
) -> Vec<ExecutionAction> {
    if !build_mode.uses_bazel_mode_build_scripts() {
        return Vec::new();
    }

    let script_text = if target.is_native() {
        WRITE_OUTPUT_GROUPS_SCRIPT
    } else {
        CLEAR_OUTPUT_GROUPS_SCRIPT
    };

    vec![ExecutionAction {
        script_text: script_text.to_string(),
        title: PRE_ACTION_TITLE.to_string(),
        environment_buildable: Some(buildable_reference.clone()),
    }]
}
