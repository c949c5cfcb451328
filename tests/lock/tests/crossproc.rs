//! Cross-process determinism.
//!
//! Spawns the fixture binaries under several environment variants and
//! asserts that all produce identical stdout. This proves that search
//! results and report digests are not influenced by process-level state.

use std::path::Path;
use std::process::Command;

/// Resolve the workspace root.
fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

/// Run `bin` with the given cwd, arguments, and environment overrides.
fn run_variant(bin: &str, work_dir: &str, args: &[&str], env_overrides: &[(&str, &str)]) -> String {
    let mut command = Command::new(bin);
    command.current_dir(work_dir).args(args);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "{bin} exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

/// Baseline plus three variants (cwd, locale, noise) must agree.
fn assert_stable_across_env(bin: &str, args: &[&str]) -> String {
    let root = workspace_root();
    let baseline = run_variant(bin, &root, args, &[]);

    let alt_cwd = if cfg!(target_os = "windows") {
        "C:\\"
    } else {
        "/tmp"
    };
    let variant_cwd = run_variant(bin, alt_cwd, args, &[]);
    assert_eq!(
        baseline, variant_cwd,
        "output differs when cwd changes from {root} to {alt_cwd}"
    );

    let variant_locale = run_variant(bin, &root, args, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(baseline, variant_locale, "output differs when LC_ALL=C LANG=C");

    let variant_noise = run_variant(
        bin,
        &root,
        args,
        &[
            ("COSTWISE_NOISE", "should_not_matter"),
            ("TZ", "America/New_York"),
            ("HOME", "/nonexistent"),
            ("RUST_LOG", "trace"),
        ],
    );
    assert_eq!(
        baseline, variant_noise,
        "output differs with spurious env vars (COSTWISE_NOISE, TZ, HOME, RUST_LOG)"
    );
    baseline
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

#[test]
fn route_fixture_crossproc_determinism() {
    let out = assert_stable_across_env(env!("CARGO_BIN_EXE_route_fixture"), &[]);
    assert!(out.contains("report_digest=sha256:"), "missing report_digest");
    assert!(out.contains("found=true"), "missing found=true");
    assert!(out.contains("path=0,1,7,6"), "unexpected path in:\n{out}");
}

#[test]
fn config_fixture_crossproc_determinism() {
    let out = assert_stable_across_env(env!("CARGO_BIN_EXE_config_fixture"), &[]);
    assert!(out.contains("report_digest=sha256:"), "missing report_digest");
    assert!(out.contains("selection=1,3,1,0,2,2"), "unexpected selection in:\n{out}");
    assert!(out.contains("complete_evaluated=2160"));
}

#[test]
fn config_fixture_infeasible_budget() {
    let out = assert_stable_across_env(env!("CARGO_BIN_EXE_config_fixture"), &["1000"]);
    assert!(out.contains("feasible=false"));
    assert!(!out.contains("selection="));
}
