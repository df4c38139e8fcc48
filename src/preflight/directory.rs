//! Show directory preflight check.

use super::CheckResult;
use crate::utils::fs::ensure_directory;
use std::path::Path;

/// Check that the show directory exists and can be listed.
pub fn check(dir: &Path) -> CheckResult {
    if let Err(e) = ensure_directory(dir) {
        return CheckResult::fail("Directory", &e.to_string(), "Pass an existing directory with --dir");
    }

    match std::fs::read_dir(dir) {
        Ok(_) => CheckResult::ok("Directory", &dir.display().to_string()),
        Err(e) => CheckResult::fail(
            "Directory",
            &format!("cannot read: {}", e),
            "Check the directory permissions",
        ),
    }
}
