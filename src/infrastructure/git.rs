//! Commit and push record changes with the git command line

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Publishes a changed record file to the shared remote
pub trait VersionControl {
    /// Stage `file` (relative to the working copy), commit it with `message` and push.
    fn commit_and_push(&self, file: &Path, message: &str);
}

/// `VersionControl` backed by the `git` binary.
///
/// Every command runs with the configuration directory as its working
/// directory; the process working directory is never changed. Failures are
/// logged and otherwise ignored, so a failed push leaves the remote behind.
#[derive(Debug, Clone)]
pub struct GitSync {
    work_dir: PathBuf,
    remote: String,
    branch: String,
}

impl GitSync {
    pub fn new(work_dir: PathBuf, remote: String, branch: String) -> Self {
        GitSync {
            work_dir,
            remote,
            branch,
        }
    }

    /// The git invocations for one change, in execution order
    fn steps(&self, file: &Path, message: &str) -> Vec<Vec<String>> {
        vec![
            vec![
                "pull".to_string(),
                "-r".to_string(),
                self.remote.clone(),
                self.branch.clone(),
            ],
            vec!["add".to_string(), file.to_string_lossy().to_string()],
            vec!["commit".to_string(), "-m".to_string(), message.to_string()],
            vec!["push".to_string()],
        ]
    }

    fn run(&self, args: &[String]) {
        let status = Command::new("git")
            .current_dir(&self.work_dir)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => {
                tracing::debug!("git {} succeeded", args.join(" "));
            }
            Ok(status) => {
                tracing::warn!("git {} exited with {}", args.join(" "), status);
            }
            Err(e) => {
                tracing::warn!("Failed to launch git {}: {}", args.join(" "), e);
            }
        }
    }
}

impl VersionControl for GitSync {
    fn commit_and_push(&self, file: &Path, message: &str) {
        for args in self.steps(file, message) {
            self.run(&args);
        }
    }
}
