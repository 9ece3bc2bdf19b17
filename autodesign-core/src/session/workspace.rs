use std::path::{Path, PathBuf};

use crate::config::run_config::RunConfig;
use crate::encode::png::ensure_dir;
use crate::foundation::error::{AutodesignError, AutodesignResult};

/// File name of the saved template copy.
pub const TEMPLATE_FILE: &str = "Template.png";
/// File name of the saved run config.
pub const CONFIG_FILE: &str = "config.json";

/// Directory holding a configured session between runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Workspace {
    dir: PathBuf,
}

impl Workspace {
    /// Workspace rooted at `dir` (created lazily on save).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the saved template copy.
    pub fn template_path(&self) -> PathBuf {
        self.dir.join(TEMPLATE_FILE)
    }

    /// Path of the saved run config.
    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    /// `true` when both the template copy and the config exist.
    pub fn is_configured(&self) -> bool {
        self.template_path().is_file() && self.config_path().is_file()
    }

    /// Copy `template_src` into the workspace and write `cfg` next to it.
    ///
    /// The template bytes are copied as-is; decoding sniffs the real format later.
    pub fn save(&self, template_src: &Path, cfg: &RunConfig) -> AutodesignResult<()> {
        ensure_dir(&self.dir)?;
        let dst = self.template_path();
        std::fs::copy(template_src, &dst).map_err(|e| {
            AutodesignError::output(format!(
                "copy template '{}' to '{}': {e}",
                template_src.display(),
                dst.display()
            ))
        })?;
        cfg.save(self.config_path())?;
        tracing::info!(dir = %self.dir.display(), "saved setup");
        Ok(())
    }

    /// Load the saved config.
    pub fn load_config(&self) -> AutodesignResult<RunConfig> {
        RunConfig::from_path(self.config_path())
    }

    /// Delete the template copy and the config. Returns the files actually removed.
    ///
    /// Missing files are logged and skipped; any other removal failure is an output error.
    pub fn reset(&self) -> AutodesignResult<Vec<PathBuf>> {
        let mut removed = Vec::new();
        for path in [self.template_path(), self.config_path()] {
            match std::fs::remove_file(&path) {
                Ok(()) => removed.push(path),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::warn!(file = %path.display(), "nothing to delete");
                }
                Err(e) => {
                    return Err(AutodesignError::output(format!(
                        "delete '{}': {e}",
                        path.display()
                    )));
                }
            }
        }
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/workspace.rs"]
mod tests;
