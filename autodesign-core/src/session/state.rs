use std::path::{Path, PathBuf};

use crate::batch::cancel::CancelToken;
use crate::batch::driver::{BatchOpts, BatchReport, run_batch_with_config};
use crate::config::date::DateLabel;
use crate::config::run_config::RunConfig;
use crate::foundation::error::{AutodesignError, AutodesignResult};
use crate::session::setup::SetupRequest;
use crate::session::workspace::Workspace;

/// Settings of a configured session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadySession {
    /// Run settings.
    pub config: RunConfig,
    /// Template image used for every poster.
    pub template_path: PathBuf,
}

/// Setup/run state machine replacing the two-screen hand-off.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Session {
    /// Template, output folder, colors and thickness still need to be collected.
    NeedsSetup,
    /// Ready to run batches.
    Ready(ReadySession),
}

impl Session {
    /// Resume from `workspace`: ready when a template copy and a config were saved.
    pub fn resume(workspace: &Workspace) -> AutodesignResult<Self> {
        if !workspace.is_configured() {
            return Ok(Self::NeedsSetup);
        }
        Ok(Self::Ready(ReadySession {
            config: workspace.load_config()?,
            template_path: workspace.template_path(),
        }))
    }

    /// Validate `req` and move to `Ready`, persisting into `workspace` when given.
    ///
    /// On a validation error the session is left unchanged.
    pub fn configure(
        &mut self,
        req: &SetupRequest,
        workspace: Option<&Workspace>,
    ) -> AutodesignResult<()> {
        let setup = req.validate()?;
        let template_path = match workspace {
            Some(ws) => {
                ws.save(&setup.template_path, &setup.config)?;
                ws.template_path()
            }
            None => setup.template_path,
        };
        *self = Self::Ready(ReadySession {
            config: setup.config,
            template_path,
        });
        Ok(())
    }

    /// Drop the configuration (and the persisted files when `workspace` is given).
    pub fn reset(&mut self, workspace: Option<&Workspace>) -> AutodesignResult<()> {
        if let Some(ws) = workspace {
            ws.reset()?;
        }
        *self = Self::NeedsSetup;
        Ok(())
    }

    /// The ready settings, if configured.
    pub fn ready(&self) -> Option<&ReadySession> {
        match self {
            Self::Ready(ready) => Some(ready),
            Self::NeedsSetup => None,
        }
    }

    /// Run one batch over `posters_dir` with the configured settings.
    pub fn run_batch(
        &self,
        posters_dir: &Path,
        date: DateLabel,
        opts: &BatchOpts,
        cancel: &CancelToken,
    ) -> AutodesignResult<BatchReport> {
        let ready = self
            .ready()
            .ok_or_else(|| AutodesignError::config("session is not configured; run setup first"))?;
        if !posters_dir.is_dir() {
            return Err(AutodesignError::source_image(format!(
                "posters folder '{}' does not exist",
                posters_dir.display()
            )));
        }
        run_batch_with_config(
            &ready.template_path,
            posters_dir,
            &ready.config,
            date,
            opts,
            cancel,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/state.rs"]
mod tests;
