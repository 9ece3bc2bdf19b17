//! Two-step setup/run flow.
//!
//! A [`state::Session`] starts in `NeedsSetup`, becomes `Ready` once a [`setup::SetupRequest`]
//! validates, and runs batches from there. A [`workspace::Workspace`] optionally persists the
//! ready state (template copy + `config.json`) so it survives restarts.

/// Validation of user-entered setup fields.
pub mod setup;
/// Session state machine.
pub mod state;
/// On-disk persistence of a configured session.
pub mod workspace;
