//! AutoDesign composites poster images onto a design template inside a gradient border.
//!
//! # Pipeline overview
//!
//! For every poster of a folder:
//!
//! 1. **Normalize**: resize to a fixed width (800px by default), keeping the aspect ratio
//! 2. **Frame**: render a gradient border around the poster size and paste the poster into it
//! 3. **Composite**: center the framed poster on a copy of the template
//! 4. **Save**: write the canvas as PNG to `<output root>/<YYYY-MM-DD>/<poster file name>`
//!
//! A [`BatchReport`] collects per-poster failures instead of aborting the run. Configuration and
//! parameter errors are raised before any poster is read.
//!
//! The setup/run flow of the desktop front end is modelled by [`Session`], with [`Workspace`]
//! persisting a configured session between launches.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod batch;
mod compose;
mod config;
mod effects;
mod encode;
mod foundation;
mod gradient;
mod session;

pub use assets::decode::{SUPPORTED_EXTENSIONS, decode_image, is_supported_image_name, load_image};
pub use assets::normalize::{DEFAULT_TARGET_WIDTH, MAX_POSTER_DIM, normalize, scaled_height};
pub use batch::cancel::CancelToken;
pub use batch::driver::{
    BatchOpts, BatchOutcome, BatchReport, PosterFailure, run_batch, run_batch_with_config,
};
pub use compose::compositor::{LayoutOpts, composite, frame_offset};
pub use config::date::DateLabel;
pub use config::run_config::{RunConfig, format_border_px, parse_border_px};
pub use effects::composite::{Rgba8, mask_blend, paste_masked};
pub use encode::png::{ensure_dir, write_png};
pub use foundation::core::{BorderSpec, Rgb8};
pub use foundation::error::{AutodesignError, AutodesignResult};
pub use gradient::border::render_border;
pub use gradient::interpolate::{gradient_steps, interpolate};
pub use session::setup::{SetupRequest, ValidatedSetup};
pub use session::state::{ReadySession, Session};
pub use session::workspace::{CONFIG_FILE, TEMPLATE_FILE, Workspace};
