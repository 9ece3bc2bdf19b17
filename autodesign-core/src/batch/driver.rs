use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use rayon::prelude::*;

use crate::assets::decode::{is_supported_image_name, load_image};
use crate::assets::normalize::{MAX_POSTER_DIM, normalize};
use crate::batch::cancel::CancelToken;
use crate::compose::compositor::{LayoutOpts, composite};
use crate::config::date::DateLabel;
use crate::config::run_config::RunConfig;
use crate::encode::png::{ensure_dir, write_png};
use crate::foundation::core::BorderSpec;
use crate::foundation::error::{AutodesignError, AutodesignResult};

#[derive(Clone, Debug, Default)]
/// Controls for one batch run.
pub struct BatchOpts {
    /// Poster sizing and placement.
    pub layout: LayoutOpts,
    /// Composite posters on a rayon pool instead of one by one.
    pub parallel: bool,
    /// Override rayon worker threads (parallel mode only).
    pub threads: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A poster that could not be composited or saved.
pub struct PosterFailure {
    /// File name inside the poster folder.
    pub file_name: String,
    /// Rendered error message.
    pub error: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Coarse classification of a finished batch.
pub enum BatchOutcome {
    /// No poster was written; usually a config or folder problem.
    NothingProcessed,
    /// Some posters were written, but others failed or the run was cancelled.
    Partial,
    /// Every candidate poster was written.
    Complete,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Result of a batch run.
pub struct BatchReport {
    /// Date-named folder the outputs were written to.
    pub output_dir: PathBuf,
    /// Written output files, in poster file name order.
    pub saved: Vec<PathBuf>,
    /// Posters that failed, in file name order.
    pub failed: Vec<PosterFailure>,
    /// Folder entries ignored because they are not png/jpg/jpeg files.
    pub skipped: Vec<String>,
    /// `true` when the run stopped early on a cancellation request.
    pub cancelled: bool,
}

impl BatchReport {
    /// Number of posters written.
    pub fn succeeded(&self) -> usize {
        self.saved.len()
    }

    /// File names of the failed posters.
    pub fn failed_names(&self) -> Vec<&str> {
        self.failed.iter().map(|f| f.file_name.as_str()).collect()
    }

    /// Classify the run for user-facing reporting.
    pub fn outcome(&self) -> BatchOutcome {
        if self.saved.is_empty() {
            BatchOutcome::NothingProcessed
        } else if !self.failed.is_empty() || self.cancelled {
            BatchOutcome::Partial
        } else {
            BatchOutcome::Complete
        }
    }
}

#[derive(Clone, Debug)]
struct Candidate {
    name: String,
    file_name: OsString,
    path: PathBuf,
}

/// Composite every poster of `posters_dir` onto `template` and save the results.
///
/// Outputs go to `output_root/<date>/<poster file name>`, always PNG-encoded. Invalid border or
/// layout parameters, an unreadable poster folder and an uncreatable output folder fail the whole
/// run before any poster is touched; per-poster failures are collected in the report.
#[tracing::instrument(skip(template, border, date, opts, cancel), fields(date = %date))]
pub fn run_batch(
    template: &RgbaImage,
    posters_dir: &Path,
    output_root: &Path,
    border: &BorderSpec,
    date: DateLabel,
    opts: &BatchOpts,
    cancel: &CancelToken,
) -> AutodesignResult<BatchReport> {
    border.validate()?;
    if opts.layout.target_width == 0 || opts.layout.target_width > MAX_POSTER_DIM {
        return Err(AutodesignError::invalid_parameter(format!(
            "poster target width must be in 1..={MAX_POSTER_DIM}px, got {}",
            opts.layout.target_width
        )));
    }
    if template.width() == 0 || template.height() == 0 {
        return Err(AutodesignError::source_image("template image has no pixels"));
    }

    let (candidates, skipped) = list_posters(posters_dir)?;
    for name in &skipped {
        tracing::debug!(file = %name, "skipping non-image entry");
    }

    let output_dir = output_root.join(date.to_string());
    ensure_dir(&output_dir)?;

    let job = |c: &Candidate| process_poster(template, c, &output_dir, border, &opts.layout);
    let results = process_all(&candidates, opts, cancel, job)?;
    Ok(build_report(output_dir, &candidates, skipped, results))
}

type PosterResult = Option<AutodesignResult<PathBuf>>;

/// Run `job` over `candidates` until done or cancelled; `None` marks a poster never started.
fn process_all<F>(
    candidates: &[Candidate],
    opts: &BatchOpts,
    cancel: &CancelToken,
    job: F,
) -> AutodesignResult<Vec<PosterResult>>
where
    F: Fn(&Candidate) -> AutodesignResult<PathBuf> + Sync,
{
    if opts.parallel {
        let pool = build_thread_pool(opts.threads)?;
        return Ok(pool.install(|| {
            candidates
                .par_iter()
                .map(|c| (!cancel.is_cancelled()).then(|| job(c)))
                .collect()
        }));
    }

    let mut out = Vec::with_capacity(candidates.len());
    for c in candidates {
        if cancel.is_cancelled() {
            break;
        }
        out.push(Some(job(c)));
    }
    Ok(out)
}

fn build_report(
    output_dir: PathBuf,
    candidates: &[Candidate],
    skipped: Vec<String>,
    results: Vec<PosterResult>,
) -> BatchReport {
    let mut report = BatchReport {
        output_dir,
        skipped,
        cancelled: results.len() < candidates.len() || results.iter().any(Option::is_none),
        ..BatchReport::default()
    };
    for (c, res) in candidates.iter().zip(results) {
        match res {
            Some(Ok(path)) => {
                tracing::info!(file = %c.name, out = %path.display(), "saved");
                report.saved.push(path);
            }
            Some(Err(e)) => {
                tracing::warn!(file = %c.name, error = %e, "failed to process poster");
                report.failed.push(PosterFailure {
                    file_name: c.name.clone(),
                    error: e.to_string(),
                });
            }
            None => {}
        }
    }
    if report.cancelled {
        tracing::warn!(
            done = report.saved.len() + report.failed.len(),
            total = candidates.len(),
            "batch cancelled"
        );
    }
    report
}

/// Load the template at `template_path` and run a batch with the settings of `cfg`.
pub fn run_batch_with_config(
    template_path: &Path,
    posters_dir: &Path,
    cfg: &RunConfig,
    date: DateLabel,
    opts: &BatchOpts,
    cancel: &CancelToken,
) -> AutodesignResult<BatchReport> {
    let border = cfg.border()?;
    let template = load_image(template_path)?;
    run_batch(
        &template,
        posters_dir,
        &cfg.output_root,
        &border,
        date,
        opts,
        cancel,
    )
}

fn process_poster(
    template: &RgbaImage,
    c: &Candidate,
    output_dir: &Path,
    border: &BorderSpec,
    layout: &LayoutOpts,
) -> AutodesignResult<PathBuf> {
    let poster = load_image(&c.path)?;
    let poster = normalize(&poster, layout.target_width)?;
    let canvas = composite(template, &poster, border, layout)?;

    let out_path = output_dir.join(&c.file_name);
    write_png(&out_path, &canvas)?;
    Ok(out_path)
}

/// Split the folder listing into poster candidates and ignored entry names, sorted by name.
fn list_posters(dir: &Path) -> AutodesignResult<(Vec<Candidate>, Vec<String>)> {
    let read_err = |e: std::io::Error| {
        AutodesignError::source_image(format!("read poster folder '{}': {e}", dir.display()))
    };

    let mut candidates = Vec::new();
    let mut skipped = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy().into_owned();
        if is_supported_image_name(&name) {
            candidates.push(Candidate {
                name,
                file_name,
                path: entry.path(),
            });
        } else {
            skipped.push(name);
        }
    }
    candidates.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    skipped.sort();

    // Output names must not collide.
    let mut seen = HashSet::with_capacity(candidates.len());
    if let Some(dup) = candidates.iter().find(|c| !seen.insert(&c.file_name)) {
        return Err(AutodesignError::invalid_parameter(format!(
            "duplicate poster file name '{}'",
            dup.name
        )));
    }

    Ok((candidates, skipped))
}

fn build_thread_pool(threads: Option<usize>) -> AutodesignResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(AutodesignError::invalid_parameter(
            "batch 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        AutodesignError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/batch/driver.rs"]
mod tests;
