use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::foundation::core::{BorderSpec, Rgb8};
use crate::foundation::error::{AutodesignError, AutodesignResult};

const DEFAULT_BORDER: &str = "5px";

/// Settings captured once by the setup step and read-only for a whole batch run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Folder under which the date-named output folders are created.
    pub output_root: PathBuf,
    /// Outer border color.
    pub start_color: Rgb8,
    /// Inner border color.
    pub end_color: Rgb8,
    /// Border thickness in pixels (>= 1).
    pub border_thickness_px: u32,
}

/// On-disk JSON shape: `location`, `start_color`, `end_color`, `border` ("<n>px").
#[derive(Debug, Serialize, Deserialize)]
struct RunConfigDef {
    location: String,
    #[serde(default = "default_start_color")]
    start_color: Rgb8,
    #[serde(default = "default_end_color")]
    end_color: Rgb8,
    #[serde(default = "default_border")]
    border: String,
}

fn default_start_color() -> Rgb8 {
    Rgb8::BLACK
}

fn default_end_color() -> Rgb8 {
    Rgb8::WHITE
}

fn default_border() -> String {
    DEFAULT_BORDER.to_owned()
}

impl RunConfig {
    /// Build a validated config.
    pub fn new(
        output_root: impl Into<PathBuf>,
        start_color: Rgb8,
        end_color: Rgb8,
        border_thickness_px: u32,
    ) -> AutodesignResult<Self> {
        let cfg = Self {
            output_root: output_root.into(),
            start_color,
            end_color,
            border_thickness_px,
        };
        cfg.border()?;
        Ok(cfg)
    }

    /// Border parameters for the compositor.
    pub fn border(&self) -> AutodesignResult<BorderSpec> {
        BorderSpec::new(self.start_color, self.end_color, self.border_thickness_px)
    }

    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> AutodesignResult<Self> {
        let def: RunConfigDef = serde_json::from_reader(r)
            .map_err(|e| AutodesignError::config(format!("parse run config JSON: {e}")))?;
        Self::from_def(def)
    }

    /// Parse a config from a JSON string.
    pub fn from_json_str(s: &str) -> AutodesignResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> AutodesignResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            AutodesignError::config(format!("open run config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Write the config as 4-space indented JSON.
    pub fn to_writer<W: Write>(&self, w: W) -> AutodesignResult<()> {
        let def = RunConfigDef {
            location: self.output_root.to_string_lossy().into_owned(),
            start_color: self.start_color,
            end_color: self.end_color,
            border: format_border_px(self.border_thickness_px),
        };
        let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(w, fmt);
        def.serialize(&mut ser)
            .map_err(|e| AutodesignError::output(format!("serialize run config: {e}")))
    }

    /// Write the config to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> AutodesignResult<()> {
        let path = path.as_ref();
        let f = File::create(path).map_err(|e| {
            AutodesignError::output(format!("create run config '{}': {e}", path.display()))
        })?;
        let mut w = BufWriter::new(f);
        self.to_writer(&mut w)?;
        w.flush().map_err(|e| {
            AutodesignError::output(format!("write run config '{}': {e}", path.display()))
        })
    }

    fn from_def(def: RunConfigDef) -> AutodesignResult<Self> {
        if def.location.trim().is_empty() {
            return Err(AutodesignError::config("run config `location` is empty"));
        }
        let thickness = parse_border_px(&def.border)?;
        Self::new(def.location, def.start_color, def.end_color, thickness)
    }
}

/// Parse a `"<integer>px"` border field.
///
/// A missing `px` suffix or non-digit content is a config error; `"0px"` parses but is an
/// invalid thickness.
pub fn parse_border_px(s: &str) -> AutodesignResult<u32> {
    let s = s.trim();
    let digits = s.strip_suffix("px").ok_or_else(|| {
        AutodesignError::config(format!("border \"{s}\" must be formatted as \"<integer>px\""))
    })?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AutodesignError::config(format!(
            "border \"{s}\" is not a whole number of pixels"
        )));
    }
    let n: u32 = digits
        .parse()
        .map_err(|e| AutodesignError::config(format!("border \"{s}\" is out of range: {e}")))?;
    if n == 0 {
        return Err(AutodesignError::invalid_parameter(
            "border thickness must be >= 1px",
        ));
    }
    Ok(n)
}

/// Format a thickness as the `"<integer>px"` border field.
pub fn format_border_px(thickness_px: u32) -> String {
    format!("{thickness_px}px")
}

#[cfg(test)]
#[path = "../../tests/unit/config/run_config.rs"]
mod tests;
