use std::path::PathBuf;

use crate::config::run_config::RunConfig;
use crate::foundation::core::Rgb8;
use crate::foundation::error::{AutodesignError, AutodesignResult};

/// Raw setup fields as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SetupRequest {
    /// Template image file.
    pub template_path: PathBuf,
    /// Existing folder receiving the date-named output folders.
    pub output_root: PathBuf,
    /// Outer border color as `#RRGGBB`.
    pub start_color: String,
    /// Inner border color as `#RRGGBB`.
    pub end_color: String,
    /// Border thickness, digits only.
    pub border_thickness: String,
}

/// Setup fields after validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedSetup {
    /// Template image file (exists).
    pub template_path: PathBuf,
    /// Run settings.
    pub config: RunConfig,
}

impl SetupRequest {
    /// Check paths, thickness and colors in the order the user sees them.
    pub fn validate(&self) -> AutodesignResult<ValidatedSetup> {
        let template_ok = self.template_path.is_file();
        let output_ok = self.output_root.is_dir();
        match (template_ok, output_ok) {
            (false, false) => {
                return Err(AutodesignError::config(
                    "template file and saving folder do not exist",
                ));
            }
            (false, true) => {
                return Err(AutodesignError::config(format!(
                    "template file '{}' does not exist",
                    self.template_path.display()
                )));
            }
            (true, false) => {
                return Err(AutodesignError::config(format!(
                    "saving folder '{}' does not exist",
                    self.output_root.display()
                )));
            }
            (true, true) => {}
        }

        let thickness = self.border_thickness.trim();
        if thickness.is_empty() || !thickness.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AutodesignError::invalid_parameter(
                "border thickness must be a numeric value",
            ));
        }
        let thickness: u32 = thickness.parse().map_err(|e| {
            AutodesignError::invalid_parameter(format!("border thickness out of range: {e}"))
        })?;

        let start = Rgb8::from_hex(&self.start_color)?;
        let end = Rgb8::from_hex(&self.end_color)?;

        Ok(ValidatedSetup {
            template_path: self.template_path.clone(),
            config: RunConfig::new(self.output_root.clone(), start, end, thickness)?,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/setup.rs"]
mod tests;
