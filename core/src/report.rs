use std::fmt;
use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;

use crate::icon::IconOutcome;
use crate::metadata::Metadata;

/// Everything a single run found out about the package
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    #[serde(rename = "apk_path")]
    pub source_path: PathBuf,

    pub package_name: String,

    pub app_label: String,

    pub version_name: String,

    pub version_code: String,

    pub permissions: Vec<String>,

    #[serde(rename = "icon")]
    pub icon_outcome: IconOutcome,
}

impl AnalysisResult {
    pub fn new(source_path: PathBuf, metadata: Metadata, icon_outcome: IconOutcome) -> Self {
        AnalysisResult {
            source_path,
            package_name: metadata.package_name,
            app_label: metadata.app_label,
            version_name: metadata.version_name,
            version_code: metadata.version_code,
            permissions: metadata.permissions,
            icon_outcome,
        }
    }

    /// Pretty printed json, non-ascii characters are kept as is
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Human readable report
impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "APK file: {}",
            self.source_path.display().to_string().green()
        )?;
        writeln!(f, "{}", "-".repeat(40))?;
        writeln!(f, "Package name       : {}", self.package_name.green())?;
        writeln!(f, "Application label  : {}", self.app_label.green())?;
        writeln!(f, "Version (name)     : {}", self.version_name.green())?;
        writeln!(f, "Version (code)     : {}", self.version_code.green())?;

        writeln!(f, "\n{}", "Permissions:".blue().bold())?;
        if self.permissions.is_empty() {
            writeln!(f, "  No permissions")?;
        } else {
            for permission in &self.permissions {
                writeln!(f, "  - {}", permission.green())?;
            }
        }

        writeln!(f, "\n{}", "Icon:".blue().bold())?;
        match (self.icon_outcome.saved, &self.icon_outcome.path) {
            (true, Some(path)) => write!(
                f,
                "  Saved to file: {}",
                path.display().to_string().green()
            ),
            _ => write!(f, "  {}", "Failed to extract icon".red()),
        }
    }
}
