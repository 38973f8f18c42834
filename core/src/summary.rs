use std::path::Path;

use crate::errors::SummaryError;
use crate::icon::extract_icon;
use crate::metadata::Metadata;
use crate::package::{ApkPackage, PackageSource};
use crate::report::AnalysisResult;

/// Parses the apk at `apk_path` and saves its icon to `icon_out`
///
/// Only a missing input file or a parser failure is an error, icon problems
/// are reported inside the result.
pub fn summarize(apk_path: &Path, icon_out: &Path) -> Result<AnalysisResult, SummaryError> {
    if !apk_path.is_file() {
        return Err(SummaryError::NotFound(apk_path.to_path_buf()));
    }

    log::info!("analyzing apk: {}", apk_path.display());

    let package = ApkPackage::open(apk_path)?;

    Ok(summarize_package(apk_path, package, icon_out))
}

/// Same as [`summarize`] for an already opened package, which is dropped before returning
pub fn summarize_package<P: PackageSource>(
    apk_path: &Path,
    package: P,
    icon_out: &Path,
) -> AnalysisResult {
    let metadata = Metadata::from_source(&package);
    let icon_outcome = extract_icon(&package, icon_out);
    drop(package);

    AnalysisResult::new(apk_path.to_path_buf(), metadata, icon_outcome)
}
