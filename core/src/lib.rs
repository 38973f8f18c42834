//! Package identity and icon extraction for APK files
//!
//! Parsing of the archive and the manifest is done by [`apk_info`], icon
//! transcoding by [`image`].

pub mod errors;
pub mod icon;
pub mod metadata;
pub mod package;
pub mod report;
pub mod summary;

#[cfg(test)]
pub(crate) mod testing;

pub use errors::SummaryError;
pub use icon::{IconOutcome, extract_icon};
pub use metadata::{Metadata, NOT_AVAILABLE};
pub use package::{ApkPackage, PackageSource};
pub use report::AnalysisResult;
pub use summary::{summarize, summarize_package};
