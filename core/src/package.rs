use std::error::Error;
use std::path::{Path, PathBuf};

use apk_info::apk::Apk;

use crate::errors::SummaryError;

/// Read-only view of a parsed package
///
/// Everything the summary needs from the package parser goes through this trait,
/// so the parser handle can be swapped for an in-memory package in tests.
pub trait PackageSource {
    /// `<manifest package="...">`
    fn package_name(&self) -> Option<String>;

    /// `<application android:label="...">`, resolved through resources when possible
    fn label(&self) -> Option<String>;

    /// `<manifest android:versionName="...">`
    fn version_name(&self) -> Option<String>;

    /// `<manifest android:versionCode="...">`
    fn version_code(&self) -> Option<String>;

    /// Names from `<uses-permission>` in manifest order
    fn permissions(&self) -> Vec<String>;

    /// Path of the icon entry inside the archive
    fn icon_path(&self) -> Option<String>;

    /// Raw bytes of an archive entry, `None` if it can't be read
    fn read_file(&self, name: &str) -> Option<Vec<u8>>;
}

/// Package parsed from disk with `apk-info`
pub struct ApkPackage {
    apk: Apk,
}

impl ApkPackage {
    pub fn open(path: &Path) -> Result<ApkPackage, SummaryError> {
        let apk = Apk::new(path).map_err(|err| SummaryError::Parse {
            path: PathBuf::from(path),
            reason: error_chain(&err),
        })?;

        Ok(ApkPackage { apk })
    }
}

impl PackageSource for ApkPackage {
    fn package_name(&self) -> Option<String> {
        self.apk.get_package_name().map(|v| v.to_string())
    }

    fn label(&self) -> Option<String> {
        self.apk.get_application_label().map(|v| v.to_string())
    }

    fn version_name(&self) -> Option<String> {
        self.apk.get_version_name().map(|v| v.to_string())
    }

    fn version_code(&self) -> Option<String> {
        self.apk.get_version_code().map(|v| v.to_string())
    }

    fn permissions(&self) -> Vec<String> {
        self.apk.get_permissions().map(|v| v.to_string()).collect()
    }

    fn icon_path(&self) -> Option<String> {
        self.apk.get_application_icon().map(|v| v.to_string())
    }

    fn read_file(&self, name: &str) -> Option<Vec<u8>> {
        match self.apk.read(name) {
            Ok((data, _)) => Some(data),
            Err(err) => {
                log::debug!("can't read {:?} from apk: {}", name, err);
                None
            }
        }
    }
}

/// Joins an error with all of its sources, `outer: inner: root`
fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }

    message
}
