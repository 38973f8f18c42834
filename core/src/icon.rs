use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::IconError;
use crate::package::PackageSource;

/// What happened to the application icon
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct IconOutcome {
    pub saved: bool,
    pub path: Option<PathBuf>,
}

impl IconOutcome {
    pub fn saved(path: &Path) -> IconOutcome {
        IconOutcome {
            saved: true,
            path: Some(path.to_path_buf()),
        }
    }

    pub fn failed() -> IconOutcome {
        IconOutcome {
            saved: false,
            path: None,
        }
    }
}

/// How the icon ended up on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveMethod {
    /// Decoded and encoded again in the format of the output extension
    Transcoded,

    /// Decoder gave up, bytes copied as they are in the archive
    Raw,
}

/// Saves the application icon to `output`, replacing whatever is there
///
/// Never fails: every problem is logged and reported as [`IconOutcome::failed`].
pub fn extract_icon<P: PackageSource + ?Sized>(source: &P, output: &Path) -> IconOutcome {
    log::info!("trying to extract icon...");

    match save_icon(source, output) {
        Ok(method) => {
            log::info!("icon saved ({:?}): {}", method, output.display());
            IconOutcome::saved(output)
        }
        Err(err @ (IconError::MissingIconPath | IconError::UnreadableIcon(_))) => {
            log::warn!("{}", err);
            IconOutcome::failed()
        }
        Err(err) => {
            log::error!("{}: {}", err, output.display());
            IconOutcome::failed()
        }
    }
}

fn save_icon<P: PackageSource + ?Sized>(
    source: &P,
    output: &Path,
) -> Result<SaveMethod, IconError> {
    let icon_path = source
        .icon_path()
        .filter(|p| !p.is_empty())
        .ok_or(IconError::MissingIconPath)?;

    let raw = source
        .read_file(&icon_path)
        .filter(|data| !data.is_empty())
        .ok_or_else(|| IconError::UnreadableIcon(icon_path.clone()))?;

    match transcode(&raw, output) {
        Ok(()) => Ok(SaveMethod::Transcoded),
        Err(err) => {
            log::warn!("{}, saving raw bytes of {:?}", err, icon_path);
            fs::write(output, &raw)?;
            Ok(SaveMethod::Raw)
        }
    }
}

/// Output format is picked from the extension of `output`
fn transcode(raw: &[u8], output: &Path) -> Result<(), IconError> {
    let image = image::load_from_memory(raw)?;
    image.save(output)?;

    Ok(())
}
