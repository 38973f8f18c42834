//! In-memory package and icon fixtures for unit tests

use std::collections::HashMap;
use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::package::PackageSource;

pub(crate) const ICON_PATH: &str = "res/mipmap-xxxhdpi/ic_launcher.png";

#[derive(Default)]
pub(crate) struct FakePackage {
    pub package_name: Option<String>,
    pub label: Option<String>,
    pub version_name: Option<String>,
    pub version_code: Option<String>,
    pub permissions: Vec<String>,
    pub icon_path: Option<String>,
    pub files: HashMap<String, Vec<u8>>,
}

impl FakePackage {
    /// Package whose manifest points at `ICON_PATH` holding `data`
    pub fn with_icon(data: Vec<u8>) -> FakePackage {
        FakePackage {
            icon_path: Some(ICON_PATH.to_owned()),
            files: HashMap::from([(ICON_PATH.to_owned(), data)]),
            ..Default::default()
        }
    }
}

impl PackageSource for FakePackage {
    fn package_name(&self) -> Option<String> {
        self.package_name.clone()
    }

    fn label(&self) -> Option<String> {
        self.label.clone()
    }

    fn version_name(&self) -> Option<String> {
        self.version_name.clone()
    }

    fn version_code(&self) -> Option<String> {
        self.version_code.clone()
    }

    fn permissions(&self) -> Vec<String> {
        self.permissions.clone()
    }

    fn icon_path(&self) -> Option<String> {
        self.icon_path.clone()
    }

    fn read_file(&self, name: &str) -> Option<Vec<u8>> {
        self.files.get(name).cloned()
    }
}

/// 4x4 opaque red square encoded as png
pub(crate) fn png_icon() -> Vec<u8> {
    let image = RgbaImage::from_pixel(4, 4, Rgba([0xff, 0, 0, 0xff]));
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(image)
        .write_to(&mut buf, ImageFormat::Png)
        .unwrap();

    buf.into_inner()
}

/// Start of a binary xml chunk, what adaptive icons look like inside an apk
pub(crate) fn adaptive_icon() -> Vec<u8> {
    vec![
        0x03, 0x00, 0x08, 0x00, 0x40, 0x02, 0x00, 0x00, 0x01, 0x00, 0x1c, 0x00, 0x10, 0x01, 0x00,
        0x00,
    ]
}
