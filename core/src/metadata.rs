use crate::package::PackageSource;

/// Placeholder for fields the package doesn't provide
pub const NOT_AVAILABLE: &str = "N/A";

/// Identity fields of a package, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub package_name: String,
    pub app_label: String,
    pub version_name: String,
    pub version_code: String,
    pub permissions: Vec<String>,
}

impl Metadata {
    /// Reads identity fields, absent or empty values become [`NOT_AVAILABLE`]
    pub fn from_source<P: PackageSource + ?Sized>(source: &P) -> Metadata {
        Metadata {
            package_name: or_not_available(source.package_name()),
            app_label: or_not_available(source.label()),
            version_name: or_not_available(source.version_name()),
            version_code: or_not_available(source.version_code()),
            permissions: source.permissions(),
        }
    }
}

fn or_not_available(value: Option<String>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_owned())
}
