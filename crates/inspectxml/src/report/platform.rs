//! Conversion to the build server's inspection records
//!
//! The build server wants file paths relative to the checkout directory and
//! separated with `/`, whatever host produced the export.

use std::collections::BTreeMap;
use std::path::Path;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::model::{InspectionInstance, InspectionsExport};

/// Attribute key carrying the severity of a finding
pub const SEVERITY_KEY: &str = "SEVERITY";

/// One finding in the shape the build server's reporting API accepts
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PlatformInspection {
    pub inspection_id: String,
    pub message: String,
    pub file_path: String,
    pub line: i32,
    pub attributes: BTreeMap<String, Vec<String>>,
}

impl InspectionInstance {
    pub fn to_platform(&self, checkout_dir: &Path) -> PlatformInspection {
        let file_path = self
            .file_path
            .as_deref()
            .map(|path| inspection_path(checkout_dir, path))
            .unwrap_or_default();

        PlatformInspection {
            inspection_id: self.id.clone(),
            message: self.message.clone().unwrap_or_default(),
            file_path,
            line: self.line,
            attributes: BTreeMap::from([(SEVERITY_KEY.to_string(), vec![self.severity.clone()])]),
        }
    }
}

impl InspectionsExport {
    pub fn to_platform(&self, checkout_dir: &Path) -> Vec<PlatformInspection> {
        self.inspections
            .iter()
            .map(|instance| instance.to_platform(checkout_dir))
            .collect()
    }
}

/// `file_path` relative to `checkout_dir` when it lies beneath it, otherwise
/// unchanged; separators are always normalized to `/`.
///
/// The prefix test is per path component, so `/repo-other/a` is not beneath
/// `/repo`.
pub fn inspection_path(checkout_dir: &Path, file_path: &str) -> String {
    let checkout = checkout_dir.to_string_lossy().replace('\\', "/");
    let file = file_path.replace('\\', "/");

    match Path::new(&file).strip_prefix(Path::new(&checkout)) {
        Ok(relative) => relative.to_string_lossy().replace('\\', "/"),
        Err(_) => file,
    }
}
