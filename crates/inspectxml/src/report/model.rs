//! Typed inspection report

#[cfg(feature = "serde")]
use serde::Serialize;

/// Everything read from one export document, in document order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct InspectionsExport {
    pub inspection_types: Vec<InspectionTypeInfo>,
    pub inspections: Vec<InspectionInstance>,
}

/// A rule definition
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct InspectionTypeInfo {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
}

/// A reported finding
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct InspectionInstance {
    pub id: String,
    pub message: Option<String>,
    pub file_path: Option<String>,
    /// Source line, [`InspectionInstance::NO_LINE`] when the export has none
    pub line: i32,
    pub severity: String,
}

impl InspectionInstance {
    pub const NO_LINE: i32 = 0;
}

impl InspectionsExport {
    /// Rule definition for an instance id
    pub fn type_info(&self, id: &str) -> Option<&InspectionTypeInfo> {
        self.inspection_types.iter().find(|info| info.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.inspection_types.is_empty() && self.inspections.is_empty()
    }
}
