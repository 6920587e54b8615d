//! Map the generic element tree onto the inspections schema
//!
//! ```text
//! InspectionsExport
//!   InspectionTypes*            (concatenated)
//!     InspectionTypeInfo* Id Name Category
//!       Description?
//!   Inspections*                (concatenated)
//!     InspectionInstance* Id Line Severity
//!       Message* FilePath*      (last one wins)
//! ```
//!
//! Any other tag or attribute fails, naming what was accepted at that level.
//! Repeated attributes resolve last-write-wins.

use tracing::{debug, instrument};

use super::model::{InspectionInstance, InspectionTypeInfo, InspectionsExport};
use crate::error::{Result, ValidationError};
use crate::xml::Element;

pub const TAG_INSPECTIONS_EXPORT: &str = "InspectionsExport";
pub const TAG_INSPECTION_TYPES: &str = "InspectionTypes";
pub const TAG_INSPECTION_TYPE_INFO: &str = "InspectionTypeInfo";
pub const TAG_DESCRIPTION: &str = "Description";
pub const TAG_INSPECTIONS: &str = "Inspections";
pub const TAG_INSPECTION_INSTANCE: &str = "InspectionInstance";
pub const TAG_MESSAGE: &str = "Message";
pub const TAG_FILE_PATH: &str = "FilePath";

pub const ATTR_ID: &str = "Id";
pub const ATTR_NAME: &str = "Name";
pub const ATTR_CATEGORY: &str = "Category";
pub const ATTR_LINE: &str = "Line";
pub const ATTR_SEVERITY: &str = "Severity";

/// Map a root element to a report
#[instrument(level = "debug", skip_all, fields(root = %root.name))]
pub fn map_report(root: Element) -> Result<InspectionsExport> {
    expect_element(&root, &[TAG_INSPECTIONS_EXPORT])?;

    let mut export = InspectionsExport::default();
    for group in root.children {
        match group.name.as_str() {
            TAG_INSPECTION_TYPES => {
                for child in group.children {
                    export.inspection_types.push(map_type_info(child)?);
                }
            }
            TAG_INSPECTIONS => {
                for child in group.children {
                    export.inspections.push(map_instance(child)?);
                }
            }
            _ => {
                return Err(unexpected_element(
                    &group,
                    &[TAG_INSPECTION_TYPES, TAG_INSPECTIONS],
                ))
            }
        }
    }

    debug!(
        inspection_types = export.inspection_types.len(),
        inspections = export.inspections.len(),
        "mapped report"
    );
    Ok(export)
}

fn map_type_info(element: Element) -> Result<InspectionTypeInfo> {
    expect_element(&element, &[TAG_INSPECTION_TYPE_INFO])?;

    let mut info = InspectionTypeInfo::default();
    let count = element.children.len();
    for (i, child) in element.children.into_iter().enumerate() {
        expect_element(&child, &[TAG_DESCRIPTION])?;
        if i > 0 {
            return Err(ValidationError::TooManyChildren {
                element: element.name,
                count,
            }
            .into());
        }
        info.description = child.content;
    }

    for attr in element.attributes {
        match attr.name.as_str() {
            ATTR_ID => info.id = attr.value,
            ATTR_NAME => info.name = attr.value,
            ATTR_CATEGORY => info.category = attr.value,
            _ => {
                return Err(unexpected_attribute(
                    attr.name,
                    &[ATTR_ID, ATTR_NAME, ATTR_CATEGORY],
                ))
            }
        }
    }

    Ok(info)
}

fn map_instance(element: Element) -> Result<InspectionInstance> {
    expect_element(&element, &[TAG_INSPECTION_INSTANCE])?;

    let mut instance = InspectionInstance::default();
    for child in element.children {
        match child.name.as_str() {
            TAG_MESSAGE => instance.message = child.content,
            TAG_FILE_PATH => instance.file_path = child.content,
            _ => return Err(unexpected_element(&child, &[TAG_MESSAGE, TAG_FILE_PATH])),
        }
    }

    for attr in element.attributes {
        match attr.name.as_str() {
            ATTR_ID => instance.id = attr.value,
            ATTR_LINE => instance.line = parse_line(attr.name, attr.value)?,
            ATTR_SEVERITY => instance.severity = attr.value,
            _ => {
                return Err(unexpected_attribute(
                    attr.name,
                    &[ATTR_ID, ATTR_LINE, ATTR_SEVERITY],
                ))
            }
        }
    }

    Ok(instance)
}

fn parse_line(attribute: String, value: String) -> Result<i32> {
    match value.parse::<i32>() {
        Ok(line) => Ok(line),
        Err(_) => Err(ValidationError::InvalidInteger { attribute, value }.into()),
    }
}

fn expect_element(element: &Element, expected: &[&'static str]) -> Result<()> {
    if expected.contains(&element.name.as_str()) {
        Ok(())
    } else {
        Err(unexpected_element(element, expected))
    }
}

fn unexpected_element(element: &Element, expected: &[&'static str]) -> crate::Error {
    ValidationError::UnexpectedElement {
        found: element.name.clone(),
        expected: expected.to_vec(),
    }
    .into()
}

fn unexpected_attribute(found: String, expected: &[&'static str]) -> crate::Error {
    ValidationError::UnexpectedAttribute {
        found,
        expected: expected.to_vec(),
    }
    .into()
}
