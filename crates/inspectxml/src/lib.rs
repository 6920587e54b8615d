//! inspectxml - reader for static-analysis inspection exports
//!
//! The export is a small XML dialect. It is read in three steps: the
//! [tokenizer](xml::tokenizer) turns text into tags and CDATA sections, the
//! [tree builder](xml::tree) turns those into elements, and the
//! [mapper](report::mapper) checks the elements against the fixed schema and
//! produces an [`InspectionsExport`].
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), inspectxml::Error> {
//! let report = inspectxml::from_str(
//!     r#"<?xml version="1.0"?>
//! <InspectionsExport>
//!   <Inspections>
//!     <InspectionInstance Id="RULE1" Line="42" Severity="WARNING">
//!       <Message>bad code</Message>
//!     </InspectionInstance>
//!   </Inspections>
//! </InspectionsExport>"#,
//! )?;
//! assert_eq!(report.inspections.len(), 1);
//! assert_eq!(report.inspections[0].line, 42);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub use config::Config;

pub mod error;
pub use error::{Error, Pos, Result, SyntaxError, ValidationError};

pub mod xml;
pub use xml::{Attribute, Element, Token, TokenKind};

pub mod report;
pub use report::{
    InspectionInstance, InspectionTypeInfo, InspectionsExport, PlatformInspection, SEVERITY_KEY,
};

/// Parse an export document from a string
pub fn from_str(s: &str) -> Result<InspectionsExport> {
    report::parse_report(s)
}

/// Parse an export document with custom limits
pub fn from_str_with_config(s: &str, config: Config) -> Result<InspectionsExport> {
    report::parse_report_with_config(s, config)
}
