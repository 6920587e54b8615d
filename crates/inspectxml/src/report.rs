//! Inspection report model, schema mapper and build-server records

pub mod mapper;
pub mod model;
pub mod platform;

pub use mapper::map_report;
pub use model::{InspectionInstance, InspectionTypeInfo, InspectionsExport};
pub use platform::{inspection_path, PlatformInspection, SEVERITY_KEY};

use tracing::instrument;

use crate::config::Config;
use crate::error::Result;
use crate::xml;

/// Parse an export document into a report
pub fn parse_report(source: &str) -> Result<InspectionsExport> {
    parse_report_with_config(source, Config::default())
}

/// Parse an export document into a report with custom limits
#[instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse_report_with_config(source: &str, config: Config) -> Result<InspectionsExport> {
    let root = xml::parse_with_config(source, config)?;
    map_report(root)
}
