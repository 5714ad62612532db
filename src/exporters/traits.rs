use crate::error::Result;
use crate::exporters::types::ExportFormat;
use crate::voucher::VoucherLayout;
use async_trait::async_trait;
use std::path::Path;

/// Common trait for all voucher exporters.
/// Exporters only read the layout; the voucher record is never touched.
#[async_trait]
pub trait VoucherExporter: Send + Sync {
    /// Write `layout` as a document at `destination`
    async fn export(&self, layout: &VoucherLayout, destination: &Path) -> Result<()>;

    /// Format this exporter produces
    fn format(&self) -> ExportFormat;
}
