use crate::error::{Result, VoucherError};
use crate::exporters::traits::VoucherExporter;
use crate::exporters::types::ExportFormat;
use crate::voucher::{to_html, VoucherLayout};
use async_trait::async_trait;
use std::path::Path;
use tracing::debug;

/// Writes the voucher as a standalone HTML page
#[derive(Debug, Default)]
pub struct HtmlExporter;

#[async_trait]
impl VoucherExporter for HtmlExporter {
    async fn export(&self, layout: &VoucherLayout, destination: &Path) -> Result<()> {
        let html = to_html(layout);
        debug!("Writing {} bytes of HTML to {}", html.len(), destination.display());
        tokio::fs::write(destination, html)
            .await
            .map_err(|e| VoucherError::Export(format!("{}: {}", destination.display(), e)))
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Html
    }
}
