pub mod browser;
pub mod html;
pub mod traits;
pub mod types;

pub use browser::ChromePdfExporter;
pub use html::HtmlExporter;
pub use traits::VoucherExporter;
pub use types::{ExportFormat, ExportOptions, FileNaming};

/// Exporter for `format`; PDF launches a headless browser
pub fn exporter_for(format: ExportFormat) -> anyhow::Result<Box<dyn VoucherExporter>> {
    Ok(match format {
        ExportFormat::Pdf => Box::new(ChromePdfExporter::new()?),
        ExportFormat::Html => Box::new(HtmlExporter),
    })
}
