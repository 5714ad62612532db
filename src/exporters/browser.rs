use crate::error::{Result, VoucherError};
use crate::exporters::traits::VoucherExporter;
use crate::exporters::types::ExportFormat;
use crate::voucher::html::READY_MARKER_ID;
use crate::voucher::{to_html, VoucherLayout};
use anyhow::Context;
use async_trait::async_trait;
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

/// A4 portrait, in inches
const A4_WIDTH_IN: f64 = 8.27;
const A4_HEIGHT_IN: f64 = 11.69;
const MARGIN_IN: f64 = 0.4;

/// Upper bound for the page to report its layout as complete
const READY_TIMEOUT: Duration = Duration::from_secs(10);

/// PDF exporter that prints the voucher page with headless Chrome
pub struct ChromePdfExporter {
    browser: Browser,
}

impl ChromePdfExporter {
    /// Launch a headless Chrome instance for printing
    pub fn new() -> anyhow::Result<Self> {
        info!("Launching headless Chrome...");

        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .context("Failed to build launch options")?;

        let browser = Browser::new(options).context("Failed to launch Chrome browser")?;

        Ok(Self { browser })
    }
}

#[async_trait]
impl VoucherExporter for ChromePdfExporter {
    async fn export(&self, layout: &VoucherLayout, destination: &Path) -> Result<()> {
        let html = to_html(layout);
        let browser = self.browser.clone();
        let destination = destination.to_path_buf();

        // headless_chrome blocks on every call
        tokio::task::spawn_blocking(move || print_to_pdf(&browser, &html, &destination))
            .await
            .map_err(|e| VoucherError::Export(e.to_string()))?
            .map_err(|e| VoucherError::Export(format!("{e:#}")))
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }
}

fn print_to_pdf(browser: &Browser, html: &str, destination: &Path) -> anyhow::Result<()> {
    let mut page = tempfile::Builder::new()
        .prefix("voucher-")
        .suffix(".html")
        .tempfile()
        .context("Failed to create temporary page")?;
    page.write_all(html.as_bytes())
        .context("Failed to write temporary page")?;

    let tab = browser.new_tab()?;
    let printed = print_page(&tab, page.path());
    // close on every path, including a failed print
    if let Err(err) = tab.close(true) {
        warn!("Failed to close browser tab: {:#}", err);
    }
    let pdf = printed?;

    std::fs::write(destination, &pdf)
        .with_context(|| format!("Failed to write {}", destination.display()))?;
    info!("📄 Saved {} bytes of PDF to {}", pdf.len(), destination.display());

    Ok(())
}

fn print_page(tab: &Tab, page: &Path) -> anyhow::Result<Vec<u8>> {
    tab.set_default_timeout(READY_TIMEOUT);

    let url = format!("file://{}", page.display());
    debug!("Opening {}", url);
    tab.navigate_to(&url)?;
    tab.wait_until_navigated()?;

    // the marker follows the contact code, so once it exists the layout is final
    tab.wait_for_element(&format!("#{READY_MARKER_ID}"))
        .context("Voucher page never finished rendering")?;

    tab.print_to_pdf(Some(PrintToPdfOptions {
        print_background: Some(true),
        paper_width: Some(A4_WIDTH_IN),
        paper_height: Some(A4_HEIGHT_IN),
        margin_top: Some(MARGIN_IN),
        margin_bottom: Some(MARGIN_IN),
        margin_left: Some(MARGIN_IN),
        margin_right: Some(MARGIN_IN),
        scale: Some(1.0),
        ..Default::default()
    }))
}
