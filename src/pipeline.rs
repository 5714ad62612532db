use crate::error::Result;
use crate::exporters::{ExportOptions, VoucherExporter};
use crate::history::VoucherHistoryStore;
use crate::models::{FormState, VoucherRecord};
use crate::voucher::{render, ContactCode, FormValidator, ValidationError, VoucherBuilder, VoucherLayout};
use chrono::{Local, Utc};
use std::path::PathBuf;
use tracing::{info, warn};

/// Result of one successful generation
#[derive(Debug)]
pub struct GeneratedVoucher {
    pub record: VoucherRecord,
    pub layout: VoucherLayout,
    pub path: PathBuf,
}

/// validate → build → render → export → history
pub struct VoucherPipeline {
    validator: FormValidator,
    exporter: Box<dyn VoucherExporter>,
    options: ExportOptions,
    history: Option<VoucherHistoryStore>,
    contact: Option<ContactCode>,
}

impl VoucherPipeline {
    pub fn new(exporter: Box<dyn VoucherExporter>, options: ExportOptions) -> Self {
        Self {
            validator: FormValidator::new(),
            exporter,
            options,
            history: None,
            contact: None,
        }
    }

    pub fn with_history(mut self, history: VoucherHistoryStore) -> Self {
        self.history = Some(history);
        self
    }

    pub fn with_contact(mut self, contact: ContactCode) -> Self {
        self.contact = Some(contact);
        self
    }

    /// Error currently shown for the form, if the last attempt failed validation
    pub fn displayed_error(&self) -> Option<&ValidationError> {
        self.validator.displayed_error()
    }

    /// Generate and export a voucher from `form`.
    ///
    /// Invalid forms stop before anything is rendered or written. The record
    /// is added to history only once the export succeeded.
    pub async fn generate(&mut self, form: &FormState) -> Result<GeneratedVoucher> {
        let valid = self.validator.check(form)?;
        let record = VoucherBuilder::assemble(valid, Utc::now());
        info!(
            "🧾 Generating voucher for {} passenger(s), outbound {}",
            record.passengers().len(),
            record.outbound()
        );

        let layout = render(&record, record.language(), self.contact.as_ref());
        let path = self.options.destination(self.exporter.format(), Local::now());

        if let Err(err) = self.exporter.export(&layout, &path).await {
            warn!("Export failed, voucher not saved to history: {}", err);
            return Err(err);
        }
        info!("✅ Exported voucher to {}", path.display());

        if let Some(history) = &self.history {
            history.append(&record).await?;
        }

        Ok(GeneratedVoucher {
            record,
            layout,
            path,
        })
    }
}
