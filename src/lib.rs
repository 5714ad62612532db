//! Travel voucher generation: form validation, currency masking, airport
//! autocomplete, voucher layout, PDF/HTML export and a local history log.

pub mod airports;
pub mod config;
pub mod error;
pub mod exporters;
pub mod history;
pub mod models;
pub mod pipeline;
pub mod voucher;

pub use error::{Result, VoucherError};
