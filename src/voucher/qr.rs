use qrcode::render::svg;
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};

/// Smallest edge of the rendered code, in CSS pixels
const MIN_SIZE: u32 = 90;

/// Scannable contact code printed on every voucher.
///
/// The payload is a fixed contact link, identical for all vouchers, so it
/// is encoded once and shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCode {
    payload: String,
    svg: String,
}

impl ContactCode {
    pub fn new(payload: &str) -> Result<Self, QrError> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::H)?;
        let svg = code
            .render::<svg::Color>()
            .min_dimensions(MIN_SIZE, MIN_SIZE)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#ffffff"))
            .build();
        // drop the XML prolog so the markup can be inlined into HTML
        let svg = match svg.find("<svg") {
            Some(start) => svg[start..].to_string(),
            None => svg,
        };

        Ok(Self {
            payload: payload.to_string(),
            svg,
        })
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Standalone `<svg>` markup
    pub fn svg(&self) -> &str {
        &self.svg
    }
}
