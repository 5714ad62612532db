use chrono::{DateTime, Local};
use std::path::PathBuf;

/// Document formats a voucher can be exported to
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Pdf,
    Html,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Html => "html",
        }
    }
}

/// How exported files are named
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileNaming {
    /// Always `voucher.<ext>`, replacing the previous export
    #[default]
    Fixed,
    /// `voucher-YYYYMMDD-HHMMSS.<ext>`
    Timestamped,
}

/// Where and under which name exports are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub output_dir: PathBuf,
    pub naming: FileNaming,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            naming: FileNaming::Fixed,
        }
    }
}

impl ExportOptions {
    pub fn file_name(&self, format: ExportFormat, at: DateTime<Local>) -> String {
        match self.naming {
            FileNaming::Fixed => format!("voucher.{}", format.extension()),
            FileNaming::Timestamped => format!(
                "voucher-{}.{}",
                at.format("%Y%m%d-%H%M%S"),
                format.extension()
            ),
        }
    }

    pub fn destination(&self, format: ExportFormat, at: DateTime<Local>) -> PathBuf {
        self.output_dir.join(self.file_name(format, at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_and_timestamped_names() {
        let at = Local.with_ymd_and_hms(2024, 5, 1, 10, 4, 9).unwrap();
        let fixed = ExportOptions::default();
        assert_eq!(fixed.file_name(ExportFormat::Pdf, at), "voucher.pdf");

        let stamped = ExportOptions {
            output_dir: PathBuf::from("out"),
            naming: FileNaming::Timestamped,
        };
        assert_eq!(
            stamped.destination(ExportFormat::Html, at),
            PathBuf::from("out").join("voucher-20240501-100409.html")
        );
    }
}
