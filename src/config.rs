use crate::airports::directory::DEFAULT_DATASET_URL;
use crate::airports::AirportSource;
use crate::exporters::{ExportFormat, ExportOptions, FileNaming};
use crate::models::FormState;
use clap::{Args, Parser, Subcommand};
use directories::ProjectDirs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about = "Fill in and export travel vouchers", long_about = None)]
pub struct Cli {
    /// Airport dataset: an http(s) URL or a local JSON file
    #[arg(long, env = "VOUCHER_AIRPORTS", default_value = DEFAULT_DATASET_URL, global = true)]
    pub airports: String,

    /// History log location (defaults to the user data directory)
    #[arg(long, env = "VOUCHER_HISTORY", global = true)]
    pub history: Option<PathBuf>,

    /// Do not record generated vouchers
    #[arg(long, global = true)]
    pub no_history: bool,

    /// Directory exported vouchers are written to
    #[arg(long, env = "VOUCHER_OUTPUT_DIR", default_value = ".", global = true)]
    pub output_dir: PathBuf,

    /// Contact link encoded in the voucher's QR code; no code when unset
    #[arg(long, env = "VOUCHER_CONTACT_URI", global = true)]
    pub contact_uri: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate the form, export the voucher and record it
    Generate(GenerateArgs),
    /// Show airport suggestions for a route field
    Suggest {
        query: String,
        /// Print the field text for the Nth suggestion (starting at 1)
        #[arg(long)]
        pick: Option<usize>,
    },
    /// Apply the currency mask to a raw amount field
    Mask {
        #[arg(allow_hyphen_values = true)]
        raw: String,
    },
    /// List previously generated vouchers, newest first
    History,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Passenger name; repeat for each passenger
    #[arg(long = "passenger")]
    pub passengers: Vec<String>,

    /// Voucher language (pt or en)
    #[arg(long, default_value = "pt")]
    pub lang: String,

    /// Outbound origin/destination
    #[arg(long, default_value = "")]
    pub outbound: String,

    /// Outbound date/time, e.g. 2024-05-01T10:00
    #[arg(long, default_value = "")]
    pub outbound_at: String,

    #[arg(long, default_value = "")]
    pub return_leg: String,

    #[arg(long, default_value = "")]
    pub return_at: String,

    #[arg(long, default_value = "")]
    pub hotel: String,

    #[arg(long, default_value = "")]
    pub check_in: String,

    #[arg(long, default_value = "")]
    pub check_out: String,

    /// Total amount, e.g. 150.00 or "R$ 1.234,56"
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub amount: String,

    #[arg(long, value_enum, default_value_t = ExportFormat::Pdf)]
    pub format: ExportFormat,

    /// Add a timestamp to the exported file name
    #[arg(long)]
    pub timestamped: bool,
}

impl GenerateArgs {
    pub fn to_form(&self) -> FormState {
        FormState {
            passengers: self.passengers.clone(),
            language: self.lang.clone(),
            outbound: self.outbound.clone(),
            outbound_at: self.outbound_at.clone(),
            return_leg: self.return_leg.clone(),
            return_at: self.return_at.clone(),
            hotel: self.hotel.clone(),
            check_in: self.check_in.clone(),
            check_out: self.check_out.clone(),
            amount: self.amount.clone(),
        }
    }
}

impl Cli {
    pub fn airport_source(&self) -> AirportSource {
        AirportSource::parse(&self.airports)
    }

    /// History log path, or `None` when history is disabled or no data dir exists
    pub fn history_path(&self) -> Option<PathBuf> {
        if self.no_history {
            return None;
        }
        self.history.clone().or_else(default_history_path)
    }

    pub fn export_options(&self, timestamped: bool) -> ExportOptions {
        ExportOptions {
            output_dir: self.output_dir.clone(),
            naming: if timestamped {
                FileNaming::Timestamped
            } else {
                FileNaming::Fixed
            },
        }
    }
}

fn default_history_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "travel-voucher").map(|dirs| dirs.data_dir().join("history.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn generate_flags_fill_the_form() {
        let cli = Cli::try_parse_from([
            "voucher",
            "generate",
            "--passenger",
            "João Silva",
            "--passenger",
            "Maria",
            "--lang",
            "en",
            "--outbound",
            "GRU",
            "--outbound-at",
            "2024-05-01T10:00",
            "--amount",
            "150.00",
            "--format",
            "html",
        ])
        .unwrap();

        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.format, ExportFormat::Html);
        assert_eq!(
            args.to_form(),
            FormState {
                passengers: vec!["João Silva".to_string(), "Maria".to_string()],
                language: "en".to_string(),
                outbound: "GRU".to_string(),
                outbound_at: "2024-05-01T10:00".to_string(),
                amount: "150.00".to_string(),
                return_leg: String::new(),
                return_at: String::new(),
                hotel: String::new(),
                check_in: String::new(),
                check_out: String::new(),
            }
        );
    }

    #[test]
    fn global_options() {
        let cli = Cli::try_parse_from([
            "voucher",
            "history",
            "--history",
            "/tmp/h.json",
            "--airports",
            "./airports.json",
        ])
        .unwrap();

        assert_eq!(cli.history_path(), Some(PathBuf::from("/tmp/h.json")));
        assert_eq!(
            cli.airport_source(),
            AirportSource::File(PathBuf::from("./airports.json"))
        );

        let cli = Cli::try_parse_from(["voucher", "--no-history", "mask", "1500"]).unwrap();
        assert_eq!(cli.history_path(), None);
        assert_eq!(cli.export_options(true).naming, FileNaming::Timestamped);
    }
}
