use anyhow::Context;
use chrono::Local;
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use travel_voucher::airports::{
    http_client, AirportDirectory, AutocompleteMatcher, SuggestionPanel,
};
use travel_voucher::config::{Cli, Commands, GenerateArgs};
use travel_voucher::exporters;
use travel_voucher::history::VoucherHistoryStore;
use travel_voucher::pipeline::VoucherPipeline;
use travel_voucher::voucher::money::{format_brl, mask};
use travel_voucher::voucher::{self, ContactCode};
use travel_voucher::VoucherError;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialize logging; stdout is kept for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate(args) => generate(&cli, args).await,
        Commands::Suggest { query, pick } => suggest(&cli, query, *pick).await,
        Commands::Mask { raw } => {
            println!("{}", mask(raw));
            Ok(ExitCode::SUCCESS)
        }
        Commands::History => list_history(&cli).await,
    }
}

async fn generate(cli: &Cli, args: &GenerateArgs) -> anyhow::Result<ExitCode> {
    let form = args.to_form();

    // surface form errors before paying for a browser launch
    if let Err(err) = voucher::validate(&form) {
        eprintln!("{}", err.message(form.language()));
        return Ok(ExitCode::FAILURE);
    }

    let exporter = exporters::exporter_for(args.format)?;
    let mut pipeline = VoucherPipeline::new(exporter, cli.export_options(args.timestamped));

    if let Some(uri) = &cli.contact_uri {
        let code = ContactCode::new(uri).context("Contact link does not fit in a QR code")?;
        pipeline = pipeline.with_contact(code);
    }
    match cli.history_path() {
        Some(path) => pipeline = pipeline.with_history(VoucherHistoryStore::new(path)),
        None => info!("Voucher history disabled"),
    }

    match pipeline.generate(&form).await {
        Ok(generated) => {
            println!("{}", generated.layout);
            println!();
            println!("{}", generated.path.display());
            Ok(ExitCode::SUCCESS)
        }
        Err(VoucherError::Validation(err)) => {
            eprintln!("{}", err.message(form.language()));
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

async fn suggest(cli: &Cli, query: &str, pick: Option<usize>) -> anyhow::Result<ExitCode> {
    let client = http_client()?;
    let directory = Arc::new(AirportDirectory::new());

    if let Err(err) = directory.load(&client, &cli.airport_source()).await {
        // autocomplete just stays empty
        eprintln!("Erro ao carregar dados de aeroportos / could not load airports: {err}");
    }

    let mut panel = SuggestionPanel::new(AutocompleteMatcher::new(directory));
    panel.on_input(query);

    match pick {
        Some(n) => match n
            .checked_sub(1)
            .and_then(|i| panel.select(i).map(str::to_string))
        {
            Some(text) => println!("{text}"),
            None => {
                warn!("No suggestion number {} for '{}'", n, query);
                return Ok(ExitCode::FAILURE);
            }
        },
        None => {
            for (i, suggestion) in panel.suggestions().iter().enumerate() {
                println!("{}. {}", i + 1, suggestion.label());
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn list_history(cli: &Cli) -> anyhow::Result<ExitCode> {
    let Some(path) = cli.history_path() else {
        println!("Voucher history is disabled.");
        return Ok(ExitCode::SUCCESS);
    };

    let records = VoucherHistoryStore::new(path).list().await?;
    if records.is_empty() {
        println!("No vouchers generated yet.");
        return Ok(ExitCode::SUCCESS);
    }

    for (i, record) in records.iter().enumerate() {
        println!(
            "{}. {} | {} | {} | {}",
            i + 1,
            record.issued_at().with_timezone(&Local).format("%d/%m/%Y %H:%M"),
            record.passengers().join(", "),
            record.outbound(),
            format_brl(record.total_amount())
        );
    }

    Ok(ExitCode::SUCCESS)
}
