use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use ena_taxon_metadata::app::App;
use ena_taxon_metadata::config::ConfigLoader;
use ena_taxon_metadata::domain::TaxonId;
use ena_taxon_metadata::ena::{DEFAULT_FILE_TYPE, EnaHttpClient};
use ena_taxon_metadata::error::EnaError;

#[derive(Parser)]
#[command(name = "ena-taxon-metadata")]
#[command(about = "Download RNA-Seq read run metadata for a taxonomic ID from ENA")]
#[command(version)]
struct Cli {
    /// taxonomic ID
    #[arg(long = "taxon_id")]
    taxon_id: Option<String>,

    /// output file type
    #[arg(long = "file_type", default_value = DEFAULT_FILE_TYPE)]
    file_type: String,

    /// JSON file overriding the default search filters and field list
    #[arg(long)]
    config: Option<String>,
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(error) = report.downcast_ref::<EnaError>() {
            return ExitCode::from(map_exit_code(error));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &EnaError) -> u8 {
    match error {
        EnaError::InvalidTaxonId(_)
        | EnaError::UnknownField(_)
        | EnaError::DuplicateField(_)
        | EnaError::ConfigRead(_)
        | EnaError::ConfigParse(_) => 2,
        EnaError::EnaHttp(_) | EnaError::EnaStatus { .. } => 3,
        EnaError::Filesystem(_) => 1,
    }
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    ctrlc::set_handler(|| {
        println!("Interrupted with CTRL-C, exiting...");
        std::process::exit(0);
    })
    .into_diagnostic()?;

    let cli = Cli::parse();

    let Some(taxon_id) = cli.taxon_id else {
        Cli::command().print_help().into_diagnostic()?;
        println!();
        return Ok(());
    };

    let taxon_id: TaxonId = taxon_id.parse()?;
    let resolved = ConfigLoader::resolve(cli.config.as_deref())?;
    let client = EnaHttpClient::with_options(resolved.base_url.clone(), resolved.timeout)?;
    let app = App::in_current_dir(client)?;

    let query = resolved.query(taxon_id, &cli.file_type);
    app.save_taxon_metadata(&query)?;
    Ok(())
}
