use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use mccmnc::config::{DataSource, DATA_DIR_ENV};
use mccmnc::{decode_plmn, encode_mcc, encode_plmn, FilterConfig, Result};

#[derive(Parser)]
#[command(author, version, about = "Query the MCC/MNC operator list and encode PLMNs", long_about = None)]
struct Cli {
    /// Directory containing mcc-mnc-list.json and status-codes.json
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every record
    All,
    /// Print the status-code vocabulary
    StatusCodes,
    /// Print the MCC regions
    Regions,
    /// Print records matching every given parameter
    Filter {
        #[arg(long)]
        status_code: Option<String>,

        /// MCC followed by MNC (e.g. 310410)
        #[arg(long)]
        plmn: Option<String>,

        #[arg(long)]
        mcc: Option<String>,

        #[arg(long)]
        mnc: Option<String>,

        #[arg(long)]
        country_code: Option<String>,

        #[arg(long)]
        region: Option<String>,
    },
    /// Encode an MCC, or an MCC/MNC pair, to nibble-swapped BCD
    Encode {
        #[arg(long)]
        mcc: String,

        #[arg(long)]
        mnc: Option<String>,
    },
    /// Decode a nibble-swapped PLMN
    Decode {
        plmn: String,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("mccmnc=warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let source = match cli.data_dir {
        Some(dir) => DataSource::Directory(dir),
        None => DataSource::Embedded,
    };

    match cli.command {
        Commands::All => {
            mccmnc::install(source.load()?);
            print_json(&mccmnc::all()?)
        }
        Commands::StatusCodes => {
            mccmnc::install(source.load()?);
            print_json(&mccmnc::status_codes()?)
        }
        Commands::Regions => print_json(&mccmnc::regions()),
        Commands::Filter { status_code, plmn, mcc, mnc, country_code, region } => {
            mccmnc::install(source.load()?);
            let config = FilterConfig {
                status_code: status_code.map(Into::into),
                plmn: plmn.map(Into::into),
                mcc: mcc.map(Into::into),
                mnc: mnc.map(Into::into),
                country_code: country_code.map(Into::into),
                region: region.map(Into::into),
            };
            let records = mccmnc::filter(Some(&config))?;
            log::info!("{} matching records", records.len());
            print_json(&records)
        }
        Commands::Encode { mcc, mnc } => {
            let encoded = match mnc {
                Some(mnc) => encode_plmn(&mcc, &mnc),
                None => encode_mcc(&mcc),
            };
            println!("{}", encoded);
            Ok(())
        }
        Commands::Decode { plmn } => {
            let (mcc, mnc) = decode_plmn(&plmn)?;
            print_json(&serde_json::json!({ "mcc": mcc, "mnc": mnc }))
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
