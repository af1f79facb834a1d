use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::{ArgAction, Parser};
use log::debug;

use csvquery::query::executor::engine::{run_query, QueryConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "csvq - filter and aggregate a CSV file")]
struct Cli {
    /// CSV file to query
    #[arg(value_name = "FILE", required_unless_present = "file", conflicts_with = "file")]
    path: Option<PathBuf>,

    /// CSV file to query (same as the positional FILE)
    #[arg(long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Filter condition, e.g. 'price<1000', 'price>500' or 'brand=apple'
    #[arg(long = "where", value_name = "CONDITION")]
    where_expr: Option<String>,

    /// Aggregation, e.g. 'avg=rating', 'min=price' or 'max=price'
    #[arg(long, value_name = "FUNCTION=COLUMN")]
    aggregate: Option<String>,

    /// Field delimiter
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Turn the parsed arguments into a query configuration
    fn into_config(self) -> Result<QueryConfig> {
        let Some(file) = self.path.or(self.file) else {
            bail!("No input file given");
        };
        if !self.delimiter.is_ascii() {
            bail!("Delimiter must be a single ASCII character, got '{}'", self.delimiter);
        }

        Ok(QueryConfig {
            file,
            delimiter: self.delimiter as u8,
            where_expr: self.where_expr,
            aggregate_expr: self.aggregate,
        })
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;
    debug!("Running query with {:?}", config);

    let text = run_query(config)?;
    print!("{}", text);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
