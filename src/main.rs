use clap::Parser;
use equity_lookup::constants::{MISSING_DISPLAY_LIMIT, MULTI_MATCH_DISPLAY_LIMIT};
use equity_lookup::{
    write_export_csv, AssembledResults, EquityLookup, EquityRecordListPreprocessor, Error,
    FieldMode, ResultAssembler, ResultAssemblerConfig, SearchOutcome,
};
use log::{error, info};
use std::fs::File;
use std::io::{self, BufWriter, Read};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "equity-lookup-cli")]
#[command(about = "Exact-match lookup of equities by ISIN, symbol, name, country, or description")]
struct Cli {
    /// Dataset file (.csv, .json, .csv.gz, or .json.gz)
    #[arg(short, long)]
    dataset: PathBuf,

    /// Field to search: isin, symbol, name, country, description, or auto
    #[arg(short, long, default_value = "isin")]
    field: FieldMode,

    /// Values to search for. Read from stdin when omitted
    values: Vec<String>,

    /// Print the results as JSON
    #[arg(long)]
    json: bool,

    /// Write every matched row (ignoring display limits) to a CSV file
    #[arg(long)]
    export_csv: Option<PathBuf>,

    /// Maximum number of records shown per name/country/description group
    #[arg(long, default_value_t = MULTI_MATCH_DISPLAY_LIMIT)]
    match_limit: usize,

    /// Maximum number of missing values shown
    #[arg(long, default_value_t = MISSING_DISPLAY_LIMIT)]
    missing_limit: usize,
}

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let records = EquityRecordListPreprocessor::load_equity_records_from_path(&cli.dataset)?;

    let mut equity_lookup = EquityLookup::new();
    equity_lookup.build(records);

    let raw_text = if cli.values.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        input
    } else {
        cli.values.join("\n")
    };

    let results = match equity_lookup.search(&raw_text, cli.field)? {
        SearchOutcome::NoInput => {
            println!(
                "Loaded {} equities. Enter a value to search.",
                equity_lookup.record_count()
            );
            return Ok(());
        }
        SearchOutcome::Completed(results) => results,
    };

    if let Some(export_path) = &cli.export_csv {
        let rows = results.export_rows();
        write_export_csv(&rows, BufWriter::new(File::create(export_path)?))?;
        info!("Exported {} row(s) to {:?}", rows.len(), export_path);
    }

    let config = ResultAssemblerConfig {
        multi_match_display_limit: cli.match_limit,
        missing_display_limit: cli.missing_limit,
    };
    let assembled = ResultAssembler::new(&config).assemble(&results);

    if cli.json {
        let json = serde_json::to_string_pretty(&assembled)?;
        println!("{}", json);
    } else {
        print_results(&assembled);
    }

    Ok(())
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "—"
    } else {
        value
    }
}

fn print_results(assembled: &AssembledResults<'_, '_>) {
    for group in assembled.unique_hits {
        let record = group.record;
        let name = if record.name.is_empty() {
            "(No name)"
        } else {
            record.name.as_str()
        };

        println!("{} [{}]", name, or_dash(&record.country));
        println!(
            "    Ticker: {}    ISIN: {}",
            or_dash(&record.symbol),
            or_dash(&record.isin)
        );
        println!(
            "    Exact ×{}    By {}: {}",
            group.occurrence_count, group.matched_field, group.example_input
        );
        if !record.description.is_empty() {
            println!("    {}", record.description);
        }
        println!();
    }

    for displayed in &assembled.multi_matches {
        let group = displayed.group;

        println!(
            "{} [{}]",
            group.example_input,
            group.matched_field.as_str().to_uppercase()
        );
        println!(
            "    Exact    Inputs ×{}    Matches {}",
            group.input_occurrence_count,
            group.matches.len()
        );
        for record in displayed.shown_matches {
            println!(
                "    - {}    {} · {} · {}",
                record.name,
                or_dash(&record.symbol),
                or_dash(&record.isin),
                or_dash(&record.country)
            );
        }
        if displayed.omitted_match_count > 0 {
            println!(
                "    Showing first {} matches ({} more).",
                displayed.shown_matches.len(),
                displayed.omitted_match_count
            );
        }
        println!();
    }

    if !assembled.shown_missing.is_empty() {
        println!(
            "Not found ({} unique):",
            assembled.summary.distinct_missing_count
        );
        for entry in assembled.shown_missing {
            println!("    {} ×{}", entry.value, entry.occurrence_count);
        }
        if assembled.omitted_missing_count > 0 {
            println!(
                "    Showing first {} missing values ({} more).",
                assembled.shown_missing.len(),
                assembled.omitted_missing_count
            );
        }
        println!();
    }

    let summary = &assembled.summary;
    println!(
        "Found {} group(s) · Input hits ×{} · Missing {} unique (×{})",
        summary.group_count,
        summary.input_hit_count,
        summary.distinct_missing_count,
        summary.missing_occurrence_count
    );
}
