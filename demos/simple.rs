use equity_lookup::{search_index, EquityLookup, EquityRecord, FieldMode, SearchOutcome};

fn main() {
    env_logger::init();

    let mut equity_lookup = EquityLookup::new();
    equity_lookup.build(vec![
        EquityRecord::new("AAPL", "Apple Inc.", "US0378331005", "United States", ""),
        EquityRecord::new("MSFT", "Microsoft Corporation", "US5949181045", "United States", ""),
        EquityRecord::new("SAP", "SAP SE", "DE0007164600", "Germany", ""),
    ]);

    let text = "US0378331005, msft\nSAP SE\nGOOG";

    let index = match equity_lookup.snapshot() {
        Some(index) => index,
        None => return,
    };

    println!("Exact matches for \"{}\"", text.replace('\n', "\\n"));

    match search_index(&index, text, FieldMode::Auto) {
        SearchOutcome::NoInput => println!("Nothing to search for."),
        SearchOutcome::Completed(results) => {
            for group in &results.unique_hits {
                println!(
                    "{}: {} (by {}, ×{})",
                    group.example_input, group.record.name, group.matched_field, group.occurrence_count
                );
            }
            for group in &results.multi_matches {
                println!(
                    "{}: {} match(es) (by {})",
                    group.example_input,
                    group.matches.len(),
                    group.matched_field
                );
            }
            for entry in &results.missing {
                println!("{}: not found", entry.value);
            }
        }
    }
}
