use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use prize_atlas::data::model::{Attribution, AwardDataset};
use prize_atlas::data::series::{xy_series, SeriesKey};
use prize_atlas::data::{loader, query};
use prize_atlas::state::{Selection, ALL, WORLD};

#[derive(Parser)]
#[command(name = "prize-atlas")]
#[command(about = "Aggregate award statistics by country, year, and category")]
struct Args {
    /// Report to print
    #[arg(value_enum)]
    report: Report,

    /// Path to the laureates JSON file
    #[arg(long, default_value = "data/laureates.json")]
    laureates: PathBuf,

    /// Path to the prizes JSON file
    #[arg(long, default_value = "data/prizes.json")]
    prizes: PathBuf,

    /// Restrict to one country code ("World" for no restriction)
    #[arg(long, default_value = WORLD)]
    country: String,

    /// Attribute laureates to their death country (falls back to birth)
    #[arg(long)]
    died: bool,

    /// Restrict to one award year ("All" for no restriction)
    #[arg(long, default_value = ALL)]
    year: String,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Report {
    /// Laureates grouped by attributed country
    Countries,
    /// Prizes and laureates per category
    Categories,
    /// Prizes by how many laureates shared them
    Shared,
    /// Prizes and laureates per year
    Years,
    /// Dataset overview
    Summary,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Csv,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let dataset =
        loader::load_dataset(&args.laureates, &args.prizes).context("loading dataset")?;

    let mut selection = Selection::default();
    selection.select_country(&args.country);
    selection.select_year(&args.year);
    selection.set_attribution(if args.died {
        Attribution::Died
    } else {
        Attribution::Born
    });
    let filter = selection.query_filter();

    match args.report {
        Report::Countries => {
            let groups = query::laureates_by_country(&dataset, filter.attribution);
            let points = xy_series(
                groups
                    .iter()
                    .map(|g| (SeriesKey::from(g.code), g.laureates.len() as u64)),
            );
            let rows = points
                .into_iter()
                .map(|(code, n)| vec![code.to_string(), n.to_string()])
                .collect();
            print_rows(&["country", "laureates"], rows, args.format)?;
        }
        Report::Categories => {
            let prizes = query::prizes_by_category(&dataset, &filter);
            let laureates = query::laureates_by_category(&dataset, &filter);
            let rows = merge_series(
                xy_series(
                    prizes
                        .into_iter()
                        .map(|g| (SeriesKey::Label(g.category), g.value)),
                ),
                xy_series(
                    laureates
                        .into_iter()
                        .map(|g| (SeriesKey::Label(g.category), g.value)),
                ),
            );
            print_rows(&["category", "prizes", "laureates"], rows, args.format)?;
        }
        Report::Shared => {
            let groups = query::prizes_by_shared_count(&dataset, &filter);
            let points = xy_series(
                groups
                    .into_iter()
                    .map(|g| (SeriesKey::Number(g.shared as i64), g.value)),
            );
            let rows = points
                .into_iter()
                .map(|(shared, n)| vec![shared.to_string(), n.to_string()])
                .collect();
            print_rows(&["shared", "prizes"], rows, args.format)?;
        }
        Report::Years => {
            let prizes = query::prizes_by_year(&dataset, &filter);
            let laureates = query::laureates_by_year(&dataset, &filter);
            let rows = merge_series(
                xy_series(
                    prizes
                        .into_iter()
                        .map(|g| (SeriesKey::parse(&g.year), g.value)),
                ),
                xy_series(
                    laureates
                        .into_iter()
                        .map(|g| (SeriesKey::parse(&g.year), g.value)),
                ),
            );
            print_rows(&["year", "prizes", "laureates"], rows, args.format)?;
        }
        Report::Summary => print_summary(&dataset, &selection),
    }

    Ok(())
}

/// Join two sorted series on their keys; a key missing from one side
/// reads as zero there.
fn merge_series(
    first: Vec<(SeriesKey, u64)>,
    second: Vec<(SeriesKey, u64)>,
) -> Vec<Vec<String>> {
    let mut merged: BTreeMap<SeriesKey, (u64, u64)> = BTreeMap::new();
    for (key, value) in first {
        merged.entry(key).or_default().0 = value;
    }
    for (key, value) in second {
        merged.entry(key).or_default().1 = value;
    }
    merged
        .into_iter()
        .map(|(key, (a, b))| vec![key.to_string(), a.to_string(), b.to_string()])
        .collect()
}

fn print_rows(headers: &[&str], rows: Vec<Vec<String>>, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Table => {
            print_row(headers.iter().map(|h| h.to_string()).collect());
            for row in rows {
                print_row(row);
            }
        }
        Format::Csv => {
            let mut writer = csv::Writer::from_writer(io::stdout());
            writer.write_record(headers)?;
            for row in rows {
                writer.write_record(&row)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

fn print_row(cells: Vec<String>) {
    let mut line = format!("{:<12}", cells[0]);
    for cell in &cells[1..] {
        line.push_str(&format!(" {cell:>10}"));
    }
    println!("{line}");
}

fn print_summary(dataset: &AwardDataset, selection: &Selection) {
    let filter = selection.query_filter();
    let categories = query::prizes_by_category(dataset, &filter);
    let years = query::prizes_by_year(dataset, &filter);
    // Sum over categories so the total honors the year filter too.
    let prize_total: u64 = categories.iter().map(|g| g.value).sum();

    println!(
        "Selection: country={}, year={}, attribution={:?}",
        selection.country_label(),
        selection.year_label(),
        filter.attribution
    );
    println!("Laureates: {}", dataset.len());
    println!(
        "Prizes: {prize_total} across {} categories",
        categories.len()
    );

    if let (Some(first), Some(last)) = (
        years.iter().map(|g| g.year.as_str()).min(),
        years.iter().map(|g| g.year.as_str()).max(),
    ) {
        println!("Years: {first}-{last}");
    }

    let mut groups = query::laureates_by_country(dataset, filter.attribution);
    groups.sort_by(|a, b| b.laureates.len().cmp(&a.laureates.len()).then(a.code.cmp(b.code)));
    println!("Top countries:");
    for group in groups.iter().take(5) {
        println!("  {:<4} {}", group.code, group.laureates.len());
    }
}
