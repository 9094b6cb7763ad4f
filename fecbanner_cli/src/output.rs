use std::io::Write;

use anyhow::Result;
use fecbanner_lib::openfec_api::TotalsQuery;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Text,
    Json,
}

// -- Text output --

pub fn print_lines(lines: &[String]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_lines(&mut out, lines)?;
    Ok(())
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> std::io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

pub fn print_no_totals(committee_id: &str, query: &TotalsQuery) {
    println!("{}", no_totals_message(committee_id, query));
}

fn no_totals_message(committee_id: &str, query: &TotalsQuery) -> String {
    format!(
        "No totals found for committee {} (year {}, cycle {})",
        committee_id,
        join_years(&query.years),
        join_years(&query.cycles)
    )
}

fn join_years(years: &[i32]) -> String {
    if years.is_empty() {
        return "any".to_string();
    }
    years
        .iter()
        .map(|y| y.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
