//! The colored fact lines shown next to the banner.

use console::style;
use openfec_api::types::CommitteeTotals;

const MISSING: &str = "N/A";

/// Width of the rule under the treasurer line.
const SEPARATOR_WIDTH: usize = 33;

/// Formats a dollar amount as `$1,234,567.89`. Negative amounts keep the
/// sign after the dollar sign (`$-12.50`).
pub fn format_money(amount: Option<f64>) -> String {
    let Some(value) = amount else {
        return MISSING.to_string();
    };
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 { "-" } else { "" };
    format!("${}{}.{}", sign, group_thousands(int_part), frac_part)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Keeps the date part of an OpenFEC timestamp (`2024-06-30T00:00:00` ->
/// `2024-06-30`).
pub fn format_date(timestamp: Option<&str>) -> String {
    match timestamp {
        Some(ts) if !ts.is_empty() => ts.split('T').next().unwrap_or(ts).to_string(),
        _ => MISSING.to_string(),
    }
}

fn or_missing(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING)
}

fn fact(label: &str, value: &str) -> String {
    format!("{} {}", style(format!("{label}:")).blue(), style(value).cyan())
}

fn heading(title: &str) -> String {
    style(title).yellow().to_string()
}

/// Builds the detail panel for one totals record, top to bottom.
pub fn detail_lines(totals: &CommitteeTotals) -> Vec<String> {
    vec![
        style(or_missing(totals.committee_type_full.as_deref()))
            .green()
            .to_string(),
        fact("Treasurer", or_missing(totals.treasurer_name.as_deref())),
        style("-".repeat(SEPARATOR_WIDTH)).white().to_string(),
        heading("Scope"),
        fact(
            "Filing Frequency",
            or_missing(totals.filing_frequency_full.as_deref()),
        ),
        fact(
            "Last Report Type",
            or_missing(totals.last_report_type_full.as_deref()),
        ),
        fact(
            "Coverage Start Date",
            &format_date(totals.coverage_start_date.as_deref()),
        ),
        fact(
            "Coverage End Date",
            &format_date(totals.coverage_end_date.as_deref()),
        ),
        heading("Finances"),
        fact(
            "Cash On Hand Beginning Period",
            &format_money(totals.cash_on_hand_beginning_period),
        ),
        fact(
            "Last Cash On Hand End Period",
            &format_money(totals.last_cash_on_hand_end_period),
        ),
        fact("Receipts", &format_money(totals.receipts)),
        fact("Disbursements", &format_money(totals.disbursements)),
        fact(
            "Last Debts Owed By Committee",
            &format_money(totals.last_debts_owed_by_committee),
        ),
        fact(
            "Last Debts Owed To Committee",
            &format_money(totals.last_debts_owed_to_committee),
        ),
        fact(
            "Independent Expenditures",
            &format_money(totals.independent_expenditures),
        ),
    ]
}
