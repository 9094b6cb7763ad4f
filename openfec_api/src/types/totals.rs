use serde::{Deserialize, Serialize};

/// One row of `/committee/{committee_id}/totals/`.
///
/// OpenFEC returns several dozen columns that vary by committee type; only the
/// ones shown in the summary panel are modelled. Every field is optional since
/// the API emits `null` freely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommitteeTotals {
    pub committee_id: Option<String>,
    pub committee_name: Option<String>,
    pub committee_type_full: Option<String>,
    pub treasurer_name: Option<String>,
    pub filing_frequency_full: Option<String>,
    pub last_report_type_full: Option<String>,
    pub coverage_start_date: Option<String>,
    pub coverage_end_date: Option<String>,
    pub cycle: Option<i32>,
    pub cash_on_hand_beginning_period: Option<f64>,
    pub last_cash_on_hand_end_period: Option<f64>,
    pub receipts: Option<f64>,
    pub disbursements: Option<f64>,
    pub last_debts_owed_by_committee: Option<f64>,
    pub last_debts_owed_to_committee: Option<f64>,
    pub independent_expenditures: Option<f64>,
}
