//! One-shot lookup of a committee's totals.

use openfec_api::types::CommitteeTotals;
use openfec_api::{Client, TotalsQuery};

use crate::error::BannerError;

/// Fetches the first page of totals and keeps the first row, which OpenFEC
/// orders most recent cycle first. `Ok(None)` means the committee has no
/// totals for the requested filters.
pub async fn fetch_totals(
    client: &Client,
    committee_id: &str,
    query: &TotalsQuery,
) -> Result<Option<CommitteeTotals>, BannerError> {
    let resp = client.get_committee_totals(committee_id, query).await?;
    tracing::info!(
        committee_id,
        results = resp.results.len(),
        "fetched committee totals"
    );
    Ok(resp.results.into_iter().next())
}
