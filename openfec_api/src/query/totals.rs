use url::Url;

use super::{common::QueryCommon, Query};

/// Rounds a calendar year up to the even year that closes its two-year
/// election cycle (2025 -> 2026, 2024 -> 2024).
pub fn election_cycle(year: i32) -> i32 {
    if year % 2 == 0 {
        year
    } else {
        year + 1
    }
}

/// Filters for `/committee/{committee_id}/totals/`.
#[derive(Default)]
pub struct TotalsQuery {
    pub common: QueryCommon,
    pub years: Vec<i32>,
    pub cycles: Vec<i32>,
    pub is_amended: Option<bool>,
}

impl Query for TotalsQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        for year in self.years.iter() {
            url.query_pairs_mut()
                .append_pair("year", year.to_string().as_str());
        }
        for cycle in self.cycles.iter() {
            url.query_pairs_mut()
                .append_pair("cycle", cycle.to_string().as_str());
        }
        if let Some(is_amended) = self.is_amended {
            url.query_pairs_mut()
                .append_pair("is_amended", is_amended.to_string().as_str());
        }
        url
    }
}

impl TotalsQuery {
    /// The default lookup: one year, its election cycle, amended filings
    /// included, first page of 20.
    pub fn for_year(year: i32) -> Self {
        Self::default()
            .with_year(year)
            .with_cycle(election_cycle(year))
            .with_is_amended(true)
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.years.push(year);
        self
    }

    pub fn with_years(mut self, years: &[i32]) -> Self {
        self.years.extend_from_slice(years);
        self
    }

    pub fn with_cycle(mut self, cycle: i32) -> Self {
        self.cycles.push(cycle);
        self
    }

    /// Replaces any cycles already set with a single cycle.
    pub fn with_only_cycle(mut self, cycle: i32) -> Self {
        self.cycles = vec![cycle];
        self
    }

    pub fn with_is_amended(mut self, is_amended: bool) -> Self {
        self.is_amended = Some(is_amended);
        self
    }
}
