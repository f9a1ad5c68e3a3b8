use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::board::applications::domain::{ApplicationStatus, CandidateStage};
use crate::board::offers::domain::{JobOffer, OfferStatus};

/// Headline numbers for a set of offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfferSummary {
    pub total_vacancies: usize,
    pub industries: usize,
    /// `(industry, count)` in first-seen order.
    pub sector_breakdown: Vec<(String, usize)>,
    /// `(location, count)` in first-seen order.
    pub location_breakdown: Vec<(String, usize)>,
}

impl OfferSummary {
    pub fn from_offers(offers: &[JobOffer]) -> Self {
        let sector_breakdown = first_seen_counts(offers.iter().map(|offer| offer.industry.as_str()));
        let location_breakdown =
            first_seen_counts(offers.iter().map(|offer| offer.location.as_str()));

        Self {
            total_vacancies: offers.len(),
            industries: sector_breakdown.len(),
            sector_breakdown,
            location_breakdown,
        }
    }

    pub fn top_sectors(&self, limit: usize) -> &[(String, usize)] {
        &self.sector_breakdown[..limit.min(self.sector_breakdown.len())]
    }

    pub fn top_locations(&self, limit: usize) -> &[(String, usize)] {
        &self.location_breakdown[..limit.min(self.location_breakdown.len())]
    }
}

/// Counts keys while keeping the order in which each key first appeared.
pub fn first_seen_counts<'a>(keys: impl IntoIterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for key in keys {
        match positions.get(key) {
            Some(&index) => counts[index].1 += 1,
            None => {
                positions.insert(key, counts.len());
                counts.push((key.to_string(), 1));
            }
        }
    }

    counts
}

/// Closed status vocabularies that can be tallied with zero-filled buckets.
pub trait StatusKey: Copy + Ord + Serialize {
    fn all() -> Vec<Self>;
}

impl StatusKey for OfferStatus {
    fn all() -> Vec<Self> {
        OfferStatus::ordered().to_vec()
    }
}

impl StatusKey for ApplicationStatus {
    fn all() -> Vec<Self> {
        ApplicationStatus::ordered().to_vec()
    }
}

impl StatusKey for CandidateStage {
    fn all() -> Vec<Self> {
        CandidateStage::ordered().to_vec()
    }
}

/// Status to count mapping with every status present, plus the grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCounts<S: StatusKey> {
    pub total: usize,
    pub by_status: BTreeMap<S, usize>,
}

impl<S: StatusKey> StatusCounts<S> {
    pub fn tally(statuses: impl IntoIterator<Item = S>) -> Self {
        let mut by_status: BTreeMap<S, usize> = S::all().into_iter().map(|s| (s, 0)).collect();
        let mut total = 0;
        for status in statuses {
            *by_status.entry(status).or_insert(0) += 1;
            total += 1;
        }
        Self { total, by_status }
    }

    pub fn get(&self, status: S) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}
