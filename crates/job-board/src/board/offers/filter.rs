use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domain::{JobOffer, Modality, UnknownVariant};

/// Either the "all" sentinel or one concrete value to match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: PartialEq> Selector<T> {
    pub fn allows(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(expected) => expected == value,
        }
    }
}

impl<T: FromStr> Selector<T> {
    /// Absent, `all` and `Todos` select everything.
    pub fn parse(raw: Option<&str>) -> Result<Self, T::Err> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Selector::All),
            Some(value)
                if value.eq_ignore_ascii_case("all") || value.eq_ignore_ascii_case("todos") =>
            {
                Ok(Selector::All)
            }
            Some(value) => value.parse().map(Selector::Only),
        }
    }
}

/// Candidate-side discovery filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterState {
    pub search: String,
    pub modality: Selector<Modality>,
    pub industry: Selector<String>,
}

impl FilterState {
    pub fn matches(&self, offer: &JobOffer) -> bool {
        self.matches_search(offer)
            && self.modality.allows(&offer.modality)
            && self.industry.allows(&offer.industry)
    }

    fn matches_search(&self, offer: &JobOffer) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        offer.title.to_lowercase().contains(&needle)
            || offer.company.to_lowercase().contains(&needle)
    }

    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty()
            && matches!(self.modality, Selector::All)
            && matches!(self.industry, Selector::All)
    }
}

/// Keeps the offers accepted by `filters`, in source order.
pub fn filter_offers(offers: &[JobOffer], filters: &FilterState) -> Vec<JobOffer> {
    offers
        .iter()
        .filter(|offer| filters.matches(offer))
        .cloned()
        .collect()
}

/// Raw query-string form of [`FilterState`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscoveryQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub modality: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
}

impl TryFrom<DiscoveryQuery> for FilterState {
    type Error = UnknownVariant;

    fn try_from(query: DiscoveryQuery) -> Result<Self, Self::Error> {
        let modality = Selector::<Modality>::parse(query.modality.as_deref())?;
        let industry = match Selector::<String>::parse(query.industry.as_deref()) {
            Ok(selector) => selector,
            Err(never) => match never {},
        };

        Ok(Self {
            search: query.search.unwrap_or_default(),
            modality,
            industry,
        })
    }
}
