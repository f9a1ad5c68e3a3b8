//! Screen state holders. They keep user selections only; data always comes from the services.

use tracing::debug;

use crate::board::notifications::NotificationTab;
use crate::board::offers::domain::{JobOffer, Modality, OfferId, OfferStatus};
use crate::board::offers::filter::{filter_offers, FilterState, Selector};
use crate::board::offers::lifecycle::OfferAction;
use crate::board::offers::repository::OfferRepository;
use crate::board::offers::service::{OfferService, OfferServiceError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryScreen {
    filters: FilterState,
}

impl DiscoveryScreen {
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filters.search = search.into();
    }

    pub fn set_modality(&mut self, modality: Selector<Modality>) {
        self.filters.modality = modality;
    }

    pub fn set_industry(&mut self, industry: Selector<String>) {
        self.filters.industry = industry;
    }

    /// Re-evaluated on every call; nothing is cached between filter changes.
    pub fn visible(&self, offers: &[JobOffer]) -> Vec<JobOffer> {
        filter_offers(offers, &self.filters)
    }
}

/// Action awaiting the employer's confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAction {
    pub action: OfferAction,
    pub offer_id: OfferId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferManagementScreen {
    tab: OfferStatus,
    pending: Option<PendingAction>,
}

impl Default for OfferManagementScreen {
    fn default() -> Self {
        Self {
            tab: OfferStatus::Active,
            pending: None,
        }
    }
}

impl OfferManagementScreen {
    pub fn tab(&self) -> OfferStatus {
        self.tab
    }

    pub fn select_tab(&mut self, tab: OfferStatus) {
        self.tab = tab;
    }

    pub fn section_title(&self) -> &'static str {
        self.tab.section_title()
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    /// Replaces any earlier unconfirmed request.
    pub fn request(&mut self, action: OfferAction, offer_id: OfferId) {
        self.pending = Some(PendingAction { action, offer_id });
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Applies the pending action and follows the offer to its new tab. The prompt is
    /// dismissed whether or not the action succeeds.
    pub fn confirm<R>(
        &mut self,
        service: &OfferService<R>,
    ) -> Result<Option<JobOffer>, OfferServiceError>
    where
        R: OfferRepository + 'static,
    {
        let Some(pending) = self.pending.take() else {
            return Ok(None);
        };

        let offer = service.apply_action(&pending.offer_id, pending.action)?;
        self.tab = pending.action.target_status();
        debug!(tab = self.tab.key(), "management tab switched");
        Ok(Some(offer))
    }

    pub fn visible<R>(&self, service: &OfferService<R>) -> Result<Vec<JobOffer>, OfferServiceError>
    where
        R: OfferRepository + 'static,
    {
        service.list(Some(self.tab))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotificationsScreen {
    tab: NotificationTab,
}

impl NotificationsScreen {
    pub fn tab(&self) -> NotificationTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: NotificationTab) {
        self.tab = tab;
    }
}
