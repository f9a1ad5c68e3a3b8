use job_board::board::applications::{
    ApplicationService, InMemoryApplicationRepository, InMemoryTrackedApplicationRepository,
};
use job_board::board::auth::{AuthService, MockAuthGateway};
use job_board::board::notifications::NotificationService;
use job_board::board::offers::{InMemoryOfferRepository, OfferImporter, OfferService};
use job_board::board::profiles::{CandidateProfileForm, EmployerProfileForm, ProfileService};
use job_board::board::seed;
use job_board::config::BoardConfig;
use job_board::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type Offers = OfferService<InMemoryOfferRepository>;
pub(crate) type Applications = ApplicationService<
    InMemoryApplicationRepository,
    InMemoryTrackedApplicationRepository,
    InMemoryOfferRepository,
>;

/// Every service of the board, wired over in-memory stores.
pub(crate) struct Board {
    pub(crate) offers: Arc<Offers>,
    pub(crate) applications: Arc<Applications>,
    pub(crate) auth: Arc<AuthService<MockAuthGateway>>,
    pub(crate) profiles: Arc<ProfileService>,
    pub(crate) notifications: Arc<NotificationService>,
}

impl Board {
    /// Seeds demo records when enabled, then publishes any offers found in `offers_csv`.
    pub(crate) fn build(config: &BoardConfig, offers_csv: Option<&Path>) -> Result<Self, AppError> {
        let seeded = config.seed_demo_data;
        let offer_repository = if seeded {
            InMemoryOfferRepository::seeded(seed::demo_offers())
        } else {
            InMemoryOfferRepository::default()
        };
        let offers = Arc::new(OfferService::new(Arc::new(offer_repository)));

        if let Some(path) = offers_csv {
            let drafts = OfferImporter::from_path(path)?;
            let imported = drafts.len();
            for draft in drafts {
                offers.create(draft)?;
            }
            info!(imported, path = %path.display(), "offers imported");
        }

        let (received, tracked) = if seeded {
            (
                InMemoryApplicationRepository::seeded(seed::demo_received_applications()),
                InMemoryTrackedApplicationRepository::seeded(seed::demo_tracked_applications()),
            )
        } else {
            Default::default()
        };
        let applications = Arc::new(ApplicationService::new(
            Arc::new(received),
            Arc::new(tracked),
            offers.clone(),
        ));

        let auth = Arc::new(AuthService::new(
            Arc::new(MockAuthGateway::new(config.login_latency)),
            config.login_timeout,
        ));

        let (candidate, employer) = if seeded {
            (seed::demo_candidate_profile(), seed::demo_employer_profile())
        } else {
            (CandidateProfileForm::default(), EmployerProfileForm::default())
        };
        let profiles = Arc::new(ProfileService::new(candidate, employer));

        let notifications = Arc::new(if seeded {
            NotificationService::new(
                seed::demo_notification_feed(),
                seed::demo_notification_preferences(),
            )
        } else {
            NotificationService::new(Vec::new(), Vec::new())
        });

        Ok(Self {
            offers,
            applications,
            auth,
            profiles,
            notifications,
        })
    }
}
