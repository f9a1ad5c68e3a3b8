use crate::infra::Board;
use clap::Args;
use job_board::board::applications::{ApplicationAction, ApplyRequest};
use job_board::board::auth::{LoginRequest, PasswordChange, Role, Session, UserData};
use job_board::board::notifications::NotificationTab;
use job_board::board::offers::{OfferAction, OfferStatus, Selector};
use job_board::board::profiles::ListField;
use job_board::board::report::{OfferBoardReport, OfferView};
use job_board::board::state::{DiscoveryScreen, NotificationsScreen, OfferManagementScreen};
use job_board::config::BoardConfig;
use job_board::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Offer CSV export to summarize instead of the demo board
    #[arg(long)]
    pub(crate) offers_csv: Option<PathBuf>,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the simulated sign-in round trips.
    #[arg(long)]
    pub(crate) skip_auth: bool,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs { offers_csv, json } = args;
    let config = BoardConfig {
        seed_demo_data: offers_csv.is_none(),
        ..BoardConfig::default()
    };
    let board = Board::build(&config, offers_csv.as_deref())?;
    let report = board.offers.report()?;

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(body) => println!("{body}"),
            Err(err) => println!("Report payload unavailable: {err}"),
        }
    } else {
        render_report(&report, offers_csv.is_some());
    }
    Ok(())
}

fn render_report(report: &OfferBoardReport, imported: bool) {
    let source = if imported { "CSV import" } else { "demo data" };
    println!("Offer board report ({source})");
    println!(
        "- {} active vacancies across {} industries",
        report.summary.total_vacancies, report.summary.industries
    );

    println!("Sectors:");
    for (industry, count) in &report.summary.sector_breakdown {
        println!("  - {industry}: {count}");
    }
    println!("Locations:");
    for (location, count) in &report.summary.location_breakdown {
        println!("  - {location}: {count}");
    }

    println!("Status tabs ({} offers):", report.status_counts.total);
    for (status, count) in &report.status_counts.by_status {
        println!("  - {}: {count}", status.section_title());
    }
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = BoardConfig::default();
    let board = Board::build(&config, None)?;

    println!("CAIL job board demo");

    if !args.skip_auth {
        demo_auth(&board).await;
    }

    println!("\nCandidate discovery");
    let offers = board.offers.list(Some(OfferStatus::Active))?;
    let mut discovery = DiscoveryScreen::default();
    discovery.set_industry(Selector::Only("Tecnología".to_string()));
    let visible = discovery.visible(&offers);
    for offer in &visible {
        let view = OfferView::from(offer.clone());
        println!(
            "- {} | {} | {} | {} ({})",
            offer.title, offer.company, view.modality_label, view.status_label, offer.salary
        );
    }
    let discovery_view = board.offers.discover(discovery.filters())?;
    for (industry, count) in discovery_view.summary.top_sectors(3) {
        println!("  sector {industry}: {count}");
    }
    for (location, count) in discovery_view.summary.top_locations(3) {
        println!("  location {location}: {count}");
    }

    let Some(target) = visible.first() else {
        println!("No offers match the demo filters");
        return Ok(());
    };

    println!("\nApplying to {}", target.title);
    let missing_cv = board.applications.apply(&target.id, apply_request(""));
    if let Err(err) = missing_cv {
        println!("  Rejected without CV: {err}");
    }
    let receipt = match board
        .applications
        .apply(&target.id, apply_request("https://cv.cail.ec/maria-calle"))
    {
        Ok(receipt) => receipt,
        Err(err) => {
            println!("  Application failed: {err}");
            return Ok(());
        }
    };
    println!(
        "- Received {} for {} ({})",
        receipt.received.id,
        receipt.received.position,
        receipt.received.status.label()
    );
    println!(
        "- Candidate tracker: {} at {} ({})",
        receipt.tracked.title,
        receipt.tracked.company,
        receipt.tracked.stage.label()
    );

    println!("\nEmployer review");
    for action in [ApplicationAction::StartReview, ApplicationAction::Select] {
        match board.applications.act(&receipt.received.id, action) {
            Ok(updated) => println!("- {} -> {}", action.label(), updated.status.label()),
            Err(err) => println!("- {} rejected: {err}", action.label()),
        }
    }
    match board.applications.report() {
        Ok(report) => {
            for (status, count) in &report.received.by_status {
                println!("  {}: {count}", status.label());
            }
        }
        Err(err) => println!("  Application summary unavailable: {err}"),
    }

    println!("\nOffer management");
    let mut management = OfferManagementScreen::default();
    management.request(OfferAction::Archive, target.id.clone());
    if let Some(archived) = management.confirm(&*board.offers)? {
        println!(
            "- {} archived with {} applications",
            archived.title, archived.applications
        );
    }
    println!(
        "- {}: {} offers",
        management.section_title(),
        management.visible(&*board.offers)?.len()
    );

    println!("\nNotifications");
    let mut notifications = NotificationsScreen::default();
    match board.notifications.center() {
        Ok(center) => {
            for item in &center.feed {
                println!("- [{}] {}", item.tone.label(), item.item.title);
            }
        }
        Err(err) => println!("- Feed unavailable: {err}"),
    }
    notifications.select_tab(NotificationTab::Settings);
    match board.notifications.toggle("suggestions") {
        Ok(preference) => println!(
            "- {:?} tab: {} {}",
            notifications.tab(),
            preference.label,
            if preference.enabled { "activadas" } else { "desactivadas" }
        ),
        Err(err) => println!("- Preference unavailable: {err}"),
    }

    println!("\nCandidate profile");
    match board.profiles.candidate() {
        Ok(profile) => {
            let before = profile.completion();
            let updated = profile.with_item(ListField::Competencies, "Mejora continua");
            match board.profiles.save_candidate(updated) {
                Ok(saved) => println!(
                    "- Avance {:.0}% -> {:.0}%",
                    before * 100.0,
                    saved.completion() * 100.0
                ),
                Err(err) => println!("- Profile not saved: {err}"),
            }
        }
        Err(err) => println!("- Profile unavailable: {err}"),
    }

    Ok(())
}

async fn demo_auth(board: &Board) {
    println!("\nSign-in");
    let empty = LoginRequest {
        role: Role::Candidate,
        email: "maria.calle@correo.ec".to_string(),
        password: String::new(),
    };
    if let Err(err) = board.auth.login(&empty).await {
        println!("- Blank password: {err}");
    }

    for role in [Role::Candidate, Role::Employer] {
        let request = LoginRequest {
            role,
            email: "demo@cail.ec".to_string(),
            password: "demo-clave".to_string(),
        };
        match board.auth.login(&request).await {
            Ok(session) => {
                describe_session(&session);
                if session.needs_password_change {
                    change_password(board, session);
                }
            }
            Err(err) => println!("- {} sign-in failed: {err}", role.label()),
        }
    }
}

fn describe_session(session: &Session) {
    match &session.user {
        UserData::Candidate(candidate) => println!(
            "- Candidato {} ({:.0}% de perfil)",
            candidate.name,
            candidate.progress * 100.0
        ),
        UserData::Employer(employer) => println!(
            "- Empleador {} / {} (correo verificado: {}, cambio de clave: {})",
            employer.company,
            employer.contact_name,
            session.is_email_verified,
            session.needs_password_change
        ),
    }
}

fn change_password(board: &Board, session: Session) {
    let weak = PasswordChange {
        password: "corta".to_string(),
        confirmation: "corta".to_string(),
    };
    if let Err(err) = board.auth.change_password(session.clone(), &weak) {
        println!("  Rejected password: {err}");
    }

    let strong = PasswordChange {
        password: "nueva-clave-2025".to_string(),
        confirmation: "nueva-clave-2025".to_string(),
    };
    match board.auth.change_password(session, &strong) {
        Ok(updated) => println!(
            "  Password updated; change required: {}",
            updated.needs_password_change
        ),
        Err(err) => println!("  Password change failed: {err}"),
    }
}

fn apply_request(cv_link: &str) -> ApplyRequest {
    ApplyRequest {
        candidate_name: "María Fernanda Calle".to_string(),
        email: "maria.calle@correo.ec".to_string(),
        phone: "0991234567".to_string(),
        education: "Ingeniería Industrial".to_string(),
        experience: "2 años".to_string(),
        skills: vec!["Lean Manufacturing".to_string()],
        cv_link: cv_link.to_string(),
        cover_letter: None,
    }
}
