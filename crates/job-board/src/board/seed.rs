//! Demo records used when the board starts without an import.

use chrono::NaiveDate;

use crate::board::applications::domain::{
    initials, ApplicationId, ApplicationStatus, CandidateStage, ReceivedApplication,
    TrackedApplication,
};
use crate::board::notifications::{NotificationItem, NotificationPreference};
use crate::board::offers::domain::{JobOffer, Modality, OfferId, OfferStatus, Priority};
use crate::board::profiles::{CandidateProfileForm, EmployerProfileForm};

fn october(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, day).unwrap_or_default()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

struct OfferSeed {
    id: &'static str,
    title: &'static str,
    company: &'static str,
    department: &'static str,
    location: &'static str,
    modality: Modality,
    salary: &'static str,
    industry: &'static str,
    priority: Priority,
    competencies: &'static [&'static str],
    education: &'static [&'static str],
    experience: &'static str,
    day: u32,
    status: OfferStatus,
    applications: u32,
    views: u32,
}

impl OfferSeed {
    fn build(self) -> JobOffer {
        JobOffer {
            id: OfferId(self.id.to_string()),
            title: self.title.to_string(),
            company: self.company.to_string(),
            department: self.department.to_string(),
            description: format!("{} para el área de {}.", self.title, self.department),
            location: self.location.to_string(),
            modality: self.modality,
            salary: self.salary.to_string(),
            industry: self.industry.to_string(),
            priority: self.priority,
            required_competencies: strings(self.competencies),
            required_education: strings(self.education),
            required_experience: self.experience.to_string(),
            published_on: october(self.day),
            status: self.status,
            applications: self.applications,
            views: self.views,
        }
    }
}

pub fn demo_offers() -> Vec<JobOffer> {
    vec![
        OfferSeed {
            id: "offer-demo-01",
            title: "Ingeniero de Producción",
            company: "Industrias ABC",
            department: "Planta",
            location: "Loja",
            modality: Modality::OnSite,
            salary: "$1200 - $1800",
            industry: "Manufactura",
            priority: Priority::High,
            competencies: &["Lean Manufacturing", "Control de calidad"],
            education: &["Ingeniería Industrial"],
            experience: "3 años en líneas de producción",
            day: 2,
            status: OfferStatus::Active,
            applications: 12,
            views: 140,
        }
        .build(),
        OfferSeed {
            id: "offer-demo-02",
            title: "Desarrollador Backend",
            company: "TecnoSur",
            department: "Tecnología",
            location: "Quito",
            modality: Modality::Remote,
            salary: "$1500 - $2200",
            industry: "Tecnología",
            priority: Priority::Medium,
            competencies: &["APIs REST", "SQL"],
            education: &["Ingeniería en Sistemas"],
            experience: "2 años",
            day: 5,
            status: OfferStatus::Active,
            applications: 8,
            views: 96,
        }
        .build(),
        OfferSeed {
            id: "offer-demo-03",
            title: "Analista de Datos",
            company: "Industrias ABC",
            department: "Planificación",
            location: "Loja",
            modality: Modality::Hybrid,
            salary: "$1100 - $1500",
            industry: "Tecnología",
            priority: Priority::Medium,
            competencies: &["Power BI", "Estadística"],
            education: &["Economía", "Ingeniería en Sistemas"],
            experience: "1 año",
            day: 7,
            status: OfferStatus::Active,
            applications: 5,
            views: 61,
        }
        .build(),
        OfferSeed {
            id: "offer-demo-04",
            title: "Asesor de Servicio al Cliente",
            company: "Cooperativa Sur",
            department: "Atención",
            location: "Cuenca",
            modality: Modality::OnSite,
            salary: "$600 - $800",
            industry: "Servicios",
            priority: Priority::Low,
            competencies: &["Comunicación efectiva"],
            education: &["Bachillerato"],
            experience: "6 meses",
            day: 9,
            status: OfferStatus::Active,
            applications: 21,
            views: 210,
        }
        .build(),
        OfferSeed {
            id: "offer-demo-05",
            title: "Jefe de Ventas",
            company: "Comercial Loja",
            department: "Comercial",
            location: "Loja",
            modality: Modality::Hybrid,
            salary: "$1000 - $1400",
            industry: "Comercio",
            priority: Priority::High,
            competencies: &["Negociación", "Liderazgo"],
            education: &["Administración de Empresas"],
            experience: "4 años",
            day: 10,
            status: OfferStatus::Active,
            applications: 9,
            views: 88,
        }
        .build(),
        OfferSeed {
            id: "offer-demo-06",
            title: "Supervisor de Mantenimiento",
            company: "Industrias ABC",
            department: "Mantenimiento",
            location: "Loja",
            modality: Modality::OnSite,
            salary: "$1000 - $1300",
            industry: "Manufactura",
            priority: Priority::Medium,
            competencies: &["Mantenimiento preventivo"],
            education: &["Ingeniería Electromecánica"],
            experience: "2 años",
            day: 1,
            status: OfferStatus::Archived,
            applications: 14,
            views: 120,
        }
        .build(),
    ]
}

struct ApplicationSeed {
    id: &'static str,
    offer_id: Option<&'static str>,
    name: &'static str,
    position: &'static str,
    education: &'static str,
    experience: &'static str,
    email: &'static str,
    skills: &'static [&'static str],
    day: u32,
    status: ApplicationStatus,
    match_score: Option<u8>,
    channel: &'static str,
}

impl ApplicationSeed {
    fn build(self) -> ReceivedApplication {
        ReceivedApplication {
            id: ApplicationId(self.id.to_string()),
            offer_id: self.offer_id.map(|id| OfferId(id.to_string())),
            candidate_name: self.name.to_string(),
            initials: initials(self.name),
            position: self.position.to_string(),
            education: self.education.to_string(),
            experience: self.experience.to_string(),
            email: self.email.to_string(),
            phone: "0990000000".to_string(),
            skills: strings(self.skills),
            received_on: october(self.day),
            status: self.status,
            match_score: self.match_score,
            channel: self.channel.to_string(),
            notes: None,
            cv_link: None,
        }
    }
}

pub fn demo_received_applications() -> Vec<ReceivedApplication> {
    vec![
        ApplicationSeed {
            id: "received-demo-01",
            offer_id: Some("offer-demo-01"),
            name: "Luis Alberto Torres",
            position: "Ingeniero de Producción",
            education: "Ingeniería Industrial",
            experience: "4 años",
            email: "luis.torres@correo.ec",
            skills: &["Lean", "Six Sigma"],
            day: 6,
            status: ApplicationStatus::Pending,
            match_score: Some(88),
            channel: "Bolsa de empleo",
        }
        .build(),
        ApplicationSeed {
            id: "received-demo-02",
            offer_id: Some("offer-demo-03"),
            name: "Ana Jaramillo",
            position: "Analista de Datos",
            education: "Economía",
            experience: "1 año",
            email: "ana.jaramillo@correo.ec",
            skills: &["Power BI", "Python"],
            day: 8,
            status: ApplicationStatus::Review,
            match_score: Some(76),
            channel: "Bolsa de empleo",
        }
        .build(),
        ApplicationSeed {
            id: "received-demo-03",
            offer_id: None,
            name: "Carlos Ruiz",
            position: "Perfil espontáneo",
            education: "Administración de Empresas",
            experience: "5 años",
            email: "carlos.ruiz@correo.ec",
            skills: &["Ventas", "CRM"],
            day: 4,
            status: ApplicationStatus::Rejected,
            match_score: None,
            channel: "Feria laboral",
        }
        .build(),
    ]
}

pub fn demo_tracked_applications() -> Vec<TrackedApplication> {
    let tracked = |id: &str, title: &str, company: &str, stage, step: &str, day, priority| {
        TrackedApplication {
            id: ApplicationId(id.to_string()),
            title: title.to_string(),
            company: company.to_string(),
            stage,
            step: step.to_string(),
            submitted_on: october(day),
            priority,
            notes: None,
        }
    };

    vec![
        tracked(
            "tracked-demo-01",
            "Analista de Datos",
            "Industrias ABC",
            CandidateStage::Interview,
            "Entrevista técnica",
            8,
            Priority::High,
        ),
        tracked(
            "tracked-demo-02",
            "Desarrollador Backend",
            "TecnoSur",
            CandidateStage::InReview,
            "Revisión de CV",
            6,
            Priority::Medium,
        ),
        tracked(
            "tracked-demo-03",
            "Asistente Contable",
            "Cooperativa Sur",
            CandidateStage::Closed,
            "Proceso cerrado",
            1,
            Priority::Low,
        ),
    ]
}

pub fn demo_notification_preferences() -> Vec<NotificationPreference> {
    [
        ("new-offers", "Nuevas ofertas", "Vacantes que coinciden con tu perfil", true),
        ("process-updates", "Avances de proceso", "Cambios de estado en tus postulaciones", true),
        ("suggestions", "Sugerencias", "Consejos para mejorar tu perfil", false),
    ]
    .into_iter()
    .map(|(id, label, description, enabled)| NotificationPreference {
        id: id.to_string(),
        label: label.to_string(),
        description: description.to_string(),
        enabled,
    })
    .collect()
}

pub fn demo_notification_feed() -> Vec<NotificationItem> {
    [
        ("feed-01", "Entrevista agendada", "Industrias ABC te espera el lunes a las 09:00.", 12, Some("Proceso")),
        ("feed-02", "Completa tu perfil", "Agrega tus competencias para mejorar tus coincidencias.", 11, Some("Sugerencia")),
        ("feed-03", "Documento pendiente", "Tu CV no está disponible para TecnoSur.", 10, Some("Alerta")),
        ("feed-04", "Feria laboral CAIL", "Inscripciones abiertas hasta el viernes.", 9, None),
    ]
    .into_iter()
    .map(|(id, title, description, day, category)| NotificationItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: october(day),
        category: category.map(str::to_string),
    })
    .collect()
}

pub fn demo_candidate_profile() -> CandidateProfileForm {
    CandidateProfileForm {
        full_name: "María Fernanda Calle".to_string(),
        email: "maria.calle@correo.ec".to_string(),
        phone: "0991234567".to_string(),
        city: "Loja".to_string(),
        address: String::new(),
        professional_summary: "Ingeniera industrial enfocada en mejora continua.".to_string(),
        technical_skills: strings(&["Lean Manufacturing", "Excel avanzado"]),
        soft_skills: strings(&["Trabajo en equipo"]),
        competencies: Vec::new(),
    }
}

pub fn demo_employer_profile() -> EmployerProfileForm {
    EmployerProfileForm {
        company_name: "Industrias ABC".to_string(),
        contact_name: "Patricia Ludeña".to_string(),
        email: "rrhh@industriasabc.ec".to_string(),
        phone: "072570000".to_string(),
        industry: "Manufactura".to_string(),
        number_of_employees: "120".to_string(),
        address: "Parque Industrial de Loja".to_string(),
        website: "https://industriasabc.ec".to_string(),
        description: "Fabricante de productos metalmecánicos del sur del país.".to_string(),
    }
}
