use serde_json::json;

/// Input problems surfaced to the user as a blocking alert; never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Ingresa tu correo y contraseña.")]
    MissingCredentials,
    #[error("Completa los datos para continuar.")]
    IncompleteCandidateRegistration,
    #[error("Completa los datos de la empresa.")]
    IncompleteEmployerRegistration,
    #[error("Usa al menos 8 caracteres.")]
    WeakPassword,
    #[error("Las contraseñas no coinciden.")]
    PasswordMismatch,
    #[error("Agrega el enlace de tu CV para continuar.")]
    MissingCv,
    #[error("Completa tu nombre y correo para postular.")]
    IncompleteApplication,
    #[error("La oferta necesita un título.")]
    MissingOfferTitle,
}

impl ValidationError {
    /// Alert heading paired with the message.
    pub const fn title(self) -> &'static str {
        match self {
            Self::MissingCredentials
            | Self::IncompleteCandidateRegistration
            | Self::IncompleteEmployerRegistration
            | Self::IncompleteApplication
            | Self::MissingOfferTitle => "Campos incompletos",
            Self::WeakPassword => "Contraseña débil",
            Self::PasswordMismatch => "Validación",
            Self::MissingCv => "Falta tu CV",
        }
    }

    pub fn to_json(self) -> serde_json::Value {
        json!({ "error": self.title(), "message": self.to_string() })
    }
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
