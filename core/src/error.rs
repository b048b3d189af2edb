use std::fmt;

use thiserror::Error;

/// De fire logiske ressursene vi henter per bruker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    User,
    Activity,
    AverageSessions,
    Performance,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::User,
        Resource::Activity,
        Resource::AverageSessions,
        Resource::Performance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Resource::User => "user",
            Resource::Activity => "activity",
            Resource::AverageSessions => "average_sessions",
            Resource::Performance => "performance",
        }
    }

    /// Sti relativt til base-URL.
    pub fn path(self, user_id: u32) -> String {
        match self {
            Resource::User => format!("/user/{user_id}"),
            Resource::Activity => format!("/user/{user_id}/activity"),
            Resource::AverageSessions => format!("/user/{user_id}/average-sessions"),
            Resource::Performance => format!("/user/{user_id}/performance"),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grov klassifisering brukt i logging og metrikker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Shape,
    FieldAmbiguity,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::Transport => "transport",
            FailureKind::Shape => "shape",
            FailureKind::FieldAmbiguity => "field_ambiguity",
        }
    }
}

/// Hvorfor en (parsbar) respons ble avvist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("response has no `data` envelope")]
    MissingEnvelope,
    #[error("invalid payload at `{path}`: {message}")]
    Shape { path: String, message: String },
    #[error("score present under neither `score` nor `todayScore`")]
    ScoreMissing,
}

impl Rejection {
    pub fn kind(&self) -> FailureKind {
        match self {
            Rejection::ScoreMissing => FailureKind::FieldAmbiguity,
            Rejection::MissingEnvelope | Rejection::Shape { .. } => FailureKind::Shape,
        }
    }
}

/// Alt som kan gå galt på ett enkelt ressurskall. Absorberes av `DataClient`.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("backend answered with status {0}")]
    Status(u16),
    #[error("response body is not valid JSON: {0}")]
    Decode(String),
    #[error(transparent)]
    Rejected(#[from] Rejection),
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Network(_) | FetchError::Status(_) => FailureKind::Transport,
            FetchError::Decode(_) => FailureKind::Shape,
            FetchError::Rejected(r) => r.kind(),
        }
    }
}

/// Den eneste feilen presentasjonslaget ser: verken backend eller fixture
/// kunne levere data for brukeren.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("Une erreur est survenue lors du chargement des données pour l'utilisateur {user_id} ({resource})")]
    Unavailable { user_id: u32, resource: Resource },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("config parse at {path}: {message}")]
    Parse { path: String, message: String },
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
    #[error("base_url must start with http:// or https://, got {0}")]
    InvalidBaseUrl(String),
    #[error("timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Feil ved oppsett av klienten (konfig eller metrikk-registrering).
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("metrics registration failed: {0}")]
    Metrics(#[from] prometheus::Error),
}
