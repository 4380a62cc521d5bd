use thiserror::Error;

#[derive(Error, Debug)]
pub enum StripError {
    #[error("Group {group}: different number of teams (Cadet={cadet}, Juvenil={juvenil})")]
    RosterSizeMismatch {
        group: String,
        cadet: usize,
        juvenil: usize,
    },

    #[error(
        "Group {}: could not pair every team (Cadet: [{}], Juvenil: [{}])",
        .group,
        .unmatched_cadet.join(", "),
        .unmatched_juvenil.join(", ")
    )]
    IncompleteMatch {
        group: String,
        unmatched_cadet: Vec<String>,
        unmatched_juvenil: Vec<String>,
    },

    #[error("Unknown division in category: {category}")]
    UnknownDivision { category: String },

    #[error("No Juvenil classification found for division {division}")]
    MissingCounterpart { division: String },

    #[error("Division {division}: different number of groups (Cadet={cadet}, Juvenil={juvenil})")]
    GroupCountMismatch {
        division: String,
        cadet: usize,
        juvenil: usize,
    },

    #[error("Division {division}: group '{group}' has no Juvenil counterpart")]
    GroupNotFound { division: String, group: String },

    #[error("HTTP request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Standings parsing error: {message}")]
    Parse { message: String },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("PDF rendering error: {message}")]
    Pdf { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Parsing,
    Matching,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StripError {
    pub fn parse(message: impl Into<String>) -> Self {
        StripError::Parse {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            StripError::Fetch(_) => ErrorCategory::Network,
            StripError::Parse { .. } => ErrorCategory::Parsing,
            StripError::RosterSizeMismatch { .. }
            | StripError::IncompleteMatch { .. }
            | StripError::UnknownDivision { .. }
            | StripError::MissingCounterpart { .. }
            | StripError::GroupCountMismatch { .. }
            | StripError::GroupNotFound { .. } => ErrorCategory::Matching,
            StripError::ConfigValidationError { .. }
            | StripError::InvalidConfigValueError { .. }
            | StripError::MissingConfigError { .. } => ErrorCategory::Configuration,
            StripError::Csv(_)
            | StripError::Xlsx(_)
            | StripError::Pdf { .. }
            | StripError::Io(_)
            | StripError::Serialization(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // The source site may simply be down; a later run can succeed.
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Parsing | ErrorCategory::Matching => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StripError::Fetch(_) => "Check the network connection and that the standings URL is reachable",
            StripError::Parse { .. } => "The standings page layout may have changed; save the HTML and inspect it",
            StripError::RosterSizeMismatch { .. } | StripError::GroupCountMismatch { .. } => {
                "Make sure the Cadet and Juvenil pages belong to the same competition phase"
            }
            StripError::IncompleteMatch { .. } => {
                "Team names differ too much between categories; fix the names upstream and re-run"
            }
            StripError::UnknownDivision { .. } => {
                "Categories must mention one of '1a Div', '2a Div', '3a Div' or '4a Div'"
            }
            StripError::MissingCounterpart { .. } => {
                "Add the Juvenil standings page for every Cadet division"
            }
            StripError::GroupNotFound { .. } => {
                "Group names must be identical in the Cadet and Juvenil pages"
            }
            StripError::ConfigValidationError { .. }
            | StripError::InvalidConfigValueError { .. }
            | StripError::MissingConfigError { .. } => "Review the configuration values and try again",
            StripError::Csv(_)
            | StripError::Xlsx(_)
            | StripError::Pdf { .. }
            | StripError::Io(_)
            | StripError::Serialization(_) => "Check that the input files exist and the output directory is writable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not download standings: {}", self),
            ErrorCategory::Parsing => format!("Could not read standings: {}", self),
            ErrorCategory::Matching => format!("Could not build strip standings: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Output => format!("Could not write reports: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, StripError>;
