use chrono::NaiveDate;
use thiserror::Error;

/// Validation failures raised while turning raw curve input into engine types.
///
/// The engine itself never fails; these only surface at the ingest boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("Curve #{index} has an empty key.")]
    EmptyKey { index: usize },

    #[error("Duplicate curve key '{key}'.")]
    DuplicateKey { key: String },

    #[error("Curve key '{key}' is reserved for a chart row column.")]
    ReservedKey { key: String },

    #[error("Curve '{key}': point #{index} has a non-finite value.")]
    NonFiniteValue { key: String, index: usize },

    #[error("Curve '{key}': point #{index} has tenor {tenor} (must be finite and > 0).")]
    InvalidTenor { key: String, index: usize, tenor: f64 },

    #[error("Curve '{key}': unknown tenor label '{label}'.")]
    UnknownTenorLabel { key: String, label: String },

    #[error("Curve '{key}': point #{index} must give exactly one of `tenor` or `maturity`.")]
    AmbiguousTenor { key: String, index: usize },

    #[error("Curve '{key}': point #{index} uses `maturity` but no as-of date is set.")]
    MissingAsof { key: String, index: usize },

    #[error("Curve '{key}': point #{index} matures on {maturity}, not after the as-of date {asof}.")]
    MaturedPoint {
        key: String,
        index: usize,
        maturity: NaiveDate,
        asof: NaiveDate,
    },

    #[error("Curve set JSON is invalid: {0}")]
    Json(String),
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<CurveError> for AppError {
    fn from(err: CurveError) -> Self {
        AppError::new(2, err.to_string())
    }
}
