use thiserror::Error;

#[derive(Debug, Error)]
pub enum EcotallyError {
    #[error("Field '{field}' must be non-negative, got {value}")]
    NegativeInput { field: &'static str, value: f64 },

    #[error("Field '{field}' must be a finite number")]
    NonFiniteInput { field: &'static str },

    #[error("Unknown diet '{0}'; expected one of omnivore, vegetarian, vegan")]
    UnknownDiet(String),

    #[error("Unknown country '{0}'; expected one of USA, UK, Germany, India, China, Global")]
    UnknownCountry(String),

    #[error("Dataset error: {0}")]
    ConfigError(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParsing(#[from] serde_json::Error),

    // Unreachable given validated input and a sane factor table; surfaced
    // loudly instead of defaulting to zero.
    #[error("Internal computation error: {0}")]
    Internal(String),
}

impl EcotallyError {
    /// Stable snake_case code for the machine-readable error payload.
    pub fn reason_code(&self) -> &'static str {
        match self {
            EcotallyError::NegativeInput { .. } => "negative_input",
            EcotallyError::NonFiniteInput { .. } => "non_finite_input",
            EcotallyError::UnknownDiet(_) => "unknown_diet",
            EcotallyError::UnknownCountry(_) => "unknown_country",
            EcotallyError::ConfigError(_) => "invalid_dataset",
            EcotallyError::FileIO(..) => "dataset_io",
            EcotallyError::YamlParsing(..) => "dataset_parse",
            EcotallyError::JsonParsing(_) => "dataset_parse",
            EcotallyError::Internal(_) => "internal",
        }
    }

    /// Whether this is a caller mistake (the 4xx class) as opposed to a
    /// dataset or internal failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EcotallyError::NegativeInput { .. }
                | EcotallyError::NonFiniteInput { .. }
                | EcotallyError::UnknownDiet(_)
                | EcotallyError::UnknownCountry(_)
        )
    }
}
