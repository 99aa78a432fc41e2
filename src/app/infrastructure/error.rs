use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Section \"{0}\" is declared more than once in the route table")]
    DuplicateSection(String),

    #[error("Route {route} is claimed by both \"{first}\" and \"{second}\"")]
    DuplicateRoute {
        route: String,
        first: String,
        second: String,
    },

    #[error("Route {route:?} for section \"{section}\" is not an absolute path")]
    InvalidRoute { section: String, route: String },

    #[error("Prefix {prefix} belongs to unmapped section \"{section}\"")]
    UnmappedPrefixOwner { prefix: String, section: String },

    #[error("{0} accessed outside of its provider scope")]
    MissingProvider(&'static str),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
