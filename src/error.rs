use crate::ServerVersion;
use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, IsVariant, ThisError)]
pub enum Error {
    #[error("{0} is not supported by RawQueryPaginator")]
    UnsupportedDialect(String),

    #[error("Oracle version must be 12.1 or higher{}", found_version(.0))]
    OracleVersionUnsupported(Option<ServerVersion>),

    #[error("That page number is not an integer: {0:?}")]
    PageNotAnInteger(String),

    #[error("{0}")]
    EmptyPage(EmptyPageReason),

    #[error("per_page must be greater than zero")]
    InvalidPerPage,

    #[error("per_page {per_page} exceeds the maximum of {max}")]
    PerPageTooLarge { per_page: u32, max: u32 },

    #[error("count query returned no rows")]
    MissingCount,

    #[error("count query returned a negative value: {0}")]
    NegativeCount(i64),

    #[cfg(feature = "diesel")]
    #[error(transparent)]
    Diesel(#[from] ::diesel::result::Error),

    #[error(transparent)]
    Executor(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub fn executor(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Executor(err.into())
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, IsVariant, PartialEq, ThisError)]
pub enum EmptyPageReason {
    #[error("That page number is less than 1")]
    LessThanOne,
    #[error("That page contains no results")]
    NoResults,
}

fn found_version(version: &Option<ServerVersion>) -> String {
    match version {
        Some(version) => format!(" (found {version})"),
        None => " (server version unknown)".into(),
    }
}
