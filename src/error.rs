use std::fmt;

#[derive(Debug)]
pub enum ChartError {
    /// Transport or HTTP status failure talking to the catalog or search API.
    Network(reqwest::Error),
    /// An attribute name that is not in the registry.
    UnknownAttribute(String),
    /// The catalog has no tracks stored for this artist yet.
    ArtistNotLoaded(String),
    /// A fetch finished after a newer artist selection and was discarded.
    Superseded { artist_id: String },
    /// An attribute switch was requested before any artist was loaded.
    NoSession,
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::Network(e) => write!(f, "catalog request failed: {}", e),
            ChartError::UnknownAttribute(name) => write!(f, "unknown attribute '{}'", name),
            ChartError::ArtistNotLoaded(id) => write!(f, "artist {} is not loaded", id),
            ChartError::Superseded { artist_id } => {
                write!(f, "result for artist {} was superseded", artist_id)
            }
            ChartError::NoSession => write!(f, "no artist selected"),
        }
    }
}

impl std::error::Error for ChartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChartError::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ChartError {
    fn from(err: reqwest::Error) -> Self {
        ChartError::Network(err)
    }
}
