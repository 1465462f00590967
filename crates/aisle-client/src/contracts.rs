use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Products,
    Recommendations,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Self::Products => "/products",
            Self::Recommendations => "/recommendations",
        }
    }

    pub fn method(self) -> &'static str {
        match self {
            Self::Products => "GET",
            Self::Recommendations => "POST",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

/// Everything that can go wrong talking to the service. All variants are
/// collapsed to an empty result at the boundary functions in `api`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{endpoint}: transport failure: {source}")]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint}: service answered {status}")]
    Status {
        endpoint: Endpoint,
        status: reqwest::StatusCode,
    },
    #[error("{endpoint}: unexpected response body: {source}")]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Transport { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Decode { endpoint, .. } => *endpoint,
        }
    }
}
