/*!
Lookup errors.
*/
use crate::Cep;
use thiserror::Error;

pub use reqwest::Error as Http;
pub use serde_json::Error as Json;

/// Why a candidate string is not a CEP.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidCep {
    #[error("CEP is empty")]
    Empty,
    #[error("CEP must have 8 digits, got {0}")]
    Length(usize),
    #[error("CEP must contain only digits, found {0:?}")]
    Character(char),
}

/// Failure of a single CEP lookup.
///
/// Every variant is local to the request that produced it; none of them
/// leaves the client in a bad state.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The input was rejected before any request was made.
    #[error("invalid CEP: {0}")]
    Validation(#[from] InvalidCep),

    /// Connection failure, timeout or non-success status.
    #[error("request failed: {0}")]
    Network(#[from] Http),

    /// The body was not JSON, or not an address object.
    #[error("could not decode ViaCEP response: {0}")]
    Decode(#[from] Json),

    /// ViaCEP answered, but has no address for this code.
    #[error("CEP {} not found", .0.formatted())]
    NotFound(Cep),
}

impl LookupError {
    /// `true` for failures caused by the input rather than by the service.
    pub fn is_user_error(&self) -> bool {
        matches!(self, LookupError::Validation(_) | LookupError::NotFound(_))
    }
}
