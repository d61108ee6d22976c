//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use tempo_domain::TempoError;

/// Error newtype that keeps conversions on the infrastructure side and can
/// be converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub TempoError);

impl From<InfraError> for TempoError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<TempoError> for InfraError {
    fn from(value: TempoError) -> Self {
        InfraError(value)
    }
}

impl From<HttpError> for InfraError {
    fn from(err: HttpError) -> Self {
        let tempo = if err.is_timeout() {
            TempoError::Network(format!("request timed out: {err}"))
        } else if err.is_connect() {
            TempoError::Network(format!("connection failed: {err}"))
        } else if err.is_decode() {
            TempoError::Store(format!("malformed response body: {err}"))
        } else if let Some(status) = err.status() {
            TempoError::Store(format!("remote store returned {status}: {err}"))
        } else {
            TempoError::Network(err.to_string())
        };
        InfraError(tempo)
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(err: serde_json::Error) -> Self {
        InfraError(TempoError::Store(format!("failed to decode store payload: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_maps_to_store() {
        let err = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let infra: InfraError = err.into();
        assert!(matches!(infra.0, TempoError::Store(_)));
    }

    #[test]
    fn test_round_trip_through_domain_error() {
        let original = TempoError::Network("offline".into());
        let infra: InfraError = original.clone().into();
        let back: TempoError = infra.into();
        assert_eq!(back.to_string(), original.to_string());
    }
}
