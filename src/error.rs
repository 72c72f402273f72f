use thiserror::Error;

/// Fallo devuelto por el servicio de generación de texto.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected service payload: {0}")]
    Payload(String),
}

impl ServiceError {
    /// Rate limit o servicio caído: se reintenta con espera creciente.
    pub fn is_transient(&self) -> bool {
        let message = self.to_string();
        message.contains("429")
            || message.contains("503")
            || message.to_ascii_lowercase().contains("unavailable")
    }
}

/// La respuesta llegó pero no contiene una pregunta utilizable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedResponse {
    #[error("no JSON object found in the response")]
    NoJsonObject,
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
    #[error("missing required keys: {0:?}")]
    MissingKeys(Vec<String>),
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("correct label {0:?} is not one of the options")]
    UnknownCorrectLabel(String),
}

/// Resultado de un intento individual.
#[derive(Debug, Error)]
pub enum AttemptError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Malformed(#[from] MalformedResponse),
}

/// Error fatal: la sesión no puede continuar.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("failed to generate a valid question after {attempts} attempts: {last}")]
    Exhausted { attempts: u32, last: String },
    #[error("error getting question from the generation service: {0}")]
    Service(ServiceError),
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
    #[error("no API key configured (set GEMINI_API_KEY or api_key in the settings file)")]
    MissingApiKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_and_unavailable_are_transient() {
        let rate = ServiceError::Status {
            status: 429,
            body: "quota".into(),
        };
        let down = ServiceError::Transport("Service Unavailable".into());
        let bad_key = ServiceError::Status {
            status: 403,
            body: "API key not valid".into(),
        };
        assert!(rate.is_transient());
        assert!(down.is_transient());
        assert!(!bad_key.is_transient());
    }
}
