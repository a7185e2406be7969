use crate::error::ApiError;

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the
    /// provided function, so tests never mutate the global environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, ApiError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let host = get("WELLNESS_API_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = match get("WELLNESS_API_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ApiError::Config(format!("WELLNESS_API_PORT invalid: {raw}")))?,
            None => 8080,
        };
        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
