use crate::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BASE_URL: &str = "http://localhost:3000/";
const DEFAULT_STORAGE_PATH: &str = "STORAGE";
const DEFAULT_JWT_EXPIRES_IN_SECS: i64 = 7 * 24 * 3600;

pub struct Config {
    pub database_url: String,
    pub port: u16,

    pub jwt_secret: String,
    pub jwt_expires_in_secs: i64,

    /// Public base URL used when generating file links. Always ends with '/'.
    pub public_url: String,
    /// On-disk directory for uploaded files.
    pub storage_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let port = match std::env::var("PORT") {
            Ok(value) => value.parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                reason: e.to_string(),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let jwt_secret = std::env::var("JWT_SECRET_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET_KEY".to_string()))?;

        let jwt_expires_in_secs = match std::env::var("JWT_EXPIRES_IN_SECS") {
            Ok(value) => value.parse::<i64>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "JWT_EXPIRES_IN_SECS".to_string(),
                reason: e.to_string(),
            })?,
            Err(_) => DEFAULT_JWT_EXPIRES_IN_SECS,
        };

        let mut public_url =
            std::env::var("BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        url::Url::parse(&public_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "BASE_URL".to_string(),
            reason: e.to_string(),
        })?;
        if !public_url.ends_with('/') {
            public_url.push('/');
        }

        let storage_path =
            std::env::var("STORAGE_PATH").unwrap_or_else(|_| DEFAULT_STORAGE_PATH.to_string());

        Ok(Self {
            database_url,
            port,
            jwt_secret,
            jwt_expires_in_secs,
            public_url,
            storage_path,
        })
    }
}
