//! Server configuration loaded from environment variables.

use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origin allowed to call the API from a browser (the invoice form).
    pub frontend_url: String,
}

impl ServerConfig {
    /// Read `HOST`, `PORT` and `FRONTEND_URL` from the environment, falling
    /// back to defaults. A `.env` file is honored when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("PORT") {
            Ok(value) => value.parse().unwrap_or_else(|_| {
                log::warn!("PORT '{value}' is not a valid port, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };
        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string());

        Self {
            host,
            port,
            frontend_url,
        }
    }
}
