use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Session token configuration (secret, lifetime).
    pub jwt: JwtConfig,
    /// Admin account created at startup when it does not exist yet.
    pub admin_seed: Option<AdminSeed>,
}

/// Credentials for the bootstrap admin account.
#[derive(Clone)]
pub struct AdminSeed {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for AdminSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSeed")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `ADMIN_USERNAME`       | unset (no bootstrap admin) |
    /// | `ADMIN_PASSWORD`       | unset (no bootstrap admin) |
    ///
    /// See [`JwtConfig::from_env`] for the token settings.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_cors_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let admin_seed = admin_seed_from(
            std::env::var("ADMIN_USERNAME").ok(),
            std::env::var("ADMIN_PASSWORD").ok(),
        );

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            admin_seed,
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_cors_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Both variables must be present and non-empty for seeding to happen.
fn admin_seed_from(username: Option<String>, password: Option<String>) -> Option<AdminSeed> {
    let username = username.filter(|u| !u.trim().is_empty())?;
    let password = password.filter(|p| !p.is_empty())?;
    Some(AdminSeed {
        username: username.trim().to_string(),
        password,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_origins_are_trimmed_and_blanks_dropped() {
        let origins = parse_cors_origins(" http://a.test , ,http://b.test,");
        assert_eq!(origins, ["http://a.test", "http://b.test"]);
    }

    #[test]
    fn admin_seed_needs_both_values() {
        assert!(admin_seed_from(Some("admin".into()), None).is_none());
        assert!(admin_seed_from(None, Some("secret".into())).is_none());
        assert!(admin_seed_from(Some("  ".into()), Some("secret".into())).is_none());

        let seed = admin_seed_from(Some(" admin ".into()), Some("secret".into()))
            .expect("both values present");
        assert_eq!(seed.username, "admin");
        assert_eq!(seed.password, "secret");
    }

    #[test]
    fn admin_seed_debug_hides_password() {
        let seed = AdminSeed {
            username: "admin".into(),
            password: "hunter22".into(),
        };
        let rendered = format!("{seed:?}");
        assert!(!rendered.contains("hunter22"));
    }
}
