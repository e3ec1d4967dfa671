//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `ACRONYMS_*` environment variables, or a
//! configuration file, in OrthoConfig's usual precedence.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use acronyms_backend::domain::{AccessPolicy, AccessToken, AccessTokenValidationError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ACRONYMS")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// PostgreSQL URL. Without it the server runs on fixture ports.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Restrict update, delete, and attach to the acronym's owner.
    #[ortho_config(default = false)]
    pub require_ownership: bool,
    /// Bearer token accepted in fixture mode.
    pub fixture_token: Option<String>,
}

impl ServerSettings {
    pub fn bind_addr(&self) -> (String, u16) {
        (
            self.host.clone().unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    pub fn access_policy(&self) -> AccessPolicy {
        if self.require_ownership {
            AccessPolicy::OwnerOnly
        } else {
            AccessPolicy::OpenAccess
        }
    }

    pub fn fixture_token(&self) -> Result<Option<AccessToken>, AccessTokenValidationError> {
        self.fixture_token
            .as_deref()
            .map(AccessToken::new)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 6] = [
        "ACRONYMS_HOST",
        "ACRONYMS_PORT",
        "ACRONYMS_DATABASE_URL",
        "ACRONYMS_POOL_MAX_SIZE",
        "ACRONYMS_REQUIRE_OWNERSHIP",
        "ACRONYMS_FIXTURE_TOKEN",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("acronyms-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), ("0.0.0.0".to_owned(), 8080));
        assert_eq!(settings.pool_max_size(), 10);
        assert_eq!(settings.access_policy(), AccessPolicy::OpenAccess);
        assert!(settings.database_url.is_none());
        assert_eq!(settings.fixture_token(), Ok(None));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("ACRONYMS_HOST", Some("127.0.0.1".to_owned())),
            ("ACRONYMS_PORT", Some("9090".to_owned())),
            (
                "ACRONYMS_DATABASE_URL",
                Some("postgres://localhost/acronyms".to_owned()),
            ),
            ("ACRONYMS_POOL_MAX_SIZE", Some("4".to_owned())),
            ("ACRONYMS_REQUIRE_OWNERSHIP", Some("true".to_owned())),
            ("ACRONYMS_FIXTURE_TOKEN", Some("dev-token".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), ("127.0.0.1".to_owned(), 9090));
        assert_eq!(settings.pool_max_size(), 4);
        assert_eq!(settings.access_policy(), AccessPolicy::OwnerOnly);
        assert_eq!(
            settings.database_url.as_deref(),
            Some("postgres://localhost/acronyms")
        );
        let token = settings.fixture_token().expect("valid token").expect("token set");
        assert_eq!(token.expose(), "dev-token");
    }

    #[rstest]
    fn blank_fixture_token_is_rejected() {
        let _guard = lock_env([("ACRONYMS_FIXTURE_TOKEN", Some("   ".to_owned()))]);
        let settings = load_from_empty_args();
        assert_eq!(
            settings.fixture_token(),
            Err(AccessTokenValidationError::Empty)
        );
    }
}
