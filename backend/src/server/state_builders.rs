//! Assemble `HttpState` from settings and an optional database pool.

use std::sync::Arc;

use tracing::{info, warn};

use acronyms_backend::domain::AcronymService;
use acronyms_backend::domain::ports::FixtureTokenAuthenticator;
use acronyms_backend::inbound::http::state::HttpState;
use acronyms_backend::outbound::persistence::{
    DbPool, DieselAcronymRepository, DieselCategoryRepository, DieselTokenAuthenticator,
    DieselUserRepository,
};

use super::config::ServerSettings;

/// Diesel-backed ports when a pool exists, fixture ports otherwise.
pub(crate) fn build_http_state(
    settings: &ServerSettings,
    pool: Option<&DbPool>,
) -> std::io::Result<HttpState> {
    let policy = settings.access_policy();
    match pool {
        Some(pool) => {
            info!(?policy, "serving acronyms from PostgreSQL");
            let service = Arc::new(
                AcronymService::new(
                    Arc::new(DieselAcronymRepository::new(pool.clone())),
                    Arc::new(DieselCategoryRepository::new(pool.clone())),
                    Arc::new(DieselUserRepository::new(pool.clone())),
                )
                .with_policy(policy),
            );
            Ok(HttpState::new(
                service.clone(),
                service,
                Arc::new(DieselTokenAuthenticator::new(pool.clone())),
            ))
        }
        None => {
            let token = settings
                .fixture_token()
                .map_err(|err| std::io::Error::other(format!("invalid fixture token: {err}")))?;
            warn!(
                fixture_token = token.is_some(),
                "no database configured; serving fixture acronyms"
            );
            Ok(HttpState::fixtures(FixtureTokenAuthenticator::new(token)))
        }
    }
}
