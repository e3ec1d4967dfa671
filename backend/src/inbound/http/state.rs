//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see domain ports, so
//! they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AcronymsCommand, AcronymsQuery, FixtureAcronymsCommand, FixtureAcronymsQuery,
    FixtureTokenAuthenticator, TokenAuthenticator,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub acronyms: Arc<dyn AcronymsQuery>,
    pub acronyms_command: Arc<dyn AcronymsCommand>,
    pub authenticator: Arc<dyn TokenAuthenticator>,
}

impl HttpState {
    pub fn new(
        acronyms: Arc<dyn AcronymsQuery>,
        acronyms_command: Arc<dyn AcronymsCommand>,
        authenticator: Arc<dyn TokenAuthenticator>,
    ) -> Self {
        Self {
            acronyms,
            acronyms_command,
            authenticator,
        }
    }

    /// State backed entirely by fixture ports.
    pub fn fixtures(authenticator: FixtureTokenAuthenticator) -> Self {
        Self::new(
            Arc::new(FixtureAcronymsQuery),
            Arc::new(FixtureAcronymsCommand),
            Arc::new(authenticator),
        )
    }
}
