//! Bearer token extraction.
//!
//! [`AuthenticatedUser`] resolves `Authorization: Bearer <token>` through the
//! [`TokenAuthenticator`](crate::domain::ports::TokenAuthenticator) port held
//! in [`HttpState`]. Handlers that take it as an argument reject anonymous
//! requests with `401` before their body runs.

use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;

use crate::domain::{AccessToken, Error, User, UserId};
use crate::inbound::http::state::HttpState;

const BEARER_SCHEME: &str = "bearer";

/// The caller identified by a valid bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(User);

impl AuthenticatedUser {
    pub fn id(&self) -> UserId {
        self.0.id()
    }
}

/// Parse the bearer token from the request headers.
pub(crate) fn bearer_token(req: &HttpRequest) -> Result<AccessToken, Error> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| Error::unauthorized("missing bearer token"))?;
    let value = header
        .to_str()
        .map_err(|_| Error::unauthorized("authorization header is not valid ASCII"))?;
    let (scheme, token) = value
        .split_once(' ')
        .ok_or_else(|| Error::unauthorized("authorization header must use the Bearer scheme"))?;
    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return Err(Error::unauthorized(
            "authorization header must use the Bearer scheme",
        ));
    }
    AccessToken::new(token.trim())
        .map_err(|err| Error::unauthorized(format!("malformed bearer token: {err}")))
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<HttpState>>().cloned();
        let token = bearer_token(req);
        Box::pin(async move {
            let token = token?;
            let state = state.ok_or_else(|| Error::internal("HTTP state is not configured"))?;
            let user = state.authenticator.authenticate(&token).await?;
            Ok(Self(user))
        })
    }
}
