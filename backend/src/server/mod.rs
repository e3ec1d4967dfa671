//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerSettings;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::{App, HttpServer, web};
use tracing::info;

use acronyms_backend::Trace;
#[cfg(debug_assertions)]
use acronyms_backend::doc::ApiDoc;
use acronyms_backend::inbound::http::acronyms;
use acronyms_backend::inbound::http::state::HttpState;
use acronyms_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use state_builders::build_http_state;

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .wrap(NormalizePath::new(TrailingSlash::Trim))
        .wrap(Trace)
        .service(acronyms::scope());

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Connect to PostgreSQL and apply migrations when a database is configured.
async fn connect_database(settings: &ServerSettings) -> std::io::Result<Option<DbPool>> {
    let Some(url) = settings.database_url.as_deref() else {
        return Ok(None);
    };
    run_pending_migrations(url)
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.pool_max_size()))
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    Ok(Some(pool))
}

/// Build and bind the HTTP server.
///
/// # Errors
/// Propagates database setup failures and socket binding errors.
pub async fn create_server(settings: ServerSettings) -> std::io::Result<Server> {
    let pool = connect_database(&settings).await?;
    let http_state = web::Data::new(build_http_state(&settings, pool.as_ref())?);
    let bind_addr = settings.bind_addr();

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr.clone())?
        .run();
    info!(host = %bind_addr.0, port = bind_addr.1, "acronyms server listening");
    Ok(server)
}
