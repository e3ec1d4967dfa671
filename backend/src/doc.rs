//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every acronym endpoint, the schema wrappers from
//! [`crate::inbound::http::schemas`], and the bearer token security scheme.
//! Swagger UI serves it at `/docs` in debug builds.

use crate::inbound::http::acronyms::AcronymRequestBody;
use crate::inbound::http::schemas::{
    AcronymSchema, CategorySchema, ErrorCodeSchema, ErrorSchema, PublicUserSchema,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Adds the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some("Opaque token issued by the authentication service."))
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Acronyms API",
        description = "Browse, search, and curate acronyms and their categories."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::acronyms::list_acronyms,
        crate::inbound::http::acronyms::search_acronyms,
        crate::inbound::http::acronyms::get_acronym,
        crate::inbound::http::acronyms::get_acronym_user,
        crate::inbound::http::acronyms::get_acronym_categories,
        crate::inbound::http::acronyms::create_acronym,
        crate::inbound::http::acronyms::update_acronym,
        crate::inbound::http::acronyms::delete_acronym,
        crate::inbound::http::acronyms::attach_category,
    ),
    components(schemas(
        AcronymSchema,
        CategorySchema,
        PublicUserSchema,
        AcronymRequestBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "acronyms", description = "Acronym catalogue operations")
    )
)]
pub struct ApiDoc;
