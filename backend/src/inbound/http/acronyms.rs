//! Acronym HTTP handlers.
//!
//! ```text
//! GET    /api/acronyms
//! GET    /api/acronyms/search?term=
//! GET    /api/acronyms/{id}
//! GET    /api/acronyms/{id}/user
//! GET    /api/acronyms/{id}/categories
//! POST   /api/acronyms                                  (bearer)
//! PUT    /api/acronyms/{id}                             (bearer)
//! DELETE /api/acronyms/{id}                             (bearer)
//! POST   /api/acronyms/{id}/categories/{category_id}    (bearer)
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{
    AttachCategoryRequest, CreateAcronymRequest, DeleteAcronymRequest, UpdateAcronymRequest,
};
use crate::domain::{Acronym, AcronymContent, Category, PublicUser};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::AuthenticatedUser;
use crate::inbound::http::error::{json_config, query_config};
use crate::inbound::http::schemas::{
    AcronymSchema, CategorySchema, ErrorSchema, PublicUserSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, missing_field_error, parse_acronym_id, parse_category_id,
};

/// Body accepted by create and update: exactly `short` and `long`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AcronymRequestBody {
    #[schema(example = "OMG")]
    pub short: String,
    #[schema(example = "Oh My God")]
    pub long: String,
}

impl From<AcronymRequestBody> for AcronymContent {
    fn from(body: AcronymRequestBody) -> Self {
        Self {
            short: body.short,
            long: body.long,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Matched exactly against both the short form and the expansion.
    pub term: Option<String>,
}

/// Every acronym, unpaginated.
#[utoipa::path(
    get,
    path = "/api/acronyms",
    responses(
        (status = 200, description = "All acronyms", body = [AcronymSchema]),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["acronyms"],
    operation_id = "listAcronyms",
    security(())
)]
#[get("")]
pub async fn list_acronyms(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Acronym>>> {
    let acronyms = state.acronyms.list_acronyms().await?;
    Ok(web::Json(acronyms))
}

/// Acronyms whose short form or expansion equals `term`.
#[utoipa::path(
    get,
    path = "/api/acronyms/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching acronyms", body = [AcronymSchema]),
        (status = 400, description = "Missing term", body = ErrorSchema)
    ),
    tags = ["acronyms"],
    operation_id = "searchAcronyms",
    security(())
)]
#[get("/search")]
pub async fn search_acronyms(
    state: web::Data<HttpState>,
    params: web::Query<SearchParams>,
) -> ApiResult<web::Json<Vec<Acronym>>> {
    let term = params
        .into_inner()
        .term
        .ok_or_else(|| missing_field_error(FieldName::new("term")))?;
    let acronyms = state.acronyms.search(&term).await?;
    Ok(web::Json(acronyms))
}

#[utoipa::path(
    get,
    path = "/api/acronyms/{id}",
    params(("id" = uuid::Uuid, Path, description = "Acronym identifier")),
    responses(
        (status = 200, description = "The acronym", body = AcronymSchema),
        (status = 404, description = "Unknown acronym", body = ErrorSchema)
    ),
    tags = ["acronyms"],
    operation_id = "getAcronym",
    security(())
)]
#[get("/{id}")]
pub async fn get_acronym(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Acronym>> {
    let id = parse_acronym_id(&path)?;
    let acronym = state.acronyms.get_acronym(&id).await?;
    Ok(web::Json(acronym))
}

/// Public projection of the acronym's owner.
#[utoipa::path(
    get,
    path = "/api/acronyms/{id}/user",
    params(("id" = uuid::Uuid, Path, description = "Acronym identifier")),
    responses(
        (status = 200, description = "Owner of the acronym", body = PublicUserSchema),
        (status = 404, description = "Unknown acronym or owner", body = ErrorSchema)
    ),
    tags = ["acronyms"],
    operation_id = "getAcronymUser",
    security(())
)]
#[get("/{id}/user")]
pub async fn get_acronym_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<PublicUser>> {
    let id = parse_acronym_id(&path)?;
    let owner = state.acronyms.get_owner(&id).await?;
    Ok(web::Json(owner))
}

#[utoipa::path(
    get,
    path = "/api/acronyms/{id}/categories",
    params(("id" = uuid::Uuid, Path, description = "Acronym identifier")),
    responses(
        (status = 200, description = "Linked categories", body = [CategorySchema]),
        (status = 404, description = "Unknown acronym", body = ErrorSchema)
    ),
    tags = ["acronyms"],
    operation_id = "getAcronymCategories",
    security(())
)]
#[get("/{id}/categories")]
pub async fn get_acronym_categories(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Category>>> {
    let id = parse_acronym_id(&path)?;
    let categories = state.acronyms.get_categories(&id).await?;
    Ok(web::Json(categories))
}

/// Create an acronym owned by the caller.
#[utoipa::path(
    post,
    path = "/api/acronyms",
    request_body = AcronymRequestBody,
    responses(
        (status = 200, description = "Stored acronym", body = AcronymSchema),
        (status = 400, description = "Invalid body", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema)
    ),
    tags = ["acronyms"],
    operation_id = "createAcronym",
    security(("BearerToken" = []))
)]
#[post("")]
pub async fn create_acronym(
    state: web::Data<HttpState>,
    caller: AuthenticatedUser,
    payload: web::Json<AcronymRequestBody>,
) -> ApiResult<web::Json<Acronym>> {
    let acronym = state
        .acronyms_command
        .create_acronym(CreateAcronymRequest {
            caller: caller.id(),
            content: payload.into_inner().into(),
        })
        .await?;
    Ok(web::Json(acronym))
}

/// Overwrite an acronym. Ownership moves to the caller.
#[utoipa::path(
    put,
    path = "/api/acronyms/{id}",
    params(("id" = uuid::Uuid, Path, description = "Acronym identifier")),
    request_body = AcronymRequestBody,
    responses(
        (status = 200, description = "Updated acronym", body = AcronymSchema),
        (status = 400, description = "Invalid body", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 403, description = "Caller does not own the acronym", body = ErrorSchema),
        (status = 404, description = "Unknown acronym", body = ErrorSchema)
    ),
    tags = ["acronyms"],
    operation_id = "updateAcronym",
    security(("BearerToken" = []))
)]
#[put("/{id}")]
pub async fn update_acronym(
    state: web::Data<HttpState>,
    caller: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<AcronymRequestBody>,
) -> ApiResult<web::Json<Acronym>> {
    let acronym_id = parse_acronym_id(&path)?;
    let acronym = state
        .acronyms_command
        .update_acronym(UpdateAcronymRequest {
            acronym_id,
            caller: caller.id(),
            content: payload.into_inner().into(),
        })
        .await?;
    Ok(web::Json(acronym))
}

#[utoipa::path(
    delete,
    path = "/api/acronyms/{id}",
    params(("id" = uuid::Uuid, Path, description = "Acronym identifier")),
    responses(
        (status = 204, description = "Acronym deleted"),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 403, description = "Caller does not own the acronym", body = ErrorSchema),
        (status = 404, description = "Unknown acronym", body = ErrorSchema)
    ),
    tags = ["acronyms"],
    operation_id = "deleteAcronym",
    security(("BearerToken" = []))
)]
#[delete("/{id}")]
pub async fn delete_acronym(
    state: web::Data<HttpState>,
    caller: AuthenticatedUser,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let acronym_id = parse_acronym_id(&path)?;
    state
        .acronyms_command
        .delete_acronym(DeleteAcronymRequest {
            acronym_id,
            caller: caller.id(),
        })
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Link an acronym to a category.
#[utoipa::path(
    post,
    path = "/api/acronyms/{id}/categories/{category_id}",
    params(
        ("id" = uuid::Uuid, Path, description = "Acronym identifier"),
        ("category_id" = uuid::Uuid, Path, description = "Category identifier")
    ),
    responses(
        (status = 201, description = "Category attached"),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 403, description = "Caller does not own the acronym", body = ErrorSchema),
        (status = 404, description = "Unknown acronym or category", body = ErrorSchema)
    ),
    tags = ["acronyms"],
    operation_id = "attachAcronymCategory",
    security(("BearerToken" = []))
)]
#[post("/{id}/categories/{category_id}")]
pub async fn attach_category(
    state: web::Data<HttpState>,
    caller: AuthenticatedUser,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (raw_acronym_id, raw_category_id) = path.into_inner();
    let acronym_id = parse_acronym_id(&raw_acronym_id)?;
    let category_id = parse_category_id(&raw_category_id)?;
    state
        .acronyms_command
        .attach_category(AttachCategoryRequest {
            acronym_id,
            category_id,
            caller: caller.id(),
        })
        .await?;
    Ok(HttpResponse::Created().finish())
}

/// All acronym routes under `/api/acronyms`.
///
/// `/search` is registered ahead of `/{id}` so it is not captured as an id.
pub fn scope() -> actix_web::Scope {
    web::scope("/api/acronyms")
        .app_data(json_config())
        .app_data(query_config())
        .service(list_acronyms)
        .service(create_acronym)
        .service(search_acronyms)
        .service(get_acronym)
        .service(update_acronym)
        .service(delete_acronym)
        .service(get_acronym_user)
        .service(get_acronym_categories)
        .service(attach_category)
}

#[cfg(test)]
#[path = "acronyms_tests.rs"]
mod tests;
