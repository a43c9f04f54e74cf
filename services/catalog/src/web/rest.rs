//! services/catalog/src/web/rest.rs
//!
//! Axum handlers for the catalog (category) REST API and its OpenAPI definition.

use crate::web::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Json},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use storefront_core::domain::{Category, CategoryUpdate, NewCategory};
use storefront_http::{ErrorResponse, HttpError};
use utoipa::{IntoParams, OpenApi, ToSchema};

pub const HEALTH_MESSAGE: &str = "Catalog Service is healthy!";

#[derive(OpenApi)]
#[openapi(
    paths(
        list_categories_handler,
        get_category_handler,
        create_category_handler,
        update_category_handler,
        delete_category_handler,
        search_categories_handler,
        health_handler,
    ),
    components(schemas(
        CategoryResponse,
        CreateCategoryRequest,
        UpdateCategoryRequest,
        ErrorResponse
    )),
    tags((name = "Catalog API", description = "Product categories held in memory."))
)]
pub struct ApiDoc;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            image_url: c.image_url,
            is_active: c.is_active,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// New categories always start active, whatever the client sends.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

impl From<CreateCategoryRequest> for NewCategory {
    fn from(req: CreateCategoryRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            image_url: req.image_url,
        }
    }
}

/// Full replacement of a category's editable fields. An omitted `isActive`
/// reads as `false`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub is_active: bool,
}

impl From<UpdateCategoryRequest> for CategoryUpdate {
    fn from(req: UpdateCategoryRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            image_url: req.image_url,
            is_active: req.is_active,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Substring matched case-insensitively against name and description.
    pub query: String,
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

#[utoipa::path(
    get,
    path = "/api/catalog",
    responses((status = 200, description = "Active categories", body = [CategoryResponse]))
)]
pub async fn list_categories_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<CategoryResponse>>, HttpError> {
    let categories = app_state.categories.list_active_categories().await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/catalog/{id}",
    responses(
        (status = 200, description = "The category", body = CategoryResponse),
        (status = 404, description = "Category missing or inactive", body = ErrorResponse)
    ),
    params(("id" = i32, Path, description = "Category id."))
)]
pub async fn get_category_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<CategoryResponse>, HttpError> {
    let category = app_state.categories.get_active_category(id).await?;
    Ok(Json(category.into()))
}

#[utoipa::path(
    post,
    path = "/api/catalog",
    request_body = CreateCategoryRequest,
    responses((status = 201, description = "Category created", body = CategoryResponse))
)]
pub async fn create_category_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let category = app_state.categories.create_category(req.into()).await?;
    let location = format!("/api/catalog/{}", category.id);
    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(CategoryResponse::from(category)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/catalog/{id}",
    request_body = UpdateCategoryRequest,
    responses(
        (status = 204, description = "Category updated"),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    params(("id" = i32, Path, description = "Category id."))
)]
pub async fn update_category_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateCategoryRequest>,
) -> Result<StatusCode, HttpError> {
    app_state.categories.update_category(id, req.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Soft-deletes a category by marking it inactive.
#[utoipa::path(
    delete,
    path = "/api/catalog/{id}",
    responses(
        (status = 204, description = "Category deactivated"),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    params(("id" = i32, Path, description = "Category id."))
)]
pub async fn delete_category_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, HttpError> {
    app_state.categories.deactivate_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/catalog/search",
    params(SearchParams),
    responses((status = 200, description = "Matching active categories", body = [CategoryResponse]))
)]
pub async fn search_categories_handler(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<CategoryResponse>>, HttpError> {
    let categories = app_state.categories.search_categories(&params.query).await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/catalog/health",
    responses((status = 200, description = "Service is up", body = String))
)]
pub async fn health_handler() -> &'static str {
    HEALTH_MESSAGE
}
