use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::AppError;
use crate::repository::{CreateOpportunity, OpportunityView, ProcurementRepository};

use super::{parse_decimal, PageParams};

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOpportunityRequest {
    pub title: String,
    pub product_category: String,
    /// Decimal quantity as a string to avoid floating-point issues, e.g. "500"
    pub quantity: String,
    pub deadline_at: DateTime<Utc>,
    pub region_code: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateOpportunityResponse {
    pub id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OpportunityResponse {
    pub id: Uuid,
    pub title: String,
    pub product_category: String,
    pub quantity: String,
    pub deadline_at: String,
    pub region_code: String,
    pub status: String,
    pub created_at: String,
}

impl From<OpportunityView> for OpportunityResponse {
    fn from(view: OpportunityView) -> Self {
        Self {
            id: view.id,
            title: view.title,
            product_category: view.product_category,
            quantity: view.quantity.to_string(),
            deadline_at: view.deadline_at.to_rfc3339(),
            region_code: view.region_code,
            status: view.status,
            created_at: view.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListOpportunitiesResponse {
    pub items: Vec<OpportunityResponse>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /opportunities
///
/// Posts a new procurement opportunity. The opportunity row and its
/// `OpportunityCreated` outbox row are written in a single database
/// transaction.
#[utoipa::path(
    post,
    path = "/opportunities",
    request_body = CreateOpportunityRequest,
    responses(
        (status = 201, description = "Opportunity created", body = CreateOpportunityResponse),
        (status = 400, description = "Validation failed"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "opportunities"
)]
pub async fn create_opportunity(
    repo: web::Data<ProcurementRepository>,
    body: web::Json<CreateOpportunityRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let quantity = parse_decimal(&body.quantity, "quantity")?;

    let repo = repo.into_inner();
    let id = web::block(move || {
        repo.create_opportunity(CreateOpportunity {
            title: body.title,
            product_category: body.product_category,
            quantity,
            deadline_at: body.deadline_at,
            region_code: body.region_code,
        })
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(CreateOpportunityResponse { id }))
}

/// GET /opportunities/{id}
#[utoipa::path(
    get,
    path = "/opportunities/{id}",
    params(
        ("id" = Uuid, Path, description = "Opportunity UUID"),
    ),
    responses(
        (status = 200, description = "Opportunity found", body = OpportunityResponse),
        (status = 404, description = "Opportunity not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "opportunities"
)]
pub async fn get_opportunity(
    repo: web::Data<ProcurementRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let repo = repo.into_inner();
    let result = web::block(move || repo.get_opportunity(id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    match result {
        Some(view) => Ok(HttpResponse::Ok().json(OpportunityResponse::from(view))),
        None => Err(AppError::NotFound),
    }
}

/// GET /opportunities
///
/// Paginated list, soonest deadline last.
#[utoipa::path(
    get,
    path = "/opportunities",
    params(
        ("page" = Option<i64>, Query, description = "Page number (1-based, default 1)"),
        ("limit" = Option<i64>, Query, description = "Items per page (default 20, max 100)"),
    ),
    responses(
        (status = 200, description = "Paginated list of opportunities", body = ListOpportunitiesResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "opportunities"
)]
pub async fn list_opportunities(
    repo: web::Data<ProcurementRepository>,
    query: web::Query<PageParams>,
) -> Result<HttpResponse, AppError> {
    let (page, limit) = query.clamped();

    let repo = repo.into_inner();
    let result = web::block(move || repo.list_opportunities(page, limit))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(ListOpportunitiesResponse {
        items: result.items.into_iter().map(OpportunityResponse::from).collect(),
        total: result.total,
        page,
        limit,
    }))
}

/// POST /opportunities/{id}/close
///
/// Closes the opportunity. Closing an already-closed opportunity succeeds
/// without emitting another event.
#[utoipa::path(
    post,
    path = "/opportunities/{id}/close",
    params(
        ("id" = Uuid, Path, description = "Opportunity UUID"),
    ),
    responses(
        (status = 204, description = "Opportunity closed"),
        (status = 404, description = "Opportunity not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "opportunities"
)]
pub async fn close_opportunity(
    repo: web::Data<ProcurementRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let repo = repo.into_inner();
    web::block(move || repo.close_opportunity(id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::NoContent().finish())
}
