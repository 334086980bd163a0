use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::AppError;
use crate::repository::{BidView, ProcurementRepository, SubmitBid};

use super::{parse_decimal, PageParams};

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitBidRequest {
    pub opportunity_id: Uuid,
    pub supplier_id: Uuid,
    /// Decimal price as a string to avoid floating-point issues, e.g. "9.99"
    pub unit_price: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitBidResponse {
    pub id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BidResponse {
    pub id: Uuid,
    pub opportunity_id: Uuid,
    pub supplier_id: Uuid,
    pub unit_price: String,
    pub submitted_at: String,
}

impl From<BidView> for BidResponse {
    fn from(view: BidView) -> Self {
        Self {
            id: view.id,
            opportunity_id: view.opportunity_id,
            supplier_id: view.supplier_id,
            unit_price: view.unit_price.to_string(),
            submitted_at: view.submitted_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListBidsResponse {
    pub items: Vec<BidResponse>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /bids
///
/// Submits a bid. The opportunity must be open with a future deadline and
/// the supplier must be qualified; violations return 409 and leave no trace
/// in the store. The bid row and its `BidSubmitted` outbox row are written
/// in a single database transaction.
#[utoipa::path(
    post,
    path = "/bids",
    request_body = SubmitBidRequest,
    responses(
        (status = 201, description = "Bid submitted", body = SubmitBidResponse),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Opportunity or supplier not found"),
        (status = 409, description = "Opportunity closed, deadline passed, or supplier not qualified"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "bids"
)]
pub async fn submit_bid(
    repo: web::Data<ProcurementRepository>,
    body: web::Json<SubmitBidRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let unit_price = parse_decimal(&body.unit_price, "unit_price")?;

    let repo = repo.into_inner();
    let id = web::block(move || {
        repo.submit_bid(SubmitBid {
            opportunity_id: body.opportunity_id,
            supplier_id: body.supplier_id,
            unit_price,
        })
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(SubmitBidResponse { id }))
}

/// GET /bids/by-opportunity/{opportunity_id}
#[utoipa::path(
    get,
    path = "/bids/by-opportunity/{opportunity_id}",
    params(
        ("opportunity_id" = Uuid, Path, description = "Opportunity UUID"),
        ("page" = Option<i64>, Query, description = "Page number (1-based, default 1)"),
        ("limit" = Option<i64>, Query, description = "Items per page (default 20, max 100)"),
    ),
    responses(
        (status = 200, description = "Paginated list of bids for the opportunity", body = ListBidsResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "bids"
)]
pub async fn list_bids_by_opportunity(
    repo: web::Data<ProcurementRepository>,
    path: web::Path<Uuid>,
    query: web::Query<PageParams>,
) -> Result<HttpResponse, AppError> {
    let opportunity_id = path.into_inner();
    let (page, limit) = query.clamped();

    let repo = repo.into_inner();
    let result = web::block(move || repo.list_bids_by_opportunity(opportunity_id, page, limit))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(ListBidsResponse {
        items: result.items.into_iter().map(BidResponse::from).collect(),
        total: result.total,
        page,
        limit,
    }))
}
