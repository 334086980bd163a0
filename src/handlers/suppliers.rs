use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::AppError;
use crate::repository::{ProcurementRepository, RegisterSupplier, SupplierView};

use super::PageParams;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterSupplierRequest {
    pub legal_name: String,
    pub region_code: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterSupplierResponse {
    pub id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SupplierResponse {
    pub id: Uuid,
    pub legal_name: String,
    pub region_code: String,
    pub qualified: bool,
}

impl From<SupplierView> for SupplierResponse {
    fn from(view: SupplierView) -> Self {
        Self {
            id: view.id,
            legal_name: view.legal_name,
            region_code: view.region_code,
            qualified: view.qualified,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListSuppliersResponse {
    pub items: Vec<SupplierResponse>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /suppliers
///
/// Registers a supplier. The supplier row and its `SupplierRegistered`
/// outbox row are written in a single database transaction.
#[utoipa::path(
    post,
    path = "/suppliers",
    request_body = RegisterSupplierRequest,
    responses(
        (status = 201, description = "Supplier registered", body = RegisterSupplierResponse),
        (status = 400, description = "Validation failed"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "suppliers"
)]
pub async fn register_supplier(
    repo: web::Data<ProcurementRepository>,
    body: web::Json<RegisterSupplierRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();

    let repo = repo.into_inner();
    let id = web::block(move || {
        repo.register_supplier(RegisterSupplier {
            legal_name: body.legal_name,
            region_code: body.region_code,
        })
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(RegisterSupplierResponse { id }))
}

/// POST /suppliers/{id}/qualify
///
/// Marks the supplier as qualified to bid. Qualifying twice succeeds
/// without emitting another event.
#[utoipa::path(
    post,
    path = "/suppliers/{id}/qualify",
    params(
        ("id" = Uuid, Path, description = "Supplier UUID"),
    ),
    responses(
        (status = 204, description = "Supplier qualified"),
        (status = 404, description = "Supplier not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "suppliers"
)]
pub async fn qualify_supplier(
    repo: web::Data<ProcurementRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let repo = repo.into_inner();
    web::block(move || repo.qualify_supplier(id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::NoContent().finish())
}

/// GET /suppliers
#[utoipa::path(
    get,
    path = "/suppliers",
    params(
        ("page" = Option<i64>, Query, description = "Page number (1-based, default 1)"),
        ("limit" = Option<i64>, Query, description = "Items per page (default 20, max 100)"),
    ),
    responses(
        (status = 200, description = "Paginated list of suppliers", body = ListSuppliersResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "suppliers"
)]
pub async fn list_suppliers(
    repo: web::Data<ProcurementRepository>,
    query: web::Query<PageParams>,
) -> Result<HttpResponse, AppError> {
    let (page, limit) = query.clamped();

    let repo = repo.into_inner();
    let result = web::block(move || repo.list_suppliers(page, limit))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(ListSuppliersResponse {
        items: result.items.into_iter().map(SupplierResponse::from).collect(),
        total: result.total,
        page,
        limit,
    }))
}
