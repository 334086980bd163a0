pub mod bids;
pub mod opportunities;
pub mod suppliers;

use actix_web::HttpResponse;
use bigdecimal::BigDecimal;
use serde::Deserialize;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::errors::AppError;

/// GET /health
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// ── Pagination ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct PageParams {
    /// Page number (1-based). Defaults to 1.
    #[serde(default = "default_page")]
    pub page: i64,
    /// Number of items per page. Defaults to 20, maximum 100.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl PageParams {
    pub fn clamped(&self) -> (i64, i64) {
        (self.page.max(1), self.limit.clamp(1, 100))
    }
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    20
}

/// Decimal fields travel as strings to avoid floating-point issues.
pub(crate) fn parse_decimal(value: &str, field: &str) -> Result<BigDecimal, AppError> {
    BigDecimal::from_str(value)
        .map_err(|e| AppError::BadRequest(format!("Invalid {field} '{value}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_params_clamp_to_bounds() {
        let params = PageParams { page: 0, limit: 500 };
        assert_eq!(params.clamped(), (1, 100));
    }

    #[test]
    fn parse_decimal_rejects_garbage() {
        let err = parse_decimal("twelve", "unit_price").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn parse_decimal_accepts_valid_input() {
        assert_eq!(
            parse_decimal("9.99", "quantity").expect("parse failed"),
            BigDecimal::from_str("9.99").expect("valid decimal")
        );
    }
}
