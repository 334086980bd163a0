use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::opportunity::{Opportunity, OpportunityStatus};
use crate::domain::supplier::Supplier;
use crate::schema::{bids, opportunities, suppliers};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = opportunities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OpportunityRow {
    pub id: Uuid,
    pub title: String,
    pub product_category: String,
    pub quantity: BigDecimal,
    pub deadline_at: DateTime<Utc>,
    pub region_code: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OpportunityRow {
    pub fn into_entity(self) -> Result<Opportunity, DomainError> {
        let status = OpportunityStatus::parse(&self.status)?;
        Ok(Opportunity::from_parts(
            self.id,
            self.title,
            self.product_category,
            self.quantity,
            self.deadline_at,
            self.region_code,
            status,
        ))
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = opportunities)]
pub struct NewOpportunityRow {
    pub id: Uuid,
    pub title: String,
    pub product_category: String,
    pub quantity: BigDecimal,
    pub deadline_at: DateTime<Utc>,
    pub region_code: String,
    pub status: String,
}

impl From<&Opportunity> for NewOpportunityRow {
    fn from(opp: &Opportunity) -> Self {
        Self {
            id: opp.id,
            title: opp.title.clone(),
            product_category: opp.product_category.clone(),
            quantity: opp.quantity.clone(),
            deadline_at: opp.deadline_at,
            region_code: opp.region_code.clone(),
            status: opp.status.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = suppliers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SupplierRow {
    pub id: Uuid,
    pub legal_name: String,
    pub region_code: String,
    pub qualified: bool,
    pub created_at: DateTime<Utc>,
}

impl SupplierRow {
    pub fn into_entity(self) -> Supplier {
        Supplier::from_parts(self.id, self.legal_name, self.region_code, self.qualified)
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = suppliers)]
pub struct NewSupplierRow {
    pub id: Uuid,
    pub legal_name: String,
    pub region_code: String,
    pub qualified: bool,
}

impl From<&Supplier> for NewSupplierRow {
    fn from(supplier: &Supplier) -> Self {
        Self {
            id: supplier.id,
            legal_name: supplier.legal_name.clone(),
            region_code: supplier.region_code.clone(),
            qualified: supplier.qualified,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = bids)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BidRow {
    pub id: Uuid,
    pub opportunity_id: Uuid,
    pub supplier_id: Uuid,
    pub unit_price: BigDecimal,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = bids)]
pub struct NewBidRow {
    pub id: Uuid,
    pub opportunity_id: Uuid,
    pub supplier_id: Uuid,
    pub unit_price: BigDecimal,
}
