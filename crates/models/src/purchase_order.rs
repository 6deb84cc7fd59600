use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    buyer, carrier,
    errors::{max_len, require, ModelError},
    order_detail,
    record::{Record, Table},
    warehouse,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "purchase_orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub order_number: String,
    pub order_date: Date,
    pub tracking_code: String,
    pub buyer_id: i32,
    pub carrier_id: i32,
    /// Status code; statuses have no table of their own.
    pub order_status_id: i32,
    pub warehouse_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Buyer,
    Carrier,
    Warehouse,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Buyer => Entity::belongs_to(buyer::Entity)
                .from(Column::BuyerId)
                .to(buyer::Column::Id)
                .into(),
            Relation::Carrier => Entity::belongs_to(carrier::Entity)
                .from(Column::CarrierId)
                .to(carrier::Column::Id)
                .into(),
            Relation::Warehouse => Entity::belongs_to(warehouse::Entity)
                .from(Column::WarehouseId)
                .to(warehouse::Column::Id)
                .into(),
        }
    }
}

impl Related<buyer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Buyer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub order_number: String,
    pub order_date: Date,
    pub tracking_code: String,
    pub buyer_id: i32,
    pub carrier_id: i32,
    pub order_status_id: i32,
    pub warehouse_id: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    pub order_number: Option<String>,
    pub order_date: Option<Date>,
    pub tracking_code: Option<String>,
    pub buyer_id: Option<i32>,
    pub carrier_id: Option<i32>,
    pub order_status_id: Option<i32>,
    pub warehouse_id: Option<i32>,
}

/// Create payload carrying the order header and its detail lines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DraftWithDetails {
    #[serde(flatten)]
    pub order: Draft,
    #[serde(default)]
    pub order_details: Vec<order_detail::Line>,
}

/// A stored order together with the detail rows created with it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WithDetails {
    #[serde(flatten)]
    pub order: Model,
    pub order_details: Vec<order_detail::Model>,
}

impl Record for Model {
    type Draft = Draft;
    type Patch = Patch;

    const TABLE: Table = Table::PurchaseOrders;

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, d: Draft) -> Self {
        Self {
            id,
            order_number: d.order_number,
            order_date: d.order_date,
            tracking_code: d.tracking_code,
            buyer_id: d.buyer_id,
            carrier_id: d.carrier_id,
            order_status_id: d.order_status_id,
            warehouse_id: d.warehouse_id,
        }
    }

    fn apply(&mut self, p: Patch) {
        if let Some(v) = p.order_number {
            self.order_number = v;
        }
        if let Some(v) = p.order_date {
            self.order_date = v;
        }
        if let Some(v) = p.tracking_code {
            self.tracking_code = v;
        }
        if let Some(v) = p.buyer_id {
            self.buyer_id = v;
        }
        if let Some(v) = p.carrier_id {
            self.carrier_id = v;
        }
        if let Some(v) = p.order_status_id {
            self.order_status_id = v;
        }
        if let Some(v) = p.warehouse_id {
            self.warehouse_id = v;
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        require("order_number", &self.order_number)?;
        max_len("order_number", &self.order_number, 64)?;
        require("tracking_code", &self.tracking_code)?;
        max_len("tracking_code", &self.tracking_code, 128)
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.order_number.clone())
    }

    fn references(&self) -> Vec<(Table, i32)> {
        vec![
            (Table::Buyers, self.buyer_id),
            (Table::Carriers, self.carrier_id),
            (Table::Warehouses, self.warehouse_id),
        ]
    }
}
