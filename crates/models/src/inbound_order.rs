use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    employee,
    errors::{max_len, require, ModelError},
    product_batch,
    record::{Record, Table},
    warehouse,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inbound_orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub order_date: Date,
    #[sea_orm(unique)]
    pub order_number: String,
    pub employee_id: i32,
    pub product_batch_id: i32,
    pub warehouse_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Employee,
    ProductBatch,
    Warehouse,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Employee => Entity::belongs_to(employee::Entity)
                .from(Column::EmployeeId)
                .to(employee::Column::Id)
                .into(),
            Relation::ProductBatch => Entity::belongs_to(product_batch::Entity)
                .from(Column::ProductBatchId)
                .to(product_batch::Column::Id)
                .into(),
            Relation::Warehouse => Entity::belongs_to(warehouse::Entity)
                .from(Column::WarehouseId)
                .to(warehouse::Column::Id)
                .into(),
        }
    }
}

impl Related<employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub order_date: Date,
    pub order_number: String,
    pub employee_id: i32,
    pub product_batch_id: i32,
    pub warehouse_id: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    pub order_date: Option<Date>,
    pub order_number: Option<String>,
    pub employee_id: Option<i32>,
    pub product_batch_id: Option<i32>,
    pub warehouse_id: Option<i32>,
}

impl Record for Model {
    type Draft = Draft;
    type Patch = Patch;

    const TABLE: Table = Table::InboundOrders;

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, d: Draft) -> Self {
        Self {
            id,
            order_date: d.order_date,
            order_number: d.order_number,
            employee_id: d.employee_id,
            product_batch_id: d.product_batch_id,
            warehouse_id: d.warehouse_id,
        }
    }

    fn apply(&mut self, p: Patch) {
        if let Some(v) = p.order_date {
            self.order_date = v;
        }
        if let Some(v) = p.order_number {
            self.order_number = v;
        }
        if let Some(v) = p.employee_id {
            self.employee_id = v;
        }
        if let Some(v) = p.product_batch_id {
            self.product_batch_id = v;
        }
        if let Some(v) = p.warehouse_id {
            self.warehouse_id = v;
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        require("order_number", &self.order_number)?;
        max_len("order_number", &self.order_number, 64)
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.order_number.clone())
    }

    fn references(&self) -> Vec<(Table, i32)> {
        vec![
            (Table::Employees, self.employee_id),
            (Table::ProductBatches, self.product_batch_id),
            (Table::Warehouses, self.warehouse_id),
        ]
    }
}
