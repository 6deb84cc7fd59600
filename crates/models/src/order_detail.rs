use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{ensure, max_len, require, ModelError},
    product_record, purchase_order,
    record::{Record, Table},
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cleanliness_status: String,
    pub quantity: i32,
    pub temperature: f64,
    pub product_record_id: i32,
    pub purchase_order_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    ProductRecord,
    PurchaseOrder,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::ProductRecord => Entity::belongs_to(product_record::Entity)
                .from(Column::ProductRecordId)
                .to(product_record::Column::Id)
                .into(),
            Relation::PurchaseOrder => Entity::belongs_to(purchase_order::Entity)
                .from(Column::PurchaseOrderId)
                .to(purchase_order::Column::Id)
                .into(),
        }
    }
}

impl Related<purchase_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PurchaseOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub cleanliness_status: String,
    pub quantity: i32,
    pub temperature: f64,
    pub product_record_id: i32,
    pub purchase_order_id: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    pub cleanliness_status: Option<String>,
    pub quantity: Option<i32>,
    pub temperature: Option<f64>,
    pub product_record_id: Option<i32>,
    pub purchase_order_id: Option<i32>,
}

/// Detail line submitted together with a new purchase order; the order id
/// is assigned once the header row exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub cleanliness_status: String,
    pub quantity: i32,
    pub temperature: f64,
    pub product_record_id: i32,
}

impl Line {
    pub fn into_draft(self, purchase_order_id: i32) -> Draft {
        Draft {
            cleanliness_status: self.cleanliness_status,
            quantity: self.quantity,
            temperature: self.temperature,
            product_record_id: self.product_record_id,
            purchase_order_id,
        }
    }
}

impl Record for Model {
    type Draft = Draft;
    type Patch = Patch;

    const TABLE: Table = Table::OrderDetails;

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, d: Draft) -> Self {
        Self {
            id,
            cleanliness_status: d.cleanliness_status,
            quantity: d.quantity,
            temperature: d.temperature,
            product_record_id: d.product_record_id,
            purchase_order_id: d.purchase_order_id,
        }
    }

    fn apply(&mut self, p: Patch) {
        if let Some(v) = p.cleanliness_status {
            self.cleanliness_status = v;
        }
        if let Some(v) = p.quantity {
            self.quantity = v;
        }
        if let Some(v) = p.temperature {
            self.temperature = v;
        }
        if let Some(v) = p.product_record_id {
            self.product_record_id = v;
        }
        if let Some(v) = p.purchase_order_id {
            self.purchase_order_id = v;
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        require("cleanliness_status", &self.cleanliness_status)?;
        max_len("cleanliness_status", &self.cleanliness_status, 64)?;
        ensure(self.quantity > 0, "quantity must be positive")
    }

    fn references(&self) -> Vec<(Table, i32)> {
        vec![(Table::ProductRecords, self.product_record_id), (Table::PurchaseOrders, self.purchase_order_id)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_binds_to_order() {
        let line = Line {
            cleanliness_status: "clean".into(),
            quantity: 3,
            temperature: 4.5,
            product_record_id: 9,
        };
        let detail = Model::from_draft(1, line.into_draft(5));
        assert_eq!(detail.purchase_order_id, 5);
        assert!(detail.validate().is_ok());
        assert_eq!(detail.references(), vec![(Table::ProductRecords, 9), (Table::PurchaseOrders, 5)]);
    }

    #[test]
    fn zero_quantity_is_invalid() {
        let mut d = Model::from_draft(
            1,
            Draft {
                cleanliness_status: "clean".into(),
                quantity: 1,
                temperature: 0.0,
                product_record_id: 1,
                purchase_order_id: 1,
            },
        );
        d.apply(Patch { quantity: Some(0), ..Default::default() });
        assert!(matches!(d.validate(), Err(ModelError::Invalid(_))));
    }
}
