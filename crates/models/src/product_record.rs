use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{ensure, ModelError},
    product,
    record::{Record, Table},
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub last_update_date: DateTime,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub product_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Product,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Product => Entity::belongs_to(product::Entity)
                .from(Column::ProductId)
                .to(product::Column::Id)
                .into(),
        }
    }
}

impl Related<product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub last_update_date: DateTime,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub product_id: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    pub last_update_date: Option<DateTime>,
    pub purchase_price: Option<f64>,
    pub sale_price: Option<f64>,
    pub product_id: Option<i32>,
}

impl Record for Model {
    type Draft = Draft;
    type Patch = Patch;

    const TABLE: Table = Table::ProductRecords;

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, d: Draft) -> Self {
        Self {
            id,
            last_update_date: d.last_update_date,
            purchase_price: d.purchase_price,
            sale_price: d.sale_price,
            product_id: d.product_id,
        }
    }

    fn apply(&mut self, p: Patch) {
        if let Some(v) = p.last_update_date {
            self.last_update_date = v;
        }
        if let Some(v) = p.purchase_price {
            self.purchase_price = v;
        }
        if let Some(v) = p.sale_price {
            self.sale_price = v;
        }
        if let Some(v) = p.product_id {
            self.product_id = v;
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        ensure(self.purchase_price >= 0.0 && self.sale_price >= 0.0, "prices must not be negative")
    }

    fn references(&self) -> Vec<(Table, i32)> {
        vec![(Table::Products, self.product_id)]
    }
}
