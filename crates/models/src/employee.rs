use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{max_len, require, ModelError},
    record::{Record, Table},
    warehouse,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Warehouse,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Warehouse => Entity::belongs_to(warehouse::Entity)
                .from(Column::WarehouseId)
                .to(warehouse::Column::Id)
                .into(),
        }
    }
}

impl Related<warehouse::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Warehouse.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    pub card_number_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub warehouse_id: Option<i32>,
}

impl Record for Model {
    type Draft = Draft;
    type Patch = Patch;

    const TABLE: Table = Table::Employees;

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, d: Draft) -> Self {
        Self {
            id,
            card_number_id: d.card_number_id,
            first_name: d.first_name,
            last_name: d.last_name,
            warehouse_id: d.warehouse_id,
        }
    }

    fn apply(&mut self, p: Patch) {
        if let Some(v) = p.card_number_id {
            self.card_number_id = v;
        }
        if let Some(v) = p.first_name {
            self.first_name = v;
        }
        if let Some(v) = p.last_name {
            self.last_name = v;
        }
        if let Some(v) = p.warehouse_id {
            self.warehouse_id = v;
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        require("card_number_id", &self.card_number_id)?;
        max_len("card_number_id", &self.card_number_id, 64)?;
        require("first_name", &self.first_name)?;
        max_len("first_name", &self.first_name, 128)?;
        require("last_name", &self.last_name)?;
        max_len("last_name", &self.last_name, 128)
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.card_number_id.clone())
    }

    fn references(&self) -> Vec<(Table, i32)> {
        vec![(Table::Warehouses, self.warehouse_id)]
    }
}
