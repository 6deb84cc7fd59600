use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{ensure, ModelError},
    product_type,
    record::{Record, Table},
    warehouse,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub section_number: i32,
    pub current_temperature: f64,
    pub minimum_temperature: f64,
    pub current_capacity: i32,
    pub minimum_capacity: i32,
    pub maximum_capacity: i32,
    pub warehouse_id: i32,
    pub product_type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Warehouse,
    ProductType,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Warehouse => Entity::belongs_to(warehouse::Entity)
                .from(Column::WarehouseId)
                .to(warehouse::Column::Id)
                .into(),
            Relation::ProductType => Entity::belongs_to(product_type::Entity)
                .from(Column::ProductTypeId)
                .to(product_type::Column::Id)
                .into(),
        }
    }
}

impl Related<warehouse::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Warehouse.def()
    }
}

impl Related<product_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub section_number: i32,
    pub current_temperature: f64,
    pub minimum_temperature: f64,
    pub current_capacity: i32,
    pub minimum_capacity: i32,
    pub maximum_capacity: i32,
    pub warehouse_id: i32,
    pub product_type_id: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    pub section_number: Option<i32>,
    pub current_temperature: Option<f64>,
    pub minimum_temperature: Option<f64>,
    pub current_capacity: Option<i32>,
    pub minimum_capacity: Option<i32>,
    pub maximum_capacity: Option<i32>,
    pub warehouse_id: Option<i32>,
    pub product_type_id: Option<i32>,
}

impl Record for Model {
    type Draft = Draft;
    type Patch = Patch;

    const TABLE: Table = Table::Sections;

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, d: Draft) -> Self {
        Self {
            id,
            section_number: d.section_number,
            current_temperature: d.current_temperature,
            minimum_temperature: d.minimum_temperature,
            current_capacity: d.current_capacity,
            minimum_capacity: d.minimum_capacity,
            maximum_capacity: d.maximum_capacity,
            warehouse_id: d.warehouse_id,
            product_type_id: d.product_type_id,
        }
    }

    fn apply(&mut self, p: Patch) {
        if let Some(v) = p.section_number {
            self.section_number = v;
        }
        if let Some(v) = p.current_temperature {
            self.current_temperature = v;
        }
        if let Some(v) = p.minimum_temperature {
            self.minimum_temperature = v;
        }
        if let Some(v) = p.current_capacity {
            self.current_capacity = v;
        }
        if let Some(v) = p.minimum_capacity {
            self.minimum_capacity = v;
        }
        if let Some(v) = p.maximum_capacity {
            self.maximum_capacity = v;
        }
        if let Some(v) = p.warehouse_id {
            self.warehouse_id = v;
        }
        if let Some(v) = p.product_type_id {
            self.product_type_id = v;
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        ensure(
            self.current_capacity >= 0 && self.minimum_capacity >= 0 && self.maximum_capacity >= 0,
            "capacities must not be negative",
        )?;
        ensure(self.minimum_capacity <= self.maximum_capacity, "minimum_capacity exceeds maximum_capacity")?;
        ensure(self.current_capacity <= self.maximum_capacity, "current_capacity exceeds maximum_capacity")
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.section_number.to_string())
    }

    fn references(&self) -> Vec<(Table, i32)> {
        vec![(Table::Warehouses, self.warehouse_id), (Table::ProductTypes, self.product_type_id)]
    }
}
