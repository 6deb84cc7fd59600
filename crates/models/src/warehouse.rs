use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{ensure, max_len, require, ModelError},
    locality,
    record::{Record, Table},
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "warehouses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub warehouse_code: String,
    pub address: String,
    pub telephone: String,
    pub minimum_capacity: i32,
    pub minimum_temperature: f64,
    pub locality_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Locality,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Locality => Entity::belongs_to(locality::Entity)
                .from(Column::LocalityId)
                .to(locality::Column::Id)
                .into(),
        }
    }
}

impl Related<locality::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Locality.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub warehouse_code: String,
    pub address: String,
    pub telephone: String,
    pub minimum_capacity: i32,
    pub minimum_temperature: f64,
    pub locality_id: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    pub warehouse_code: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
    pub minimum_capacity: Option<i32>,
    pub minimum_temperature: Option<f64>,
    pub locality_id: Option<i32>,
}

impl Record for Model {
    type Draft = Draft;
    type Patch = Patch;

    const TABLE: Table = Table::Warehouses;

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, d: Draft) -> Self {
        Self {
            id,
            warehouse_code: d.warehouse_code,
            address: d.address,
            telephone: d.telephone,
            minimum_capacity: d.minimum_capacity,
            minimum_temperature: d.minimum_temperature,
            locality_id: d.locality_id,
        }
    }

    fn apply(&mut self, p: Patch) {
        if let Some(v) = p.warehouse_code {
            self.warehouse_code = v;
        }
        if let Some(v) = p.address {
            self.address = v;
        }
        if let Some(v) = p.telephone {
            self.telephone = v;
        }
        if let Some(v) = p.minimum_capacity {
            self.minimum_capacity = v;
        }
        if let Some(v) = p.minimum_temperature {
            self.minimum_temperature = v;
        }
        if let Some(v) = p.locality_id {
            self.locality_id = v;
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        require("warehouse_code", &self.warehouse_code)?;
        max_len("warehouse_code", &self.warehouse_code, 64)?;
        require("address", &self.address)?;
        max_len("address", &self.address, 256)?;
        require("telephone", &self.telephone)?;
        max_len("telephone", &self.telephone, 32)?;
        ensure(self.minimum_capacity >= 0, "minimum_capacity must not be negative")
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.warehouse_code.clone())
    }

    fn references(&self) -> Vec<(Table, i32)> {
        vec![(Table::Localities, self.locality_id)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_code_is_empty_entity() {
        let w = Model::from_draft(
            1,
            Draft {
                warehouse_code: " ".into(),
                address: "Calle 1".into(),
                telephone: "555".into(),
                minimum_capacity: 10,
                minimum_temperature: -18.0,
                locality_id: 1,
            },
        );
        assert_eq!(w.validate(), Err(ModelError::Empty("warehouse_code".into())));
    }
}
