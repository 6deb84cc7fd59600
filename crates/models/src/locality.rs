use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{max_len, require, ModelError},
    record::{Record, Table},
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "localities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub locality_name: String,
    pub province_name: String,
    pub country_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub locality_name: String,
    pub province_name: String,
    pub country_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    pub locality_name: Option<String>,
    pub province_name: Option<String>,
    pub country_name: Option<String>,
}

impl Record for Model {
    type Draft = Draft;
    type Patch = Patch;

    const TABLE: Table = Table::Localities;

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, d: Draft) -> Self {
        Self { id, locality_name: d.locality_name, province_name: d.province_name, country_name: d.country_name }
    }

    fn apply(&mut self, p: Patch) {
        if let Some(v) = p.locality_name {
            self.locality_name = v;
        }
        if let Some(v) = p.province_name {
            self.province_name = v;
        }
        if let Some(v) = p.country_name {
            self.country_name = v;
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        require("locality_name", &self.locality_name)?;
        max_len("locality_name", &self.locality_name, 128)?;
        require("province_name", &self.province_name)?;
        max_len("province_name", &self.province_name, 128)?;
        require("country_name", &self.country_name)?;
        max_len("country_name", &self.country_name, 128)
    }
}
