use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{ensure, max_len, require, ModelError},
    locality,
    record::{Record, Table},
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sellers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub cid: i32,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
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

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub cid: i32,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    pub cid: Option<i32>,
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
    pub locality_id: Option<i32>,
}

impl Record for Model {
    type Draft = Draft;
    type Patch = Patch;

    const TABLE: Table = Table::Sellers;

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, d: Draft) -> Self {
        Self {
            id,
            cid: d.cid,
            company_name: d.company_name,
            address: d.address,
            telephone: d.telephone,
            locality_id: d.locality_id,
        }
    }

    fn apply(&mut self, p: Patch) {
        if let Some(v) = p.cid {
            self.cid = v;
        }
        if let Some(v) = p.company_name {
            self.company_name = v;
        }
        if let Some(v) = p.address {
            self.address = v;
        }
        if let Some(v) = p.telephone {
            self.telephone = v;
        }
        if let Some(v) = p.locality_id {
            self.locality_id = v;
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        ensure(self.cid > 0, "cid must be positive")?;
        require("company_name", &self.company_name)?;
        max_len("company_name", &self.company_name, 128)?;
        require("address", &self.address)?;
        max_len("address", &self.address, 256)?;
        require("telephone", &self.telephone)?;
        max_len("telephone", &self.telephone, 32)
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.cid.to_string())
    }

    fn references(&self) -> Vec<(Table, i32)> {
        vec![(Table::Localities, self.locality_id)]
    }
}
