use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{ensure, max_len, require, ModelError},
    product_type,
    record::{Record, Table},
    seller,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub product_code: String,
    pub description: String,
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub net_weight: f64,
    pub expiration_rate: f64,
    pub recommended_freezing_temperature: f64,
    pub freezing_rate: f64,
    pub product_type_id: i32,
    pub seller_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    ProductType,
    Seller,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::ProductType => Entity::belongs_to(product_type::Entity)
                .from(Column::ProductTypeId)
                .to(product_type::Column::Id)
                .into(),
            Relation::Seller => Entity::belongs_to(seller::Entity)
                .from(Column::SellerId)
                .to(seller::Column::Id)
                .into(),
        }
    }
}

impl Related<seller::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seller.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub product_code: String,
    pub description: String,
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub net_weight: f64,
    pub expiration_rate: f64,
    pub recommended_freezing_temperature: f64,
    pub freezing_rate: f64,
    pub product_type_id: i32,
    pub seller_id: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    pub product_code: Option<String>,
    pub description: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub length: Option<f64>,
    pub net_weight: Option<f64>,
    pub expiration_rate: Option<f64>,
    pub recommended_freezing_temperature: Option<f64>,
    pub freezing_rate: Option<f64>,
    pub product_type_id: Option<i32>,
    pub seller_id: Option<i32>,
}

impl Record for Model {
    type Draft = Draft;
    type Patch = Patch;

    const TABLE: Table = Table::Products;

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, d: Draft) -> Self {
        Self {
            id,
            product_code: d.product_code,
            description: d.description,
            width: d.width,
            height: d.height,
            length: d.length,
            net_weight: d.net_weight,
            expiration_rate: d.expiration_rate,
            recommended_freezing_temperature: d.recommended_freezing_temperature,
            freezing_rate: d.freezing_rate,
            product_type_id: d.product_type_id,
            seller_id: d.seller_id,
        }
    }

    fn apply(&mut self, p: Patch) {
        if let Some(v) = p.product_code {
            self.product_code = v;
        }
        if let Some(v) = p.description {
            self.description = v;
        }
        if let Some(v) = p.width {
            self.width = v;
        }
        if let Some(v) = p.height {
            self.height = v;
        }
        if let Some(v) = p.length {
            self.length = v;
        }
        if let Some(v) = p.net_weight {
            self.net_weight = v;
        }
        if let Some(v) = p.expiration_rate {
            self.expiration_rate = v;
        }
        if let Some(v) = p.recommended_freezing_temperature {
            self.recommended_freezing_temperature = v;
        }
        if let Some(v) = p.freezing_rate {
            self.freezing_rate = v;
        }
        if let Some(v) = p.product_type_id {
            self.product_type_id = v;
        }
        if let Some(v) = p.seller_id {
            self.seller_id = v;
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        require("product_code", &self.product_code)?;
        max_len("product_code", &self.product_code, 64)?;
        require("description", &self.description)?;
        max_len("description", &self.description, 256)?;
        ensure(
            self.width > 0.0 && self.height > 0.0 && self.length > 0.0,
            "dimensions must be positive",
        )?;
        ensure(self.net_weight > 0.0, "net_weight must be positive")
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.product_code.clone())
    }

    fn references(&self) -> Vec<(Table, i32)> {
        vec![(Table::ProductTypes, self.product_type_id), (Table::Sellers, self.seller_id)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_is_invalid() {
        let p = Model::from_draft(
            1,
            Draft {
                product_code: "P-001".into(),
                description: "Frozen peas".into(),
                width: 0.0,
                height: 1.0,
                length: 1.0,
                net_weight: 0.5,
                expiration_rate: 0.1,
                recommended_freezing_temperature: -18.0,
                freezing_rate: 0.2,
                product_type_id: 1,
                seller_id: 1,
            },
        );
        assert_eq!(p.validate(), Err(ModelError::Invalid("dimensions must be positive".into())));
    }
}
