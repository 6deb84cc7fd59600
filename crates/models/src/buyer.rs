use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{max_len, require, ModelError},
    record::{Record, Table},
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "buyers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    pub card_number_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Record for Model {
    type Draft = Draft;
    type Patch = Patch;

    const TABLE: Table = Table::Buyers;

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, d: Draft) -> Self {
        Self { id, card_number_id: d.card_number_id, first_name: d.first_name, last_name: d.last_name }
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_deserializes_with_missing_fields() {
        let p: Patch = serde_json::from_str(r#"{"last_name":"Lovelace"}"#).unwrap();
        assert_eq!(p, Patch { last_name: Some("Lovelace".into()), ..Default::default() });
    }

    #[test]
    fn patch_rejects_wrongly_typed_field() {
        assert!(serde_json::from_str::<Patch>(r#"{"first_name":7}"#).is_err());
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut b = Model::from_draft(
            1,
            Draft { card_number_id: "189-58-5819".into(), first_name: "Ada".into(), last_name: "Byron".into() },
        );
        assert!(b.validate().is_ok());
        b.apply(Patch { first_name: Some(String::new()), ..Default::default() });
        assert_eq!(b.validate(), Err(ModelError::Empty("first_name".into())));
        assert_eq!(b.last_name, "Byron");
    }
}
