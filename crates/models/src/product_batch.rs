use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{ensure, ModelError},
    product,
    record::{Record, Table},
    section,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_batches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub batch_number: i32,
    pub current_quantity: i32,
    pub current_temperature: f64,
    pub due_date: Date,
    pub initial_quantity: i32,
    pub manufacturing_date: Date,
    pub manufacturing_hour: i32,
    pub minimum_temperature: f64,
    pub product_id: i32,
    pub section_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Product,
    Section,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Product => Entity::belongs_to(product::Entity)
                .from(Column::ProductId)
                .to(product::Column::Id)
                .into(),
            Relation::Section => Entity::belongs_to(section::Entity)
                .from(Column::SectionId)
                .to(section::Column::Id)
                .into(),
        }
    }
}

impl Related<section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Section.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub batch_number: i32,
    pub current_quantity: i32,
    pub current_temperature: f64,
    pub due_date: Date,
    pub initial_quantity: i32,
    pub manufacturing_date: Date,
    pub manufacturing_hour: i32,
    pub minimum_temperature: f64,
    pub product_id: i32,
    pub section_id: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    pub batch_number: Option<i32>,
    pub current_quantity: Option<i32>,
    pub current_temperature: Option<f64>,
    pub due_date: Option<Date>,
    pub initial_quantity: Option<i32>,
    pub manufacturing_date: Option<Date>,
    pub manufacturing_hour: Option<i32>,
    pub minimum_temperature: Option<f64>,
    pub product_id: Option<i32>,
    pub section_id: Option<i32>,
}

impl Record for Model {
    type Draft = Draft;
    type Patch = Patch;

    const TABLE: Table = Table::ProductBatches;

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, d: Draft) -> Self {
        Self {
            id,
            batch_number: d.batch_number,
            current_quantity: d.current_quantity,
            current_temperature: d.current_temperature,
            due_date: d.due_date,
            initial_quantity: d.initial_quantity,
            manufacturing_date: d.manufacturing_date,
            manufacturing_hour: d.manufacturing_hour,
            minimum_temperature: d.minimum_temperature,
            product_id: d.product_id,
            section_id: d.section_id,
        }
    }

    fn apply(&mut self, p: Patch) {
        if let Some(v) = p.batch_number {
            self.batch_number = v;
        }
        if let Some(v) = p.current_quantity {
            self.current_quantity = v;
        }
        if let Some(v) = p.current_temperature {
            self.current_temperature = v;
        }
        if let Some(v) = p.due_date {
            self.due_date = v;
        }
        if let Some(v) = p.initial_quantity {
            self.initial_quantity = v;
        }
        if let Some(v) = p.manufacturing_date {
            self.manufacturing_date = v;
        }
        if let Some(v) = p.manufacturing_hour {
            self.manufacturing_hour = v;
        }
        if let Some(v) = p.minimum_temperature {
            self.minimum_temperature = v;
        }
        if let Some(v) = p.product_id {
            self.product_id = v;
        }
        if let Some(v) = p.section_id {
            self.section_id = v;
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        ensure(self.current_quantity >= 0 && self.initial_quantity >= 0, "quantities must not be negative")?;
        ensure(self.current_quantity <= self.initial_quantity, "current_quantity exceeds initial_quantity")?;
        ensure((0..=23).contains(&self.manufacturing_hour), "manufacturing_hour must be within 0..=23")?;
        ensure(self.manufacturing_date <= self.due_date, "manufacturing_date is after due_date")
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.batch_number.to_string())
    }

    fn references(&self) -> Vec<(Table, i32)> {
        vec![(Table::Products, self.product_id), (Table::Sections, self.section_id)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Model {
        Model::from_draft(
            1,
            Draft {
                batch_number: 111,
                current_quantity: 200,
                current_temperature: -5.0,
                due_date: date(2024, 6, 1),
                initial_quantity: 250,
                manufacturing_date: date(2024, 1, 15),
                manufacturing_hour: 10,
                minimum_temperature: -10.0,
                product_id: 1,
                section_id: 1,
            },
        )
    }

    #[test]
    fn dates_and_hours_are_checked() {
        assert!(sample().validate().is_ok());

        let mut b = sample();
        b.apply(Patch { manufacturing_hour: Some(24), ..Default::default() });
        assert!(b.validate().is_err());

        let mut b = sample();
        b.apply(Patch { due_date: Some(date(2023, 12, 31)), ..Default::default() });
        assert_eq!(b.validate(), Err(ModelError::Invalid("manufacturing_date is after due_date".into())));
    }

    #[test]
    fn dates_serialize_as_iso_strings() {
        let v = serde_json::to_value(sample()).unwrap();
        assert_eq!(v["due_date"], "2024-06-01");
    }
}
