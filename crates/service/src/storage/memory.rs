use std::collections::BTreeMap;

use models::{Record, Table};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::errors::ServiceError;

/// Row types that have a map of their own inside [`Tables`].
pub trait InMemory: Record {
    fn rows(tables: &Tables) -> &BTreeMap<i32, Self>;
    fn rows_mut(tables: &mut Tables) -> &mut BTreeMap<i32, Self>;
}

macro_rules! define_tables {
    ($( $field:ident: $module:ident => $variant:ident ),+ $(,)?) => {
        /// One map per table, keyed by primary key.
        #[derive(Debug, Default, Clone)]
        pub struct Tables {
            $( pub $field: BTreeMap<i32, models::$module::Model>, )+
        }

        impl Tables {
            /// Whether `table` holds a row with primary key `id`.
            pub fn contains(&self, table: Table, id: i32) -> bool {
                match table {
                    $( Table::$variant => self.$field.contains_key(&id), )+
                }
            }

            pub fn len(&self, table: Table) -> usize {
                match table {
                    $( Table::$variant => self.$field.len(), )+
                }
            }

            /// First table holding a row whose foreign keys include `target`.
            pub fn referenced_by(&self, target: (Table, i32)) -> Option<Table> {
                $(
                    if self.$field.values().any(|row| row.references().contains(&target)) {
                        return Some(Table::$variant);
                    }
                )+
                None
            }

            /// Read every `<table>.json` file found in `dir`.
            pub(crate) async fn load(dir: &std::path::Path) -> Result<Self, ServiceError> {
                Ok(Self {
                    $( $field: super::fixtures::load_table(dir).await?, )+
                })
            }
        }

        $(
            impl InMemory for models::$module::Model {
                fn rows(tables: &Tables) -> &BTreeMap<i32, Self> {
                    &tables.$field
                }

                fn rows_mut(tables: &mut Tables) -> &mut BTreeMap<i32, Self> {
                    &mut tables.$field
                }
            }
        )+
    };
}

define_tables! {
    localities: locality => Localities,
    sellers: seller => Sellers,
    carriers: carrier => Carriers,
    warehouses: warehouse => Warehouses,
    product_types: product_type => ProductTypes,
    sections: section => Sections,
    products: product => Products,
    product_batches: product_batch => ProductBatches,
    product_records: product_record => ProductRecords,
    employees: employee => Employees,
    buyers: buyer => Buyers,
    inbound_orders: inbound_order => InboundOrders,
    purchase_orders: purchase_order => PurchaseOrders,
    order_details: order_detail => OrderDetails,
}

impl Tables {
    /// Next free id for `M`: one past the largest id in use.
    pub fn next_id<M: InMemory>(&self) -> Result<i32, ServiceError> {
        match M::rows(self).keys().next_back() {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| ServiceError::InvalidEntity(format!("{} ids are exhausted", M::TABLE.entity_name()))),
        }
    }

    /// Enforce the unique and foreign-key constraints the relational schema declares.
    pub fn check<M: InMemory>(&self, row: &M) -> Result<(), ServiceError> {
        if let Some(key) = row.unique_key() {
            let taken = M::rows(self)
                .values()
                .any(|other| other.id() != row.id() && other.unique_key().as_deref() == Some(key.as_str()));
            if taken {
                return Err(ServiceError::AlreadyExists(format!("{} with code {}", M::TABLE.entity_name(), key)));
            }
        }
        for (table, id) in row.references() {
            if !self.contains(table, id) {
                return Err(ServiceError::ForeignKeyViolation(format!(
                    "{} {} does not exist",
                    table.entity_name(),
                    id
                )));
            }
        }
        Ok(())
    }

    /// Validate, check constraints and store `row`, replacing any row with the same id.
    pub fn put<M: InMemory>(&mut self, row: M) -> Result<M, ServiceError> {
        row.validate()?;
        self.check(&row)?;
        M::rows_mut(self).insert(row.id(), row.clone());
        Ok(row)
    }

    /// Remove a row unless it is missing or still referenced.
    pub fn remove<M: InMemory>(&mut self, id: i32) -> Result<M, ServiceError> {
        if !M::rows(self).contains_key(&id) {
            return Err(ServiceError::not_found(M::TABLE, id));
        }
        if let Some(child) = self.referenced_by((M::TABLE, id)) {
            return Err(ServiceError::ForeignKeyViolation(format!(
                "{} {} is still referenced by {}",
                M::TABLE.entity_name(),
                id,
                child
            )));
        }
        M::rows_mut(self).remove(&id).ok_or_else(|| ServiceError::not_found(M::TABLE, id))
    }
}

/// Shared in-memory store. Every repository of the memory backend holds an
/// `Arc` to the same instance so cross-table constraints see one snapshot.
#[derive(Debug, Default)]
pub struct MemoryDatabase {
    tables: RwLock<Tables>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tables(tables: Tables) -> Self {
        Self { tables: RwLock::new(tables) }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}
