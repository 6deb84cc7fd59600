use async_trait::async_trait;
use models::{
    buyer, carrier, employee, inbound_order, locality, product, product_batch, product_record, purchase_order,
    reports::{
        CarriersByLocality, InboundOrdersByEmployee, ProductsBySection, PurchaseOrdersByBuyer, RecordsByProduct,
        SellersByLocality,
    },
    section, seller, Table,
};
use sea_orm::{
    sea_query::{Expr, Func, SimpleExpr},
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use super::{require_parent, ReportRepository};
use crate::errors::ServiceError;

/// Reports computed by the relational engine with `LEFT JOIN ... GROUP BY`.
pub struct SeaOrmReportRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmReportRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReportRepository for SeaOrmReportRepository {
    async fn purchase_orders_by_buyer(&self, id: Option<i32>) -> Result<Vec<PurchaseOrdersByBuyer>, ServiceError> {
        let mut query = buyer::Entity::find()
            .select_only()
            .column(buyer::Column::Id)
            .column(buyer::Column::CardNumberId)
            .column(buyer::Column::FirstName)
            .column(buyer::Column::LastName)
            .column_as(Expr::col((purchase_order::Entity, purchase_order::Column::Id)).count(), "purchase_orders_count")
            .join_rev(JoinType::LeftJoin, purchase_order::Relation::Buyer.def())
            .group_by(buyer::Column::Id)
            .group_by(buyer::Column::CardNumberId)
            .group_by(buyer::Column::FirstName)
            .group_by(buyer::Column::LastName)
            .order_by_asc(buyer::Column::Id);
        if let Some(id) = id {
            query = query.filter(buyer::Column::Id.eq(id));
        }
        let rows = query.into_model::<PurchaseOrdersByBuyer>().all(&self.db).await?;
        require_parent(rows, Table::Buyers, id)
    }

    async fn inbound_orders_by_employee(&self, id: Option<i32>) -> Result<Vec<InboundOrdersByEmployee>, ServiceError> {
        let mut query = employee::Entity::find()
            .select_only()
            .column(employee::Column::Id)
            .column(employee::Column::CardNumberId)
            .column(employee::Column::FirstName)
            .column(employee::Column::LastName)
            .column(employee::Column::WarehouseId)
            .column_as(Expr::col((inbound_order::Entity, inbound_order::Column::Id)).count(), "inbound_orders_count")
            .join_rev(JoinType::LeftJoin, inbound_order::Relation::Employee.def())
            .group_by(employee::Column::Id)
            .group_by(employee::Column::CardNumberId)
            .group_by(employee::Column::FirstName)
            .group_by(employee::Column::LastName)
            .group_by(employee::Column::WarehouseId)
            .order_by_asc(employee::Column::Id);
        if let Some(id) = id {
            query = query.filter(employee::Column::Id.eq(id));
        }
        let rows = query.into_model::<InboundOrdersByEmployee>().all(&self.db).await?;
        require_parent(rows, Table::Employees, id)
    }

    async fn products_by_section(&self, id: Option<i32>) -> Result<Vec<ProductsBySection>, ServiceError> {
        let quantity = SimpleExpr::from(Func::coalesce([
            Expr::col((product_batch::Entity, product_batch::Column::CurrentQuantity)).sum(),
            Expr::val(0i64).into(),
        ]));
        let mut query = section::Entity::find()
            .select_only()
            .column_as(section::Column::Id, "section_id")
            .column(section::Column::SectionNumber)
            .column_as(quantity, "products_count")
            .join_rev(JoinType::LeftJoin, product_batch::Relation::Section.def())
            .group_by(section::Column::Id)
            .group_by(section::Column::SectionNumber)
            .order_by_asc(section::Column::Id);
        if let Some(id) = id {
            query = query.filter(section::Column::Id.eq(id));
        }
        let rows = query.into_model::<ProductsBySection>().all(&self.db).await?;
        require_parent(rows, Table::Sections, id)
    }

    async fn records_by_product(&self, id: Option<i32>) -> Result<Vec<RecordsByProduct>, ServiceError> {
        let mut query = product::Entity::find()
            .select_only()
            .column_as(product::Column::Id, "product_id")
            .column(product::Column::Description)
            .column_as(Expr::col((product_record::Entity, product_record::Column::Id)).count(), "records_count")
            .join_rev(JoinType::LeftJoin, product_record::Relation::Product.def())
            .group_by(product::Column::Id)
            .group_by(product::Column::Description)
            .order_by_asc(product::Column::Id);
        if let Some(id) = id {
            query = query.filter(product::Column::Id.eq(id));
        }
        let rows = query.into_model::<RecordsByProduct>().all(&self.db).await?;
        require_parent(rows, Table::Products, id)
    }

    async fn sellers_by_locality(&self, id: Option<i32>) -> Result<Vec<SellersByLocality>, ServiceError> {
        let mut query = locality::Entity::find()
            .select_only()
            .column_as(locality::Column::Id, "locality_id")
            .column(locality::Column::LocalityName)
            .column_as(Expr::col((seller::Entity, seller::Column::Id)).count(), "sellers_count")
            .join_rev(JoinType::LeftJoin, seller::Relation::Locality.def())
            .group_by(locality::Column::Id)
            .group_by(locality::Column::LocalityName)
            .order_by_asc(locality::Column::Id);
        if let Some(id) = id {
            query = query.filter(locality::Column::Id.eq(id));
        }
        let rows = query.into_model::<SellersByLocality>().all(&self.db).await?;
        require_parent(rows, Table::Localities, id)
    }

    async fn carriers_by_locality(&self, id: Option<i32>) -> Result<Vec<CarriersByLocality>, ServiceError> {
        let mut query = locality::Entity::find()
            .select_only()
            .column_as(locality::Column::Id, "locality_id")
            .column(locality::Column::LocalityName)
            .column_as(Expr::col((carrier::Entity, carrier::Column::Id)).count(), "carriers_count")
            .join_rev(JoinType::LeftJoin, carrier::Relation::Locality.def())
            .group_by(locality::Column::Id)
            .group_by(locality::Column::LocalityName)
            .order_by_asc(locality::Column::Id);
        if let Some(id) = id {
            query = query.filter(locality::Column::Id.eq(id));
        }
        let rows = query.into_model::<CarriersByLocality>().all(&self.db).await?;
        require_parent(rows, Table::Localities, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        repository::{Repository, SeaOrmRepository},
        test_support::{get_db, seed_locality},
    };

    #[tokio::test]
    async fn counts_children_with_zero_for_childless_parents() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let palermo = seed_locality(&db).await?;
        let belgrano = SeaOrmRepository::<locality::Entity>::new(db.clone())
            .create(locality::Draft {
                locality_name: "Belgrano".into(),
                province_name: "Buenos Aires".into(),
                country_name: "Argentina".into(),
            })
            .await?;

        let sellers = SeaOrmRepository::<seller::Entity>::new(db.clone());
        for cid in [1, 2] {
            sellers
                .create(seller::Draft {
                    cid,
                    company_name: format!("Seller {cid}"),
                    address: "Main St".into(),
                    telephone: "555".into(),
                    locality_id: palermo.id,
                })
                .await?;
        }

        let reports = SeaOrmReportRepository::new(db);
        let all = reports.sellers_by_locality(None).await?;
        assert_eq!(all.len(), 2);
        assert_eq!((all[0].locality_id, all[0].sellers_count), (palermo.id, 2));
        assert_eq!((all[1].locality_id, all[1].sellers_count), (belgrano.id, 0));

        let one = reports.sellers_by_locality(Some(belgrano.id)).await?;
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].locality_name, "Belgrano");

        assert!(matches!(reports.carriers_by_locality(Some(999)).await, Err(ServiceError::NotFound(_))));
        assert!(reports.purchase_orders_by_buyer(None).await?.is_empty());
        Ok(())
    }
}
