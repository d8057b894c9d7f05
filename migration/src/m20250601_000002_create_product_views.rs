use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create product_views table for detail-page view tracking
        manager
            .create_table(
                Table::create()
                    .table(ProductViews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductViews::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProductViews::ProductId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductViews::IpAddress)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductViews::UserAgent)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(ProductViews::Referrer)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProductViews::ViewedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_views_product_id")
                            .from(ProductViews::Table, ProductViews::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_product_views_product_viewed")
                    .table(ProductViews::Table)
                    .col(ProductViews::ProductId)
                    .col(ProductViews::ViewedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_product_views_viewed_at")
                    .table(ProductViews::Table)
                    .col(ProductViews::ViewedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductViews::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(Iden)]
enum ProductViews {
    Table,
    Id,
    ProductId,
    IpAddress,
    UserAgent,
    Referrer,
    ViewedAt,
}

#[derive(Iden)]
enum Products {
    Table,
    Id,
}
