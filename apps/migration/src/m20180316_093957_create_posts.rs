//! Creates the `posts` table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_posts_table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(drop_posts_table()).await
    }
}

/// `CREATE TABLE posts`. Fails if the table already exists.
pub fn create_posts_table() -> TableCreateStatement {
    Table::create()
        .table(Posts::Table)
        .col(
            ColumnDef::new(Posts::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Posts::Username).string())
        .col(ColumnDef::new(Posts::Description).text())
        .col(ColumnDef::new(Posts::PictureUrl).string())
        .col(
            ColumnDef::new(Posts::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

/// `DROP TABLE posts`. Fails if the table does not exist.
pub fn drop_posts_table() -> TableDropStatement {
    Table::drop().table(Posts::Table).to_owned()
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    Username,
    Description,
    #[sea_orm(iden = "pictureUrl")]
    PictureUrl,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
}
