//! Schema migrations for the photo board.

pub use sea_orm_migration::prelude::*;

mod m20180316_093957_create_posts;

pub use m20180316_093957_create_posts::{create_posts_table, drop_posts_table};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20180316_093957_create_posts::Migration)]
    }
}
