//! Post entity for SeaORM.
//!
//! Column names keep the camelCase spelling of the `posts` table.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_name = "pictureUrl")]
    pub picture_url: Option<String>,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for photoboard_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            description: model.description,
            picture_url: model.picture_url,
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from a new Domain Post to SeaORM ActiveModel.
///
/// `id` and `createdAt` stay `NotSet` so the column defaults assign them.
impl From<photoboard_core::domain::NewPost> for ActiveModel {
    fn from(post: photoboard_core::domain::NewPost) -> Self {
        Self {
            username: Set(post.username),
            description: Set(post.description),
            picture_url: Set(post.picture_url),
            ..Default::default()
        }
    }
}
