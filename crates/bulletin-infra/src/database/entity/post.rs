//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use bulletin_core::domain::{Post, PostStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub likes: i64,
    pub comments: Vec<Uuid>,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub views: i64,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to domain Post.
///
/// The status column is constrained by the migration; an unexpected value
/// falls back to the default rather than poisoning reads.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            content: model.content,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
            likes: model.likes,
            comments: model.comments,
            tags: model.tags,
            category: model.category,
            views: model.views,
            status: model.status.parse().unwrap_or(PostStatus::Public),
        }
    }
}

/// Conversion from domain Post to SeaORM ActiveModel.
impl From<Post> for ActiveModel {
    fn from(post: Post) -> Self {
        Self {
            id: Set(post.id),
            user_id: Set(post.user_id),
            title: Set(post.title),
            content: Set(post.content),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
            likes: Set(post.likes),
            comments: Set(post.comments),
            tags: Set(post.tags),
            category: Set(post.category),
            views: Set(post.views),
            status: Set(post.status.as_str().to_string()),
        }
    }
}
