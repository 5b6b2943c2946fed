use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Publication state of a post.
///
/// Serialized lowercase on the wire; any other value fails deserialization,
/// so an invalid status never reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Public,
    Private,
    Archived,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Public => "public",
            PostStatus::Private => "private",
            PostStatus::Archived => "archived",
        }
    }
}

impl std::str::FromStr for PostStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(PostStatus::Public),
            "private" => Ok(PostStatus::Private),
            "archived" => Ok(PostStatus::Archived),
            other => Err(DomainError::Validation(format!(
                "invalid post status: {other}"
            ))),
        }
    }
}

/// Post entity - a user-owned board post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub likes: i64,
    pub comments: Vec<Uuid>,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub views: i64,
    pub status: PostStatus,
}

/// Client-supplied fields for creating a post.
///
/// There is no owner field here: ownership always comes from the
/// authenticated caller, never from the request body.
#[derive(Debug, Clone, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<PostStatus>,
}

/// Partial update to a post. Absent fields are left untouched.
///
/// Owner, counters and timestamps are not representable here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// `"category": null` clears the category; an absent field keeps it.
    #[serde(default, deserialize_with = "double_option")]
    pub category: Option<Option<String>>,
    #[serde(default)]
    pub status: Option<PostStatus>,
}

// Distinguishes an absent field (outer None, via the serde default) from an
// explicit null (Some(None)).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}

impl Post {
    /// Build a new post from a validated draft, owned by `user_id`.
    pub fn new(user_id: Uuid, draft: PostDraft) -> Result<Self, DomainError> {
        let title = validate_title(&draft.title)?;
        let content = validate_content(&draft.content)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            content,
            created_at: now,
            updated_at: now,
            likes: 0,
            comments: Vec::new(),
            tags: draft.tags,
            category: draft.category,
            views: 0,
            status: draft.status.unwrap_or_default(),
        })
    }

    /// Apply a partial update, revalidating every present field and
    /// refreshing `updated_at`.
    pub fn apply(&mut self, patch: PostPatch) -> Result<(), DomainError> {
        if let Some(title) = patch.title {
            self.title = validate_title(&title)?;
        }
        if let Some(content) = patch.content {
            self.content = validate_content(&content)?;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<String, DomainError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(
            "a post needs a title".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

fn validate_content(content: &str) -> Result<String, DomainError> {
    if content.is_empty() {
        return Err(DomainError::Validation(
            "a post needs content".to_string(),
        ));
    }
    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, content: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            content: content.to_string(),
            tags: Vec::new(),
            category: None,
            status: None,
        }
    }

    #[test]
    fn new_post_gets_defaults() {
        let owner = Uuid::new_v4();
        let post = Post::new(owner, draft("Hello", "World")).unwrap();

        assert_eq!(post.user_id, owner);
        assert_eq!(post.likes, 0);
        assert_eq!(post.views, 0);
        assert!(post.comments.is_empty());
        assert_eq!(post.status, PostStatus::Public);
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn title_is_trimmed() {
        let post = Post::new(Uuid::new_v4(), draft("  Hello  ", "body")).unwrap();
        assert_eq!(post.title, "Hello");
    }

    #[test]
    fn blank_title_is_rejected() {
        let result = Post::new(Uuid::new_v4(), draft("   ", "body"));
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn empty_content_is_rejected() {
        let result = Post::new(Uuid::new_v4(), draft("Title", ""));
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn apply_leaves_owner_and_counters_alone() {
        let owner = Uuid::new_v4();
        let mut post = Post::new(owner, draft("Title", "body")).unwrap();
        post.views = 7;

        post.apply(PostPatch {
            title: Some("New title".to_string()),
            status: Some(PostStatus::Archived),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(post.user_id, owner);
        assert_eq!(post.views, 7);
        assert_eq!(post.title, "New title");
        assert_eq!(post.status, PostStatus::Archived);
    }

    #[test]
    fn apply_rejects_blank_title() {
        let mut post = Post::new(Uuid::new_v4(), draft("Title", "body")).unwrap();
        let before = post.clone();

        let result = post.apply(PostPatch {
            title: Some("  ".to_string()),
            ..Default::default()
        });

        assert!(result.is_err());
        assert_eq!(post.title, before.title);
    }

    #[test]
    fn explicit_null_clears_the_category() {
        let mut post = Post::new(Uuid::new_v4(), draft("Title", "body")).unwrap();
        post.category = Some("dev".to_string());

        let patch: PostPatch = serde_json::from_str(r#"{"category": null}"#).unwrap();
        post.apply(patch).unwrap();

        assert_eq!(post.category, None);
    }

    #[test]
    fn absent_category_field_keeps_the_category() {
        let mut post = Post::new(Uuid::new_v4(), draft("Title", "body")).unwrap();
        post.category = Some("dev".to_string());

        let patch: PostPatch = serde_json::from_str(r#"{"title": "Edited"}"#).unwrap();
        post.apply(patch).unwrap();

        assert_eq!(post.category.as_deref(), Some("dev"));
    }

    #[test]
    fn category_can_be_replaced() {
        let mut post = Post::new(Uuid::new_v4(), draft("Title", "body")).unwrap();

        let patch: PostPatch = serde_json::from_str(r#"{"category": "news"}"#).unwrap();
        post.apply(patch).unwrap();

        assert_eq!(post.category.as_deref(), Some("news"));
    }

    #[test]
    fn status_rejects_unknown_values() {
        assert!("deleted".parse::<PostStatus>().is_err());
        assert_eq!(
            "archived".parse::<PostStatus>().unwrap(),
            PostStatus::Archived
        );
    }
}
