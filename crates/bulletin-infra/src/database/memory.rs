//! In-memory store implementations.
//!
//! The default stores when no database is configured, and the substitutes
//! the service tests run against. Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use bulletin_core::domain::{Post, User};
use bulletin_core::error::RepoError;
use bulletin_core::ports::{PostRepository, UserRepository};

/// In-memory post store using a HashMap behind an async RwLock.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.get(&id).cloned())
    }

    async fn find_page(&self, skip: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;

        let mut page: Vec<Post> = posts.values().cloned().collect();
        page.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(page
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        if !posts.contains_key(&post.id) {
            return Err(RepoError::NotFound);
        }
        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn record_view(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let mut posts = self.posts.write().await;
        match posts.get_mut(&id) {
            Some(post) => {
                post.views += 1;
                Ok(Some(post.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        posts.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

/// In-memory user store.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: User) -> Result<User, RepoError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(RepoError::Constraint("email already registered".to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulletin_core::domain::PostDraft;

    fn post(owner: Uuid, title: &str) -> Post {
        Post::new(
            owner,
            PostDraft {
                title: title.to_string(),
                content: "content".to_string(),
                tags: Vec::new(),
                category: None,
                status: None,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn create_and_find() {
        let repo = InMemoryPostRepository::new();
        let saved = repo.create(post(Uuid::new_v4(), "First")).await.unwrap();

        let found = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(found.title, "First");
    }

    #[tokio::test]
    async fn record_view_bumps_only_views() {
        let repo = InMemoryPostRepository::new();
        let saved = repo.create(post(Uuid::new_v4(), "First")).await.unwrap();

        let viewed = repo.record_view(saved.id).await.unwrap().unwrap();
        assert_eq!(viewed.views, saved.views + 1);
        assert_eq!(viewed.title, saved.title);
        assert_eq!(viewed.updated_at, saved.updated_at);
    }

    #[tokio::test]
    async fn record_view_missing_post_is_none() {
        let repo = InMemoryPostRepository::new();
        assert!(repo.record_view(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_missing_post_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let orphan = post(Uuid::new_v4(), "Orphan");

        let result = repo.update(orphan).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn delete_twice_reports_not_found() {
        let repo = InMemoryPostRepository::new();
        let saved = repo.create(post(Uuid::new_v4(), "First")).await.unwrap();

        repo.delete(saved.id).await.unwrap();
        assert!(matches!(repo.delete(saved.id).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn duplicate_email_is_a_constraint_violation() {
        let repo = InMemoryUserRepository::new();
        repo.create(User::new("a@b.c".to_string(), "hash".to_string()))
            .await
            .unwrap();

        let result = repo
            .create(User::new("a@b.c".to_string(), "hash2".to_string()))
            .await;
        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }
}
