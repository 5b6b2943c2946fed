use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, User};
use crate::error::RepoError;

/// Post store contract.
///
/// `record_view` is deliberately separate from `update`: it bumps the view
/// counter and nothing else, without re-running field validation.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a freshly created post.
    async fn create(&self, post: Post) -> Result<Post, RepoError>;

    /// Find a post by its ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// A page of posts ordered by creation time, most recent first.
    async fn find_page(&self, skip: u64, limit: u64) -> Result<Vec<Post>, RepoError>;

    /// Replace an existing post with an already-validated record.
    /// Fails with `RepoError::NotFound` if the ID no longer exists.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Increment the view counter by one and return the post after the
    /// increment, or `None` if the ID does not exist.
    async fn record_view(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Remove a post permanently. Fails with `RepoError::NotFound` if the
    /// ID does not exist.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}

/// User store contract.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError>;

    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Persist a new user.
    async fn create(&self, user: User) -> Result<User, RepoError>;
}
