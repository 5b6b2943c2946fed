//! Post service - ownership-checked orchestration over the post store.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Post, PostDraft, PostPatch};
use crate::error::DomainError;
use crate::ports::{PostRepository, UserRepository};

/// A validated page request. `page` and `limit` are both at least 1.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    pub const DEFAULT_PAGE: u64 = 1;
    pub const DEFAULT_LIMIT: u64 = 10;

    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    pub fn skip(&self) -> u64 {
        (self.page - 1) * self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// The post service.
///
/// Carries the ownership contract: posts are created under the caller's
/// identity and mutated or deleted only by their owner. The store handles
/// are injected so tests can substitute in-memory implementations.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { posts, users }
    }

    /// Create a post owned by `author_id`.
    ///
    /// The caller must resolve to an existing user. Ownership comes from
    /// the authenticated identity only; the draft cannot carry an owner.
    pub async fn create(&self, author_id: Uuid, draft: PostDraft) -> Result<Post, DomainError> {
        if self.users.find_by_id(author_id).await?.is_none() {
            return Err(DomainError::Unauthorized);
        }

        let post = Post::new(author_id, draft)?;
        let saved = self.posts.create(post).await?;

        tracing::debug!(post_id = %saved.id, user_id = %author_id, "Post created");
        Ok(saved)
    }

    /// A page of posts, most recent first. Out-of-range pages come back
    /// empty rather than failing.
    pub async fn list(&self, page: PageRequest) -> Result<Vec<Post>, DomainError> {
        let posts = self.posts.find_page(page.skip(), page.limit).await?;
        Ok(posts)
    }

    /// Fetch a single post, counting the read as one view.
    ///
    /// The returned post reflects the incremented counter.
    pub async fn get(&self, id: Uuid) -> Result<Post, DomainError> {
        self.posts
            .record_view(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    /// Apply a partial update on behalf of `actor_id`.
    pub async fn update(
        &self,
        actor_id: Uuid,
        id: Uuid,
        patch: PostPatch,
    ) -> Result<Post, DomainError> {
        let mut post = self.authorize(actor_id, id).await?;

        post.apply(patch)?;
        let updated = self.posts.update(post).await?;

        tracing::debug!(post_id = %id, user_id = %actor_id, "Post updated");
        Ok(updated)
    }

    /// Permanently delete a post on behalf of `actor_id`.
    pub async fn delete(&self, actor_id: Uuid, id: Uuid) -> Result<(), DomainError> {
        self.authorize(actor_id, id).await?;
        self.posts.delete(id).await?;

        tracing::debug!(post_id = %id, user_id = %actor_id, "Post deleted");
        Ok(())
    }

    /// The authorization ladder shared by update and delete: the actor must
    /// resolve to a user, the post must exist, and the actor must own it.
    async fn authorize(&self, actor_id: Uuid, id: Uuid) -> Result<Post, DomainError> {
        if self.users.find_by_id(actor_id).await?.is_none() {
            return Err(DomainError::Unauthorized);
        }

        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))?;

        if post.user_id != actor_id {
            tracing::debug!(post_id = %id, user_id = %actor_id, "Ownership check failed");
            return Err(DomainError::Forbidden);
        }

        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_skip_arithmetic() {
        assert_eq!(PageRequest::new(1, 10).skip(), 0);
        assert_eq!(PageRequest::new(3, 10).skip(), 20);
        assert_eq!(PageRequest::new(2, 7).skip(), 7);
    }

    #[test]
    fn page_request_floors_at_one() {
        let page = PageRequest::new(0, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 1);
    }

    #[test]
    fn page_request_defaults() {
        let page = PageRequest::default();
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);
    }
}
