//! Domain entities - the core business objects.

mod post;
mod user;

pub use post::{Post, PostDraft, PostPatch, PostStatus};
pub use user::User;
