//! Application services built on the ports.

mod posts;

pub use posts::{PageRequest, PostService};
