//! # Bulletin Shared
//!
//! Wire types shared between server and clients: the uniform response
//! envelope and the request DTOs.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, FailResponse};
