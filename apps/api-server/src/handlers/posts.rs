//! Post endpoints - thin HTTP layer over the post service.

use actix_web::{HttpResponse, web};
use serde::Serialize;
use uuid::Uuid;

use bulletin_core::domain::{Post, PostDraft, PostPatch};
use bulletin_core::service::PageRequest;
use bulletin_shared::ApiResponse;
use bulletin_shared::dto::PageQuery;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Serialize)]
struct PostData {
    post: Post,
}

#[derive(Serialize)]
struct PostListData {
    posts: Vec<Post>,
}

/// GET /api/posts
pub async fn list(
    state: web::Data<AppState>,
    _identity: Identity,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let page = PageRequest::new(query.page(), query.limit());
    let posts = state.service.list(page).await?;
    let results = posts.len();

    Ok(HttpResponse::Ok().json(ApiResponse::page(PostListData { posts }, results)))
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<PostDraft>,
) -> AppResult<HttpResponse> {
    let post = state
        .service
        .create(identity.user_id, body.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(PostData { post })))
}

/// GET /api/posts/{id}
pub async fn get(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state.service.get(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(PostData { post })))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<PostPatch>,
) -> AppResult<HttpResponse> {
    let post = state
        .service
        .update(identity.user_id, path.into_inner(), body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(PostData { post })))
}

/// DELETE /api/posts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state
        .service
        .delete(identity.user_id, path.into_inner())
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
