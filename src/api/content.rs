//! Read-only site content endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::ApiResult;
use crate::models::{BlogPost, CaseStudy, Resource, Service, Stats, TeamMember, Testimonial};
use crate::AppState;

/// GET /api/testimonials
pub async fn list_testimonials(State(state): State<AppState>) -> ApiResult<Vec<Testimonial>> {
    Ok(Json(state.content.list_testimonials().await?))
}

/// GET /api/case-studies
pub async fn list_case_studies(State(state): State<AppState>) -> ApiResult<Vec<CaseStudy>> {
    Ok(Json(state.content.list_case_studies().await?))
}

/// GET /api/team
pub async fn list_team(State(state): State<AppState>) -> ApiResult<Vec<TeamMember>> {
    Ok(Json(state.content.list_team().await?))
}

/// GET /api/services
pub async fn list_services(State(state): State<AppState>) -> ApiResult<Vec<Service>> {
    Ok(Json(state.content.list_services().await?))
}

/// GET /api/resources
pub async fn list_resources(State(state): State<AppState>) -> ApiResult<Vec<Resource>> {
    Ok(Json(state.content.list_resources().await?))
}

/// GET /api/blog - Published posts, newest first.
pub async fn list_blog_posts(State(state): State<AppState>) -> ApiResult<Vec<BlogPost>> {
    Ok(Json(state.content.list_blog_posts().await?))
}

/// GET /api/blog/{slug}
pub async fn get_blog_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<BlogPost> {
    Ok(Json(state.content.get_blog_post(&slug).await?))
}

/// GET /api/stats - Fixed headline numbers; never touches the store.
pub async fn get_stats(State(state): State<AppState>) -> Json<Stats> {
    Json(state.content.stats())
}
