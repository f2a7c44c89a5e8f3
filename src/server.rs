use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::Path,
    http::{Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::NaiveDate;
use hyper::Server;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::error;

use crate::domain::{Brand, BrandStatus, Founder};
use crate::storage::CatalogStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
}

fn media_url(relative: String) -> String {
    format!("/media/{relative}")
}

/// Brand as exposed over the API: asset paths become `/media/...` URLs and
/// the sort key keeps its public name `order`.
#[derive(Debug, Serialize)]
pub struct ApiBrand {
    pub id: i64,
    pub name: String,
    pub logo: Option<String>,
    pub hero_image: Option<String>,
    pub one_liner: String,
    pub description: String,
    pub launch_date: Option<NaiveDate>,
    pub status: BrandStatus,
    pub website_url: Option<String>,
    pub order: u32,
}

impl From<Brand> for ApiBrand {
    fn from(brand: Brand) -> Self {
        Self {
            id: brand.id.unwrap_or_default(),
            name: brand.name,
            logo: brand.logo.map(media_url),
            hero_image: brand.hero_image.map(media_url),
            one_liner: brand.one_liner,
            description: brand.description,
            launch_date: brand.launch_date,
            status: brand.status,
            website_url: brand.website_url,
            order: brand.sort_order,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiFounder {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub photo: Option<String>,
    pub bio: String,
    pub vision_quote: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub order: u32,
}

impl From<Founder> for ApiFounder {
    fn from(founder: Founder) -> Self {
        Self {
            id: founder.id.unwrap_or_default(),
            name: founder.name,
            role: founder.role,
            photo: founder.photo.map(media_url),
            bio: founder.bio,
            vision_quote: founder.vision_quote,
            linkedin_url: founder.linkedin_url,
            twitter_url: founder.twitter_url,
            order: founder.sort_order,
        }
    }
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "alevate-backend",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

fn not_found() -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"detail": "Not found."})),
    )
        .into_response()
}

fn internal_error(context: &str, e: impl std::fmt::Display) -> axum::response::Response {
    error!("{context}: {e}");
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
}

async fn list_brands(Extension(state): Extension<AppState>) -> impl IntoResponse {
    match state.store.get_all_brands() {
        Ok(brands) => {
            Json(brands.into_iter().map(ApiBrand::from).collect::<Vec<_>>()).into_response()
        }
        Err(e) => internal_error("Failed to list brands", e),
    }
}

async fn get_brand(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.store.get_brand_by_id(id) {
        Ok(Some(brand)) => Json(ApiBrand::from(brand)).into_response(),
        Ok(None) => not_found(),
        Err(e) => internal_error("Failed to fetch brand", e),
    }
}

async fn list_founders(Extension(state): Extension<AppState>) -> impl IntoResponse {
    match state.store.get_all_founders() {
        Ok(founders) => {
            Json(founders.into_iter().map(ApiFounder::from).collect::<Vec<_>>()).into_response()
        }
        Err(e) => internal_error("Failed to list founders", e),
    }
}

async fn get_founder(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.store.get_founder_by_id(id) {
        Ok(Some(founder)) => Json(ApiFounder::from(founder)).into_response(),
        Ok(None) => not_found(),
        Err(e) => internal_error("Failed to fetch founder", e),
    }
}

/// Create the HTTP router: read-only catalog endpoints plus media serving.
pub fn create_router(store: Arc<dyn CatalogStore>, media_root: PathBuf) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let state = AppState { store };

    Router::new()
        .route("/health", get(health))
        .route("/api/brands", get(list_brands))
        .route("/api/brands/:id", get(get_brand))
        .route("/api/founders", get(list_founders))
        .route("/api/founders/:id", get(get_founder))
        .nest_service("/media", ServeDir::new(media_root))
        .layer(Extension(state))
        .layer(ServiceBuilder::new().layer(cors))
}

/// Start the HTTP server on the specified address
pub async fn start_server(
    addr: SocketAddr,
    store: Arc<dyn CatalogStore>,
    media_root: PathBuf,
) -> anyhow::Result<()> {
    let app = create_router(store, media_root);

    println!("🚀 Catalog API running on http://{addr}");
    println!("💚 Health check: http://{addr}/health");
    println!("🏷️  Brands:       http://{addr}/api/brands");
    println!("🧑 Founders:     http://{addr}/api/founders");

    Server::bind(&addr).serve(app.into_make_service()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_view_maps_assets_to_media_urls() {
        let brand = Brand {
            id: Some(3),
            name: "Lumina".to_string(),
            logo: Some("brands/logos/lumina.png".to_string()),
            hero_image: None,
            one_liner: "one liner".to_string(),
            description: "description".to_string(),
            launch_date: None,
            status: BrandStatus::Revenue,
            website_url: Some("https://lumina.example.com".to_string()),
            sort_order: 1,
        };

        let view = ApiBrand::from(brand);
        assert_eq!(view.id, 3);
        assert_eq!(view.logo.as_deref(), Some("/media/brands/logos/lumina.png"));
        assert_eq!(view.hero_image, None);
        assert_eq!(view.order, 1);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["status"], "revenue");
        assert_eq!(json["launch_date"], serde_json::Value::Null);
    }
}
