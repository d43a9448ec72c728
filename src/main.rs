use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use shuttle_runtime::SecretStore;
use tower_http::{services::ServeDir, trace::TraceLayer};

mod bill;
mod components;
mod config;
mod form;
mod icons;
mod overlay;
mod page;

use config::AppConfig;

#[derive(Clone)]
struct AppState {
    config: Arc<AppConfig>,
}

fn router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/", get(page::index))
        .route("/calcular", post(page::calculate))
        .route("/fechar", post(page::close))
        .with_state(state)
        .nest_service("/assets", assets)
        .layer(TraceLayer::new_for_http())
}

#[shuttle_runtime::main]
async fn main(#[shuttle_runtime::Secrets] secret_store: SecretStore) -> shuttle_axum::ShuttleAxum {
    let config = AppConfig::from_secrets(&secret_store);

    if !config.assets_dir.is_dir() {
        tracing::warn!(assets_dir = %config.assets_dir.display(), "assets directory not found");
    }
    tracing::info!(title = %config.page_title, "starting bill calculator");

    let state = AppState {
        config: Arc::new(config),
    };

    Ok(router(state).into())
}
