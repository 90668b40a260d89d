use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers;
use crate::shared::state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // WORKBOOK LIFECYCLE
        // ========================================
        .route("/api/workbook/load", post(handlers::hr_workbook::load))
        .route("/api/workbook/status", get(handlers::hr_workbook::status))
        // ========================================
        // D400 Global overview
        // ========================================
        .route(
            "/api/d400/overview",
            get(handlers::d400_global_overview::get_overview),
        )
        // ========================================
        // D401 Unit overview
        // ========================================
        .route(
            "/api/d401/overview",
            post(handlers::d401_unit_overview::get_overview),
        )
        .route(
            "/api/d401/departments",
            get(handlers::d401_unit_overview::get_departments),
        )
        // ========================================
        // D402 Employee profile
        // ========================================
        .route(
            "/api/d402/search",
            get(handlers::d402_employee_profile::search),
        )
        .route(
            "/api/d402/profile/:matricule",
            get(handlers::d402_employee_profile::get_profile),
        )
        .with_state(state)
}
