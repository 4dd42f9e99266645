use axum::{
    routing::{delete, get},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::create_cors_layer;
use crate::handlers::{all_data, events, feeds, health_check, not_found, notifications, trash};
use crate::AppState;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(all_data))
        .route("/health", get(health_check))
        .route("/event", get(events::list_events).post(events::create_event))
        .route(
            "/event/:name",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        .route("/trash", get(trash::list_trash))
        .route(
            "/trash/:name",
            get(trash::restore_event).delete(trash::purge_event),
        )
        .route("/notifications", get(notifications::list_notifications))
        .route(
            "/notifications/:id",
            delete(notifications::delete_notification),
        )
        .route("/latest", get(feeds::list_news).post(feeds::create_news))
        .route(
            "/registration",
            get(feeds::list_registrations).post(feeds::create_registration),
        )
        .route(
            "/summary",
            get(feeds::list_summaries).post(feeds::create_summary),
        )
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer()),
        )
        .with_state(state)
}
