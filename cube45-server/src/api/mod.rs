//! HTTP API
//!
//! - [`health`] - liveness
//! - [`pages`] - grouped content pages
//! - [`rooms`] - room listing and room detail
//! - [`reservations`] - reservation lookup and cancellation
//! - [`site`] - navigation, location and contact

pub mod extract;
pub mod health;
pub mod pages;
pub mod reservations;
pub mod rooms;
pub mod site;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::middleware::logging_middleware;
use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// All routes, no middleware
pub fn build_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(pages::router())
        .merge(rooms::router())
        .merge(site::router())
        .merge(reservations::router(state))
}

/// Routes with the full middleware stack and state
pub fn build_app(state: AppState) -> Router {
    build_router(&state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        // Set must wrap Propagate so the generated id reaches the response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryStore;
    use crate::middleware::rate_limit::RateLimiter;
    use axum::body::Body;
    use http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use shared::models::{Reservation, Room, RoomContent, VariousContent};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn room(id: &str) -> Room {
        Room {
            id: id.into(),
            name: format!("Room {id}"),
            zone: id[..1].to_string(),
            room_type: "suite".into(),
            pool_type: None,
            room_count: 1,
            bathroom_count: 1,
            standard_occupancy: 2,
            max_occupancy: 4,
            area: 45.0,
            pet_friendly: true,
            has_fireplace: false,
            price: Decimal::new(250_000, 0),
        }
    }

    fn room_content(id: i64, page_type: &str, room_id: Option<&str>, section: &str) -> RoomContent {
        RoomContent {
            id,
            page_type: page_type.into(),
            room_id: room_id.map(str::to_string),
            section_name: section.into(),
            content: format!("/img/{section}.jpg"),
            image_url: None,
            display_order: id as i32,
            is_active: true,
        }
    }

    fn content(id: i64, name: &str, kind: &str, parent: Option<&str>) -> VariousContent {
        VariousContent {
            id,
            page_name: "facilities".into(),
            section_name: name.into(),
            content_type: kind.into(),
            title: Some(name.into()),
            subtitle: None,
            description: None,
            image_url: None,
            display_order: id as i32,
            is_active: true,
            extra_attributes: parent.map(|p| json!({ "parent_section": p })),
        }
    }

    fn reservation(id: i64, name: &str, phone: &str) -> Reservation {
        Reservation {
            id,
            booker_name: name.into(),
            booker_phone: phone.into(),
            status: "confirmed".into(),
            room_id: Some("A3".into()),
            check_in_date: None,
            check_out_date: None,
            guest_count: Some(2),
            total_price: Some(Decimal::new(500_000, 0)),
            created_at: None,
        }
    }

    fn seeded_store() -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        *store.rooms.lock().unwrap() = vec![room("A3"), room("A4"), room("C1")];
        *store.room_contents.lock().unwrap() = vec![
            room_content(1, "zone_default_a", None, "basic_type"),
            room_content(2, "zone_default_a", None, "gallery_1"),
            room_content(3, "room", Some("A3"), "gallery_2"),
            room_content(4, "room", Some("A3"), "gallery_3"),
        ];
        *store.contents.lock().unwrap() = vec![
            content(1, "banner", "section", None),
            content(2, "pool", "section", None),
            content(3, "sauna", "section", None),
            content(4, "infinity", "card", Some("pool")),
            content(5, "kids", "card", Some("pool")),
            content(6, "lost", "card", Some("bbq")),
        ];
        *store.reservations.lock().unwrap() = vec![
            reservation(1, "Lee", "010-1234-5678"),
            reservation(2, "Lee", "010-1234-5678"),
        ];
        store
    }

    fn app(store: Arc<MemoryStore>) -> Router {
        build_app(AppState::in_memory(store))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .header("x-forwarded-for", "203.0.113.7")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = app(seeded_store());
        let (status, body) = send(&app, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "cube45-server");
    }

    #[tokio::test]
    async fn test_request_id_is_propagated() {
        let app = app(seeded_store());
        let response = app.oneshot(get("/health")).await.unwrap();
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn test_page_grouping() {
        let app = app(seeded_store());
        let (status, body) = send(&app, get("/api/pages/facilities")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["banner"]["section_name"], "banner");

        let sections = body["sections"].as_array().unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0]["section"]["section_name"], "pool");
        assert_eq!(sections[0]["cards"].as_array().unwrap().len(), 2);
        assert_eq!(sections[1]["section"]["section_name"], "sauna");
        assert!(sections[1]["cards"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_page_is_404() {
        let app = app(seeded_store());
        let (status, body) = send(&app, get("/api/pages/casino")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 6001);
    }

    #[tokio::test]
    async fn test_page_degrades_when_store_fails() {
        let store = seeded_store();
        store.set_failing(true);
        let app = app(store);

        let (status, body) = send(&app, get("/api/pages/facilities")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["banner"].is_null());
        assert!(body["sections"].as_array().unwrap().is_empty());

        let (status, body) = send(&app, get("/api/rooms")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_room_listing() {
        let app = app(seeded_store());
        let (_, all) = send(&app, get("/api/rooms")).await;
        assert_eq!(all.as_array().unwrap().len(), 3);

        let (status, zone_a) = send(&app, get("/api/rooms/a")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(zone_a.as_array().unwrap().len(), 2);

        let (status, _) = send(&app, get("/api/rooms/x")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_room_detail_with_carousel() {
        let app = app(seeded_store());
        let (status, body) = send(&app, get("/api/rooms/a/A3?image=4")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["room"]["id"], "A3");
        assert_eq!(body["path"], "/room/a/A3");
        assert_eq!(
            body["gallery"],
            json!(["/img/gallery_1.jpg", "/img/gallery_2.jpg", "/img/gallery_3.jpg"])
        );
        // 4 wraps to 1 in a 3-image gallery
        assert_eq!(body["carousel"]["current"], 1);
        assert_eq!(body["carousel"]["previous"], 0);
        assert_eq!(body["carousel"]["next"], 2);
    }

    #[tokio::test]
    async fn test_room_detail_not_found() {
        let app = app(seeded_store());
        let (status, _) = send(&app, get("/api/rooms/b/A3")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(&app, get("/api/rooms/a/A9")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 6101);
    }

    #[tokio::test]
    async fn test_reservation_lookup_and_cancel() {
        let app = app(seeded_store());
        let who = json!({ "name": " Lee ", "phone": "010-1234-5678" });

        let (status, body) = send(&app, post("/api/reservations/lookup", who.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], 0);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);

        let (_, body) = send(&app, post("/api/reservations/cancel", who.clone())).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"][0]["status"], "cancelled");

        let (status, body) = send(&app, post("/api/reservations/cancel", who.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"].as_array().unwrap().is_empty());

        let (_, body) = send(&app, post("/api/reservations/lookup", who)).await;
        assert!(body["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reservation_validation() {
        let app = app(seeded_store());
        let (status, body) = send(
            &app,
            post("/api/reservations/lookup", json!({ "name": "", "phone": "010" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 2);
        assert_eq!(body["details"]["field"], "name");
    }

    #[tokio::test]
    async fn test_reservation_backend_failure() {
        let store = seeded_store();
        store.set_failing(true);
        let app = app(store);
        let who = json!({ "name": "Lee", "phone": "010-1234-5678" });

        let (status, body) = send(&app, post("/api/reservations/lookup", who.clone())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], 4001);

        let (status, body) = send(&app, post("/api/reservations/cancel", who)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], 4002);
    }

    #[tokio::test]
    async fn test_reservation_rate_limit() {
        let mut state = AppState::in_memory(seeded_store());
        state.rate_limiter = RateLimiter::per_minute(2);
        let app = build_app(state);
        let who = json!({ "name": "Kim", "phone": "010-0000-0000" });

        for _ in 0..2 {
            let (status, _) = send(&app, post("/api/reservations/lookup", who.clone())).await;
            assert_eq!(status, StatusCode::OK);
        }
        let (status, body) = send(&app, post("/api/reservations/cancel", who)).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body["code"], 9);

        // other pages are not limited
        let (status, _) = send(&app, get("/api/site/navigation")).await;
        assert_eq!(status, StatusCode::OK);
    }

    fn lookup_from(forwarded_for: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/reservations/lookup")
            .header("content-type", "application/json")
            .header("x-forwarded-for", forwarded_for)
            .body(Body::from(
                json!({ "name": "Kim", "phone": "010-0000-0000" }).to_string(),
            ))
            .unwrap()
    }

    #[tokio::test]
    async fn test_rotating_forwarded_header_is_still_limited() {
        let mut state = AppState::in_memory(seeded_store());
        state.rate_limiter = RateLimiter::per_minute(2);
        let app = build_app(state);

        let mut statuses = Vec::new();
        for i in 0..10 {
            let (status, _) = send(&app, lookup_from(&format!("198.51.100.{i}"))).await;
            statuses.push(status);
        }
        assert_eq!(statuses[..2], [StatusCode::OK, StatusCode::OK]);
        assert!(statuses[2..].iter().all(|s| *s == StatusCode::TOO_MANY_REQUESTS));
    }

    #[tokio::test]
    async fn test_forwarded_header_keys_limit_behind_trusted_proxy() {
        let mut state = AppState::in_memory(seeded_store());
        state.rate_limiter = RateLimiter::per_minute(1);
        state.trust_proxy = true;
        let app = build_app(state);

        let (status, _) = send(&app, lookup_from("198.51.100.1")).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&app, lookup_from("198.51.100.1")).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        let (status, _) = send(&app, lookup_from("198.51.100.2")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_body_uses_error_envelope() {
        let app = app(seeded_store());
        let request = Request::builder()
            .method("POST")
            .uri("/api/reservations/lookup")
            .header("content-type", "application/json")
            .body(Body::from("{\"name\": \"Lee\""))
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 5);
        assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));

        let request = Request::builder()
            .method("POST")
            .uri("/api/reservations/cancel")
            .body(Body::from(json!({ "name": "Lee", "phone": "010" }).to_string()))
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 5);
    }

    #[tokio::test]
    async fn test_bad_image_query_uses_error_envelope() {
        let app = app(seeded_store());
        let (status, body) = send(&app, get("/api/rooms/a/A3?image=-1")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 5);

        let (status, _) = send(&app, get("/api/rooms/a/A3?image=abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_site_endpoints() {
        let app = app(seeded_store());

        let (_, nav) = send(&app, get("/api/site/navigation")).await;
        let rooms = nav
            .as_array()
            .unwrap()
            .iter()
            .find(|n| n["label"] == "Rooms")
            .unwrap();
        assert_eq!(rooms["children"].as_array().unwrap().len(), 4);
        assert_eq!(nav.as_array().unwrap().last().unwrap()["path"], "/Contact");

        let (_, admin) = send(&app, get("/api/site/admin-navigation")).await;
        assert_eq!(admin[0]["path"], "/admin");

        let (_, location) = send(&app, get("/api/site/location")).await;
        assert_eq!(location["zoom"], 16);

        let (_, contact) = send(&app, get("/api/site/contact")).await;
        assert_eq!(contact["name"], "Cube45");
    }
}
