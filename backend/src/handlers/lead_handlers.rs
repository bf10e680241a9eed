use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::handlers::lead_dtos::{
    DemoRequestCreatedResponse, DemoRequestPayload, HealthResponse, LeadValidationError,
    MessageResponse, NewsletterPayload,
};
use crate::models::lead_models::{DemoRequest, NewDemoRequest, SubscriptionSource};
use crate::repositories::lead_repository::{RepositoryError, Subscription};
use crate::AppState;

type ApiError = (StatusCode, Json<Value>);

fn now_epoch() -> i32 {
    chrono::Utc::now().timestamp() as i32
}

fn validation_error(e: LeadValidationError) -> ApiError {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({"error": e.to_string()})),
    )
}

/// Unreadable bodies get the same JSON error shape as validation failures.
fn body_error(rejection: JsonRejection) -> ApiError {
    warn!("Rejected request body: {}", rejection.body_text());
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({"error": format!("Invalid request: {}", rejection.body_text())})),
    )
}

fn database_error(e: RepositoryError) -> ApiError {
    error!("Database error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "Something went wrong on our side, please try again later"})),
    )
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let database = match state.leads.ping() {
        Ok(()) => "ok",
        Err(e) => {
            error!("Health check could not reach the database: {}", e);
            "unavailable"
        }
    };
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}

pub async fn create_demo_request(
    State(state): State<Arc<AppState>>,
    payload_result: Result<Json<DemoRequestPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<DemoRequestCreatedResponse>), ApiError> {
    let Json(payload) = payload_result.map_err(body_error)?;
    let valid = payload.validate().map_err(validation_error)?;

    let newsletter = valid.subscribe.then_some(SubscriptionSource::DemoForm);
    let new_request = NewDemoRequest {
        reference: uuid::Uuid::new_v4().to_string(),
        first_name: valid.first_name,
        last_name: valid.last_name,
        company: valid.company,
        job_title: valid.job_title,
        phone: valid.phone,
        country: valid.country,
        email: valid.email,
        subscribe: valid.subscribe,
        created_at: now_epoch(),
    };

    let stored = state
        .leads
        .record_demo_request(new_request, newsletter)
        .map_err(database_error)?;

    info!(
        "Demo request {} stored for company {} ({})",
        stored.reference, stored.company, stored.country
    );
    sentry::add_breadcrumb(sentry::Breadcrumb {
        category: Some("leads".into()),
        message: Some(format!("demo request {}", stored.reference)),
        ..Default::default()
    });

    Ok((
        StatusCode::CREATED,
        Json(DemoRequestCreatedResponse {
            reference: stored.reference,
            message: format!(
                "Thanks {}! Our team will reach out within one business day to schedule your demo.",
                stored.first_name
            ),
        }),
    ))
}

pub async fn subscribe_newsletter(
    State(state): State<Arc<AppState>>,
    payload_result: Result<Json<NewsletterPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(payload) = payload_result.map_err(body_error)?;
    let email = payload.validate().map_err(validation_error)?;

    let outcome = state
        .leads
        .subscribe(&email, SubscriptionSource::Footer, now_epoch())
        .map_err(database_error)?;

    let (status, message) = match outcome {
        Subscription::Created => {
            info!("New newsletter subscriber");
            (StatusCode::CREATED, "Thanks for subscribing! Watch your inbox for our next threat briefing.")
        }
        Subscription::AlreadySubscribed => (StatusCode::OK, "You're already subscribed."),
    };

    Ok((status, Json(MessageResponse { message: message.to_string() })))
}

pub async fn list_demo_requests(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DemoRequest>>, ApiError> {
    let requests = state.leads.list_demo_requests().map_err(database_error)?;
    Ok(Json(requests))
}

pub async fn list_newsletter_subscribers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let subscribers = state.leads.list_subscribers().map_err(database_error)?;
    Ok(Json(json!({
        "count": subscribers.len(),
        "subscribers": subscribers,
    })))
}
