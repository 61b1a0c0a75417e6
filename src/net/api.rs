//! Typed REST endpoints, one function per backend operation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Thin wrappers over the `http` pipeline: each function names a path, a DTO
//! pair, and the fallback message a screen shows when the backend's error
//! payload is empty. No retries here; a screen that wants to retry resubmits,
//! which keeps non-idempotent operations (posting, SOS) single-shot by
//! default.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{self, ApiError};
use super::types::{
    AuthResponse, CommentList, ContactForm, ContactList, ContractionList, ContractionReport,
    DashboardData, KickSessionList, KickSessionReport, LiveLocation, LiveLocationSaved,
    LocationHistory, LoginRequest, MaternityDashboard, NewComment, NewPost, PeriodHistory,
    PeriodLog, PostList, Prediction, ProfileUpdate, RegisterRequest, SosRequest, StartPregnancy,
    SymptomForm, SymptomList, TrackRequest,
};

fn maternity_path(user_id: i64, section: &str) -> String {
    format!("/maternity/{user_id}/{section}")
}

fn posts_path(category: Option<&str>) -> String {
    match category {
        Some(category) => format!("/community/posts?category={category}"),
        None => "/community/posts".to_owned(),
    }
}

fn comments_path(post_id: i64) -> String {
    format!("/community/posts/{post_id}/comments")
}

/// Exchange email + phone for a fresh identity and credential.
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    http::post_json("/login", request, "Login failed").await
}

/// Create an account; same response contract as login.
pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    http::post_json("/users", request, "Registration failed").await
}

pub async fn update_profile(user_id: i64, update: &ProfileUpdate) -> Result<(), ApiError> {
    http::put_unit(&format!("/users/{user_id}"), update, "Failed to update profile").await
}

pub async fn fetch_dashboard(user_id: i64) -> Result<DashboardData, ApiError> {
    http::get_json(&format!("/dashboard/{user_id}"), "Failed to load dashboard data").await
}

/// Raise an SOS alert; the backend fans it out to emergency contacts.
pub async fn send_sos(user_id: i64, request: &SosRequest) -> Result<(), ApiError> {
    http::post_unit(&format!("/sos/{user_id}"), request, "Failed to send SOS alert").await
}

pub async fn fetch_contacts(user_id: i64) -> Result<ContactList, ApiError> {
    http::get_json(&format!("/emergency-contacts/{user_id}"), "Failed to load contacts").await
}

pub async fn create_contact(user_id: i64, form: &ContactForm) -> Result<(), ApiError> {
    http::post_unit(&format!("/emergency-contacts/{user_id}"), form, "Failed to save contact").await
}

pub async fn delete_contact(user_id: i64, contact_id: i64) -> Result<(), ApiError> {
    http::delete_unit(
        &format!("/emergency-contacts/{user_id}/{contact_id}"),
        "Failed to delete contact",
    )
    .await
}

pub async fn fetch_period_history(user_id: i64) -> Result<PeriodHistory, ApiError> {
    http::get_json(
        &format!("/period-tracker/{user_id}/history"),
        "Failed to load period history",
    )
    .await
}

pub async fn fetch_period_prediction(user_id: i64) -> Result<Prediction, ApiError> {
    http::get_json(&format!("/period-tracker/{user_id}/predict"), "No prediction available").await
}

pub async fn log_period(user_id: i64, log: &PeriodLog) -> Result<(), ApiError> {
    http::post_unit(&format!("/period-tracker/{user_id}/log"), log, "Failed to log period").await
}

pub async fn fetch_maternity_dashboard(user_id: i64) -> Result<MaternityDashboard, ApiError> {
    http::get_json(&maternity_path(user_id, "dashboard"), "No active pregnancy tracker").await
}

pub async fn start_pregnancy(user_id: i64, start: &StartPregnancy) -> Result<(), ApiError> {
    http::post_unit(
        &maternity_path(user_id, "start"),
        start,
        "Failed to start pregnancy tracking",
    )
    .await
}

pub async fn fetch_symptoms(user_id: i64) -> Result<SymptomList, ApiError> {
    http::get_json(&maternity_path(user_id, "symptoms"), "Failed to load symptoms").await
}

pub async fn log_symptom(user_id: i64, form: &SymptomForm) -> Result<(), ApiError> {
    http::post_unit(&maternity_path(user_id, "symptoms"), form, "Failed to log symptom").await
}

pub async fn fetch_kick_sessions(user_id: i64) -> Result<KickSessionList, ApiError> {
    http::get_json(&maternity_path(user_id, "kick-counter"), "Failed to load kick sessions").await
}

pub async fn save_kick_session(user_id: i64, report: &KickSessionReport) -> Result<(), ApiError> {
    http::post_unit(
        &maternity_path(user_id, "kick-counter"),
        report,
        "Failed to save kick session",
    )
    .await
}

pub async fn fetch_contractions(user_id: i64) -> Result<ContractionList, ApiError> {
    http::get_json(
        &maternity_path(user_id, "contraction-timer"),
        "Failed to load contractions",
    )
    .await
}

pub async fn save_contraction(user_id: i64, report: &ContractionReport) -> Result<(), ApiError> {
    http::post_unit(
        &maternity_path(user_id, "contraction-timer"),
        report,
        "Failed to save contraction",
    )
    .await
}

pub async fn fetch_location_history(user_id: i64, limit: u32) -> Result<LocationHistory, ApiError> {
    http::get_json(
        &format!("/location/{user_id}/history?limit={limit}"),
        "Failed to load location history",
    )
    .await
}

/// Announce a live-tracking session before the watch loop starts pushing.
pub async fn start_tracking(user_id: i64, request: &TrackRequest) -> Result<(), ApiError> {
    http::post_unit(&format!("/location/{user_id}/track"), request, "Failed to start tracking").await
}

pub async fn push_live_location(
    user_id: i64,
    sample: &LiveLocation,
) -> Result<LiveLocationSaved, ApiError> {
    http::post_json(&format!("/location/{user_id}/live"), sample, "Failed to update location").await
}

/// Fetch forum posts, optionally restricted to one category.
pub async fn fetch_posts(category: Option<&str>) -> Result<PostList, ApiError> {
    http::get_json(&posts_path(category), "Failed to load posts").await
}

pub async fn create_post(post: &NewPost) -> Result<(), ApiError> {
    http::post_unit(&posts_path(None), post, "Failed to create post").await
}

pub async fn fetch_comments(post_id: i64) -> Result<CommentList, ApiError> {
    http::get_json(&comments_path(post_id), "Failed to load comments").await
}

pub async fn add_comment(post_id: i64, comment: &NewComment) -> Result<(), ApiError> {
    http::post_unit(&comments_path(post_id), comment, "Failed to add comment").await
}
