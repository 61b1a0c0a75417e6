//! Wire DTOs for the Womecare backend REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads field-for-field so serde
//! round-trips stay lossless. List endpoints wrap their arrays in envelope
//! objects (`{"contacts": [...]}` etc.) which are modeled explicitly here
//! rather than unwrapped ad hoc at call sites. Fields the backend may omit
//! carry `Option` or `#[serde(default)]` so a sparse response never fails to
//! decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user's profile as returned by login and registration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique numeric user identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Account email, also a login credential.
    pub email: String,
    /// Phone number, also a login credential.
    pub phone: String,
    /// Age in years, if provided during registration.
    #[serde(default)]
    pub age: Option<i64>,
    /// Blood group (e.g. `"O+"`), if provided.
    #[serde(default)]
    pub blood_group: Option<String>,
    /// Free-text medical conditions, if provided.
    #[serde(default)]
    pub medical_conditions: Option<String>,
}

/// Successful `/login` and `/users` response: fresh identity plus credential.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    /// Opaque bearer token proving the identity to the backend.
    pub token: String,
}

/// Login request body. Authentication is email + phone, no password.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub phone: String,
}

/// Registration profile record, forwarded to `/users` unmodified.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_conditions: Option<String>,
}

/// Profile update body for `PUT /users/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: Option<i64>,
    pub blood_group: String,
    pub medical_conditions: String,
}

/// Aggregate payload for the dashboard screen.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub emergency_contacts: Vec<EmergencyContact>,
    #[serde(default)]
    pub recent_locations: Vec<LocationPoint>,
    #[serde(default)]
    pub sos_alerts: Vec<SosAlert>,
    /// Present only while a pregnancy tracker is active; shape owned by the
    /// maternity endpoints, so it is kept opaque here.
    #[serde(default)]
    pub pregnancy_tracker: Option<serde_json::Value>,
}

/// A person notified when an SOS alert fires.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub id: i64,
    pub name: String,
    pub relationship: String,
    pub phone: String,
    pub email: String,
    /// Primary contacts are alerted first by the backend fan-out.
    #[serde(default)]
    pub is_primary: bool,
}

/// Envelope for `GET /emergency-contacts/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ContactList {
    #[serde(default)]
    pub contacts: Vec<EmergencyContact>,
}

/// Create/replace body for an emergency contact.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub relationship: String,
    pub phone: String,
    pub email: String,
    pub is_primary: bool,
}

/// A previously raised SOS alert, as listed on the dashboard.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SosAlert {
    pub id: i64,
    pub alert_type: String,
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Outbound SOS alert. Coordinates are omitted entirely when the device
/// could not produce a fix, and the message says why.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SosRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    pub alert_type: String,
    pub message: String,
}

/// One stored location fix.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LocationPoint {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: f64,
    #[serde(default)]
    pub accuracy_description: Option<String>,
    /// Reverse-geocoded address, when the backend resolved one.
    #[serde(default)]
    pub address: Option<String>,
    pub timestamp: String,
    #[serde(default)]
    pub location_source: Option<String>,
}

/// Envelope for `GET /location/{id}/history`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LocationHistory {
    #[serde(default)]
    pub locations: Vec<LocationPoint>,
}

/// Live position sample pushed while tracking is active.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LiveLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: f64,
    pub altitude: Option<f64>,
    pub heading: Option<f64>,
    pub speed: Option<f64>,
    pub location_source: String,
}

/// Envelope for `POST /location/{id}/live`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LiveLocationSaved {
    pub location: LocationPoint,
}

/// Body for `POST /location/{id}/track`, announcing a tracking session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrackRequest {
    /// Desired update interval in seconds.
    pub interval: u32,
    pub high_accuracy: bool,
}

/// One logged menstrual cycle.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PeriodEntry {
    pub id: i64,
    pub cycle_start_date: String,
    pub cycle_length: i64,
    pub period_length: i64,
    #[serde(default)]
    pub flow_intensity: String,
    #[serde(default)]
    pub symptoms: String,
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub notes: String,
}

/// Envelope for `GET /period-tracker/{id}/history`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PeriodHistory {
    #[serde(default)]
    pub periods: Vec<PeriodEntry>,
}

/// Body for `POST /period-tracker/{id}/log`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PeriodLog {
    pub cycle_start_date: String,
    pub cycle_length: i64,
    pub period_length: i64,
    pub flow_intensity: String,
    pub symptoms: String,
    pub mood: String,
    pub notes: String,
}

/// Next-period prediction computed server-side.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Prediction {
    pub predicted_date: String,
    pub average_cycle_length: f64,
    pub message: String,
}

/// Pregnancy progress summary for the maternity screen.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MaternityDashboard {
    pub due_date: String,
    pub current_week: i64,
    pub days_pregnant: i64,
    pub days_remaining: i64,
    pub trimester: i64,
    #[serde(default)]
    pub current_week_guide: Option<WeekGuide>,
}

/// Week-by-week pregnancy guide content.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WeekGuide {
    pub title: String,
    pub baby_development: String,
    pub mother_changes: String,
    pub tips: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A logged pregnancy symptom.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Symptom {
    pub id: i64,
    pub symptom_name: String,
    /// Severity on a 1-5 scale.
    pub severity: i64,
    #[serde(default)]
    pub notes: String,
    pub log_date: String,
}

/// Envelope for `GET /maternity/{id}/symptoms`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SymptomList {
    #[serde(default)]
    pub symptoms: Vec<Symptom>,
}

/// Body for `POST /maternity/{id}/symptoms`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SymptomForm {
    pub symptom_name: String,
    pub severity: i64,
    pub notes: String,
}

/// A completed kick-counting session.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct KickSession {
    pub id: i64,
    pub start_time: String,
    pub end_time: String,
    pub kick_count: i64,
    pub duration_minutes: f64,
}

/// Envelope for `GET /maternity/{id}/kick-counter`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct KickSessionList {
    #[serde(default)]
    pub sessions: Vec<KickSession>,
}

/// Body for `POST /maternity/{id}/kick-counter`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KickSessionReport {
    /// ISO 8601 session start.
    pub start_time: String,
    /// ISO 8601 session end.
    pub end_time: String,
    pub kick_count: i64,
}

/// A timed contraction.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Contraction {
    pub id: i64,
    pub start_time: String,
    pub duration_seconds: i64,
    #[serde(default)]
    pub frequency_minutes: Option<f64>,
}

/// Envelope for `GET /maternity/{id}/contraction-timer`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ContractionList {
    #[serde(default)]
    pub contractions: Vec<Contraction>,
}

/// Body for `POST /maternity/{id}/contraction-timer`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContractionReport {
    pub duration_seconds: i64,
}

/// Body for `POST /maternity/{id}/start`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StartPregnancy {
    /// Last menstrual period date (`YYYY-MM-DD`); the backend derives the
    /// due date and progress from it.
    pub lmp_date: String,
}

/// A community forum post.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Envelope for `GET /community/posts`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PostList {
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// Body for `POST /community/posts`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub category: String,
    pub user_id: i64,
}

/// A comment on a community post.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CommentItem {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: String,
}

/// Envelope for `GET /community/posts/{id}/comments`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CommentList {
    #[serde(default)]
    pub comments: Vec<CommentItem>,
}

/// Body for `POST /community/posts/{id}/comments`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewComment {
    pub user_id: i64,
    pub content: String,
}
