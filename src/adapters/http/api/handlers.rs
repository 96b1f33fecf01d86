//! HTTP handlers for the survey action API.
//!
//! One POST endpoint dispatches on the `action` field of the JSON body, the
//! way the kiosk and admin clients speak to the store. Aggregates and the
//! CSV export get their own read-only GET routes.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

use crate::application::handlers::{
    AdminLoginCommand, AdminLoginHandler, AdminSessionRefresher, BuildReportHandler,
    DeleteResponsesHandler, GetDashboardHandler, ListResponsesHandler, SubmitResponseCommand,
    SubmitResponseHandler,
};
use crate::adapters::export::CsvReportExporter;
use crate::domain::foundation::{CounterId, DomainError, ErrorCode, ResponseId};
use crate::domain::scheme::SurveyScheme;
use crate::ports::{AdminCredentialVerifier, AdminTokenService, ResponseStore};

use super::dto::{AdminLoginData, ApiEnvelope, ApiRequest, DeletedCountData};

/// Response header carrying the renewed admin token after each authorized
/// call; picking it up slides the inactivity window.
pub const RENEWED_TOKEN_HEADER: &str = "x-admin-token";

/// Shared application state for the API routes.
#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<dyn ResponseStore>,
    pub scheme: Arc<SurveyScheme>,
    pub verifier: Arc<dyn AdminCredentialVerifier>,
    pub tokens: Arc<dyn AdminTokenService>,
    pub session_timeout_secs: u64,
}

impl ApiState {
    fn submit_handler(&self) -> SubmitResponseHandler {
        SubmitResponseHandler::new(self.store.clone(), self.scheme.clone())
    }

    fn list_handler(&self) -> ListResponsesHandler {
        ListResponsesHandler::new(self.store.clone())
    }

    fn delete_handler(&self) -> DeleteResponsesHandler {
        DeleteResponsesHandler::new(self.store.clone())
    }

    fn dashboard_handler(&self) -> GetDashboardHandler {
        GetDashboardHandler::new(self.store.clone(), self.scheme.clone())
    }

    fn report_handler(&self) -> BuildReportHandler {
        BuildReportHandler::new(self.store.clone(), self.scheme.clone())
    }

    fn login_handler(&self) -> AdminLoginHandler {
        AdminLoginHandler::new(
            self.verifier.clone(),
            self.tokens.clone(),
            self.session_timeout_secs,
        )
    }

    /// Checks the bearer token and returns the renewed one.
    fn authorize_admin(&self, headers: &HeaderMap) -> Result<String, DomainError> {
        let token = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| {
                DomainError::new(ErrorCode::Unauthorized, "Authentication required")
            })?;
        let refresher = AdminSessionRefresher::new(self.tokens.clone());
        let (_session, renewed) = refresher.authorize(token)?;
        Ok(renewed)
    }
}

fn success(message: &str, data: Value, renewed_token: Option<String>) -> Response {
    let mut response =
        (StatusCode::OK, Json(ApiEnvelope::ok(message, data))).into_response();
    if let Some(token) = renewed_token {
        if let Ok(value) = HeaderValue::from_str(&token) {
            response.headers_mut().insert(RENEWED_TOKEN_HEADER, value);
        }
    }
    response
}

/// Maps a domain error into the failure envelope. Validation and store
/// failures stay 200 with `success=false` (the client surfaces `message`
/// verbatim); auth problems become 401, malformed bodies 400.
fn failure(error: DomainError) -> Response {
    debug!(code = %error.code, message = %error.message, "api request failed");
    let status = match error.code {
        ErrorCode::Unauthorized | ErrorCode::SessionExpired | ErrorCode::InvalidPin => {
            StatusCode::UNAUTHORIZED
        }
        ErrorCode::MalformedRequest => StatusCode::BAD_REQUEST,
        _ => StatusCode::OK,
    };
    (status, Json(ApiEnvelope::<Value>::err(error.message))).into_response()
}

/// POST /api - the single action endpoint.
pub async fn dispatch_action(
    State(state): State<ApiState>,
    headers: HeaderMap,
    payload: Result<Json<ApiRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(_) => {
            return failure(DomainError::new(
                ErrorCode::MalformedRequest,
                "Request body is not valid JSON for any known action",
            ));
        }
    };

    match request {
        ApiRequest::SaveVote {
            counter_id,
            answers,
            rating_index,
            respondent,
        } => {
            let cmd = SubmitResponseCommand {
                counter_id: CounterId::new(counter_id),
                answers,
                respondent,
                client_rating_index: rating_index,
            };
            match state.submit_handler().handle(cmd).await {
                Ok(_) => success("Survey response saved", json!(true), None),
                Err(e) => failure(e),
            }
        }
        ApiRequest::GetVotes => match state.list_handler().handle().await {
            Ok(responses) => success("Responses retrieved", json!(responses), None),
            Err(e) => failure(e),
        },
        ApiRequest::DeleteAllVotes => {
            let renewed = match state.authorize_admin(&headers) {
                Ok(token) => token,
                Err(e) => return failure(e),
            };
            match state.delete_handler().delete_all().await {
                Ok(()) => success("All survey responses deleted", json!(true), Some(renewed)),
                Err(e) => failure(e),
            }
        }
        ApiRequest::DeleteVotesByIds { ids } => {
            let renewed = match state.authorize_admin(&headers) {
                Ok(token) => token,
                Err(e) => return failure(e),
            };
            let ids: Vec<ResponseId> = ids.into_iter().map(ResponseId::new).collect();
            match state.delete_handler().delete_by_ids(&ids).await {
                Ok(result) => success(
                    &format!("{} responses deleted", result.deleted_count),
                    json!(DeletedCountData {
                        deleted_count: result.deleted_count
                    }),
                    Some(renewed),
                ),
                Err(e) => failure(e),
            }
        }
        ApiRequest::AdminLogin { pin } => {
            match state.login_handler().handle(AdminLoginCommand { pin }) {
                Ok(result) => success(
                    "Login successful",
                    json!(AdminLoginData {
                        token: result.token,
                        expires_in_secs: result.expires_in_secs,
                    }),
                    None,
                ),
                Err(e) => failure(e),
            }
        }
    }
}

/// GET /api/dashboard - aggregated statistics (admin only).
pub async fn get_dashboard(State(state): State<ApiState>, headers: HeaderMap) -> Response {
    let renewed = match state.authorize_admin(&headers) {
        Ok(token) => token,
        Err(e) => return failure(e),
    };
    match state.dashboard_handler().handle().await {
        Ok(report) => success("Dashboard computed", json!(report), Some(renewed)),
        Err(e) => failure(e),
    }
}

/// Query parameters for the CSV export endpoint.
#[derive(Debug, Deserialize)]
pub struct ReportParams {
    /// `summary`, `counters`, or `respondents`. Defaults to `summary`.
    #[serde(default)]
    pub section: Option<String>,
}

/// GET /api/report/csv?section=... - one CSV section (admin only).
pub async fn export_report_csv(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Query(params): Query<ReportParams>,
) -> Response {
    let renewed = match state.authorize_admin(&headers) {
        Ok(token) => token,
        Err(e) => return failure(e),
    };
    let report = match state.report_handler().handle().await {
        Ok(report) => report,
        Err(e) => return failure(e),
    };
    let export = match CsvReportExporter::render(&report) {
        Ok(export) => export,
        Err(e) => return failure(e),
    };
    let section = params.section.as_deref().unwrap_or("summary");
    let body = match section {
        "summary" => export.summary,
        "counters" => export.counters,
        "respondents" => export.respondents,
        other => {
            return failure(DomainError::new(
                ErrorCode::MalformedRequest,
                format!("Unknown report section '{}'", other),
            ));
        }
    };

    let mut response = (StatusCode::OK, body).into_response();
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("text/csv; charset=utf-8"));
    if let Ok(value) = HeaderValue::from_str(&renewed) {
        response.headers_mut().insert(RENEWED_TOKEN_HEADER, value);
    }
    response
}
