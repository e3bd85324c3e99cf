use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, FromRequestParts, State},
    http::{header, request::Parts, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use diode_core::analysis::SweepPlan;
use diode_core::bench::Bench;

use crate::auth::{
    expired_session_cookie, session_cookie, session_token, CredentialVerifier, SessionStore,
};
use crate::config::HttpServerConfig;
use crate::error::ApiError;
use crate::page::INDEX_HTML;
use crate::schema::{
    number_field, LoginRequest, MeasureRequest, MeasureResponse, StatusResponse, SweepRequest,
    SweepResponse,
};

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("bind {addr} failed: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

#[derive(Clone)]
pub struct ApiState {
    sessions: Arc<SessionStore>,
    credentials: Arc<dyn CredentialVerifier>,
}

impl ApiState {
    pub fn new(credentials: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            sessions: Arc::new(SessionStore::new()),
            credentials,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}

/// Username of the session attached to the request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub String);

impl FromRequestParts<ApiState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &ApiState) -> Result<Self, ApiError> {
        let token = session_token(&parts.headers).ok_or(ApiError::Unauthorized)?;
        state
            .sessions
            .user(&token)?
            .map(CurrentUser)
            .ok_or(ApiError::Unauthorized)
    }
}

pub async fn run(config: HttpServerConfig) -> Result<(), ServeError> {
    let state = ApiState::new(config.credential_verifier());
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|source| ServeError::Bind {
            addr: config.bind_addr.clone(),
            source,
        })?;
    tracing::info!(addr = %config.bind_addr, "diode lab listening");
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
        .route("/api/measure", post(measure))
        .route("/api/sweep", post(sweep))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn login(
    State(state): State<ApiState>,
    headers: HeaderMap,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    // a fresh login always supersedes the token the client already holds
    if let Some(previous) = session_token(&headers) {
        state.sessions.remove(&previous)?;
    }
    let (Some(username), Some(password)) = (request.username, request.password) else {
        tracing::warn!("login rejected: missing username or password");
        return Ok(login_failed());
    };
    if !state.credentials.verify(&username, &password) {
        tracing::warn!(user = %username, "login rejected");
        return Ok(login_failed());
    }

    let token = state.sessions.create(&username)?;
    tracing::info!(user = %username, "login accepted");
    Ok((
        [(header::SET_COOKIE, session_cookie(&token))],
        Json(StatusResponse { status: "success" }),
    )
        .into_response())
}

fn login_failed() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(StatusResponse { status: "fail" }),
    )
        .into_response()
}

async fn logout(State(state): State<ApiState>, headers: HeaderMap) -> Result<Response, ApiError> {
    if let Some(token) = session_token(&headers) {
        if let Some(user) = state.sessions.remove(&token)? {
            tracing::info!(user = %user, "logged out");
        }
    }
    Ok((
        [(header::SET_COOKIE, expired_session_cookie())],
        Json(StatusResponse {
            status: "logged_out",
        }),
    )
        .into_response())
}

async fn measure(
    CurrentUser(user): CurrentUser,
    payload: Result<Json<MeasureRequest>, JsonRejection>,
) -> Result<Json<MeasureResponse>, ApiError> {
    let Json(request) = payload?;
    let params = request.diode.to_params()?;
    let voltage = number_field("voltage", request.voltage.as_ref(), 0.0)?;

    let reading = Bench::new(&params).measure(voltage);
    if !reading.saturation_current.is_finite() {
        return Err(ApiError::OutOfRange {
            field: "temp",
            value: params.temp_c,
        });
    }
    if !reading.power.is_finite() {
        return Err(ApiError::OutOfRange {
            field: "voltage",
            value: voltage,
        });
    }
    tracing::debug!(
        user = %user,
        material = %params.material,
        voltage,
        current = reading.current,
        status = %reading.status,
        "measure"
    );
    Ok(Json(MeasureResponse::from(&reading)))
}

async fn sweep(
    CurrentUser(user): CurrentUser,
    payload: Result<Json<SweepRequest>, JsonRejection>,
) -> Result<Json<SweepResponse>, ApiError> {
    let Json(request) = payload?;
    let params = request.diode.to_params()?;
    let plan = SweepPlan::from_start(number_field(
        "start",
        request.start.as_ref(),
        SweepPlan::default().start,
    )?);

    let points = Bench::new(&params).sweep(&plan);
    tracing::debug!(
        user = %user,
        material = %params.material,
        start = plan.start,
        points = points.len(),
        "sweep"
    );
    Ok(Json(SweepResponse::from(points.as_slice())))
}
