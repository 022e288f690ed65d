// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Axum handlers. Each one locks the store, calls one API operation and
//! maps the result onto a status code.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
};
use serde::{Deserialize, de::DeserializeOwned};
use tender_bid_api::{
    ActorRequest, AddResponsibleRequest, BidResponse, BidVersionResponse, CreateBidRequest,
    CreateEmployeeRequest, CreateOrganizationRequest, CreateReviewRequest, CreateTenderRequest,
    EmployeeResponse, OrganizationResponse, ResponsibleResponse, ReviewQuery, ReviewResponse,
    StatusUpdatedResponse, TenderResponse, TenderVersionResponse, UpdateBidRequest,
    UpdateStatusRequest, UpdateTenderRequest, add_responsible, create_bid, create_employee,
    create_organization, create_review, create_tender, delete_bid, delete_tender, get_bid,
    get_tender, list_bid_versions, list_bids, list_bids_for_tender, list_my_bids,
    list_my_tenders, list_reviews_for_bid, list_tender_versions, list_tenders,
    partial_update_bid, partial_update_tender, rollback_bid, rollback_tender, update_bid,
    update_bid_status, update_tender, update_tender_status,
};
use tracing::info;

use crate::AppState;
use crate::error::HttpError;

/// Query for the `/my` endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct MyQuery {
    pub username: Option<String>,
}

type JsonResult<T> = Result<Json<T>, HttpError>;
type CreatedResult<T> = Result<(StatusCode, Json<T>), HttpError>;

/// Parses a required JSON body. Missing or malformed bodies are rejected
/// with 400 and a `{"detail": ...}` payload.
fn parse_body<T>(body: &Bytes) -> Result<T, HttpError>
where
    T: DeserializeOwned,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(HttpError {
            status: StatusCode::BAD_REQUEST,
            message: String::from("Request body is required"),
        });
    }
    serde_json::from_slice(body).map_err(malformed_body)
}

/// Parses a JSON body that may be omitted entirely.
fn parse_optional_body<T>(body: &Bytes) -> Result<T, HttpError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(malformed_body)
}

fn malformed_body(err: serde_json::Error) -> HttpError {
    HttpError {
        status: StatusCode::BAD_REQUEST,
        message: format!("Malformed request body: {err}"),
    }
}

/// Handler for GET `/ping`.
pub async fn handle_ping() -> &'static str {
    "ok"
}

// ========================================================================
// Tenders
// ========================================================================

pub async fn handle_list_tenders(
    AxumState(app_state): AxumState<AppState>,
) -> JsonResult<Vec<TenderResponse>> {
    info!("Handling list_tenders request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_tenders(&mut persistence)?))
}

/// Handler for POST `/tenders` and `/tenders/new`.
pub async fn handle_create_tender(
    AxumState(app_state): AxumState<AppState>,
    body: Bytes,
) -> CreatedResult<TenderResponse> {
    let request: CreateTenderRequest = parse_body(&body)?;
    info!(name = ?request.name, "Handling create_tender request");
    let mut persistence = app_state.persistence.lock().await;
    let response: TenderResponse = create_tender(&mut persistence, request)?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn handle_get_tender(
    AxumState(app_state): AxumState<AppState>,
    Path(tender_id): Path<i64>,
) -> JsonResult<TenderResponse> {
    info!(tender_id, "Handling get_tender request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(get_tender(&mut persistence, tender_id)?))
}

pub async fn handle_update_tender(
    AxumState(app_state): AxumState<AppState>,
    Path(tender_id): Path<i64>,
    body: Bytes,
) -> JsonResult<TenderResponse> {
    let request: UpdateTenderRequest = parse_body(&body)?;
    info!(tender_id, "Handling update_tender request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(update_tender(&mut persistence, tender_id, request)?))
}

/// Handler for PATCH `/tenders/{id}` and `/tenders/{id}/edit`.
pub async fn handle_partial_update_tender(
    AxumState(app_state): AxumState<AppState>,
    Path(tender_id): Path<i64>,
    body: Bytes,
) -> JsonResult<TenderResponse> {
    let request: UpdateTenderRequest = parse_body(&body)?;
    info!(tender_id, "Handling partial_update_tender request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(partial_update_tender(
        &mut persistence,
        tender_id,
        request,
    )?))
}

pub async fn handle_delete_tender(
    AxumState(app_state): AxumState<AppState>,
    Path(tender_id): Path<i64>,
    body: Bytes,
) -> Result<StatusCode, HttpError> {
    info!(tender_id, "Handling delete_tender request");
    let request: ActorRequest = parse_optional_body(&body)?;
    let mut persistence = app_state.persistence.lock().await;
    delete_tender(&mut persistence, tender_id, &request)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn handle_update_tender_status(
    AxumState(app_state): AxumState<AppState>,
    Path(tender_id): Path<i64>,
    body: Bytes,
) -> JsonResult<StatusUpdatedResponse> {
    let request: UpdateStatusRequest = parse_body(&body)?;
    info!(tender_id, status = ?request.status, "Handling update_tender_status request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(update_tender_status(
        &mut persistence,
        tender_id,
        request,
    )?))
}

pub async fn handle_list_my_tenders(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<MyQuery>,
) -> JsonResult<Vec<TenderResponse>> {
    info!(username = ?query.username, "Handling list_my_tenders request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_my_tenders(
        &mut persistence,
        query.username.as_deref(),
    )?))
}

/// Handler for PUT `/tenders/{id}/rollback/{version}`.
pub async fn handle_rollback_tender(
    AxumState(app_state): AxumState<AppState>,
    Path((tender_id, version)): Path<(i64, i64)>,
    body: Bytes,
) -> JsonResult<TenderResponse> {
    let request: ActorRequest = parse_body(&body)?;
    info!(tender_id, version, "Handling rollback_tender request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(rollback_tender(
        &mut persistence,
        tender_id,
        version,
        &request,
    )?))
}

pub async fn handle_list_tender_versions(
    AxumState(app_state): AxumState<AppState>,
    Path(tender_id): Path<i64>,
) -> JsonResult<Vec<TenderVersionResponse>> {
    info!(tender_id, "Handling list_tender_versions request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_tender_versions(&mut persistence, tender_id)?))
}

// ========================================================================
// Bids
// ========================================================================

pub async fn handle_list_bids(
    AxumState(app_state): AxumState<AppState>,
) -> JsonResult<Vec<BidResponse>> {
    info!("Handling list_bids request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_bids(&mut persistence)?))
}

/// Handler for POST `/bids` and `/bids/new`.
pub async fn handle_create_bid(
    AxumState(app_state): AxumState<AppState>,
    body: Bytes,
) -> CreatedResult<BidResponse> {
    let request: CreateBidRequest = parse_body(&body)?;
    info!(tender = %request.tender, "Handling create_bid request");
    let mut persistence = app_state.persistence.lock().await;
    let response: BidResponse = create_bid(&mut persistence, request)?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn handle_get_bid(
    AxumState(app_state): AxumState<AppState>,
    Path(bid_id): Path<i64>,
) -> JsonResult<BidResponse> {
    info!(bid_id, "Handling get_bid request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(get_bid(&mut persistence, bid_id)?))
}

pub async fn handle_update_bid(
    AxumState(app_state): AxumState<AppState>,
    Path(bid_id): Path<i64>,
    body: Bytes,
) -> JsonResult<BidResponse> {
    let request: UpdateBidRequest = parse_body(&body)?;
    info!(bid_id, "Handling update_bid request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(update_bid(&mut persistence, bid_id, request)?))
}

/// Handler for PATCH `/bids/{id}` and `/bids/{id}/edit`.
pub async fn handle_partial_update_bid(
    AxumState(app_state): AxumState<AppState>,
    Path(bid_id): Path<i64>,
    body: Bytes,
) -> JsonResult<BidResponse> {
    let request: UpdateBidRequest = parse_body(&body)?;
    info!(bid_id, "Handling partial_update_bid request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(partial_update_bid(&mut persistence, bid_id, request)?))
}

pub async fn handle_delete_bid(
    AxumState(app_state): AxumState<AppState>,
    Path(bid_id): Path<i64>,
    body: Bytes,
) -> Result<StatusCode, HttpError> {
    info!(bid_id, "Handling delete_bid request");
    let request: ActorRequest = parse_optional_body(&body)?;
    let mut persistence = app_state.persistence.lock().await;
    delete_bid(&mut persistence, bid_id, &request)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn handle_update_bid_status(
    AxumState(app_state): AxumState<AppState>,
    Path(bid_id): Path<i64>,
    body: Bytes,
) -> JsonResult<StatusUpdatedResponse> {
    let request: UpdateStatusRequest = parse_body(&body)?;
    info!(bid_id, status = ?request.status, "Handling update_bid_status request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(update_bid_status(&mut persistence, bid_id, request)?))
}

pub async fn handle_list_my_bids(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<MyQuery>,
) -> JsonResult<Vec<BidResponse>> {
    info!(username = ?query.username, "Handling list_my_bids request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_my_bids(
        &mut persistence,
        query.username.as_deref(),
    )?))
}

/// Handler for PUT `/bids/{id}/rollback/{version}`.
pub async fn handle_rollback_bid(
    AxumState(app_state): AxumState<AppState>,
    Path((bid_id, version)): Path<(i64, i64)>,
    body: Bytes,
) -> JsonResult<BidResponse> {
    let request: ActorRequest = parse_body(&body)?;
    info!(bid_id, version, "Handling rollback_bid request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(rollback_bid(
        &mut persistence,
        bid_id,
        version,
        &request,
    )?))
}

pub async fn handle_list_bid_versions(
    AxumState(app_state): AxumState<AppState>,
    Path(bid_id): Path<i64>,
) -> JsonResult<Vec<BidVersionResponse>> {
    info!(bid_id, "Handling list_bid_versions request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_bid_versions(&mut persistence, bid_id)?))
}

/// Handler for GET `/bids/{id}/list`, where `{id}` is a tender.
pub async fn handle_list_bids_for_tender(
    AxumState(app_state): AxumState<AppState>,
    Path(tender_id): Path<i64>,
) -> JsonResult<Vec<BidResponse>> {
    info!(tender_id, "Handling list_bids_for_tender request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_bids_for_tender(&mut persistence, tender_id)?))
}

pub async fn handle_list_reviews(
    AxumState(app_state): AxumState<AppState>,
    Path(bid_id): Path<i64>,
    Query(query): Query<ReviewQuery>,
) -> JsonResult<Vec<ReviewResponse>> {
    info!(bid_id, author = ?query.author_username, "Handling list_reviews request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_reviews_for_bid(
        &mut persistence,
        bid_id,
        &query,
    )?))
}

/// Handler for POST `/bids/{id}/feedback`.
pub async fn handle_create_review(
    AxumState(app_state): AxumState<AppState>,
    Path(bid_id): Path<i64>,
    body: Bytes,
) -> CreatedResult<ReviewResponse> {
    let request: CreateReviewRequest = parse_body(&body)?;
    info!(bid_id, author = ?request.author_username, "Handling create_review request");
    let mut persistence = app_state.persistence.lock().await;
    let response: ReviewResponse = create_review(&mut persistence, bid_id, &request)?;
    Ok((StatusCode::CREATED, Json(response)))
}

// ========================================================================
// Setup
// ========================================================================

pub async fn handle_create_employee(
    AxumState(app_state): AxumState<AppState>,
    body: Bytes,
) -> CreatedResult<EmployeeResponse> {
    let request: CreateEmployeeRequest = parse_body(&body)?;
    info!(username = ?request.username, "Handling create_employee request");
    let mut persistence = app_state.persistence.lock().await;
    let response: EmployeeResponse = create_employee(&mut persistence, &request)?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn handle_create_organization(
    AxumState(app_state): AxumState<AppState>,
    body: Bytes,
) -> CreatedResult<OrganizationResponse> {
    let request: CreateOrganizationRequest = parse_body(&body)?;
    info!(name = ?request.name, "Handling create_organization request");
    let mut persistence = app_state.persistence.lock().await;
    let response: OrganizationResponse = create_organization(&mut persistence, &request)?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn handle_add_responsible(
    AxumState(app_state): AxumState<AppState>,
    Path(organization_id): Path<i64>,
    body: Bytes,
) -> CreatedResult<ResponsibleResponse> {
    let request: AddResponsibleRequest = parse_body(&body)?;
    info!(organization_id, employee = %request.employee, "Handling add_responsible request");
    let mut persistence = app_state.persistence.lock().await;
    let response: ResponsibleResponse =
        add_responsible(&mut persistence, organization_id, &request)?;
    Ok((StatusCode::CREATED, Json(response)))
}
