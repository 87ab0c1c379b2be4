//! Receipt endpoints.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  POST /receipts/process                                                │
//! │       │                                                                 │
//! │       ├── body not JSON / wrong types ──► 400                          │
//! │       ▼                                                                 │
//! │  validate(payload) ──── Err ──────────────► 400 (reason logged)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  score_breakdown(receipt)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.put(receipt, points) ──────────────► 200 {"id": "..."}          │
//! │                                                                         │
//! │  GET /receipts/{id}/points                                             │
//! │       │                                                                 │
//! │       ├── unknown / malformed id ─────────► 404                        │
//! │       ▼                                                                 │
//! │  store.get(id) ───────────────────────────► 200 {"points": N}          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use receipt_core::{score_breakdown, validate, Points, ReceiptPayload};
use receipt_store::ReceiptId;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use crate::error::ApiResult;
use crate::AppState;

/// Response for a processed receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProcessResponse {
    pub id: String,
}

/// Response for a points lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PointsResponse {
    #[ts(type = "number")]
    pub points: Points,
}

/// Validates, scores and stores a receipt.
pub async fn process_receipt(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ReceiptPayload>, JsonRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let Json(payload) = payload?;

    let receipt = validate(&payload)?;

    let breakdown = score_breakdown(&receipt);
    let points = breakdown.total();
    debug!(
        retailer = %receipt.retailer(),
        total = %receipt.total(),
        ?breakdown,
        "Receipt scored"
    );

    let id = state.store.put(receipt, points).await;
    info!(id = %id, points, "Receipt processed");

    Ok(Json(ProcessResponse { id: id.to_string() }))
}

/// Returns the points awarded to a stored receipt.
pub async fn get_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let id = ReceiptId::parse(&id)?;
    let stored = state.store.get(&id).await?;
    debug!(id = %id, processed_at = %stored.processed_at, "Receipt looked up");

    Ok(Json(PointsResponse {
        points: stored.points,
    }))
}
