//! Balance and settlement routes.
//!
//! Both endpoints are stateless: the caller sends the full participant and
//! expense lists on every request. Rates come from the request body when
//! given, otherwise from the shared rate provider.

use axum::{Json, Router, extract::State, routing::post};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use warikan_core::{
    Balance, Expense, Participant, RateSnapshot, Settlement, compute_balances,
    compute_settlements, total_net, validate_ledger,
};
use warikan_shared::AppError;
use warikan_shared::types::Currency;

use crate::{AppState, error::ApiError};

/// Creates the ledger routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/balances", post(balances))
        .route("/settlements", post(settlements))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body shared by both endpoints.
#[derive(Debug, Deserialize)]
pub struct LedgerRequest {
    /// Everyone taking part.
    pub participants: Vec<Participant>,
    /// Every recorded expense, settled or not.
    #[serde(default)]
    pub expenses: Vec<Expense>,
    /// Rates to use instead of the provider's.
    #[serde(default)]
    pub rates: Option<RateSnapshot>,
}

/// Response for `/balances`.
#[derive(Debug, Serialize)]
pub struct BalancesResponse {
    /// False when no exchange rates were available.
    pub ready: bool,
    /// Date of the rates used.
    pub rates_as_of: Option<NaiveDate>,
    /// One balance per participant (empty when not ready).
    pub balances: Vec<Balance>,
    /// Sum of all nets; zero for a consistent ledger, null if it overflows.
    pub total_net: Option<Decimal>,
}

/// Response for `/settlements`.
#[derive(Debug, Serialize)]
pub struct SettlementsResponse {
    /// False when no exchange rates were available.
    pub ready: bool,
    /// Date of the rates used.
    pub rates_as_of: Option<NaiveDate>,
    /// Balances the transfers were planned from.
    pub balances: Vec<Balance>,
    /// Transfers that clear every balance.
    pub settlements: Vec<Settlement>,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Picks the snapshot for a request; `None` when the provider cannot supply one.
async fn resolve_rates(state: &AppState, supplied: Option<RateSnapshot>) -> Option<RateSnapshot> {
    if supplied.is_some() {
        return supplied;
    }
    match state.rates.current().await {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            warn!(error = %e, "No exchange rates available, balances not ready");
            None
        }
    }
}

/// Validates the ledger and takes its rates, falling back to the provider.
///
/// Supplied rates must be quoted against the reference currency; missing
/// currencies are allowed, the engine skips those expenses.
async fn prepare(
    state: &AppState,
    request: &mut LedgerRequest,
) -> Result<Option<RateSnapshot>, ApiError> {
    validate_ledger(&request.participants, &request.expenses).inspect_err(|e| {
        debug!(error = %e, "Rejected ledger");
    })?;
    if let Some(rates) = &request.rates
        && rates.base != Currency::REFERENCE
    {
        debug!(base = %rates.base, "Rejected rates quoted against another base");
        return Err(AppError::Validation(format!(
            "Rates must be quoted against {}, got {}",
            Currency::REFERENCE,
            rates.base
        ))
        .into());
    }
    Ok(resolve_rates(state, request.rates.take()).await)
}

// ============================================================================
// Handlers
// ============================================================================

/// POST `/balances` - Per-participant balances.
async fn balances(
    State(state): State<AppState>,
    Json(mut request): Json<LedgerRequest>,
) -> Result<Json<BalancesResponse>, ApiError> {
    let rates = prepare(&state, &mut request).await?;
    let balances = compute_balances(&request.participants, &request.expenses, rates.as_ref());

    Ok(Json(BalancesResponse {
        ready: rates.is_some(),
        rates_as_of: rates.map(|r| r.as_of),
        total_net: total_net(&balances),
        balances,
    }))
}

/// POST `/settlements` - Transfers that settle everyone up.
async fn settlements(
    State(state): State<AppState>,
    Json(mut request): Json<LedgerRequest>,
) -> Result<Json<SettlementsResponse>, ApiError> {
    let rates = prepare(&state, &mut request).await?;
    let balances = compute_balances(&request.participants, &request.expenses, rates.as_ref());
    let settlements = compute_settlements(&balances);

    Ok(Json(SettlementsResponse {
        ready: rates.is_some(),
        rates_as_of: rates.map(|r| r.as_of),
        balances,
        settlements,
    }))
}
