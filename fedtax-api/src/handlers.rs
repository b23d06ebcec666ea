//! Request handlers for the session API.
//!
//! Mutating endpoints take a JSON body and answer `{"success": bool}`
//! with HTTP 200 whether or not the operation went through; domain
//! failures (an unknown period or status code, an out-of-range index)
//! are never HTTP errors. Framework 4xx responses only arise from
//! transport problems such as malformed JSON or missing query
//! parameters.
//!
//! Monetary values cross the wire as JSON numbers.

use axum::Json;
use axum::extract::{Query, State};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tracing::debug;

use fedtax_core::models::{
    CompensationKind, FilingStatus, Job, PayPeriod, TaxSummary, period_multiplier,
};

use crate::state::AppState;

// ─── request bodies and queries ──────────────────────────────────────────────

/// Body for `/add_job`.
#[derive(Debug, Deserialize)]
pub struct AddJobRequest {
    desc: String,
    salaried: bool,
    amount: Decimal,
    period: String,
    #[serde(default = "default_hours")]
    hours: Decimal,
}

/// Body for the four `remove_*` endpoints. The index arrives signed so
/// a negative value can be rejected instead of failing deserialization.
#[derive(Debug, Deserialize)]
pub struct RemoveIndexRequest {
    index: i64,
}

/// Body for `/set_status`.
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    status: String,
}

/// Body for the three `add_*` line-item endpoints.
#[derive(Debug, Deserialize)]
pub struct AddLineItemRequest {
    desc: String,
    amount: Decimal,
}

/// Query for the two pay-period lookups.
#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    period: String,
}

/// Query for the two standalone calculator endpoints.
#[derive(Debug, Deserialize)]
pub struct GrossIncomeQuery {
    gross_income: Decimal,
}

fn default_hours() -> Decimal {
    Job::default_hours()
}

fn success(value: bool) -> Json<Value> {
    Json(json!({ "success": value }))
}

fn to_index(raw: i64) -> Option<usize> {
    usize::try_from(raw).ok()
}

// ─── jobs ────────────────────────────────────────────────────────────────────

/// Adds a job. Fails when the period code is not one of `A/M/S/B/W`;
/// a missing `hours` field defaults to 40.
pub async fn add_job(
    State(state): State<AppState>,
    Json(request): Json<AddJobRequest>,
) -> Json<Value> {
    let period = match PayPeriod::parse(&request.period) {
        Some(period) => period,
        None => {
            debug!(period = %request.period, "rejected job with unknown pay period");
            return success(false);
        }
    };

    let kind = if request.salaried {
        CompensationKind::Salaried
    } else {
        CompensationKind::Hourly
    };

    debug!(desc = %request.desc, "adding job");
    state
        .session()
        .add_job(request.desc, kind, request.amount, period, request.hours);
    success(true)
}

/// Removes the job at the given position.
pub async fn remove_job(
    State(state): State<AppState>,
    Json(request): Json<RemoveIndexRequest>,
) -> Json<Value> {
    let removed = to_index(request.index).is_some_and(|index| state.session().remove_job(index));
    success(removed)
}

pub async fn get_jobs(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "jobs": state.session().jobs() }))
}

// ─── filing status ───────────────────────────────────────────────────────────

/// Sets the filing status from its one-letter code.
pub async fn set_status(
    State(state): State<AppState>,
    Json(request): Json<SetStatusRequest>,
) -> Json<Value> {
    match FilingStatus::parse(&request.status) {
        Some(status) => {
            debug!(status = %request.status, "setting filing status");
            state.session().set_filing_status(status);
            success(true)
        }
        None => {
            debug!(status = %request.status, "rejected unknown filing status code");
            success(false)
        }
    }
}

/// The current status code, or `null` before one is chosen.
pub async fn get_filing_status(State(state): State<AppState>) -> Json<Value> {
    let status = state.session().filing_status().map(|status| status.code());
    Json(json!({ "status": status }))
}

/// Code-to-label map for building status pickers.
pub async fn get_status_names() -> Json<Value> {
    let mut names = Map::new();
    for status in FilingStatus::all() {
        names.insert(status.code().to_string(), Value::from(status.label()));
    }
    Json(json!({ "status_names": names }))
}

// ─── deductions and credits ──────────────────────────────────────────────────

pub async fn add_deduct(
    State(state): State<AppState>,
    Json(request): Json<AddLineItemRequest>,
) -> Json<Value> {
    state.session().add_deduction(request.desc, request.amount);
    success(true)
}

pub async fn remove_deduct(
    State(state): State<AppState>,
    Json(request): Json<RemoveIndexRequest>,
) -> Json<Value> {
    let removed =
        to_index(request.index).is_some_and(|index| state.session().remove_deduction(index));
    success(removed)
}

pub async fn get_deductions(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "deductions": state.session().deductions() }))
}

pub async fn add_rcredit(
    State(state): State<AppState>,
    Json(request): Json<AddLineItemRequest>,
) -> Json<Value> {
    state
        .session()
        .add_refundable_credit(request.desc, request.amount);
    success(true)
}

pub async fn remove_rcredit(
    State(state): State<AppState>,
    Json(request): Json<RemoveIndexRequest>,
) -> Json<Value> {
    let removed = to_index(request.index)
        .is_some_and(|index| state.session().remove_refundable_credit(index));
    success(removed)
}

pub async fn get_refundable_credits(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "refundable_credits": state.session().refundable_credits() }))
}

pub async fn add_nrcredit(
    State(state): State<AppState>,
    Json(request): Json<AddLineItemRequest>,
) -> Json<Value> {
    state
        .session()
        .add_non_refundable_credit(request.desc, request.amount);
    success(true)
}

pub async fn remove_nrcredit(
    State(state): State<AppState>,
    Json(request): Json<RemoveIndexRequest>,
) -> Json<Value> {
    let removed = to_index(request.index)
        .is_some_and(|index| state.session().remove_non_refundable_credit(index));
    success(removed)
}

pub async fn get_non_refundable_credits(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "non_refundable_credits": state.session().non_refundable_credits() }))
}

// ─── standard deduction ──────────────────────────────────────────────────────

pub async fn get_standard_deduction_added(State(state): State<AppState>) -> Json<Value> {
    let added = state.session().standard_deduction_added();
    Json(json!({ "standard_deduction_added": added }))
}

pub async fn get_standard_deduction_amount(State(state): State<AppState>) -> Json<Value> {
    let amount = state.session().standard_deduction_amount();
    Json(json!({ "amount": amount }))
}

// ─── lookups and calculations ────────────────────────────────────────────────

/// Occurrence count for a pay-period code as a bare number, `-1` for an
/// unknown code.
pub async fn period_to_number(Query(query): Query<PeriodQuery>) -> Json<i32> {
    Json(period_multiplier(&query.period))
}

/// Same lookup wrapped in an object, for the browser UI.
pub async fn get_period_multiplier(Query(query): Query<PeriodQuery>) -> Json<Value> {
    Json(json!({ "multiplier": period_multiplier(&query.period) }))
}

/// FICA total on an arbitrary gross income with the session's status.
pub async fn calculate_fica(
    State(state): State<AppState>,
    Query(query): Query<GrossIncomeQuery>,
) -> Json<Decimal> {
    Json(state.session().calculate_fica(query.gross_income).total())
}

/// Bracket tax on an arbitrary amount with the session's status. The
/// amount is taxed as given; no deductions are applied.
pub async fn calculate_tax(
    State(state): State<AppState>,
    Query(query): Query<GrossIncomeQuery>,
) -> Json<Decimal> {
    Json(state.session().calculate_income_tax(query.gross_income))
}

/// The full estimate over the current session.
pub async fn calculate(State(state): State<AppState>) -> Json<TaxSummary> {
    Json(state.session().calculate())
}
