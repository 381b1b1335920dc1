//! In-memory shopcart backend used by the client's integration tests.
//!
//! Implements the REST contract the controller consumes: items keyed by
//! the (customer_id, product_id) pair, unique while in the cart; checkout
//! moves an item to the order stage without destroying the record; list
//! and query are cart-scoped. Quantity and price arrive as strings and are
//! parsed and validated here — the client sends form fields verbatim.
//! Error responses carry a `{status, error, message}` body.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ItemState {
    InCart,
    Ordered,
}

impl ItemState {
    fn is_in_cart(self) -> bool {
        matches!(self, ItemState::InCart)
    }
}

/// A stored item. `price` keeps the validated string the client sent so
/// it round-trips verbatim.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShopcartItem {
    pub customer_id: u32,
    pub product_id: u32,
    pub text: String,
    pub quantity: u32,
    pub price: String,
    pub state: ItemState,
}

/// Create/update payload: the client's form fields, all raw strings.
#[derive(Debug, Deserialize)]
pub struct ItemPayload {
    pub customer_id: String,
    pub product_id: String,
    pub text: String,
    pub quantity: String,
    pub price: String,
}

/// Items in insertion order; list responses preserve it.
pub type Db = Arc<RwLock<Vec<ShopcartItem>>>;

#[derive(Debug, Deserialize)]
pub struct CartFilter {
    pub price: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    status: u16,
    error: &'static str,
    message: String,
}

/// Request rejections, rendered as `{status, error, message}` JSON.
#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl ApiError {
    fn status(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "Bad Request"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "Conflict"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status();
        let message = match self {
            ApiError::BadRequest(m)
            | ApiError::NotFound(m)
            | ApiError::Conflict(m)
            | ApiError::Internal(m) => m,
        };
        tracing::warn!(%status, "{message}");
        let body = ErrorBody {
            status: status.as_u16(),
            error,
            message,
        };
        (status, Json(body)).into_response()
    }
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/shopcarts/{customer_id}", get(list_items).post(create_item))
        .route(
            "/shopcarts/{customer_id}/{product_id}",
            get(read_item).put(update_item).delete(delete_item),
        )
        .route(
            "/shopcarts/{customer_id}/{product_id}/checkout",
            put(checkout_item),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn create_item(
    State(db): State<Db>,
    Path(customer_id): Path<u32>,
    Json(payload): Json<ItemPayload>,
) -> Result<(StatusCode, Json<ShopcartItem>), ApiError> {
    info!(customer_id, "request to create a shopcart item");
    let item = validate(customer_id, &payload)?;
    let mut items = db.write().await;
    if items
        .iter()
        .any(|i| i.customer_id == customer_id && i.product_id == item.product_id && i.state.is_in_cart())
    {
        return Err(ApiError::Conflict(format!(
            "item {}/{} is already in the cart",
            customer_id, item.product_id
        )));
    }
    items.push(item.clone());
    Ok((StatusCode::CREATED, Json(item)))
}

async fn list_items(
    State(db): State<Db>,
    Path(customer_id): Path<u32>,
    Query(filter): Query<CartFilter>,
) -> Result<Json<Vec<ShopcartItem>>, ApiError> {
    info!(customer_id, "request to list shopcart items");
    let target = match &filter.price {
        Some(raw) => Some(parse_price(raw)?),
        None => None,
    };
    let items = db.read().await;
    let selected = items
        .iter()
        .filter(|i| i.customer_id == customer_id && i.state.is_in_cart())
        .filter(|i| match target {
            // Price query selects items at or below the target.
            Some(target) => i.price.parse::<f64>().is_ok_and(|p| p <= target),
            None => true,
        })
        .cloned()
        .collect();
    Ok(Json(selected))
}

async fn read_item(
    State(db): State<Db>,
    Path((customer_id, product_id)): Path<(u32, u32)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    info!(customer_id, product_id, "request to read a shopcart item");
    let items = db.read().await;
    let record = items
        .iter()
        .find(|i| i.customer_id == customer_id && i.product_id == product_id)
        .ok_or_else(|| not_found(customer_id, product_id))?;
    if !record.state.is_in_cart() {
        // The record survives checkout but the cart no longer holds it.
        return Ok(Json(serde_json::json!({})));
    }
    Ok(Json(serde_json::to_value(record).map_err(|e| {
        ApiError::Internal(format!("failed to serialize item: {e}"))
    })?))
}

async fn update_item(
    State(db): State<Db>,
    Path((customer_id, product_id)): Path<(u32, u32)>,
    Json(payload): Json<ItemPayload>,
) -> Result<Json<ShopcartItem>, ApiError> {
    info!(customer_id, product_id, "request to update a shopcart item");
    let replacement = validate(parse_id(&payload.customer_id, "customer_id")?, &payload)?;
    let mut items = db.write().await;
    let new_pair = (replacement.customer_id, replacement.product_id);
    if new_pair != (customer_id, product_id)
        && items
            .iter()
            .any(|i| (i.customer_id, i.product_id) == new_pair && i.state.is_in_cart())
    {
        return Err(ApiError::Conflict(format!(
            "item {}/{} is already in the cart",
            new_pair.0, new_pair.1
        )));
    }
    let item = items
        .iter_mut()
        .find(|i| i.customer_id == customer_id && i.product_id == product_id && i.state.is_in_cart())
        .ok_or_else(|| not_found(customer_id, product_id))?;
    *item = replacement;
    Ok(Json(item.clone()))
}

async fn delete_item(
    State(db): State<Db>,
    Path((customer_id, product_id)): Path<(u32, u32)>,
) -> Result<StatusCode, ApiError> {
    info!(customer_id, product_id, "request to delete a shopcart item");
    let mut items = db.write().await;
    let position = items
        .iter()
        .position(|i| i.customer_id == customer_id && i.product_id == product_id && i.state.is_in_cart())
        .ok_or_else(|| not_found(customer_id, product_id))?;
    items.remove(position);
    Ok(StatusCode::NO_CONTENT)
}

async fn checkout_item(
    State(db): State<Db>,
    Path((customer_id, product_id)): Path<(u32, u32)>,
) -> Result<Json<ShopcartItem>, ApiError> {
    info!(customer_id, product_id, "request to checkout a shopcart item");
    let mut items = db.write().await;
    let item = items
        .iter_mut()
        .find(|i| i.customer_id == customer_id && i.product_id == product_id)
        .ok_or_else(|| not_found(customer_id, product_id))?;
    if !item.state.is_in_cart() {
        return Err(ApiError::Conflict(format!(
            "item {customer_id}/{product_id} is already ordered"
        )));
    }
    item.state = ItemState::Ordered;
    Ok(Json(item.clone()))
}

/// Parse and validate a payload into a storable item. The caller picks
/// the authoritative `customer_id`: create takes it from the path, update
/// from the replacement payload (all five fields are replaceable).
fn validate(customer_id: u32, payload: &ItemPayload) -> Result<ShopcartItem, ApiError> {
    let product_id = parse_id(&payload.product_id, "product_id")?;
    let quantity = payload.quantity.trim().parse::<u32>().map_err(|_| {
        ApiError::BadRequest("quantity must be a non-negative integer".to_string())
    })?;
    parse_price(&payload.price)?;
    Ok(ShopcartItem {
        customer_id,
        product_id,
        text: payload.text.clone(),
        quantity,
        price: payload.price.trim().to_string(),
        state: ItemState::InCart,
    })
}

fn parse_id(raw: &str, field: &str) -> Result<u32, ApiError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ApiError::BadRequest(format!("{field} must be a non-negative integer")))
}

fn parse_price(raw: &str) -> Result<f64, ApiError> {
    let price = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ApiError::BadRequest("price must be a non-negative number".to_string()))?;
    if !price.is_finite() || price < 0.0 {
        return Err(ApiError::BadRequest(
            "price must be a non-negative number".to_string(),
        ));
    }
    Ok(price)
}

fn not_found(customer_id: u32, product_id: u32) -> ApiError {
    ApiError::NotFound(format!("item {customer_id}/{product_id} was not found"))
}
