//! Stateless HTTP request builder and response parser for the shopcart API.
//!
//! # Design
//! `ShopcartClient` holds only a `base_url` and carries no mutable state
//! between calls. Each lifecycle operation is split into a `build_*` method
//! that produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`; the host executes the round-trip in between.
//!
//! Identifiers and the price filter arrive as the raw strings the form
//! holds — the client interpolates them into paths and payloads without
//! coercion, and the backend owns all numeric validation. Every
//! non-success response funnels through `OperationError::from_response`,
//! so the backend `message` field is extracted in exactly one place.

use crate::error::OperationError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ItemDraft, ShopcartItem};

/// Stateless client for the shopcart API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct ShopcartClient {
    base_url: String,
}

impl ShopcartClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_create(&self, draft: &ItemDraft) -> Result<HttpRequest, OperationError> {
        let body = encode(draft)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/shopcarts/{}", self.base_url, draft.customer_id),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_update(&self, draft: &ItemDraft) -> Result<HttpRequest, OperationError> {
        let body = encode(draft)?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!(
                "{}/shopcarts/{}/{}",
                self.base_url, draft.customer_id, draft.product_id
            ),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_read(&self, customer_id: &str, product_id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/shopcarts/{customer_id}/{product_id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_delete(&self, customer_id: &str, product_id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/shopcarts/{customer_id}/{product_id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_checkout(&self, customer_id: &str, product_id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Put,
            path: format!(
                "{}/shopcarts/{customer_id}/{product_id}/checkout",
                self.base_url
            ),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_list(&self, customer_id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/shopcarts/{customer_id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_query(&self, customer_id: &str, price: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/shopcarts/{customer_id}?price={price}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<ShopcartItem, OperationError> {
        expect_status(&response, 201)?;
        decode_item(&response)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<ShopcartItem, OperationError> {
        expect_status(&response, 200)?;
        decode_item(&response)
    }

    /// A present item parses to `Some`; the contract's "empty object if
    /// absent" (a record that is no longer in the cart) parses to `None`.
    pub fn parse_read(
        &self,
        response: HttpResponse,
    ) -> Result<Option<ShopcartItem>, OperationError> {
        expect_status(&response, 200)?;
        if is_empty_object(&response.body) {
            return Ok(None);
        }
        decode_item(&response).map(Some)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), OperationError> {
        expect_status(&response, 204)
    }

    /// Checkout success is keyed off the status alone; the body (the
    /// ordered item) is informational.
    pub fn parse_checkout(&self, response: HttpResponse) -> Result<(), OperationError> {
        expect_status(&response, 200)
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<ShopcartItem>, OperationError> {
        self.parse_collection(response)
    }

    pub fn parse_query(&self, response: HttpResponse) -> Result<Vec<ShopcartItem>, OperationError> {
        self.parse_collection(response)
    }

    /// List and query share one response shape: an ordered sequence of
    /// items, server order preserved.
    fn parse_collection(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<ShopcartItem>, OperationError> {
        expect_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| OperationError::Server {
            status: response.status,
            message: format!("unexpected response body: {e}"),
        })
    }
}

/// Reject any status other than the operation's success status.
fn expect_status(response: &HttpResponse, expected: u16) -> Result<(), OperationError> {
    if response.status == expected {
        return Ok(());
    }
    Err(OperationError::from_response(response))
}

fn decode_item(response: &HttpResponse) -> Result<ShopcartItem, OperationError> {
    serde_json::from_str(&response.body).map_err(|e| OperationError::Server {
        status: response.status,
        message: format!("unexpected response body: {e}"),
    })
}

fn encode(draft: &ItemDraft) -> Result<String, OperationError> {
    serde_json::to_string(draft)
        .map_err(|e| OperationError::validation(format!("failed to encode payload: {e}")))
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn is_empty_object(body: &str) -> bool {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => map.is_empty(),
        _ => body.trim().is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemState;

    fn client() -> ShopcartClient {
        ShopcartClient::new("http://localhost:3000")
    }

    fn draft() -> ItemDraft {
        ItemDraft {
            customer_id: "42".to_string(),
            product_id: "7".to_string(),
            text: "widget".to_string(),
            quantity: "3".to_string(),
            price: "9.99".to_string(),
        }
    }

    fn ok_response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    const ITEM_JSON: &str = r#"{"customer_id":42,"product_id":7,"text":"widget","quantity":3,"price":"9.99","state":"in_cart"}"#;

    #[test]
    fn build_create_posts_to_the_customer_cart() {
        let req = client().build_create(&draft()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/shopcarts/42");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["product_id"], "7");
        assert_eq!(body["quantity"], "3");
        assert_eq!(body["price"], "9.99");
    }

    #[test]
    fn build_update_addresses_the_item_pair() {
        let req = client().build_update(&draft()).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/shopcarts/42/7");
        assert!(req.body.is_some());
    }

    #[test]
    fn build_read_produces_a_bare_get() {
        let req = client().build_read("42", "7");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/shopcarts/42/7");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_delete_produces_correct_request() {
        let req = client().build_delete("42", "7");
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/shopcarts/42/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_checkout_puts_to_the_checkout_route() {
        let req = client().build_checkout("42", "7");
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/shopcarts/42/7/checkout");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_list_targets_the_whole_cart() {
        let req = client().build_list("42");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/shopcarts/42");
    }

    #[test]
    fn build_query_appends_the_price_parameter() {
        let req = client().build_query("42", "9.99");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/shopcarts/42?price=9.99");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_create_success() {
        let item = client().parse_create(ok_response(201, ITEM_JSON)).unwrap();
        assert_eq!(item.customer_id, 42);
        assert_eq!(item.price, "9.99");
        assert_eq!(item.state, ItemState::InCart);
    }

    #[test]
    fn parse_create_surfaces_backend_message() {
        let err = client()
            .parse_create(ok_response(
                400,
                r#"{"status":400,"error":"Bad Request","message":"price must be a non-negative number"}"#,
            ))
            .unwrap_err();
        assert_eq!(err.message(), "price must be a non-negative number");
        assert!(matches!(err, OperationError::Validation { .. }));
    }

    #[test]
    fn parse_read_present_item() {
        let item = client().parse_read(ok_response(200, ITEM_JSON)).unwrap();
        assert_eq!(item.unwrap().product_id, 7);
    }

    #[test]
    fn parse_read_empty_object_is_none() {
        let item = client().parse_read(ok_response(200, "{}")).unwrap();
        assert!(item.is_none());
    }

    #[test]
    fn parse_read_not_found_is_an_error() {
        let err = client()
            .parse_read(ok_response(
                404,
                r#"{"status":404,"error":"Not Found","message":"item 42/7 was not found"}"#,
            ))
            .unwrap_err();
        assert_eq!(err.message(), "item 42/7 was not found");
    }

    #[test]
    fn parse_delete_success() {
        assert!(client().parse_delete(ok_response(204, "")).is_ok());
    }

    #[test]
    fn parse_delete_missing_pair_is_an_error() {
        let err = client().parse_delete(ok_response(404, "")).unwrap_err();
        assert!(matches!(err, OperationError::Server { status: 404, .. }));
    }

    #[test]
    fn parse_checkout_ignores_the_body() {
        assert!(client().parse_checkout(ok_response(200, ITEM_JSON)).is_ok());
        assert!(client().parse_checkout(ok_response(200, "")).is_ok());
    }

    #[test]
    fn parse_list_preserves_server_order() {
        let body = format!(
            "[{},{}]",
            r#"{"customer_id":42,"product_id":9,"text":"b","quantity":1,"price":"2.00","state":"in_cart"}"#,
            r#"{"customer_id":42,"product_id":7,"text":"a","quantity":1,"price":"1.00","state":"in_cart"}"#
        );
        let items = client().parse_list(ok_response(200, &body)).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].product_id, 9);
        assert_eq!(items[1].product_id, 7);
    }

    #[test]
    fn parse_list_bad_json() {
        let err = client().parse_list(ok_response(200, "not json")).unwrap_err();
        assert!(matches!(err, OperationError::Server { status: 200, .. }));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ShopcartClient::new("http://localhost:3000/");
        let req = client.build_list("42");
        assert_eq!(req.path, "http://localhost:3000/shopcarts/42");
    }
}
