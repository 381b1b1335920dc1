//! Domain DTOs for the shopcart API.
//!
//! # Design
//! Three shapes cover the whole wire contract:
//! - `ShopcartItem` — the typed item the backend returns.
//! - `ItemDraft` — the five form fields as raw strings, sent as the request
//!   payload. The client performs no numeric coercion; quantity and price
//!   travel verbatim and the backend parses and validates them.
//! - `ItemFields` — an all-`Option` view used when writing a response back
//!   into the form, so an absent field is skipped instead of erased.
//!
//! These types mirror the mock-server's schema but are defined
//! independently; integration tests catch schema drift.

use serde::{Deserialize, Serialize};

/// Lifecycle tag for an item.
///
/// An item is in exactly one of the two states. Checkout moves it from
/// `InCart` to `Ordered`; ordered records survive but no longer belong to
/// the cart, so cart-scoped list and query calls exclude them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ItemState {
    InCart,
    Ordered,
}

impl ItemState {
    /// The one predicate shared by checkout and cart-scoped filtering.
    pub fn is_in_cart(self) -> bool {
        matches!(self, ItemState::InCart)
    }
}

/// A shopcart item as returned by the API.
///
/// `price` stays the string the backend validated and stored — the decimal
/// round-trips verbatim rather than through a float.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShopcartItem {
    pub customer_id: u32,
    pub product_id: u32,
    pub text: String,
    pub quantity: u32,
    pub price: String,
    pub state: ItemState,
}

/// Request payload for create and update: the form's five fields, untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemDraft {
    pub customer_id: String,
    pub product_id: String,
    pub text: String,
    pub quantity: String,
    pub price: String,
}

/// Per-field view of a response object for form writes.
///
/// A `None` field is absent on the response and leaves the corresponding
/// form field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFields {
    pub customer_id: Option<String>,
    pub product_id: Option<String>,
    pub text: Option<String>,
    pub quantity: Option<String>,
    pub price: Option<String>,
}

impl From<&ShopcartItem> for ItemFields {
    fn from(item: &ShopcartItem) -> Self {
        ItemFields {
            customer_id: Some(item.customer_id.to_string()),
            product_id: Some(item.product_id.to_string()),
            text: Some(item.text.clone()),
            quantity: Some(item.quantity.to_string()),
            price: Some(item.price.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_state_serializes_snake_case() {
        assert_eq!(serde_json::to_value(ItemState::InCart).unwrap(), "in_cart");
        assert_eq!(serde_json::to_value(ItemState::Ordered).unwrap(), "ordered");
    }

    #[test]
    fn only_in_cart_passes_the_cart_predicate() {
        assert!(ItemState::InCart.is_in_cart());
        assert!(!ItemState::Ordered.is_in_cart());
    }

    #[test]
    fn item_roundtrips_through_json() {
        let item = ShopcartItem {
            customer_id: 42,
            product_id: 7,
            text: "widget".to_string(),
            quantity: 3,
            price: "9.99".to_string(),
            state: ItemState::InCart,
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: ShopcartItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn draft_serializes_all_fields_as_strings() {
        let draft = ItemDraft {
            customer_id: "42".to_string(),
            product_id: "7".to_string(),
            text: "widget".to_string(),
            quantity: "3".to_string(),
            price: "9.99".to_string(),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["quantity"], "3");
        assert_eq!(json["price"], "9.99");
    }

    #[test]
    fn item_fields_from_item_stringifies_numbers() {
        let item = ShopcartItem {
            customer_id: 42,
            product_id: 7,
            text: "widget".to_string(),
            quantity: 3,
            price: "9.99".to_string(),
            state: ItemState::InCart,
        };
        let fields = ItemFields::from(&item);
        assert_eq!(fields.customer_id.as_deref(), Some("42"));
        assert_eq!(fields.quantity.as_deref(), Some("3"));
        assert_eq!(fields.price.as_deref(), Some("9.99"));
    }
}
