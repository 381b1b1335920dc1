//! The form adapter: five string fields mirroring the entry form.
//!
//! # Design
//! The form holds the operator's transient focus copy of one item, always
//! as raw strings. `read` snapshots the fields into an `ItemDraft`
//! immediately before a request is built, so a later edit cannot race the
//! payload. `write` applies a response per field and silently skips fields
//! the response does not carry; `clear` resets everything to the empty
//! string.

use crate::types::{ItemDraft, ItemFields};

/// The five entry fields, each a raw string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartForm {
    pub customer_id: String,
    pub product_id: String,
    pub text: String,
    pub quantity: String,
    pub price: String,
}

impl CartForm {
    /// Snapshot the current field values as a request payload.
    pub fn read(&self) -> ItemDraft {
        ItemDraft {
            customer_id: self.customer_id.clone(),
            product_id: self.product_id.clone(),
            text: self.text.clone(),
            quantity: self.quantity.clone(),
            price: self.price.clone(),
        }
    }

    /// Copy a response into the form. Absent fields leave the current
    /// value untouched.
    pub fn write(&mut self, fields: &ItemFields) {
        if let Some(customer_id) = &fields.customer_id {
            self.customer_id = customer_id.clone();
        }
        if let Some(product_id) = &fields.product_id {
            self.product_id = product_id.clone();
        }
        if let Some(text) = &fields.text {
            self.text = text.clone();
        }
        if let Some(quantity) = &fields.quantity {
            self.quantity = quantity.clone();
        }
        if let Some(price) = &fields.price {
            self.price = price.clone();
        }
    }

    /// Reset every field to the empty string.
    pub fn clear(&mut self) {
        *self = CartForm::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CartForm {
        CartForm {
            customer_id: "42".to_string(),
            product_id: "7".to_string(),
            text: "widget".to_string(),
            quantity: "3".to_string(),
            price: "9.99".to_string(),
        }
    }

    #[test]
    fn read_snapshots_all_five_fields() {
        let draft = filled().read();
        assert_eq!(draft.customer_id, "42");
        assert_eq!(draft.product_id, "7");
        assert_eq!(draft.text, "widget");
        assert_eq!(draft.quantity, "3");
        assert_eq!(draft.price, "9.99");
    }

    #[test]
    fn write_replaces_present_fields() {
        let mut form = filled();
        form.write(&ItemFields {
            customer_id: Some("8".to_string()),
            product_id: Some("9".to_string()),
            text: Some("gadget".to_string()),
            quantity: Some("1".to_string()),
            price: Some("0.50".to_string()),
        });
        assert_eq!(form.customer_id, "8");
        assert_eq!(form.text, "gadget");
        assert_eq!(form.price, "0.50");
    }

    #[test]
    fn write_skips_absent_fields_silently() {
        let mut form = filled();
        form.write(&ItemFields {
            quantity: Some("99".to_string()),
            ..ItemFields::default()
        });
        assert_eq!(form.quantity, "99");
        // everything else untouched
        assert_eq!(form.customer_id, "42");
        assert_eq!(form.product_id, "7");
        assert_eq!(form.text, "widget");
        assert_eq!(form.price, "9.99");
    }

    #[test]
    fn write_with_all_fields_absent_is_a_no_op() {
        let mut form = filled();
        form.write(&ItemFields::default());
        assert_eq!(form, filled());
    }

    #[test]
    fn clear_resets_to_empty_strings() {
        let mut form = filled();
        form.clear();
        assert_eq!(form, CartForm::default());
        assert_eq!(form.customer_id, "");
    }
}
