//! The operation dispatcher: one start/finish pair per lifecycle operation.
//!
//! # Design
//! `CartController` drives a `ViewState` through the item lifecycle.
//! `start_<op>` reads the form at build time, checks the fields the
//! operation requires are present, and produces the `HttpRequest`; the
//! host executes it and hands the outcome to `finish_<op>`, which applies
//! the operation's effects:
//!
//! - create/update success writes the response into the form; failure
//!   leaves the form untouched so the operator can correct and resubmit.
//! - read success renders a single-row table and fills the form; an empty
//!   object (the record is no longer in the cart) is a no-op; failure
//!   clears the form.
//! - delete and checkout success clear the form; delete failure always
//!   flashes the fixed "Server error!" text.
//! - list/query success renders the collection in server order and copies
//!   the first item into the form; with zero items the form is left as-is.
//!   Failure clears the form.
//!
//! Every finish overwrites the flash slot, so the flash always shows the
//! most recently completed operation. A `start_*` error never builds a
//! request; the host routes it into the matching `finish_*`, which treats
//! it like any other failure.

use crate::client::ShopcartClient;
use crate::error::OperationError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::ItemFields;
use crate::view::ViewState;

/// Outcome of the host's round-trip: the response, or the transport /
/// precondition error that prevented one.
pub type Exchange = Result<HttpResponse, OperationError>;

/// Dispatches lifecycle operations over one item against a shopcart
/// backend, applying each outcome to the `ViewState`.
#[derive(Debug, Clone)]
pub struct CartController {
    client: ShopcartClient,
}

impl CartController {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: ShopcartClient::new(base_url),
        }
    }

    pub fn start_create(&self, view: &ViewState) -> Result<HttpRequest, OperationError> {
        let draft = view.form.read();
        require(&draft.customer_id, "customer_id")?;
        require(&draft.product_id, "product_id")?;
        require(&draft.quantity, "quantity")?;
        require(&draft.price, "price")?;
        require(&draft.text, "text")?;
        self.client.build_create(&draft)
    }

    pub fn finish_create(&self, view: &mut ViewState, exchange: Exchange) {
        match exchange.and_then(|response| self.client.parse_create(response)) {
            Ok(item) => {
                view.form.write(&ItemFields::from(&item));
                view.flash("Success");
            }
            Err(err) => view.flash(err.message().to_string()),
        }
    }

    pub fn start_update(&self, view: &ViewState) -> Result<HttpRequest, OperationError> {
        let draft = view.form.read();
        require(&draft.customer_id, "customer_id")?;
        require(&draft.product_id, "product_id")?;
        self.client.build_update(&draft)
    }

    pub fn finish_update(&self, view: &mut ViewState, exchange: Exchange) {
        match exchange.and_then(|response| self.client.parse_update(response)) {
            Ok(item) => {
                view.form.write(&ItemFields::from(&item));
                view.flash("Success");
            }
            Err(err) => view.flash(err.message().to_string()),
        }
    }

    pub fn start_read(&self, view: &ViewState) -> Result<HttpRequest, OperationError> {
        let draft = view.form.read();
        require(&draft.customer_id, "customer_id")?;
        require(&draft.product_id, "product_id")?;
        Ok(self.client.build_read(&draft.customer_id, &draft.product_id))
    }

    pub fn finish_read(&self, view: &mut ViewState, exchange: Exchange) {
        match exchange.and_then(|response| self.client.parse_read(response)) {
            Ok(Some(item)) => {
                view.table.render_single(&item);
                view.form.write(&ItemFields::from(&item));
                view.flash("Read shopcart Success!");
            }
            // Empty object: the pair resolves to no cart entry. Nothing to
            // render, nothing to flash.
            Ok(None) => {}
            Err(err) => {
                view.form.clear();
                view.flash(err.message().to_string());
            }
        }
    }

    pub fn start_delete(&self, view: &ViewState) -> Result<HttpRequest, OperationError> {
        let draft = view.form.read();
        require(&draft.customer_id, "customer_id")?;
        require(&draft.product_id, "product_id")?;
        Ok(self
            .client
            .build_delete(&draft.customer_id, &draft.product_id))
    }

    pub fn finish_delete(&self, view: &mut ViewState, exchange: Exchange) {
        match exchange.and_then(|response| self.client.parse_delete(response)) {
            Ok(()) => {
                view.form.clear();
                view.flash("Item has been Deleted!");
            }
            // Delete failures flash the fixed text whatever the cause, and
            // leave the form alone.
            Err(_) => view.flash("Server error!"),
        }
    }

    pub fn start_checkout(&self, view: &ViewState) -> Result<HttpRequest, OperationError> {
        let draft = view.form.read();
        require(&draft.customer_id, "customer_id")?;
        require(&draft.product_id, "product_id")?;
        Ok(self
            .client
            .build_checkout(&draft.customer_id, &draft.product_id))
    }

    pub fn finish_checkout(&self, view: &mut ViewState, exchange: Exchange) {
        match exchange.and_then(|response| self.client.parse_checkout(response)) {
            Ok(()) => {
                view.form.clear();
                view.flash("Product has been moved to Orders!");
            }
            Err(err) => view.flash(err.message().to_string()),
        }
    }

    pub fn start_list(&self, view: &ViewState) -> Result<HttpRequest, OperationError> {
        let draft = view.form.read();
        require(&draft.customer_id, "customer_id")?;
        Ok(self.client.build_list(&draft.customer_id))
    }

    pub fn finish_list(&self, view: &mut ViewState, exchange: Exchange) {
        match exchange.and_then(|response| self.client.parse_list(response)) {
            Ok(items) => {
                view.table.render_collection(&items);
                // Copy the first item only; an empty result leaves the
                // form as-is since this is a success path.
                if let Some(first) = items.first() {
                    view.form.write(&ItemFields::from(first));
                }
                view.flash("List shopcart Success!");
            }
            Err(err) => {
                view.form.clear();
                view.flash(err.message().to_string());
            }
        }
    }

    pub fn start_query(&self, view: &ViewState) -> Result<HttpRequest, OperationError> {
        let draft = view.form.read();
        require(&draft.customer_id, "customer_id")?;
        require(&draft.price, "price")?;
        Ok(self.client.build_query(&draft.customer_id, &draft.price))
    }

    pub fn finish_query(&self, view: &mut ViewState, exchange: Exchange) {
        match exchange.and_then(|response| self.client.parse_query(response)) {
            Ok(items) => {
                view.table.render_collection(&items);
                if let Some(first) = items.first() {
                    view.form.write(&ItemFields::from(first));
                }
                view.flash("Query shopcart Success!");
            }
            Err(err) => {
                view.form.clear();
                view.flash(err.message().to_string());
            }
        }
    }
}

/// Presence is the only client-side check; types and ranges are the
/// backend's job.
fn require(value: &str, field: &'static str) -> Result<(), OperationError> {
    if value.trim().is_empty() {
        return Err(OperationError::validation(format!("{field} is required")));
    }
    Ok(())
}
