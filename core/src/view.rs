//! Result table and view state — the client's entire mutable surface.
//!
//! # Design
//! `ViewState` is everything the screen holds: the entry form, the
//! result table, and a single-slot flash message. Operation handlers take
//! it by `&mut` and apply their effects; nothing else mutates it, so the
//! controller is fully testable without a rendering layer.
//!
//! The table keeps the fixed five-column header and re-renders
//! idempotently: every render drops the previous rows before appending,
//! and collection order is the server's, never re-sorted.

use std::fmt;

use crate::form::CartForm;
use crate::types::ShopcartItem;

/// Fixed header, in column order.
pub const COLUMNS: [&str; 5] = ["Customer_ID", "Product_ID", "Item_Text", "Quantity", "Price"];

/// The rendered result rows, one `[String; 5]` per item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    rows: Vec<[String; 5]>,
}

impl ResultTable {
    /// Render exactly one body row.
    pub fn render_single(&mut self, item: &ShopcartItem) {
        self.rows.clear();
        self.rows.push(row(item));
    }

    /// Render one row per item, in the order given.
    pub fn render_collection(&mut self, items: &[ShopcartItem]) {
        self.rows.clear();
        self.rows.extend(items.iter().map(row));
    }

    pub fn rows(&self) -> &[[String; 5]] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn row(item: &ShopcartItem) -> [String; 5] {
    [
        item.customer_id.to_string(),
        item.product_id.to_string(),
        item.text.clone(),
        item.quantity.to_string(),
        item.price.clone(),
    ]
}

/// Plain-text rendering for console hosts: header row plus one line per
/// body row, tab-separated.
impl fmt::Display for ResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", COLUMNS.join("\t"))?;
        for row in &self.rows {
            write!(f, "\n{}", row.join("\t"))?;
        }
        Ok(())
    }
}

/// Everything an operation may touch: form fields, result table, flash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub form: CartForm,
    pub table: ResultTable,
    pub flash: String,
}

impl ViewState {
    pub fn new() -> Self {
        ViewState::default()
    }

    /// Overwrite the flash slot with the latest outcome.
    pub fn flash(&mut self, message: impl Into<String>) {
        self.flash = message.into();
    }
}
