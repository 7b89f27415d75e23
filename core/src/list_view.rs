//! The screen enumerating all products.
//!
//! # Design
//! The view owns the only client-side copy of the list. It is fetched once
//! on mount and afterwards changed only by successful deletes; nothing is
//! re-fetched until the view is mounted again. Failures are logged and
//! otherwise invisible: the list simply stays as it was.

use std::fmt::Write as _;

use tracing::error;

use crate::api::ProductApi;
use crate::http::Transport;
use crate::route::Route;
use crate::types::{Product, ProductId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    Loading,
    Loaded,
}

/// One rendered row of the list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry<'a> {
    pub id: Option<ProductId>,
    pub desc: &'a str,
    pub price: String,
}

#[derive(Debug, Clone)]
pub struct ListView {
    products: Vec<Product>,
    phase: ListPhase,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            phase: ListPhase::Loading,
        }
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Fetch the full list once and replace local state with it.
    pub fn mount<T: Transport>(&mut self, api: &ProductApi<T>) {
        match api.list() {
            Ok(products) => {
                self.products = products;
                self.phase = ListPhase::Loaded;
            }
            Err(err) => error!(error = %err, "error fetching products"),
        }
    }

    pub fn create(&self) -> Route {
        Route::Create
    }

    pub fn edit(&self, id: ProductId) -> Route {
        Route::Edit(id)
    }

    /// Delete on the server, then drop the id locally. A failed delete
    /// leaves the list untouched even if the server did remove the item.
    pub fn delete<T: Transport>(&mut self, api: &ProductApi<T>, id: ProductId) {
        match api.delete(id) {
            Ok(()) => self.products.retain(|p| p.id != Some(id)),
            Err(err) => error!(error = %err, id, "error deleting product"),
        }
    }

    pub fn entries(&self) -> Vec<ListEntry<'_>> {
        self.products
            .iter()
            .map(|p| ListEntry {
                id: p.id,
                desc: &p.desc,
                price: p.price_text(),
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let mut out = String::from("Product List\n[create] Create New Product\n");
        for entry in self.entries() {
            match entry.id {
                Some(id) => {
                    let _ = writeln!(
                        out,
                        "  {} - ${}  [edit {id}] [delete {id}]",
                        entry.desc, entry.price
                    );
                }
                None => {
                    let _ = writeln!(out, "  {} - ${}", entry.desc, entry.price);
                }
            }
        }
        out
    }
}
