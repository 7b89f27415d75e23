//! The screen used for both creating and editing one product.
//!
//! # Design
//! Field values are held as raw text in a `ProductDraft` and only turned
//! into a `Product` at submit time, so half-typed prices such as `"3."` are
//! never rejected while editing. Whether the form creates or updates is
//! decided by the id it was opened with, not by the fetched product.

use std::fmt;
use std::str::FromStr;

use tracing::{error, warn};

use crate::api::ProductApi;
use crate::error::FormError;
use crate::http::Transport;
use crate::route::Route;
use crate::types::{Product, ProductId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    New,
    LoadedForEdit,
    Submitted,
}

/// An editable field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Desc,
    Price,
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "desc" => Ok(Field::Desc),
            "price" => Ok(Field::Price),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Desc => f.write_str("desc"),
            Field::Price => f.write_str("price"),
        }
    }
}

/// Text currently entered in the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub desc: String,
    pub price: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            desc: String::new(),
            price: "1".to_string(),
        }
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            desc: product.desc.clone(),
            price: product.price.to_string(),
        }
    }
}

impl ProductDraft {
    /// Parse the draft into a product carrying `id`.
    pub fn to_product(&self, id: Option<ProductId>) -> Result<Product, FormError> {
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| FormError::InvalidPrice(self.price.clone()))?;
        Ok(Product {
            id,
            desc: self.desc.clone(),
            price,
        })
    }
}

#[derive(Debug, Clone)]
pub struct FormView {
    id: Option<ProductId>,
    draft: ProductDraft,
    phase: FormPhase,
}

impl FormView {
    /// A form for a new product (`None`) or for editing product `id`.
    pub fn new(id: Option<ProductId>) -> Self {
        Self {
            id,
            draft: ProductDraft::default(),
            phase: FormPhase::New,
        }
    }

    pub fn id(&self) -> Option<ProductId> {
        self.id
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Seed the draft from the server when editing. On failure the defaults
    /// stay in place.
    pub fn mount<T: Transport>(&mut self, api: &ProductApi<T>) {
        let Some(id) = self.id else {
            return;
        };
        match api.get(id) {
            Ok(product) => {
                self.draft = ProductDraft::from(&product);
                self.phase = FormPhase::LoadedForEdit;
            }
            Err(err) => error!(error = %err, id, "error fetching product"),
        }
    }

    /// Store raw text for `field`. No parsing happens here.
    pub fn set_field(&mut self, field: Field, value: &str) {
        match field {
            Field::Desc => self.draft.desc = value.to_string(),
            Field::Price => self.draft.price = value.to_string(),
        }
    }

    /// Create or update, then ask to go back to the list.
    ///
    /// Returns the route to navigate to on success and `None` when the user
    /// should stay on the form; the failure itself is only logged.
    pub fn submit<T: Transport>(&mut self, api: &ProductApi<T>) -> Option<Route> {
        let product = match self.draft.to_product(self.id) {
            Ok(product) => product,
            Err(err) => {
                warn!(error = %err, "form not submitted");
                return None;
            }
        };
        let result = match self.id {
            Some(id) => api.update(id, &product),
            None => api.create(&product),
        };
        match result {
            Ok(_) => {
                self.phase = FormPhase::Submitted;
                Some(Route::List)
            }
            Err(err) => {
                error!(error = %err, "error submitting form");
                None
            }
        }
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Product"
        } else {
            "Create Product"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit() {
            "Update"
        } else {
            "Create"
        }
    }

    pub fn render(&self) -> String {
        format!(
            "{}\n  Description: {}\n  Price: {}\n[submit] {}\n",
            self.title(),
            self.draft.desc,
            self.draft.price,
            self.submit_label()
        )
    }
}
