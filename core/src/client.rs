//! Stateless HTTP request builder and response parser for the product API.
//!
//! # Design
//! `ProductClient` holds only the collection endpoint and carries no mutable
//! state between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Any 2xx status is success; the body is trusted as long as
//! it decodes.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Product, ProductId};

/// Collection endpoint used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/products/";

/// Synchronous, stateless client for the product API.
#[derive(Debug, Clone)]
pub struct ProductClient {
    base_url: String,
}

impl Default for ProductClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ProductClient {
    /// `base_url` is the collection endpoint. It is stored with exactly one
    /// trailing slash so item URLs come out as `{base}{id}/`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: format!("{}/", base_url.trim_end_matches('/')),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: ProductId) -> String {
        format!("{}{id}/", self.base_url)
    }

    pub fn build_list_products(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.base_url.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_product(&self, id: ProductId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_product(&self, product: &Product) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.base_url.clone(),
            headers: json_headers(),
            body: Some(to_json(product)?),
        })
    }

    pub fn build_update_product(&self, id: ProductId, product: &Product) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: self.item_url(id),
            headers: json_headers(),
            body: Some(to_json(product)?),
        })
    }

    pub fn build_delete_product(&self, id: ProductId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_products(&self, response: HttpResponse) -> Result<Vec<Product>, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_get_product(&self, response: HttpResponse) -> Result<Product, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_create_product(&self, response: HttpResponse) -> Result<Product, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_update_product(&self, response: HttpResponse) -> Result<Product, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_delete_product(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json(product: &Product) -> Result<String, ApiError> {
    serde_json::to_string(product).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
