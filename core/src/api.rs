//! One-call API operations over a host-supplied transport.
//!
//! `ProductApi` glues `ProductClient::build_*`, `Transport::execute`, and
//! `ProductClient::parse_*` together so the views can ask for products
//! without handling requests themselves.

use tracing::debug;

use crate::client::ProductClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{Product, ProductId};

#[derive(Debug, Clone)]
pub struct ProductApi<T> {
    client: ProductClient,
    transport: T,
}

impl<T: Transport> ProductApi<T> {
    pub fn new(client: ProductClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &ProductClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.execute(request)?;
        debug!(status = response.status, "received response");
        Ok(response)
    }

    /// Every product currently stored, in server order.
    pub fn list(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.send(self.client.build_list_products())?;
        self.client.parse_list_products(response)
    }

    pub fn get(&self, id: ProductId) -> Result<Product, ApiError> {
        let response = self.send(self.client.build_get_product(id))?;
        self.client.parse_get_product(response)
    }

    /// Returns the product as stored by the server, including its new id.
    pub fn create(&self, product: &Product) -> Result<Product, ApiError> {
        let response = self.send(self.client.build_create_product(product)?)?;
        self.client.parse_create_product(response)
    }

    pub fn update(&self, id: ProductId, product: &Product) -> Result<Product, ApiError> {
        let response = self.send(self.client.build_update_product(id, product)?)?;
        self.client.parse_update_product(response)
    }

    pub fn delete(&self, id: ProductId) -> Result<(), ApiError> {
        let response = self.send(self.client.build_delete_product(id))?;
        self.client.parse_delete_product(response)
    }
}
