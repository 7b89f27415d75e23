use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub desc: String,
    pub price: f64,
}

/// Body of POST and PUT. A client-supplied `id` is ignored.
#[derive(Deserialize)]
pub struct ProductInput {
    pub desc: String,
    pub price: f64,
}

/// In-memory table. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct Store {
    last_id: i64,
    products: BTreeMap<i64, Product>,
}

impl Store {
    fn insert(&mut self, input: ProductInput) -> Product {
        self.last_id += 1;
        let product = Product {
            id: self.last_id,
            desc: input.desc,
            price: input.price,
        };
        self.products.insert(product.id, product.clone());
        product
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/products/", get(list_products).post(create_product))
        .route(
            "/api/products/{id}/",
            get(get_product).put(update_product).delete(delete_product),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_products(State(db): State<Db>) -> Json<Vec<Product>> {
    let store = db.read().await;
    Json(store.products.values().cloned().collect())
}

async fn create_product(
    State(db): State<Db>,
    Json(input): Json<ProductInput>,
) -> (StatusCode, Json<Product>) {
    let product = db.write().await.insert(input);
    tracing::debug!(id = product.id, "product created");
    (StatusCode::CREATED, Json(product))
}

async fn get_product(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, StatusCode> {
    let store = db.read().await;
    store.products.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_product(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<ProductInput>,
) -> Result<Json<Product>, StatusCode> {
    let mut store = db.write().await;
    let product = store.products.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    product.desc = input.desc;
    product.price = input.price;
    Ok(Json(product.clone()))
}

async fn delete_product(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .products
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}
