use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Liveness plus the size of each collection.
#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub dishes: usize,
    pub orders: usize,
}

pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(Health {
        status: "ok".into(),
        dishes: state.dishes.list().await.len(),
        orders: state.orders.list().await.len(),
    })
}
