use crate::entities::{dish::Dish, order::Order};
use crate::ids::{IdGenerator, UuidIdGenerator};
use crate::repositories::Repository;
use actix_web::web::Data;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub dishes: Arc<dyn Repository<Dish>>,
    pub orders: Arc<dyn Repository<Order>>,
    pub ids: Arc<dyn IdGenerator>,
}

impl AppState {
    pub fn new<D, O>(dishes: D, orders: O) -> Data<Self>
    where
        D: Repository<Dish> + 'static,
        O: Repository<Order> + 'static,
    {
        Self::with_ids(dishes, orders, UuidIdGenerator)
    }

    pub fn with_ids<D, O, I>(dishes: D, orders: O, ids: I) -> Data<Self>
    where
        D: Repository<Dish> + 'static,
        O: Repository<Order> + 'static,
        I: IdGenerator + 'static,
    {
        Data::new(Self {
            dishes: Arc::new(dishes),
            orders: Arc::new(orders),
            ids: Arc::new(ids),
        })
    }
}
