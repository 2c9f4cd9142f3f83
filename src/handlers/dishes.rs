use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use crate::entities::dish::{Dish, DishFields};
use crate::entities::{Envelope, RequestEnvelope};
use crate::errors::ApiError;
use crate::guards::body::{body_data_has, body_id_matches_route_id};
use crate::guards::dishes::price_is_valid_number;
use crate::guards::{GuardChain, RequestContext};
use crate::state::AppState;

fn payload_checks(chain: GuardChain<Dish>) -> GuardChain<Dish> {
    chain
        .check(body_data_has("name"))
        .check(body_data_has("description"))
        .check(body_data_has("price"))
        .check(body_data_has("image_url"))
        .check(price_is_valid_number)
}

pub fn create_chain() -> GuardChain<Dish> {
    payload_checks(GuardChain::new())
}

pub fn read_chain(state: &AppState) -> GuardChain<Dish> {
    GuardChain::new().resolve(state.dishes.clone())
}

pub fn update_chain(state: &AppState) -> GuardChain<Dish> {
    payload_checks(read_chain(state)).check(body_id_matches_route_id)
}

pub async fn list_dishes(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let items = state.dishes.list().await;
    Ok(HttpResponse::Ok().json(Envelope::from(items)))
}

pub async fn get_dish(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let mut ctx = RequestContext::with_route_id(path.into_inner(), Default::default());
    read_chain(&state).run(&mut ctx).await?;
    Ok(HttpResponse::Ok().json(Envelope::from(ctx.take_resolved()?)))
}

#[instrument(skip_all)]
pub async fn create_dish(
    state: web::Data<AppState>,
    payload: web::Json<RequestEnvelope>,
) -> Result<HttpResponse, ApiError> {
    let mut ctx = RequestContext::new(payload.into_inner().data);
    create_chain().run(&mut ctx).await?;
    let fields: DishFields = ctx.parse_data()?;

    let created = state
        .dishes
        .insert(Dish::new(state.ids.next_id(), fields))
        .await?;
    info!(dish_id = %created.id, "dish created");
    Ok(HttpResponse::Created().json(Envelope::from(created)))
}

#[instrument(skip_all, fields(dish_id = %path))]
pub async fn update_dish(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<RequestEnvelope>,
) -> Result<HttpResponse, ApiError> {
    let mut ctx = RequestContext::with_route_id(path.into_inner(), payload.into_inner().data);
    update_chain(&state).run(&mut ctx).await?;
    let fields: DishFields = ctx.parse_data()?;

    let mut dish = ctx.take_resolved()?;
    dish.overwrite(fields);
    let updated = state.dishes.update(dish).await?;
    info!(dish_id = %updated.id, "dish updated");
    Ok(HttpResponse::Ok().json(Envelope::from(updated)))
}
