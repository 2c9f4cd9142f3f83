use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use crate::entities::order::{Order, OrderFields, OrderStatus};
use crate::entities::{Envelope, RequestEnvelope};
use crate::errors::{ApiError, RepoErr};
use crate::guards::body::{body_data_has, body_id_matches_route_id};
use crate::guards::orders::{
    body_data_has_dishes_property, body_has_status_property, dishes_have_quantity,
    order_is_not_delivered, order_status_is_pending, DELIVERED_MESSAGE, NOT_PENDING_MESSAGE,
};
use crate::guards::{GuardChain, RequestContext};
use crate::state::AppState;

fn payload_checks(chain: GuardChain<Order>) -> GuardChain<Order> {
    chain
        .check(body_data_has("deliverTo"))
        .check(body_data_has("mobileNumber"))
        .check(body_data_has_dishes_property)
        .check(dishes_have_quantity)
}

pub fn create_chain() -> GuardChain<Order> {
    payload_checks(GuardChain::new())
}

pub fn read_chain(state: &AppState) -> GuardChain<Order> {
    GuardChain::new().resolve(state.orders.clone())
}

pub fn update_chain(state: &AppState) -> GuardChain<Order> {
    payload_checks(read_chain(state))
        .check(body_id_matches_route_id)
        .check(body_has_status_property)
        .check(order_is_not_delivered)
}

pub fn delete_chain(state: &AppState) -> GuardChain<Order> {
    read_chain(state).check(order_status_is_pending)
}

/// A conditional write that lost a race reports the same 400 its guard
/// would have.
fn precondition_as(err: RepoErr, message: &str) -> ApiError {
    match err {
        RepoErr::PreconditionFailed(_) => ApiError::BadRequest(message.into()),
        other => other.into(),
    }
}

pub async fn list_orders(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let items = state.orders.list().await;
    Ok(HttpResponse::Ok().json(Envelope::from(items)))
}

pub async fn get_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let mut ctx = RequestContext::with_route_id(path.into_inner(), Default::default());
    read_chain(&state).run(&mut ctx).await?;
    Ok(HttpResponse::Ok().json(Envelope::from(ctx.take_resolved()?)))
}

#[instrument(skip_all)]
pub async fn create_order(
    state: web::Data<AppState>,
    payload: web::Json<RequestEnvelope>,
) -> Result<HttpResponse, ApiError> {
    let mut ctx = RequestContext::new(payload.into_inner().data);
    create_chain().run(&mut ctx).await?;
    let fields: OrderFields = ctx.parse_data()?;

    let created = state
        .orders
        .insert(Order::new(state.ids.next_id(), fields))
        .await?;
    info!(order_id = %created.id, dishes = created.dishes.len(), "order created");
    Ok(HttpResponse::Created().json(Envelope::from(created)))
}

#[instrument(skip_all, fields(order_id = %path))]
pub async fn update_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<RequestEnvelope>,
) -> Result<HttpResponse, ApiError> {
    let mut ctx = RequestContext::with_route_id(path.into_inner(), payload.into_inner().data);
    update_chain(&state).run(&mut ctx).await?;
    let fields: OrderFields = ctx.parse_data()?;
    let status = ctx
        .field("status")
        .and_then(OrderStatus::from_value)
        .ok_or(ApiError::Internal)?;

    let mut order = ctx.take_resolved()?;
    order.overwrite(fields, status);
    // The chain saw a snapshot; the stored order may have moved on since.
    let updated = state
        .orders
        .update_if(order, &|stored: &Order| !stored.status.is_terminal())
        .await
        .map_err(|e| precondition_as(e, DELIVERED_MESSAGE))?;
    info!(order_id = %updated.id, status = ?updated.status, "order updated");
    Ok(HttpResponse::Ok().json(Envelope::from(updated)))
}

#[instrument(skip_all, fields(order_id = %path))]
pub async fn delete_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let mut ctx = RequestContext::with_route_id(path.into_inner(), Default::default());
    delete_chain(&state).run(&mut ctx).await?;
    let order = ctx.take_resolved()?;

    state
        .orders
        .remove_if(&order.id, &|stored: &Order| {
            stored.status == OrderStatus::Pending
        })
        .await
        .map_err(|e| precondition_as(e, NOT_PENDING_MESSAGE))?;
    info!(order_id = %order.id, "order deleted");
    Ok(HttpResponse::NoContent().finish())
}
