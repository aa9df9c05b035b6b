//! Channel routes: `/bots/{bot_id}/channels`

use actix_web::http::Method;
use actix_web::{web, HttpResponse, Route};
use serde_json::Value;

use super::{register, ApiResponse, RouteDescriptor};
use crate::error::ApiError;
use crate::validators;
use crate::AppState;

pub const CHANNELS_PATH: &str = "/bots/{bot_id}/channels";
pub const CHANNEL_PATH: &str = "/bots/{bot_id}/channels/{channel_slug}";

pub static CHANNEL_ROUTES: [RouteDescriptor; 5] = [
    RouteDescriptor {
        name: "createChannelByBotId",
        method: Method::POST,
        path: CHANNELS_PATH,
        bind: bind_create_channel_by_bot_id,
    },
    RouteDescriptor {
        name: "getChannelsByBotId",
        method: Method::GET,
        path: CHANNELS_PATH,
        bind: bind_get_channels_by_bot_id,
    },
    RouteDescriptor {
        name: "getChannelByBotId",
        method: Method::GET,
        path: CHANNEL_PATH,
        bind: bind_get_channel_by_bot_id,
    },
    RouteDescriptor {
        name: "updateChannelByBotId",
        method: Method::PUT,
        path: CHANNEL_PATH,
        bind: bind_update_channel_by_bot_id,
    },
    RouteDescriptor {
        name: "deleteChannelByBotId",
        method: Method::DELETE,
        path: CHANNEL_PATH,
        bind: bind_delete_channel_by_bot_id,
    },
];

pub fn config(cfg: &mut web::ServiceConfig) {
    register(cfg, &CHANNEL_ROUTES);
}

fn bind_create_channel_by_bot_id(route: Route) -> Route {
    route.to(create_channel_by_bot_id)
}

fn bind_get_channels_by_bot_id(route: Route) -> Route {
    route.to(get_channels_by_bot_id)
}

fn bind_get_channel_by_bot_id(route: Route) -> Route {
    route.to(get_channel_by_bot_id)
}

fn bind_update_channel_by_bot_id(route: Route) -> Route {
    route.to(update_channel_by_bot_id)
}

fn bind_delete_channel_by_bot_id(route: Route) -> Route {
    route.to(delete_channel_by_bot_id)
}

async fn create_channel_by_bot_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let request = validators::channels::create_channel_by_bot_id(&path, &body)?;
    let channel = state.channels.create_channel_by_bot_id(request)?;
    Ok(HttpResponse::Created().json(ApiResponse::new(channel, "Channel successfully created")))
}

async fn get_channels_by_bot_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let bot_id = validators::channels::get_channels_by_bot_id(&path)?;
    let channels = state.channels.get_channels_by_bot_id(&bot_id)?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(channels, "Channels successfully found")))
}

async fn get_channel_by_bot_id(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ApiError> {
    let (bot_id, channel_slug) = path.into_inner();
    let key = validators::channels::get_channel_by_bot_id(&bot_id, &channel_slug)?;
    let channel = state.channels.get_channel_by_bot_id(key)?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(channel, "Channel successfully found")))
}

async fn update_channel_by_bot_id(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let (bot_id, channel_slug) = path.into_inner();
    let request = validators::channels::update_channel_by_bot_id(&bot_id, &channel_slug, &body)?;
    let channel = state.channels.update_channel_by_bot_id(request)?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(channel, "Channel successfully updated")))
}

async fn delete_channel_by_bot_id(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ApiError> {
    let (bot_id, channel_slug) = path.into_inner();
    let key = validators::channels::delete_channel_by_bot_id(&bot_id, &channel_slug)?;
    state.channels.delete_channel_by_bot_id(key)?;
    Ok(HttpResponse::Ok().json(ApiResponse::new((), "Channel successfully deleted")))
}
