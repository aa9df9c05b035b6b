//! Bot routes: `/bots`

use actix_web::http::Method;
use actix_web::{web, HttpResponse, Route};
use serde_json::Value;

use super::{register, ApiResponse, RouteDescriptor};
use crate::error::ApiError;
use crate::validators;
use crate::AppState;

pub const BOTS_PATH: &str = "/bots";
pub const BOT_PATH: &str = "/bots/{bot_id}";

pub static BOT_ROUTES: [RouteDescriptor; 5] = [
    RouteDescriptor {
        name: "createBot",
        method: Method::POST,
        path: BOTS_PATH,
        bind: bind_create_bot,
    },
    RouteDescriptor {
        name: "getBots",
        method: Method::GET,
        path: BOTS_PATH,
        bind: bind_get_bots,
    },
    RouteDescriptor {
        name: "getBotById",
        method: Method::GET,
        path: BOT_PATH,
        bind: bind_get_bot_by_id,
    },
    RouteDescriptor {
        name: "updateBotById",
        method: Method::PUT,
        path: BOT_PATH,
        bind: bind_update_bot_by_id,
    },
    RouteDescriptor {
        name: "deleteBotById",
        method: Method::DELETE,
        path: BOT_PATH,
        bind: bind_delete_bot_by_id,
    },
];

pub fn config(cfg: &mut web::ServiceConfig) {
    register(cfg, &BOT_ROUTES);
}

fn bind_create_bot(route: Route) -> Route {
    route.to(create_bot)
}

fn bind_get_bots(route: Route) -> Route {
    route.to(get_bots)
}

fn bind_get_bot_by_id(route: Route) -> Route {
    route.to(get_bot_by_id)
}

fn bind_update_bot_by_id(route: Route) -> Route {
    route.to(update_bot_by_id)
}

fn bind_delete_bot_by_id(route: Route) -> Route {
    route.to(delete_bot_by_id)
}

async fn create_bot(state: web::Data<AppState>, body: web::Json<Value>) -> Result<HttpResponse, ApiError> {
    let request = validators::bots::create_bot(&body)?;
    let bot = state.bots.create_bot(request)?;
    Ok(HttpResponse::Created().json(ApiResponse::new(bot, "Bot successfully created")))
}

async fn get_bots(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let bots = state.bots.get_bots()?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(bots, "Bots successfully found")))
}

async fn get_bot_by_id(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let bot_id = validators::bots::get_bot_by_id(&path)?;
    let bot = state.bots.get_bot_by_id(&bot_id)?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(bot, "Bot successfully found")))
}

async fn update_bot_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let request = validators::bots::update_bot_by_id(&path, &body)?;
    let bot = state.bots.update_bot_by_id(request)?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(bot, "Bot successfully updated")))
}

async fn delete_bot_by_id(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let bot_id = validators::bots::delete_bot_by_id(&path)?;
    state.bots.delete_bot_by_id(&bot_id)?;
    Ok(HttpResponse::Ok().json(ApiResponse::new((), "Bot successfully deleted")))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use serde_json::{json, Value};

    use crate::test_utils::{create_bot, init_app, test_state};

    #[actix_web::test]
    async fn test_bot_lifecycle() {
        let app = init_app!(test_state());
        let bot_id = create_bot!(&app);

        let req = test::TestRequest::get().uri(&format!("/bots/{}", bot_id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["results"]["url"], "https://bot.example.com/webhook");

        let req = test::TestRequest::put()
            .uri(&format!("/bots/{}", bot_id))
            .set_json(json!({"url": "https://moved.example.com/webhook"}))
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(body["results"]["url"], "https://moved.example.com/webhook");

        let req = test::TestRequest::get().uri("/bots").to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(body["results"].as_array().unwrap().len(), 1);
        assert_eq!(body["message"], "Bots successfully found");

        let req = test::TestRequest::delete().uri(&format!("/bots/{}", bot_id)).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri(&format!("/bots/{}", bot_id)).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_deleting_bot_removes_its_channels() {
        let app = init_app!(test_state());
        let bot_id = create_bot!(&app);

        let req = test::TestRequest::post()
            .uri(&format!("/bots/{}/channels", bot_id))
            .set_json(json!({"slug": "team", "type": "slack", "token": "t", "isActivated": true}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::delete().uri(&format!("/bots/{}", bot_id)).to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get()
            .uri(&format!("/bots/{}/channels/team", bot_id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Bot not found");
    }

    #[actix_web::test]
    async fn test_invalid_bot_requests() {
        let app = init_app!(test_state());

        let req = test::TestRequest::post()
            .uri("/bots")
            .set_json(json!({"url": "mailto:someone@example.com"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Parameter url is invalid");

        let req = test::TestRequest::get().uri("/bots/12345").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::delete()
            .uri("/bots/00000000-0000-4000-8000-000000000000")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }
}
