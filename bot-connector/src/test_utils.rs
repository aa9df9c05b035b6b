//! Shared helpers for HTTP tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::controllers::ChannelController;
use crate::db::Database;
use crate::error::ApiError;
use crate::models::{Channel, ChannelKey, ChannelUpdate, NewChannel};
use crate::AppState;

/// App state over a fresh in-memory database
pub fn test_state() -> AppState {
    AppState::new(Arc::new(
        Database::new_in_memory().expect("in-memory database"),
    ))
}

/// App state whose channel routes hit the given controller instead of the database
pub fn test_state_with_channels(channels: Arc<dyn ChannelController>) -> AppState {
    AppState {
        channels,
        ..test_state()
    }
}

/// Records how many times any of its methods ran
#[derive(Default)]
pub struct CountingChannelController {
    pub calls: AtomicUsize,
}

impl CountingChannelController {
    fn hit(&self) -> ApiError {
        self.calls.fetch_add(1, Ordering::SeqCst);
        ApiError::channel_not_found()
    }
}

impl ChannelController for CountingChannelController {
    fn create_channel_by_bot_id(&self, _request: NewChannel) -> Result<Channel, ApiError> {
        Err(self.hit())
    }

    fn get_channels_by_bot_id(&self, _bot_id: &str) -> Result<Vec<Channel>, ApiError> {
        Err(self.hit())
    }

    fn get_channel_by_bot_id(&self, _key: ChannelKey) -> Result<Channel, ApiError> {
        Err(self.hit())
    }

    fn update_channel_by_bot_id(&self, _request: ChannelUpdate) -> Result<Channel, ApiError> {
        Err(self.hit())
    }

    fn delete_channel_by_bot_id(&self, _key: ChannelKey) -> Result<(), ApiError> {
        Err(self.hit())
    }
}

/// Build the full service (routes, JSON config, fallback) around a state
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state))
                .configure($crate::routes::configure)
                .default_service(actix_web::web::to($crate::routes::not_found)),
        )
        .await
    };
}
pub(crate) use init_app;

/// POST a bot through the API and return its id
macro_rules! create_bot {
    ($app:expr) => {{
        let req = actix_web::test::TestRequest::post()
            .uri("/bots")
            .set_json(serde_json::json!({"url": "https://bot.example.com/webhook"}))
            .to_request();
        let resp = actix_web::test::call_service($app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);
        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        body["results"]["id"].as_str().expect("bot id").to_string()
    }};
}
pub(crate) use create_bot;
