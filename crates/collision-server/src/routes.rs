//! HTTP routing: `{base_path}{module}/{sub}`.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderValue, Method, Uri};
use axum::response::{IntoResponse, Response};
use collision::CollisionEngine;
use plot::Renderer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

use crate::coll::CollModule;
use crate::config::{ModuleKind, ServerConfig};
use crate::error::{Result, ServerError};
use crate::format::Reply;
use crate::query::QueryParams;

#[derive(Clone)]
pub enum Module {
    Coll(CollModule),
}

impl Module {
    fn handle(&self, sub: Option<&str>, query: &QueryParams) -> Result<Reply> {
        match self {
            Module::Coll(module) => module.handle(sub, query),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub base_path: Arc<str>,
    pub modules: Arc<BTreeMap<String, Module>>,
}

impl AppState {
    pub fn new(
        config: &ServerConfig,
        engine: Arc<dyn CollisionEngine>,
        renderer: Arc<dyn Renderer>,
    ) -> Self {
        let modules = config
            .modules
            .iter()
            .map(|(name, kind)| {
                let module = match kind {
                    ModuleKind::Coll => Module::Coll(CollModule::new(engine.clone(), renderer.clone())),
                };
                (name.clone(), module)
            })
            .collect();

        Self {
            base_path: Arc::from(config.base_path.as_str()),
            modules: Arc::new(modules),
        }
    }

    /// Module and sub-path for a request path.
    fn route<'p>(&self, path: &'p str) -> Option<(&Module, Option<&'p str>)> {
        let rest = path.strip_prefix(self.base_path.as_ref())?;
        let (name, sub) = match rest.split_once('/') {
            Some((name, sub)) => (name, Some(sub)),
            None => (rest, None),
        };
        Some((self.modules.get(name)?, sub))
    }
}

async fn dispatch(State(state): State<AppState>, uri: Uri) -> Response {
    let Some((module, sub)) = state.route(uri.path()) else {
        debug!(path = uri.path(), "no module");
        return ServerError::NotFound.into_response();
    };
    debug!(path = uri.path(), ?sub, "dispatch");

    let module = module.clone();
    let sub = sub.map(str::to_owned);
    let query = QueryParams::from_uri(&uri);

    let result = tokio::task::spawn_blocking(move || module.handle(sub.as_deref(), &query))
        .await
        .map_err(|err| ServerError::Worker(err.to_string()))
        .and_then(|result| result);

    match result {
        Ok(reply) => reply.into_response(),
        Err(err) => {
            if !matches!(err, ServerError::NotFound) {
                error!(%err, path = uri.path(), "request failed");
            }
            err.into_response()
        }
    }
}

fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    if origins.is_empty() {
        return None;
    }

    let allow_origin = if origins.iter().any(|origin| origin == "*") {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(
            origins
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok()),
        )
    };

    Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET]),
    )
}

/// Router serving every configured module.
pub fn router(
    config: &ServerConfig,
    engine: Arc<dyn CollisionEngine>,
    renderer: Arc<dyn Renderer>,
) -> Router {
    let state = AppState::new(config, engine, renderer);
    let router = Router::new()
        .fallback(dispatch)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    match cors_layer(&config.cors_origins) {
        Some(cors) => router.layer(cors),
        None => router,
    }
}
