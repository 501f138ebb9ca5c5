// HTTP routes adapting store operations to request/response semantics.
//
//   GET  /league/...      -> 200, JSON array of {"Name", "Wins"}
//   GET  /players/{name}  -> score as decimal text, 200 (or 404 when 0)
//   POST /players/{name}  -> record a win, 202
//
// Both routes are path prefixes: `/league/` serves its whole subtree and the
// player name is everything after `/players/`, possibly empty.

use std::sync::Arc;

use axum::async_trait;
use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path, State};
use axum::http::request::Parts;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{any, get, MethodRouter};
use axum::{Json, Router};
use poker_core::PlayerStore;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

pub const JSON_CONTENT_TYPE: &str = "application/json";

const LEAGUE_PATH: &str = "/league/";
const PLAYERS_PREFIX: &str = "/players/";

/// Routes requests to an injected player store.
#[derive(Clone)]
pub struct PlayerServer {
    store: Arc<dyn PlayerStore>,
}

impl PlayerServer {
    pub fn new(store: Arc<dyn PlayerStore>) -> Self {
        Self { store }
    }

    /// Build the axum router. `/league` redirects to `/league/`; paths outside
    /// the two prefixes get the router's default 404.
    pub fn router(self) -> Router {
        Router::new()
            .route("/league", any(redirect_to_league))
            .route(LEAGUE_PATH, get(league_handler))
            .route("/league/*rest", get(league_handler))
            .route(PLAYERS_PREFIX, player_routes())
            .route("/players/*name", player_routes())
            .with_state(self)
    }
}

fn player_routes() -> MethodRouter<PlayerServer> {
    get(show_score).post(process_win).fallback(ignore_method)
}

/// Serve `server` on `listener` until Ctrl+C.
pub async fn run(listener: TcpListener, server: PlayerServer) -> anyhow::Result<()> {
    let local_addr = listener.local_addr()?;
    info!("Player server listening on {local_addr}");

    axum::serve(listener, server.router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Player server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

// ---------------------------------------------------------------------------
// Extractors
// ---------------------------------------------------------------------------

/// The percent-decoded remainder of the path after `/players/`.
struct PlayerName(String);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for PlayerName {
    type Rejection = PathRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // The bare prefix route has no wildcard to extract.
        if parts.uri.path() == PLAYERS_PREFIX {
            return Ok(Self(String::new()));
        }
        let Path(name) = Path::<String>::from_request_parts(parts, state).await?;
        Ok(Self(name))
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn redirect_to_league() -> impl IntoResponse {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, LEAGUE_PATH)],
    )
}

async fn league_handler(State(server): State<PlayerServer>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)],
        Json(server.store.league()),
    )
}

/// A score of zero answers 404: unknown players and players without wins
/// look the same.
async fn show_score(
    State(server): State<PlayerServer>,
    PlayerName(player): PlayerName,
) -> (StatusCode, String) {
    let score = server.store.player_score(&player);
    let status = if score == 0 {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    (status, score.to_string())
}

async fn process_win(
    State(server): State<PlayerServer>,
    PlayerName(player): PlayerName,
) -> StatusCode {
    match server.store.record_win(&player) {
        Ok(()) => StatusCode::ACCEPTED,
        Err(e) => {
            error!(player = %player, "Failed to record win: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Methods other than GET and POST on `/players/{name}` are accepted and do nothing.
async fn ignore_method(PlayerName(player): PlayerName) -> StatusCode {
    debug!(player = %player, "Ignoring unsupported method on player route");
    StatusCode::OK
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
