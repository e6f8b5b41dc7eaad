use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::pagination::{PagedResponse, Paging};
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::domain::Ordering;
use crate::error::AppError;
use crate::extractors::{CurrentUser, GameId, ValidatedJson};
use crate::repos::games::Game;
use crate::repos::guesses::TeamScore;
use crate::services::games::{self, GameInput};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct GameBody {
    pub name: String,
    pub phrase_order: Ordering,
    pub team_order: Ordering,
}

impl From<GameBody> for GameInput {
    fn from(body: GameBody) -> Self {
        Self {
            name: body.name,
            phrase_order: body.phrase_order,
            team_order: body.team_order,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub id: i64,
    pub name: String,
    pub phrase_order: Ordering,
    pub team_order: Ordering,
}

impl From<Game> for GameResponse {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            name: game.name,
            phrase_order: game.configs.phrase_order,
            team_order: game.configs.team_order,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LeaderboardEntry {
    pub team_id: i64,
    pub total_score: i64,
}

#[derive(Debug, Serialize)]
pub struct GameDetailsResponse {
    #[serde(flatten)]
    pub game: GameResponse,
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl From<TeamScore> for LeaderboardEntry {
    fn from(score: TeamScore) -> Self {
        Self {
            team_id: score.team_id,
            total_score: score.total_score,
        }
    }
}

async fn list_games(
    _user: CurrentUser,
    paging: Paging,
    app_state: web::Data<AppState>,
) -> Result<web::Json<PagedResponse<GameResponse>>, AppError> {
    let db = require_db(&app_state)?;
    let page = games::list_games(db, paging.0).await?;
    Ok(web::Json(PagedResponse::from_page(
        paging.0,
        page,
        GameResponse::from,
    )))
}

async fn create_game(
    user: CurrentUser,
    body: ValidatedJson<GameBody>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let input = GameInput::from(body.into_inner());
    let game = with_txn(&app_state, move |txn| {
        Box::pin(async move { games::create_game(txn, user.id, input).await })
    })
    .await?;

    Ok(HttpResponse::Created().json(GameResponse::from(game)))
}

async fn get_game(
    _user: CurrentUser,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameDetailsResponse>, AppError> {
    let db = require_db(&app_state)?;
    let details = games::get_game(db, game_id.0).await?;
    Ok(web::Json(GameDetailsResponse {
        game: details.game.into(),
        leaderboard: details.leaderboard.into_iter().map(Into::into).collect(),
    }))
}

async fn update_game(
    user: CurrentUser,
    game_id: GameId,
    body: ValidatedJson<GameBody>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameResponse>, AppError> {
    let input = GameInput::from(body.into_inner());
    let game = with_txn(&app_state, move |txn| {
        Box::pin(async move { games::update_game(txn, user.id, game_id.0, input).await })
    })
    .await?;

    Ok(web::Json(game.into()))
}

async fn delete_game(
    user: CurrentUser,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    with_txn(&app_state, move |txn| {
        Box::pin(async move { games::delete_game(txn, user.id, game_id.0).await })
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/games")
            .route(web::get().to(list_games))
            .route(web::post().to(create_game)),
    );
    cfg.service(
        web::resource("/games/{game_id}")
            .route(web::get().to(get_game))
            .route(web::put().to(update_game))
            .route(web::delete().to(delete_game)),
    );
}
