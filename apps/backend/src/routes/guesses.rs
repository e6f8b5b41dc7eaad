use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::pagination::{PagedResponse, Paging};
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::domain::{GuessStatus, GuessType};
use crate::error::AppError;
use crate::extractors::{CurrentUser, GameId, RoundId, ValidatedJson};
use crate::repos::guesses::Guess;
use crate::services::guesses::{self, GuessInput, GuessOutcome};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct GuessBody {
    pub team_id: i64,
    #[serde(rename = "type")]
    pub guess_type: GuessType,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct GuessResponse {
    pub id: i64,
    pub team_id: i64,
    #[serde(rename = "type")]
    pub guess_type: GuessType,
    pub status: GuessStatus,
    pub value: String,
    pub score: i32,
}

impl From<Guess> for GuessResponse {
    fn from(guess: Guess) -> Self {
        Self {
            id: guess.id,
            team_id: guess.team_id,
            guess_type: guess.guess_type,
            status: guess.status,
            value: guess.value,
            score: guess.score,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GuessOutcomeResponse {
    pub status: GuessStatus,
    pub score: i32,
    pub team_id: i64,
    pub should_end: bool,
}

impl From<GuessOutcome> for GuessOutcomeResponse {
    fn from(outcome: GuessOutcome) -> Self {
        Self {
            status: outcome.status,
            score: outcome.score,
            team_id: outcome.team_id,
            should_end: outcome.should_end,
        }
    }
}

async fn list_guesses(
    _user: CurrentUser,
    game_id: GameId,
    round_id: RoundId,
    paging: Paging,
    app_state: web::Data<AppState>,
) -> Result<web::Json<PagedResponse<GuessResponse>>, AppError> {
    let db = require_db(&app_state)?;
    let page = guesses::list_guesses(db, game_id.0, round_id.0, paging.0).await?;
    Ok(web::Json(PagedResponse::from_page(
        paging.0,
        page,
        GuessResponse::from,
    )))
}

async fn create_guess(
    user: CurrentUser,
    game_id: GameId,
    round_id: RoundId,
    body: ValidatedJson<GuessBody>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let input = GuessInput {
        team_id: body.team_id,
        guess_type: body.guess_type,
        value: body.value,
    };
    let outcome = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            guesses::create_guess(txn, user.id, game_id.0, round_id.0, input).await
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(GuessOutcomeResponse::from(outcome)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/games/{game_id}/rounds/{round_id}/guesses")
            .route(web::get().to(list_guesses))
            .route(web::post().to(create_guess)),
    );
}
