use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::pagination::{PagedResponse, Paging};
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{CurrentUser, GameId, RoundId, ValidatedJson};
use crate::repos::rounds::Round;
use crate::services::rounds;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateRoundBody {
    pub name: String,
    pub starting_team_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRoundBody {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct RoundResponse {
    pub id: i64,
    pub name: String,
    pub is_ended: bool,
    pub phrase_id: i64,
    pub team_ordering: Vec<i64>,
}

impl From<Round> for RoundResponse {
    fn from(round: Round) -> Self {
        Self {
            id: round.id,
            name: round.name,
            is_ended: round.is_ended,
            phrase_id: round.phrase_id,
            team_ordering: round.configs.team_ids_ordering,
        }
    }
}

async fn list_rounds(
    _user: CurrentUser,
    game_id: GameId,
    paging: Paging,
    app_state: web::Data<AppState>,
) -> Result<web::Json<PagedResponse<RoundResponse>>, AppError> {
    let db = require_db(&app_state)?;
    let page = rounds::list_rounds(db, game_id.0, paging.0).await?;
    Ok(web::Json(PagedResponse::from_page(
        paging.0,
        page,
        RoundResponse::from,
    )))
}

async fn create_round(
    user: CurrentUser,
    game_id: GameId,
    body: ValidatedJson<CreateRoundBody>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let CreateRoundBody {
        name,
        starting_team_id,
    } = body.into_inner();
    let round = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            rounds::create_round(txn, user.id, game_id.0, &name, starting_team_id).await
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(RoundResponse::from(round)))
}

async fn get_round(
    _user: CurrentUser,
    game_id: GameId,
    round_id: RoundId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<RoundResponse>, AppError> {
    let db = require_db(&app_state)?;
    let round = rounds::get_round(db, game_id.0, round_id.0).await?;
    Ok(web::Json(round.into()))
}

async fn update_round(
    user: CurrentUser,
    game_id: GameId,
    round_id: RoundId,
    body: ValidatedJson<UpdateRoundBody>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<RoundResponse>, AppError> {
    let name = body.into_inner().name;
    let round = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            rounds::update_round(txn, user.id, game_id.0, round_id.0, &name).await
        })
    })
    .await?;

    Ok(web::Json(round.into()))
}

async fn delete_round(
    user: CurrentUser,
    game_id: GameId,
    round_id: RoundId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    with_txn(&app_state, move |txn| {
        Box::pin(async move { rounds::delete_round(txn, user.id, game_id.0, round_id.0).await })
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/games/{game_id}/rounds")
            .route(web::get().to(list_rounds))
            .route(web::post().to(create_round)),
    );
    cfg.service(
        web::resource("/games/{game_id}/rounds/{round_id}")
            .route(web::get().to(get_round))
            .route(web::put().to(update_round))
            .route(web::delete().to(delete_round)),
    );
}
