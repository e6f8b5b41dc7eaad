use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::pagination::{PagedResponse, Paging};
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{CurrentUser, GameId, TeamId, ValidatedJson};
use crate::repos::teams::Team;
use crate::services::teams;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct TeamBody {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: i64,
    pub name: String,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            id: team.id,
            name: team.name,
        }
    }
}

async fn list_teams(
    _user: CurrentUser,
    game_id: GameId,
    paging: Paging,
    app_state: web::Data<AppState>,
) -> Result<web::Json<PagedResponse<TeamResponse>>, AppError> {
    let db = require_db(&app_state)?;
    let page = teams::list_teams(db, game_id.0, paging.0).await?;
    Ok(web::Json(PagedResponse::from_page(
        paging.0,
        page,
        TeamResponse::from,
    )))
}

async fn create_team(
    user: CurrentUser,
    game_id: GameId,
    body: ValidatedJson<TeamBody>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let name = body.into_inner().name;
    let team = with_txn(&app_state, move |txn| {
        Box::pin(async move { teams::create_team(txn, user.id, game_id.0, &name).await })
    })
    .await?;

    Ok(HttpResponse::Created().json(TeamResponse::from(team)))
}

async fn get_team(
    _user: CurrentUser,
    game_id: GameId,
    team_id: TeamId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<TeamResponse>, AppError> {
    let db = require_db(&app_state)?;
    let team = teams::get_team(db, game_id.0, team_id.0).await?;
    Ok(web::Json(team.into()))
}

async fn update_team(
    user: CurrentUser,
    game_id: GameId,
    team_id: TeamId,
    body: ValidatedJson<TeamBody>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<TeamResponse>, AppError> {
    let name = body.into_inner().name;
    let team = with_txn(&app_state, move |txn| {
        Box::pin(
            async move { teams::update_team(txn, user.id, game_id.0, team_id.0, &name).await },
        )
    })
    .await?;

    Ok(web::Json(team.into()))
}

async fn delete_team(
    user: CurrentUser,
    game_id: GameId,
    team_id: TeamId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    with_txn(&app_state, move |txn| {
        Box::pin(async move { teams::delete_team(txn, user.id, game_id.0, team_id.0).await })
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/games/{game_id}/teams")
            .route(web::get().to(list_teams))
            .route(web::post().to(create_team)),
    );
    cfg.service(
        web::resource("/games/{game_id}/teams/{team_id}")
            .route(web::get().to(get_team))
            .route(web::put().to(update_team))
            .route(web::delete().to(delete_team)),
    );
}
