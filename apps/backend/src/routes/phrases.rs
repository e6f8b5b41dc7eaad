use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::pagination::{PagedResponse, Paging};
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{CurrentUser, GameId, PhraseId, ValidatedJson};
use crate::repos::phrases::Phrase;
use crate::services::phrases;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct PhraseBody {
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct PhraseResponse {
    pub id: i64,
    pub value: String,
}

impl From<Phrase> for PhraseResponse {
    fn from(phrase: Phrase) -> Self {
        Self {
            id: phrase.id,
            value: phrase.value,
        }
    }
}

async fn list_phrases(
    _user: CurrentUser,
    game_id: GameId,
    paging: Paging,
    app_state: web::Data<AppState>,
) -> Result<web::Json<PagedResponse<PhraseResponse>>, AppError> {
    let db = require_db(&app_state)?;
    let page = phrases::list_phrases(db, game_id.0, paging.0).await?;
    Ok(web::Json(PagedResponse::from_page(
        paging.0,
        page,
        PhraseResponse::from,
    )))
}

async fn create_phrase(
    user: CurrentUser,
    game_id: GameId,
    body: ValidatedJson<PhraseBody>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let value = body.into_inner().value;
    let phrase = with_txn(&app_state, move |txn| {
        Box::pin(async move { phrases::create_phrase(txn, user.id, game_id.0, &value).await })
    })
    .await?;

    Ok(HttpResponse::Created().json(PhraseResponse::from(phrase)))
}

async fn get_phrase(
    _user: CurrentUser,
    game_id: GameId,
    phrase_id: PhraseId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<PhraseResponse>, AppError> {
    let db = require_db(&app_state)?;
    let phrase = phrases::get_phrase(db, game_id.0, phrase_id.0).await?;
    Ok(web::Json(phrase.into()))
}

async fn delete_phrase(
    user: CurrentUser,
    game_id: GameId,
    phrase_id: PhraseId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    with_txn(&app_state, move |txn| {
        Box::pin(
            async move { phrases::delete_phrase(txn, user.id, game_id.0, phrase_id.0).await },
        )
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/games/{game_id}/phrases")
            .route(web::get().to(list_phrases))
            .route(web::post().to(create_phrase)),
    );
    cfg.service(
        web::resource("/games/{game_id}/phrases/{phrase_id}")
            .route(web::get().to(get_phrase))
            .route(web::delete().to(delete_phrase)),
    );
}
