use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use roster_core::AppState;
use roster_database::{Player, Profession, Race};
use roster_service::{PageRequest, PlayerDraft, PlayerFilter, PlayerOrder, PlayerPatch, players};

use crate::error::ApiError;
use crate::extract::{JsonBody, QueryParams};

/// Filter half of the list and count query strings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FilterQuery {
    name: Option<String>,
    title: Option<String>,
    race: Option<Race>,
    profession: Option<Profession>,
    after: Option<i64>,
    before: Option<i64>,
    banned: Option<bool>,
    min_experience: Option<i32>,
    max_experience: Option<i32>,
    min_level: Option<i32>,
    max_level: Option<i32>,
}

impl From<FilterQuery> for PlayerFilter {
    fn from(query: FilterQuery) -> Self {
        Self {
            name: query.name,
            title: query.title,
            race: query.race,
            profession: query.profession,
            after: query.after,
            before: query.before,
            banned: query.banned,
            min_experience: query.min_experience,
            max_experience: query.max_experience,
            min_level: query.min_level,
            max_level: query.max_level,
        }
    }
}

/// Ordering and paging, read only by the list endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageQuery {
    order: Option<PlayerOrder>,
    page_number: Option<i64>,
    page_size: Option<i64>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/rest/players", get(list_players).post(create_player))
        .route("/rest/players/count", get(count_players))
        .route(
            "/rest/players/{id}",
            get(get_player).post(update_player).delete(delete_player),
        )
        .with_state(state)
}

async fn list_players(
    State(state): State<AppState>,
    QueryParams(filter): QueryParams<FilterQuery>,
    QueryParams(paging): QueryParams<PageQuery>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let page = PageRequest::new(paging.page_number, paging.page_size)?;
    let order = paging.order.unwrap_or_default();
    let players =
        players::list_players(state.store.as_ref(), &filter.into(), order, page).await?;
    Ok(Json(players))
}

async fn count_players(
    State(state): State<AppState>,
    QueryParams(filter): QueryParams<FilterQuery>,
) -> Result<Json<usize>, ApiError> {
    let count = players::count_players(state.store.as_ref(), &filter.into()).await?;
    Ok(Json(count))
}

async fn create_player(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<PlayerDraft>,
) -> Result<Json<Player>, ApiError> {
    let player = players::create_player(state.store.as_ref(), draft).await?;
    Ok(Json(player))
}

async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Player>, ApiError> {
    let player = players::get_player(state.store.as_ref(), &id).await?;
    Ok(Json(player))
}

async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<PlayerPatch>,
) -> Result<Json<Player>, ApiError> {
    let player = players::update_player(state.store.as_ref(), &id, patch).await?;
    Ok(Json(player))
}

async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    players::delete_player(state.store.as_ref(), &id).await?;
    Ok(StatusCode::OK)
}
