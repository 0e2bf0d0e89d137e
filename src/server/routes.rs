use super::AppState;
use super::error::not_found;
use crate::core::{CheckinLogic, RegistryLogic, StatsLogic};
use crate::errors::AppResult;
use crate::models::{
    Guest, GuestInput, Person, PersonKind, Staff, StaffInput, Stats, Volunteer, VolunteerInput,
};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

pub async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Default, Deserialize)]
pub struct VolunteerQuery {
    /// Area to filter on, spelled as at check-in.
    pub area: Option<String>,
}

pub async fn create_volunteer(
    State(state): State<AppState>,
    payload: Result<Json<VolunteerInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Volunteer>)> {
    let Json(input) = payload?;
    let record = CheckinLogic::create_volunteer(state.store.as_ref(), input)?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn list_volunteers(
    State(state): State<AppState>,
    Query(query): Query<VolunteerQuery>,
) -> AppResult<Json<Vec<Volunteer>>> {
    let rows = match query.area {
        Some(area) => state.store.get_volunteers_by_category(&area)?,
        None => state.store.get_volunteers()?,
    };
    Ok(Json(rows))
}

pub async fn volunteer_names(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    Ok(Json(RegistryLogic::unique_volunteer_names(
        state.store.as_ref(),
    )?))
}

pub async fn create_guest(
    State(state): State<AppState>,
    payload: Result<Json<GuestInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Guest>)> {
    let Json(input) = payload?;
    let record = CheckinLogic::create_guest(state.store.as_ref(), input)?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn list_guests(State(state): State<AppState>) -> AppResult<Json<Vec<Guest>>> {
    Ok(Json(state.store.get_guests()?))
}

pub async fn create_staff(
    State(state): State<AppState>,
    payload: Result<Json<StaffInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Staff>)> {
    let Json(input) = payload?;
    let record = CheckinLogic::create_staff(state.store.as_ref(), input)?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn list_staff(State(state): State<AppState>) -> AppResult<Json<Vec<Staff>>> {
    Ok(Json(state.store.get_staff()?))
}

pub async fn staff_names(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    Ok(Json(RegistryLogic::unique_staff_names(state.store.as_ref())?))
}

pub async fn list_people(State(state): State<AppState>) -> AppResult<Json<Vec<Person>>> {
    Ok(Json(RegistryLogic::all_people(state.store.as_ref())?))
}

pub async fn delete_person(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, i64)>,
) -> AppResult<Response> {
    let kind: PersonKind = kind.parse()?;

    if RegistryLogic::delete_person(state.store.as_ref(), kind, id)? {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Ok(not_found("person"))
    }
}

pub async fn stats(State(state): State<AppState>) -> AppResult<Json<Stats>> {
    Ok(Json(StatsLogic::compute(state.store.as_ref())?))
}
