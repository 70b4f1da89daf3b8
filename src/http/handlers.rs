//! Route handlers. Each one decodes, calls a single repository operation,
//! and encodes the result.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};

use super::error::ApiError;
use crate::report::{UsageEntry, WeaponStats};
use crate::repository::WeaponRepository;
use crate::store::WeaponStore;
use crate::weapon::{RetireRequest, ValidationError, Weapon, WeaponId, WeaponRecord};

type Repo<S> = State<Arc<WeaponRepository<S>>>;

/// Body extraction that leaves the error response to the route.
type Body = Result<Json<Value>, JsonRejection>;

/// A body that is not JSON, or not sent as JSON, is malformed input.
fn json_body(body: Body) -> Result<Value, ValidationError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ValidationError::Malformed(rejection.body_text()))
}

fn decode_weapon(body: Body) -> Result<Weapon, ValidationError> {
    Weapon::try_from(WeaponRecord::from_json(json_body(body)?)?)
}

/// Path ids that are not integers name no record.
fn parse_id(raw: &str) -> Result<WeaponId, ApiError> {
    raw.parse::<i64>()
        .map(WeaponId::new)
        .map_err(|_| ApiError::new(StatusCode::NOT_FOUND, format!("no weapon with id {}", raw)))
}

fn ok() -> Json<Value> {
    Json(json!({ "ok": true }))
}

fn representations(weapons: &[Weapon]) -> Json<Vec<WeaponRecord>> {
    Json(weapons.iter().map(Weapon::to_representation).collect())
}

/// `GET /health`
pub(super) async fn health() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

/// `POST /weapons` - body is a weapon record; responds with the new id.
pub(super) async fn add_weapon<S: WeaponStore + 'static>(
    State(repo): Repo<S>,
    body: Body,
) -> Result<Json<Value>, ApiError> {
    let weapon = decode_weapon(body).map_err(|e| ApiError::on_create(e.into()))?;
    let id = repo.add(&weapon).map_err(ApiError::on_create)?;
    Ok(Json(json!({ "id": id })))
}

/// `PUT /weapons/:id` - full replacement; the path id wins over any body id.
pub(super) async fn update_weapon<S: WeaponStore + 'static>(
    State(repo): Repo<S>,
    Path(id): Path<String>,
    body: Body,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    let weapon = decode_weapon(body)?.with_id(id);
    repo.update(&weapon)?;
    Ok(ok())
}

/// `DELETE /weapons/:id`
pub(super) async fn delete_weapon<S: WeaponStore + 'static>(
    State(repo): Repo<S>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    repo.delete(parse_id(&id)?)?;
    Ok(ok())
}

/// `GET /weapons/:id`
pub(super) async fn get_weapon<S: WeaponStore + 'static>(
    State(repo): Repo<S>,
    Path(id): Path<String>,
) -> Result<Json<WeaponRecord>, ApiError> {
    let id = parse_id(&id)?;
    match repo.get(id)? {
        Some(weapon) => Ok(Json(weapon.to_representation())),
        None => Err(ApiError::new(
            StatusCode::NOT_FOUND,
            format!("no weapon with id {}", id),
        )),
    }
}

/// `GET /weapons/all`
pub(super) async fn all_weapons<S: WeaponStore + 'static>(
    State(repo): Repo<S>,
) -> Result<Json<Vec<WeaponRecord>>, ApiError> {
    Ok(representations(&repo.get_all()?))
}

/// `GET /weapons/all/:kind` - unknown kinds yield an empty array.
pub(super) async fn weapons_by_type<S: WeaponStore + 'static>(
    State(repo): Repo<S>,
    Path(kind): Path<String>,
) -> Result<Json<Vec<WeaponRecord>>, ApiError> {
    Ok(representations(&repo.get_all_by_type(&kind)?))
}

/// `GET /weapons/stats`
pub(super) async fn weapon_stats<S: WeaponStore + 'static>(
    State(repo): Repo<S>,
) -> Result<Json<WeaponStats>, ApiError> {
    Ok(Json(repo.reports().weapon_stats()?))
}

/// `GET /weapons/reports/:kind`
pub(super) async fn weapons_report<S: WeaponStore + 'static>(
    State(repo): Repo<S>,
    Path(kind): Path<String>,
) -> Result<Json<Vec<UsageEntry>>, ApiError> {
    Ok(Json(repo.reports().weapons_report(&kind)?))
}

/// `PUT /weapons/retire` - body is `{"id": .., "retired_date": ".."}`.
pub(super) async fn retire_weapon<S: WeaponStore + 'static>(
    State(repo): Repo<S>,
    body: Body,
) -> Result<Json<Value>, ApiError> {
    let (id, retired_date) = RetireRequest::from_json(json_body(body)?)?.parse()?;
    repo.set_retired(id, retired_date)?;
    Ok(ok())
}
