use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use service::{menu::ENTITY, MenuItem, MenuItemPayload, RemovedMenuItem, ServiceError};

use crate::{errors::ApiError, state::AppState};

/// Read an `:id` segment the way `parseInt(s, 10)` does: leading whitespace,
/// an optional sign, then the longest run of digits. `"12abc"` is 12; a
/// segment with no leading digits, or a negative number, yields `None`.
pub fn parse_id(raw: &str) -> Option<u64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() || negative {
        return None;
    }
    digits.parse().ok()
}

fn resolve_id(raw: &str) -> Result<u64, ApiError> {
    parse_id(raw).ok_or_else(|| ServiceError::not_found(ENTITY).into())
}

#[utoipa::path(
    get, path = "/api/menu", tag = "menu",
    responses((status = 200, description = "All menu items in insertion order"))
)]
pub async fn list_menu(State(state): State<AppState>) -> Json<Vec<MenuItem>> {
    Json(state.menu.list_all().await)
}

#[utoipa::path(
    get, path = "/api/menu/{id}", tag = "menu",
    params(("id" = String, Path, description = "Menu item id")),
    responses(
        (status = 200, description = "Menu item"),
        (status = 404, description = "Menu item not found", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn get_menu_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MenuItem>, ApiError> {
    let id = resolve_id(&id)?;
    Ok(Json(state.menu.get_by_id(id).await?))
}

#[utoipa::path(
    post, path = "/api/menu", tag = "menu",
    request_body = crate::openapi::MenuItemInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Invalid payload", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn create_menu_item(
    State(state): State<AppState>,
    payload: Result<Json<MenuItemPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<MenuItem>), ApiError> {
    let Json(payload) = payload?;
    let item = state.menu.create(payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put, path = "/api/menu/{id}", tag = "menu",
    params(("id" = String, Path, description = "Menu item id")),
    request_body = crate::openapi::MenuItemInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Invalid payload", body = crate::openapi::ErrorResponseDoc),
        (status = 404, description = "Menu item not found", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn update_menu_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<MenuItemPayload>, JsonRejection>,
) -> Result<Json<MenuItem>, ApiError> {
    let Json(payload) = payload?;
    let id = resolve_id(&id)?;
    Ok(Json(state.menu.update(id, payload).await?))
}

#[utoipa::path(
    delete, path = "/api/menu/{id}", tag = "menu",
    params(("id" = String, Path, description = "Menu item id")),
    responses(
        (status = 200, description = "Removed", body = crate::openapi::RemovedMenuItemDoc),
        (status = 404, description = "Menu item not found", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn delete_menu_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RemovedMenuItem>, ApiError> {
    let id = resolve_id(&id)?;
    Ok(Json(state.menu.remove(id).await?))
}
