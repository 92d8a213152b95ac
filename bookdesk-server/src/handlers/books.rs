//! Book collection handlers

use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use bookdesk_core::model::{BookFormData, RemoteBook};
use bookdesk_core::{Collection, CollectionError};

/// Map a collection failure to the status the client sees
fn status_for(err: &CollectionError) -> StatusCode {
    match err {
        CollectionError::Status(code) => {
            StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }
        CollectionError::Transport(_) | CollectionError::Decode(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Save after a mutation, reporting failures as a server error
async fn persist(state: &AppState) -> Result<(), StatusCode> {
    state.persist().await.map_err(|e| {
        tracing::error!("Failed to save collection: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// List every book, in insertion order
pub async fn list_books(
    State(state): State<AppState>,
) -> Result<Json<Vec<RemoteBook>>, StatusCode> {
    let books = state.collection.list().await.map_err(|e| status_for(&e))?;
    Ok(Json(books))
}

/// Create a book; the response carries the assigned `_id`
pub async fn create_book(
    State(state): State<AppState>,
    Json(data): Json<BookFormData>,
) -> Result<(StatusCode, Json<RemoteBook>), StatusCode> {
    let created = state
        .collection
        .create(&data)
        .await
        .map_err(|e| status_for(&e))?;
    persist(&state).await?;

    tracing::info!("Created book {:?}: {}", created.id, created.data.title);
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace a book; answers with an empty body
pub async fn replace_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(data): Json<BookFormData>,
) -> Result<StatusCode, StatusCode> {
    state
        .collection
        .update(&id, &data)
        .await
        .map_err(|e| status_for(&e))?;
    persist(&state).await?;

    tracing::info!("Replaced book {}", id);
    Ok(StatusCode::OK)
}

/// Delete a book
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    state
        .collection
        .remove(&id)
        .await
        .map_err(|e| status_for(&e))?;
    persist(&state).await?;

    tracing::info!("Deleted book {}", id);
    Ok(StatusCode::OK)
}
