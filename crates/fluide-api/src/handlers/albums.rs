//! Album handlers.
//!
//! Plain REST forms of the three commands; each returns the bare result.

use axum::extract::State;
use axum::Json;
use fluide_models::{Album, CreateAlbumResult, UploadResult};

use crate::dispatcher::{CreateAlbumRequest, UploadToAlbumRequest};
use crate::error::ApiResult;
use crate::state::AppState;

/// Create an empty album.
pub async fn create_album(
    State(state): State<AppState>,
    Json(request): Json<CreateAlbumRequest>,
) -> ApiResult<Json<CreateAlbumResult>> {
    let result = state.dispatcher.create_empty_album(request).await?;
    Ok(Json(result))
}

/// List albums.
pub async fn list_albums(State(state): State<AppState>) -> Json<Vec<Album>> {
    Json(state.dispatcher.get_albums().await)
}

/// Upload a local folder into an album.
pub async fn upload_to_album(
    State(state): State<AppState>,
    Json(request): Json<UploadToAlbumRequest>,
) -> ApiResult<Json<Vec<UploadResult>>> {
    let results = state.dispatcher.upload_to_album(request).await?;
    Ok(Json(results))
}
