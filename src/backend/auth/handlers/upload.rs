/**
 * Profile Picture Upload Handler
 *
 * POST /upload-profile-pic, multipart form with a `profilePic` file field.
 * The bytes go to the picture storage collaborator; only the returned
 * reference is recorded against the user.
 */

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::UploadResponse;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

/// Multipart field holding the picture
pub const PICTURE_FIELD: &str = "profilePic";

/// Upload profile picture handler
///
/// # Errors
///
/// * `400 Bad Request` - no `profilePic` file in the form, or a malformed form
/// * `401 Unauthorized` - missing, invalid or expired token
/// * `404 Not Found` - the user no longer exists
pub async fn upload_profile_pic(
    State(state): State<AppState>,
    AuthUser { user_id }: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, BackendError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::warn!("Malformed multipart body: {}", e);
        BackendError::handler(StatusCode::BAD_REQUEST, "Malformed upload")
    })? {
        if field.name() != Some(PICTURE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(|e| {
            tracing::warn!("Failed to read upload: {}", e);
            BackendError::handler(StatusCode::BAD_REQUEST, "Malformed upload")
        })?;
        upload = Some((file_name, bytes));
        break;
    }

    let (file_name, bytes) = upload
        .filter(|(_, bytes)| !bytes.is_empty())
        .ok_or_else(|| BackendError::handler(StatusCode::BAD_REQUEST, "No file uploaded"))?;

    // Do not store files for identities that no longer exist.
    state.auth.profile(user_id).await?;

    let reference = state.pictures.store(&file_name, &bytes).await?;
    state.auth.record_profile_picture(user_id, &reference).await?;

    Ok(Json(UploadResponse {
        message: "Profile picture uploaded successfully".to_string(),
        file_path: reference,
    }))
}
