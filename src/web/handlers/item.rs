//! Item creation handler.

use axum::{
    extract::{Multipart, State},
    Json,
};
use std::sync::Arc;
use utoipa;

use super::AppState;
use crate::item::{validate, ItemDraft};
use crate::web::dto::{CreateItemResponse, ItemData};
use crate::web::error::ApiError;

/// POST /barang - Create an item from a multipart form.
///
/// Text fields: `nama`, `harga`, `deskripsi`, `kondisi`, `kategori`.
/// File field: `gambar` (JPG/PNG/GIF, at most 2 MiB).
///
/// Validation runs before the image is written, so a rejected submission
/// leaves nothing behind in the upload root.
#[utoipa::path(
    post,
    path = "/barang",
    tag = "items",
    request_body(content_type = "multipart/form-data", description = "Item fields plus one image"),
    responses(
        (status = 200, description = "Item stored", body = CreateItemResponse),
        (status = 400, description = "Invalid submission", body = crate::web::error::ErrorBody)
    )
)]
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<CreateItemResponse>, ApiError> {
    let mut draft = ItemDraft::default();
    let mut seen: Vec<&'static str> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to read multipart field: {}", e);
        ApiError::bad_request("Form multipart tidak valid")
    })? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "nama" => {
                draft.nama = read_text(field, "nama").await?;
                seen.push("nama");
            }
            "harga" => {
                draft.harga = read_text(field, "harga").await?;
                seen.push("harga");
            }
            "deskripsi" => {
                draft.deskripsi = read_text(field, "deskripsi").await?;
                seen.push("deskripsi");
            }
            "kondisi" => {
                draft.kondisi = read_text(field, "kondisi").await?;
                seen.push("kondisi");
            }
            "kategori" => {
                draft.kategori = read_text(field, "kategori").await?;
                seen.push("kategori");
            }
            "gambar" => {
                draft.content_type = field.content_type().unwrap_or("").to_string();
                draft.image = field
                    .bytes()
                    .await
                    .map_err(|e| {
                        tracing::error!("Failed to read image content: {}", e);
                        ApiError::bad_request("Gagal membaca file gambar")
                    })?
                    .to_vec();
                seen.push("gambar");
            }
            _ => {}
        }
    }

    for required in ["nama", "harga", "deskripsi", "kondisi", "kategori", "gambar"] {
        if !seen.contains(&required) {
            return Err(ApiError::bad_request(format!(
                "Field '{required}' wajib diisi"
            )));
        }
    }

    let submission =
        validate(draft, state.max_image_bytes).map_err(|e| ApiError::bad_request(e.to_string()))?;

    let stored_name = state
        .store
        .save(&submission.image, submission.image_type)
        .map_err(|e| {
            tracing::error!("Failed to save image: {}", e);
            ApiError::internal("Gagal menyimpan gambar")
        })?;

    let gambar_url = format!("{}/{}", state.public_prefix, stored_name);
    tracing::info!(nama = %submission.nama, url = %gambar_url, "item stored");

    Ok(Json(CreateItemResponse {
        message: "Berhasil menyimpan barang",
        data: ItemData::from_submission(&submission, gambar_url),
    }))
}

/// Read a multipart text field.
async fn read_text(
    field: axum::extract::multipart::Field<'_>,
    name: &'static str,
) -> Result<String, ApiError> {
    field.text().await.map_err(|e| {
        tracing::error!("Failed to read field '{}': {}", name, e);
        ApiError::bad_request(format!("Field '{name}' tidak valid"))
    })
}
