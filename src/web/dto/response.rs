//! Response DTOs for the Web API.

use serde::Serialize;
use utoipa::ToSchema;

use crate::item::{Category, Condition, ItemSubmission};

/// Simple message payload for liveness endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Greeting message.
    pub message: &'static str,
}

/// Echo of a stored item submission.
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemData {
    /// Item name.
    pub nama: String,
    /// Price.
    pub harga: f64,
    /// Description.
    pub deskripsi: String,
    /// Condition (baru | bekas).
    #[schema(value_type = String)]
    pub kondisi: Condition,
    /// Category (elektronik | fashion | makanan | lainnya).
    #[schema(value_type = String)]
    pub kategori: Category,
    /// Public URL of the stored image.
    pub gambar_url: String,
}

impl ItemData {
    /// Build the response payload from a validated submission and its image URL.
    pub fn from_submission(submission: &ItemSubmission, gambar_url: String) -> Self {
        Self {
            nama: submission.nama.clone(),
            harga: submission.harga,
            deskripsi: submission.deskripsi.clone(),
            kondisi: submission.kondisi,
            kategori: submission.kategori,
            gambar_url,
        }
    }
}

/// Successful item creation response.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateItemResponse {
    /// Confirmation message.
    pub message: &'static str,
    /// The stored item.
    pub data: ItemData,
}

/// Diagnostics payload for the database test endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    /// Backend liveness indicator.
    pub backend: String,
    /// Database availability indicator.
    pub database: String,
    /// Whether DATABASE_URL is set (presence only, never the value).
    pub database_url: String,
    /// Whether DATABASE_NAME is set (presence only, never the value).
    pub database_name: String,
    /// Connection status label.
    pub connection_status: String,
    /// Collection names exposed by the database, capped at 10.
    pub collections: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ImageType;

    #[test]
    fn test_item_data_serialization() {
        let submission = ItemSubmission {
            nama: "Kursi".to_string(),
            harga: 50000.0,
            deskripsi: "Kursi kayu".to_string(),
            kondisi: Condition::Bekas,
            kategori: Category::Lainnya,
            image_type: ImageType::Png,
            image: vec![],
        };
        let data =
            ItemData::from_submission(&submission, "/uploads/img_ab12cd34.png".to_string());
        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["nama"], "Kursi");
        assert_eq!(json["harga"], 50000.0);
        assert_eq!(json["kondisi"], "bekas");
        assert_eq!(json["kategori"], "lainnya");
        assert_eq!(json["gambar_url"], "/uploads/img_ab12cd34.png");
    }

    #[test]
    fn test_create_item_response_shape() {
        let submission = ItemSubmission {
            nama: "Radio".to_string(),
            harga: 100.0,
            deskripsi: "".to_string(),
            kondisi: Condition::Baru,
            kategori: Category::Elektronik,
            image_type: ImageType::Jpeg,
            image: vec![],
        };
        let response = CreateItemResponse {
            message: "Berhasil menyimpan barang",
            data: ItemData::from_submission(&submission, "/uploads/img_00000000.jpg".to_string()),
        };
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["message"], "Berhasil menyimpan barang");
        assert_eq!(json["data"]["kondisi"], "baru");
    }
}
