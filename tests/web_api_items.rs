//! Web API item creation tests.
//!
//! Integration tests for the multipart item endpoint and static image serving.

use std::sync::Arc;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use serde_json::Value;
use tempfile::TempDir;

use lapak::config::{UploadsConfig, WebConfig};
use lapak::web::handlers::AppState;
use lapak::web::router::{create_docs_router, create_router};
use lapak::ImageStore;

const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// Create a test server with an upload root in a temp directory.
fn create_test_server() -> (TestServer, Arc<AppState>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = ImageStore::new(temp_dir.path()).expect("Failed to create image store");
    let state = Arc::new(AppState::new(store, &UploadsConfig::default()));

    let router = create_router(state.clone(), &WebConfig::default()).merge(create_docs_router());
    let server = TestServer::new(router).expect("Failed to create test server");

    (server, state, temp_dir)
}

/// Build a fully valid submission form.
fn valid_form(image: Vec<u8>, content_type: &str, file_name: &str) -> MultipartForm {
    MultipartForm::new()
        .add_text("nama", "Kursi")
        .add_text("harga", "50000")
        .add_text("deskripsi", "Kursi kayu")
        .add_text("kondisi", "bekas")
        .add_text("kategori", "lainnya")
        .add_part(
            "gambar",
            Part::bytes(image).file_name(file_name).mime_type(content_type),
        )
}

fn png_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G'];
    bytes.resize(len, 0xAB);
    bytes
}

/// Check a URL against `/uploads/img_[0-9a-f]{8}.<ext>`.
fn assert_image_url(url: &str, ext: &str) {
    let rest = url
        .strip_prefix("/uploads/img_")
        .unwrap_or_else(|| panic!("unexpected url prefix: {url}"));
    let hex = rest
        .strip_suffix(&format!(".{ext}"))
        .unwrap_or_else(|| panic!("unexpected url extension: {url}"));
    assert_eq!(hex.len(), 8, "unexpected hex length in {url}");
    assert!(
        hex.chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
        "non-hex characters in {url}"
    );
}

#[tokio::test]
async fn test_create_item_success() {
    let (server, state, _temp_dir) = create_test_server();
    let image = png_bytes(10 * 1024);

    let response = server
        .post("/barang")
        .multipart(valid_form(image.clone(), "image/png", "kursi.png"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["message"], "Berhasil menyimpan barang");
    assert_eq!(body["data"]["nama"], "Kursi");
    assert_eq!(body["data"]["harga"], 50000.0);
    assert_eq!(body["data"]["deskripsi"], "Kursi kayu");
    assert_eq!(body["data"]["kondisi"], "bekas");
    assert_eq!(body["data"]["kategori"], "lainnya");

    let url = body["data"]["gambar_url"].as_str().unwrap();
    assert_image_url(url, "png");

    // Exactly one file in the upload root, and the URL resolves to its bytes
    assert_eq!(state.store.count().unwrap(), 1);
    let fetched = server.get(url).await;
    fetched.assert_status_ok();
    assert_eq!(fetched.as_bytes().as_ref(), image.as_slice());
}

#[tokio::test]
async fn test_create_item_jpeg_extension() {
    let (server, _state, _temp_dir) = create_test_server();

    let response = server
        .post("/barang")
        .multipart(valid_form(png_bytes(512), "image/jpeg", "foto.jpeg"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_image_url(body["data"]["gambar_url"].as_str().unwrap(), "jpg");
}

#[tokio::test]
async fn test_invalid_condition_rejected() {
    let (server, state, _temp_dir) = create_test_server();

    let form = MultipartForm::new()
        .add_text("nama", "Kursi")
        .add_text("harga", "50000")
        .add_text("deskripsi", "Kursi kayu")
        .add_text("kondisi", "new")
        .add_text("kategori", "lainnya")
        .add_part(
            "gambar",
            Part::bytes(png_bytes(512))
                .file_name("a.png")
                .mime_type("image/png"),
        );

    let response = server.post("/barang").multipart(form).await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["detail"], "Kondisi tidak valid");
    assert_eq!(state.store.count().unwrap(), 0);
}

#[tokio::test]
async fn test_invalid_category_rejected() {
    let (server, state, _temp_dir) = create_test_server();

    let form = MultipartForm::new()
        .add_text("nama", "Kursi")
        .add_text("harga", "50000")
        .add_text("deskripsi", "Kursi kayu")
        .add_text("kondisi", "bekas")
        .add_text("kategori", "electronics")
        .add_part(
            "gambar",
            Part::bytes(png_bytes(512))
                .file_name("a.png")
                .mime_type("image/png"),
        );

    let response = server.post("/barang").multipart(form).await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["detail"], "Kategori tidak valid");
    assert_eq!(state.store.count().unwrap(), 0);
}

#[tokio::test]
async fn test_negative_price_rejected() {
    let (server, state, _temp_dir) = create_test_server();

    let form = MultipartForm::new()
        .add_text("nama", "Kursi")
        .add_text("harga", "-1")
        .add_text("deskripsi", "Kursi kayu")
        .add_text("kondisi", "bekas")
        .add_text("kategori", "lainnya")
        .add_part(
            "gambar",
            Part::bytes(png_bytes(512))
                .file_name("a.png")
                .mime_type("image/png"),
        );

    let response = server.post("/barang").multipart(form).await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["detail"], "Harga tidak boleh negatif");
    assert_eq!(state.store.count().unwrap(), 0);
}

#[tokio::test]
async fn test_unparseable_price_rejected() {
    let (server, state, _temp_dir) = create_test_server();

    let form = MultipartForm::new()
        .add_text("nama", "Kursi")
        .add_text("harga", "mahal")
        .add_text("deskripsi", "Kursi kayu")
        .add_text("kondisi", "bekas")
        .add_text("kategori", "lainnya")
        .add_part(
            "gambar",
            Part::bytes(png_bytes(512))
                .file_name("a.png")
                .mime_type("image/png"),
        );

    let response = server.post("/barang").multipart(form).await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["detail"], "Harga tidak valid");
    assert_eq!(state.store.count().unwrap(), 0);
}

#[tokio::test]
async fn test_disallowed_file_type_rejected() {
    let (server, state, _temp_dir) = create_test_server();

    let response = server
        .post("/barang")
        .multipart(valid_form(png_bytes(512), "image/webp", "a.webp"))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["detail"], "Tipe file tidak valid. Hanya JPG/PNG/GIF");
    assert_eq!(state.store.count().unwrap(), 0);
}

#[tokio::test]
async fn test_file_size_boundary() {
    let (server, state, _temp_dir) = create_test_server();

    // Exactly 2 MiB is accepted
    let response = server
        .post("/barang")
        .multipart(valid_form(png_bytes(MAX_IMAGE_BYTES), "image/png", "a.png"))
        .await;
    response.assert_status_ok();
    assert_eq!(state.store.count().unwrap(), 1);

    // One byte over is rejected, and no second file appears
    let response = server
        .post("/barang")
        .multipart(valid_form(
            png_bytes(MAX_IMAGE_BYTES + 1),
            "image/png",
            "b.png",
        ))
        .await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["detail"], "Ukuran file maksimal 2MB");
    assert_eq!(state.store.count().unwrap(), 1);
}

#[tokio::test]
async fn test_missing_image_field_rejected() {
    let (server, state, _temp_dir) = create_test_server();

    let form = MultipartForm::new()
        .add_text("nama", "Kursi")
        .add_text("harga", "50000")
        .add_text("deskripsi", "Kursi kayu")
        .add_text("kondisi", "bekas")
        .add_text("kategori", "lainnya");

    let response = server.post("/barang").multipart(form).await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["detail"], "Field 'gambar' wajib diisi");
    assert_eq!(state.store.count().unwrap(), 0);
}

#[tokio::test]
async fn test_missing_text_field_rejected() {
    let (server, state, _temp_dir) = create_test_server();

    let form = MultipartForm::new()
        .add_text("nama", "Kursi")
        .add_text("deskripsi", "Kursi kayu")
        .add_text("kondisi", "bekas")
        .add_text("kategori", "lainnya")
        .add_part(
            "gambar",
            Part::bytes(png_bytes(512))
                .file_name("a.png")
                .mime_type("image/png"),
        );

    let response = server.post("/barang").multipart(form).await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["detail"], "Field 'harga' wajib diisi");
    assert_eq!(state.store.count().unwrap(), 0);
}

#[tokio::test]
async fn test_concurrent_submissions_distinct_files() {
    let (server, state, _temp_dir) = create_test_server();

    let first = server
        .post("/barang")
        .multipart(valid_form(png_bytes(1024), "image/png", "a.png"));
    let second = server
        .post("/barang")
        .multipart(valid_form(png_bytes(2048), "image/gif", "b.gif"));

    let (first, second) = tokio::join!(async { first.await }, async { second.await });
    first.assert_status_ok();
    second.assert_status_ok();

    let url_a = first.json::<Value>()["data"]["gambar_url"]
        .as_str()
        .unwrap()
        .to_string();
    let url_b = second.json::<Value>()["data"]["gambar_url"]
        .as_str()
        .unwrap()
        .to_string();

    assert_ne!(url_a, url_b);
    assert_eq!(state.store.count().unwrap(), 2);

    server.get(&url_a).await.assert_status_ok();
    server.get(&url_b).await.assert_status_ok();
}

#[tokio::test]
async fn test_unknown_upload_returns_404() {
    let (server, _state, _temp_dir) = create_test_server();

    let response = server.get("/uploads/img_deadbeef.png").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_openapi_document_served() {
    let (server, _state, _temp_dir) = create_test_server();

    let response = server.get("/api-docs/openapi.json").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert!(body["paths"]["/barang"].is_object());
}
