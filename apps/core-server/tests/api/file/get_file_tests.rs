use crate::fixtures::{DriverForm, decode_qr_code};
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_get_file_success() {
    // GIVEN
    let context = TestContext::new().await;
    context
        .db
        .stored_objects
        .create("passports/123_abc_photo.jpg", b"jpeg-bytes", "image/jpeg")
        .await;

    // WHEN
    let resp = context.api.files.get("passports/123_abc_photo.jpg").await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.header("content-type").as_deref(), Some("image/jpeg"));
    assert_eq!(resp.bytes().await, b"jpeg-bytes");
}

#[tokio::test]
async fn test_get_file_not_found() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.files.get("qrcodes/missing.png").await;

    // THEN
    assert_eq!(resp.error_code(404).await, "BR_0013");
}

#[tokio::test]
async fn test_files_served_from_filesystem_storage() {
    // GIVEN
    let root = tempfile::tempdir().unwrap();
    let context = TestContext::new_with_config(Some(&format!(
        "core:\n    objectStorage:\n        type: \"FILESYSTEM\"\n        rootDirectory: \"{}\"\n",
        root.path().display()
    )))
    .await;

    // WHEN
    let resp = context.api.drivers.register(DriverForm::john_doe()).await;

    // THEN
    assert_eq!(resp.status(), 201);
    let driver_id = resp.json_value().await["driverId"]
        .as_str()
        .unwrap()
        .to_owned();

    assert!(root.path().join("qrcodes").join(format!("{driver_id}.png")).exists());
    assert!(context
        .db
        .stored_objects
        .get(&format!("qrcodes/{driver_id}.png"))
        .await
        .is_none());

    let resp = context.api.files.get(&format!("qrcodes/{driver_id}.png")).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(decode_qr_code(&resp.bytes().await), driver_id);
}
