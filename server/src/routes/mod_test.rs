use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn unknown_paths_get_not_found_text() {
    let (status, body) = not_found().await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Page not found.");
}
