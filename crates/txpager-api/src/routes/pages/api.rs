//! Page API endpoints
//!
//! Every endpoint answers with the session's page after the command ran.

use axum::{extract::Path, Json};
use txpager_config::MAX_RECORDS_PER_PAGE;
use txpager_core::{parse_direction, Matcher, PageCoordinator, Record};

use crate::error::{ApiError, ApiResult};
use crate::routes::view::PageView;
use crate::AppState;

fn render(state: &AppState, coordinator: &PageCoordinator<Record>) -> Json<PageView> {
    Json(PageView::new(&coordinator.view(), &state.config.currency))
}

/// Current page
pub async fn api_page(state: axum::extract::State<AppState>) -> Json<PageView> {
    let coordinator = state.coordinator.read().await;
    render(&state, &coordinator)
}

pub async fn api_next_page(state: axum::extract::State<AppState>) -> Json<PageView> {
    let mut coordinator = state.coordinator.write().await;
    coordinator.go_to_next_page();
    render(&state, &coordinator)
}

pub async fn api_previous_page(state: axum::extract::State<AppState>) -> Json<PageView> {
    let mut coordinator = state.coordinator.write().await;
    coordinator.go_to_previous_page();
    render(&state, &coordinator)
}

/// Jump to a page; anything other than a page in 1..=total_pages leaves the
/// session where it was, including negative or non-numeric input
pub async fn api_go_to_page(
    state: axum::extract::State<AppState>,
    Path(number): Path<String>,
) -> Json<PageView> {
    let mut coordinator = state.coordinator.write().await;
    match number.parse::<usize>() {
        Ok(page) => {
            coordinator.go_to_page(page);
        }
        Err(_) => log::debug!("Ignoring navigation to page '{}'", number),
    }
    render(&state, &coordinator)
}

/// Move to the page holding record `id` (page 1 if it is unknown)
pub async fn api_go_to_item(
    state: axum::extract::State<AppState>,
    Path(id): Path<String>,
) -> Json<PageView> {
    let mut coordinator = state.coordinator.write().await;
    coordinator.go_to_item(Matcher::Id(&id));
    render(&state, &coordinator)
}

pub async fn api_set_page_size(
    state: axum::extract::State<AppState>,
    Path(size): Path<usize>,
) -> ApiResult<Json<PageView>> {
    if size > MAX_RECORDS_PER_PAGE {
        return Err(ApiError::BadRequest {
            message: format!("Page size must be at most {}", MAX_RECORDS_PER_PAGE),
        });
    }
    let mut coordinator = state.coordinator.write().await;
    coordinator.set_items_per_page(size)?;
    Ok(render(&state, &coordinator))
}

pub async fn api_set_direction(
    state: axum::extract::State<AppState>,
    Path(direction): Path<String>,
) -> ApiResult<Json<PageView>> {
    let direction = parse_direction(&direction)?;
    let mut coordinator = state.coordinator.write().await;
    coordinator.set_direction(direction);
    Ok(render(&state, &coordinator))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{send, state_with};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_first_page() {
        let state = state_with(25).await;
        let (status, body) = send(&state, "GET", "/api/page", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"].as_array().unwrap().len(), 10);
        assert_eq!(body["pagination"]["total_pages"], 3);
        assert_eq!(body["pagination"]["has_next_page"], true);
        assert_eq!(body["pagination"]["has_previous_page"], false);
        assert_eq!(body["showing"]["from"], 1);
        assert_eq!(body["showing"]["to"], 10);
    }

    #[tokio::test]
    async fn test_next_previous_and_bounds() {
        let state = state_with(25).await;
        send(&state, "POST", "/api/page/next", None).await;
        let (_, body) = send(&state, "POST", "/api/page/next", None).await;
        assert_eq!(body["pagination"]["current_page"], 3);
        assert_eq!(body["items"].as_array().unwrap().len(), 5);

        let (_, body) = send(&state, "POST", "/api/page/next", None).await;
        assert_eq!(body["pagination"]["current_page"], 3);

        let (_, body) = send(&state, "POST", "/api/page/previous", None).await;
        assert_eq!(body["pagination"]["current_page"], 2);
    }

    #[tokio::test]
    async fn test_out_of_range_page_ignored() {
        let state = state_with(25).await;
        send(&state, "POST", "/api/page/2", None).await;

        let (status, body) = send(&state, "POST", "/api/page/0", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pagination"]["current_page"], 2);

        let (_, body) = send(&state, "POST", "/api/page/4", None).await;
        assert_eq!(body["pagination"]["current_page"], 2);
    }

    #[tokio::test]
    async fn test_unparseable_page_ignored() {
        let state = state_with(25).await;
        send(&state, "POST", "/api/page/2", None).await;

        for uri in ["/api/page/-1", "/api/page/abc", "/api/page/99999999999999999999999"] {
            let (status, body) = send(&state, "POST", uri, None).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert_eq!(body["pagination"]["current_page"], 2, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_go_to_item() {
        let state = state_with(65).await;
        let (_, body) = send(&state, "POST", "/api/page/item/r62", None).await;
        assert_eq!(body["pagination"]["current_page"], 7);

        let (_, body) = send(&state, "POST", "/api/page/item/unknown", None).await;
        assert_eq!(body["pagination"]["current_page"], 1);
    }

    #[tokio::test]
    async fn test_page_size_change() {
        let state = state_with(100).await;
        send(&state, "POST", "/api/page/4", None).await;

        let (status, body) = send(&state, "POST", "/api/page/size/25", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pagination"]["items_per_page"], 25);
        assert_eq!(body["pagination"]["current_page"], 2);

        let (status, body) = send(&state, "POST", "/api/page/size/0", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_PAGINATION");

        let (status, _) = send(&state, "POST", "/api/page/size/501", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_sort_direction() {
        let state = state_with(15).await;
        send(&state, "POST", "/api/page/2", None).await;

        let (status, body) = send(&state, "POST", "/api/page/sort/asc", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pagination"]["current_page"], 1);
        assert_eq!(body["items"][0]["id"], "r14");

        let (status, body) = send(&state, "POST", "/api/page/sort/sideways", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_SORT_DIRECTION");
    }
}
