#[cfg(test)]
mod integration_tests {
    use crate::router::create_router;
    use crate::schemas::{ApiResponse, CacheClearResponse, ErrorResponse, HealthResponse};
    use crate::test_utils::test_utils::{
        init_test_tracing, setup_test_app, setup_test_app_state_with_assets,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::{Artifact, PageInfo};

    #[tokio::test]
    async fn test_health_check() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.rows, 14);
    }

    #[tokio::test]
    async fn test_get_regions_in_appearance_order() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/api/v1/regions").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<String>> = response.json();
        assert!(body.success);
        assert_eq!(body.data, vec!["Kerala", "Goa", "Unassigned"]);
    }

    #[tokio::test]
    async fn test_get_pages_lists_menu() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/api/v1/pages").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<PageInfo>> = response.json();
        let titles: Vec<&str> = body.data.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Overview",
                "COVID-19 Dashboard",
                "Comparison Chart",
                "COVID-19 Map",
                "SMA Forecast",
                "Time-Lapse Map",
                "How to Use & Tools",
            ]
        );
        assert_eq!(body.data[2].parameters, vec!["region", "region_b"]);
    }

    #[tokio::test]
    async fn test_render_sma_forecast() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server
            .get("/api/v1/pages/sma-forecast")
            .add_query_param("region", "Kerala")
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.data["kind"], "chart");
        assert_eq!(body.data["title"], "7-Day Moving Average Prediction for Kerala");

        let sma = body.data["figure"]["data"][1]["y"].as_array().unwrap();
        assert_eq!(sma.len(), 10);
        assert!(sma[5].is_null());
        assert_eq!(sma[9], serde_json::json!(7.0));
    }

    #[tokio::test]
    async fn test_render_page_by_title_with_default_region() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/api/v1/pages/COVID-19%20Dashboard").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Artifact> = response.json();
        assert_eq!(body.data.title(), "COVID-19 Trend in Kerala");
    }

    #[tokio::test]
    async fn test_render_comparison_defaults_to_first_two_regions() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/api/v1/pages/comparison").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Artifact> = response.json();
        let Artifact::Comparison(comparison) = body.data else {
            panic!("Expected a comparison artifact");
        };
        assert_eq!(comparison.first.region, "Kerala");
        assert_eq!(comparison.second.region, "Goa");
        assert_eq!(comparison.second.cards[0].value, 102);
    }

    #[tokio::test]
    async fn test_render_map_reports_skipped_regions() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/api/v1/pages/map").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["kind"], "map");
        assert_eq!(body.data["zoom"], 5);
        assert_eq!(body.data["skipped_regions"], serde_json::json!(["Unassigned"]));
        let features = body.data["markers"]["features"].as_array().unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0]["properties"]["popup"], "Kerala: 10 cases, 0 deaths");
    }

    #[tokio::test]
    async fn test_render_time_lapse_has_frame_per_date() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/api/v1/pages/time-lapse").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Artifact> = response.json();
        let Artifact::TimeLapse(lapse) = body.data else {
            panic!("Expected a time-lapse artifact");
        };
        assert_eq!(lapse.frames.len(), 10);
        assert!(lapse.frames.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[tokio::test]
    async fn test_render_unknown_page() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/api/v1/pages/settings").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: ErrorResponse = response.json();
        assert!(!body.success);
        assert_eq!(body.code, "UNKNOWN_PAGE");
    }

    #[tokio::test]
    async fn test_render_region_without_rows() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server
            .get("/api/v1/pages/dashboard")
            .add_query_param("region", "Atlantis")
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "EMPTY_SELECTION");
        assert!(body.error.contains("Atlantis"));
    }

    #[tokio::test]
    async fn test_render_rejects_empty_region() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server
            .get("/api/v1/pages/dashboard")
            .add_query_param("region", "")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_clear_cache_after_render() {
        let server = TestServer::new(setup_test_app()).unwrap();

        server.get("/api/v1/pages/overview").await.assert_status(StatusCode::OK);
        let cached = server.get("/api/v1/pages/overview").await;
        let body: ApiResponse<Artifact> = cached.json();
        assert_eq!(body.message, "Page retrieved from cache");

        let response = server.delete("/api/v1/cache").await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<CacheClearResponse> = response.json();
        assert_eq!(body.data.evicted, 1);

        let fresh = server.get("/api/v1/pages/overview").await;
        let body: ApiResponse<Artifact> = fresh.json();
        assert_eq!(body.message, "Page rendered successfully");
    }

    #[tokio::test]
    async fn test_serves_overview_image_from_asset_dir() {
        let _guard = init_test_tracing();
        let assets = tempfile::tempdir().unwrap();
        std::fs::write(assets.path().join("giphy.gif"), b"GIF89a").unwrap();
        let server =
            TestServer::new(create_router(setup_test_app_state_with_assets(assets.path()))).unwrap();

        let response = server.get("/assets/giphy.gif").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(&response.as_bytes()[..], b"GIF89a");
    }
}
