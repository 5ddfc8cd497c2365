pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::extraction::handlers as extraction;
use crate::state::AppState;
use crate::tailoring::handlers as tailoring;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Posting analysis
        .route(
            "/api/v1/jobs/analyze",
            post(extraction::handle_analyze_posting),
        )
        // Resume tailoring
        .route(
            "/api/v1/jobs/suggest-bullets",
            post(tailoring::handle_suggest_bullets),
        )
        .route("/api/v1/jobs/keywords", post(tailoring::handle_keywords))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;

    fn app() -> Router {
        build_router(AppState::with_default_collaborators(Config::default()))
    }

    async fn post_json(path: &str, body: Value) -> (StatusCode, Value) {
        let response = app()
            .oneshot(
                Request::post(path)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "jobs-api");
    }

    #[tokio::test]
    async fn test_suggest_bullets_end_to_end() {
        let (status, body) = post_json(
            "/api/v1/jobs/suggest-bullets",
            json!({
                "resume_text": "- Built Python data pipelines for ETL and analytics.\n- Deployed FastAPI services with CI/CD on AWS.\n- Led stakeholder meetings and managed sprint planning.\n- Optimized SQL queries reducing report runtime by 40%.",
                "proficiencies": ["python", "fastapi", "sql", "aws"],
                "job_title": "Backend Engineer",
                "company": "Acme",
                "job_description": "Looking for a backend engineer with Python, FastAPI, SQL, and AWS experience.",
                "max_bullets": 3
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        let highlights = body["tailored_resume"]["experience_highlights"]
            .as_array()
            .unwrap();
        assert_eq!(highlights.len(), 3);
        assert_eq!(
            highlights[0],
            "Deployed FastAPI services with CI/CD on AWS."
        );
        assert_eq!(body["tailored_resume"]["target_role"]["company"], "Acme");
    }

    #[tokio::test]
    async fn test_suggest_bullets_rejects_out_of_range_max() {
        let (status, body) = post_json(
            "/api/v1/jobs/suggest-bullets",
            json!({
                "resume_text": "- Built Python data pipelines for ETL and analytics.",
                "job_title": "Backend Engineer",
                "company": "Acme",
                "job_description": "Looking for a backend engineer with Python.",
                "max_bullets": 40
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_keywords_rejects_zero_limit() {
        let (status, _) = post_json(
            "/api/v1/jobs/keywords",
            json!({"job_description": "rust rust tokio", "limit": 0}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_negative_counts_are_json_validation_errors() {
        let (status, body) = post_json(
            "/api/v1/jobs/suggest-bullets",
            json!({
                "resume_text": "- Built Python data pipelines for ETL and analytics.",
                "job_title": "Backend Engineer",
                "company": "Acme",
                "job_description": "Looking for a backend engineer with Python.",
                "max_bullets": -1
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, body) = post_json(
            "/api/v1/jobs/keywords",
            json!({"job_description": "rust rust tokio", "limit": -1}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_keywords_ranked() {
        let (status, body) = post_json(
            "/api/v1/jobs/keywords",
            json!({"job_description": "rust tokio rust axum", "limit": 2}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["keywords"],
            json!([
                {"keyword": "rust", "frequency": 2},
                {"keyword": "tokio", "frequency": 1}
            ])
        );
    }

    #[tokio::test]
    async fn test_analyze_prefers_markup_title() {
        let (status, body) = post_json(
            "/api/v1/jobs/analyze",
            json!({
                "text": "Job description: you will partner with the product manager.\n\nResponsibilities include on-call. Apply with your resume. $90K - $120K",
                "link": "https://jobs.example.com/42",
                "selectors": {".job-title": "  Senior Backend Engineer "},
                "meta": {"og:site_name": "Initech"}
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["posting"]["position"], "Senior Backend Engineer");
        assert_eq!(body["posting"]["company"], "Initech");
        assert_eq!(body["posting"]["salary_range"], "90K-120K");
        assert_eq!(body["posting"]["resume_upload_mentioned"], true);
        assert_eq!(body["posting"]["link"], "https://jobs.example.com/42");
        assert_eq!(body["is_job_page"], true);
        assert_eq!(body["sheet_row"].as_array().unwrap().len(), 13);
        assert_eq!(body["sheet_row"][12], "FALSE");
    }

    #[tokio::test]
    async fn test_analyze_rejects_blank_text() {
        let (status, body) = post_json("/api/v1/jobs/analyze", json!({"text": "   "})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = post_json("/api/v1/nope", json!({})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
