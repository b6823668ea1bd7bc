pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::builder::handlers as builder;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Analyzer API
        .route("/api/v1/samples", get(matching::handle_samples))
        .route("/api/v1/keywords", post(matching::handle_keywords))
        .route("/api/v1/analyze", post(matching::handle_analyze))
        .route("/api/v1/analyze/text", post(matching::handle_analyze_text))
        // Interview Prep API
        .route("/api/v1/interview", post(matching::handle_interview))
        // Builder API
        .route("/api/v1/resumes/render", post(builder::handle_render))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    const BOUNDARY: &str = "resumate-test-boundary";
    const SAMPLE_JD: &str = "Seeking a Full-Stack Python Developer with experience in Django, \
        React, and AWS. Must be familiar with Docker and SQL.";

    fn app() -> Router {
        build_router(AppState::from_config(Config::default()).unwrap())
    }

    async fn send(request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart(jd_text: Option<&str>, file: Option<(&str, &[u8])>) -> Request<Body> {
        let mut body = Vec::new();
        if let Some(jd) = jd_text {
            write!(
                body,
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"jd_text\"\r\n\r\n{jd}\r\n"
            )
            .unwrap();
        }
        if let Some((name, bytes)) = file {
            write!(
                body,
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"{name}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n"
            )
            .unwrap();
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        write!(body, "--{BOUNDARY}--\r\n").unwrap();

        Request::post("/api/v1/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn docx(paragraph: &str) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        {
            let mut zip = zip::ZipWriter::new(&mut buffer);
            zip.start_file("word/document.xml", zip::write::SimpleFileOptions::default())
                .unwrap();
            write!(
                zip,
                "<w:document><w:body><w:p><w:r><w:t>{paragraph}</w:t></w:r></w:p></w:body></w:document>"
            )
            .unwrap();
            zip.finish().unwrap();
        }
        buffer.into_inner()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_keywords_endpoint() {
        let (status, body) = send(post_json("/api/v1/keywords", json!({ "text": SAMPLE_JD }))).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        let languages: Vec<&str> = json["Languages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert!(languages.contains(&"python"));
        assert!(languages.contains(&"sql"));
        assert!(json["Soft Skills"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bad_json_bodies_use_error_envelope() {
        let (status, body) = send(post_json("/api/v1/keywords", json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert!(json["error"]["message"].as_str().unwrap().contains("text"));

        for uri in ["/api/v1/keywords", "/api/v1/analyze/text", "/api/v1/resumes/render"] {
            let request = Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"text\": "))
                .unwrap();
            let (status, body) = send(request).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            let json: Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(json["error"]["code"], "VALIDATION_ERROR", "{uri}");
        }

        let request = Request::post("/api/v1/interview")
            .body(Body::from(r#"{"jd_text":"python"}"#))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_text_identical_scores_100() {
        let (status, body) = send(post_json(
            "/api/v1/analyze/text",
            json!({ "jd_text": SAMPLE_JD, "resume_text": SAMPLE_JD }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["report"]["score"], 100);
        assert_eq!(json["report"]["band"], "strong");
        assert_eq!(json["band_label"], "strong match");
        assert_eq!(json["skills_gap"]["missing"], 0);
    }

    #[tokio::test]
    async fn test_analyze_text_requires_both_inputs() {
        let (status, body) = send(post_json(
            "/api/v1/analyze/text",
            json!({ "jd_text": SAMPLE_JD, "resume_text": "   " }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_upload_docx() {
        let file = docx("Python and Django developer, shipped on AWS");
        let (status, body) = send(multipart(Some(SAMPLE_JD), Some(("cv.docx", file.as_slice())))).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["report"]["total_jd_keywords"], 6);
        assert_eq!(json["report"]["total_matched"], 3);
        assert_eq!(json["report"]["score"], 50);
        assert_eq!(json["action_plan"]["focus_keywords"], json!(["sql", "react", "docker"]));
    }

    #[tokio::test]
    async fn test_analyze_upload_docx_with_attributed_breaks() {
        let file = docx(r#"Python</w:t><w:br w:type="textWrapping"/><w:t>Docker"#);
        let (status, body) = send(multipart(Some(SAMPLE_JD), Some(("cv.docx", file.as_slice())))).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["report"]["total_matched"], 2);
        assert_eq!(json["skills_gap"]["matched"], 2);
    }

    #[tokio::test]
    async fn test_analyze_upload_rejects_unsupported_file() {
        let (status, body) = send(multipart(Some(SAMPLE_JD), Some(("cv.txt", &b"python"[..])))).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "UNSUPPORTED_DOCUMENT");
    }

    #[tokio::test]
    async fn test_analyze_upload_reports_broken_pdf() {
        let (status, body) = send(multipart(Some(SAMPLE_JD), Some(("cv.pdf", &b"%PDF-broken"[..])))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "EXTRACTION_FAILED");
    }

    #[tokio::test]
    async fn test_analyze_upload_requires_file() {
        let (status, _) = send(multipart(Some(SAMPLE_JD), None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_interview_requires_jd() {
        let (status, body) = send(post_json("/api/v1/interview", json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_interview_questions() {
        let (status, body) = send(post_json("/api/v1/interview", json!({ "jd_text": SAMPLE_JD }))).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["technical_questions"].as_array().unwrap().len(), 6);
        assert_eq!(json["behavioral_questions"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_samples() {
        let (status, body) = send(Request::get("/api/v1/samples").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["profile"]["name"], "Alex Johnson");
        assert!(json["job_description"].as_str().unwrap().contains("Django"));
    }

    #[tokio::test]
    async fn test_render_returns_pdf_download() {
        let request = post_json(
            "/api/v1/resumes/render",
            json!({
                "resume": { "name": "Alex Johnson", "email": "alex@example.com", "skills": "Rust" },
                "accent_color": "#ec4899",
                "layout": "classic"
            }),
        );
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Alex_Johnson_Resume.pdf\""
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_render_validates_input() {
        let (status, _) = send(post_json(
            "/api/v1/resumes/render",
            json!({ "resume": { "name": "Alex Johnson" } }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(post_json(
            "/api/v1/resumes/render",
            json!({
                "resume": { "name": "Alex", "email": "a@example.com" },
                "accent_color": "purple"
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(post_json(
            "/api/v1/resumes/render",
            json!({
                "resume": { "name": "Alex", "email": "a@example.com" },
                "layout": "fancy"
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }
}
