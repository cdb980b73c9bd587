//! Routes and handlers.

use crate::ApiError;
use api_shared::{ErrorRes, HealthRes, HealthService, ServiceInfo, ServiceInfoRes};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use labrec_core::{Experiment, LabRecordService, RecordData, RecordResult, DOCX_MEDIA_TYPE};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across REST API handlers
#[derive(Clone)]
pub struct AppState {
    pub record_service: Arc<LabRecordService>,
}

#[derive(OpenApi)]
#[openapi(
    paths(root, health, generate_docx),
    components(schemas(RecordData, Experiment, ServiceInfoRes, HealthRes, ErrorRes))
)]
pub struct ApiDoc;

/// Builds the REST router with Swagger UI, request tracing and permissive CORS.
///
/// CORS mirrors the request origin and allows credentials, any method and any header.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/generate-docx", post(generate_docx))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfoRes)
    )
)]
/// Service information, including whether the configured logo file is present
#[axum::debug_handler]
async fn root(State(state): State<AppState>) -> Json<ServiceInfoRes> {
    let logo_uploaded = state.record_service.config().logo_uploaded();
    Json(ServiceInfo::describe(logo_uploaded))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Liveness check
async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/generate-docx",
    request_body = RecordData,
    responses(
        (status = 200, description = "Generated lab record document (DOCX attachment)"),
        (status = 400, description = "Malformed JSON", body = ErrorRes),
        (status = 415, description = "Missing JSON content type", body = ErrorRes),
        (status = 422, description = "Body does not match the record schema", body = ErrorRes),
        (status = 500, description = "Document generation failed", body = ErrorRes)
    )
)]
/// Generate a lab record document
///
/// Builds a DOCX with the course title and a summary table of the experiments, stores it as a
/// request-scoped artifact, and returns it as an attachment named
/// `{register_number}_Lab_Record.docx`.
///
/// Document assembly and storage run on the blocking pool.
///
/// # Errors
/// - The JSON rejection status with `{detail}` if the body does not match `RecordData`.
/// - `500 Internal Server Error` with `{detail}` if generation or storage fails.
#[axum::debug_handler]
async fn generate_docx(
    State(state): State<AppState>,
    payload: Result<Json<RecordData>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(record) = payload?;

    let service = state.record_service.clone();
    let (download_filename, bytes) =
        tokio::task::spawn_blocking(move || -> RecordResult<(String, Vec<u8>)> {
            let generated = service.generate(&record)?;
            let bytes = service.take(&generated)?;
            Ok((generated.download_filename, bytes))
        })
        .await??;

    let headers = [
        (header::CONTENT_TYPE, HeaderValue::from_static(DOCX_MEDIA_TYPE)),
        (
            header::CONTENT_DISPOSITION,
            HeaderValue::from_str(&attachment_disposition(&download_filename))?,
        ),
    ];

    Ok((headers, bytes).into_response())
}

/// RFC 5987 `attr-char`: everything else in an extended parameter value is percent-encoded.
const ATTR_CHAR: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

/// `attachment; filename="..."` with characters that cannot appear in a quoted header
/// parameter replaced by `_`. When that changes the name, the exact name follows as
/// `filename*=UTF-8''<percent-encoded>`.
fn attachment_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect();

    if fallback == filename {
        return format!("attachment; filename=\"{}\"", fallback);
    }

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        utf8_percent_encode(filename, ATTR_CHAR)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use labrec_core::CoreConfig;
    use serde_json::{json, Value};
    use std::io::{Cursor, Read};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use tower::ServiceExt;

    struct Harness {
        _temp: TempDir,
        output_dir: PathBuf,
        logo_path: PathBuf,
        app: Router,
    }

    fn harness(retain: bool) -> Harness {
        let temp = TempDir::new().unwrap();
        let output_dir = temp.path().join("records");
        let logo_path = temp.path().join("college_logo.png");
        let cfg = CoreConfig::new(output_dir.clone(), logo_path.clone(), retain).unwrap();
        let state = AppState {
            record_service: Arc::new(LabRecordService::new(Arc::new(cfg)).unwrap()),
        };
        Harness {
            _temp: temp,
            output_dir,
            logo_path,
            app: router(state),
        }
    }

    fn post_json(body: impl Into<Body>) -> Request<Body> {
        Request::post("/generate-docx")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    fn document_xml(docx: &[u8]) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(docx)).unwrap();
        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        xml
    }

    fn count_files(dir: &Path) -> usize {
        if !dir.exists() {
            return 0;
        }
        std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    count_files(&path)
                } else {
                    1
                }
            })
            .sum()
    }

    fn physics_lab() -> Value {
        json!({
            "course_title": "Physics Lab",
            "student_name": "Ada Student",
            "register_number": "21CS001",
            "experiments": [
                {"title": "Pendulum", "github": "https://github.com/x/pendulum"},
                {"title": "Ohm's Law", "date": "2024-02-01", "github": "https://github.com/x/ohms"}
            ]
        })
    }

    #[tokio::test]
    async fn root_reports_service_info() {
        let h = harness(false);

        let response = h
            .app
            .clone()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "message": "Lab Record Generator API",
                "status": "running",
                "version": "1.0",
                "logo_uploaded": false
            })
        );
    }

    #[tokio::test]
    async fn root_sees_logo_once_present() {
        let h = harness(false);
        std::fs::write(&h.logo_path, b"png").unwrap();

        let response = h
            .app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(body_json(response).await["logo_uploaded"], true);
    }

    #[tokio::test]
    async fn health_is_healthy() {
        let h = harness(false);

        let response = h
            .app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "healthy"}));
    }

    #[tokio::test]
    async fn generate_returns_docx_attachment() {
        let h = harness(false);

        let response = h
            .app
            .oneshot(post_json(physics_lab().to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"21CS001_Lab_Record.docx\""
        );

        let xml = document_xml(&body_bytes(response).await);
        assert_eq!(xml.matches("</w:tr>").count(), 3);
        assert!(xml.contains("Physics Lab"));
        assert!(xml.contains("https://github.com/x/pendulum"));
        assert!(!xml.contains("Ada Student"));
        assert!(!xml.contains("2024-02-01"));
    }

    #[tokio::test]
    async fn generate_cleans_up_when_not_retaining() {
        let h = harness(false);

        let response = h
            .app
            .oneshot(post_json(physics_lab().to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(count_files(&h.output_dir), 0);
    }

    #[tokio::test]
    async fn generate_keeps_artifacts_when_retaining() {
        let h = harness(true);

        for _ in 0..2 {
            let response = h
                .app
                .clone()
                .oneshot(post_json(physics_lab().to_string()))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        assert_eq!(count_files(&h.output_dir), 2);
    }

    #[tokio::test]
    async fn generate_with_no_experiments_has_header_row_only() {
        let h = harness(false);
        let mut body = physics_lab();
        body["experiments"] = json!([]);

        let response = h.app.oneshot(post_json(body.to_string())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let xml = document_xml(&body_bytes(response).await);
        assert_eq!(xml.matches("</w:tr>").count(), 1);
    }

    #[tokio::test]
    async fn missing_field_rejected_before_generation() {
        for field in ["course_title", "register_number", "experiments"] {
            let h = harness(true);
            let mut body = physics_lab();
            body.as_object_mut().unwrap().remove(field);

            let response = h.app.oneshot(post_json(body.to_string())).await.unwrap();

            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
            let detail = body_json(response).await["detail"].as_str().unwrap().to_string();
            assert!(detail.contains(field), "detail {detail:?} should name {field}");
            assert_eq!(count_files(&h.output_dir), 0);
        }
    }

    #[tokio::test]
    async fn wrong_type_rejected() {
        let h = harness(true);
        let mut body = physics_lab();
        body["experiments"] = json!("none");

        let response = h.app.oneshot(post_json(body.to_string())).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(count_files(&h.output_dir), 0);
    }

    #[tokio::test]
    async fn malformed_json_rejected() {
        let h = harness(true);

        let response = h.app.oneshot(post_json("{not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["detail"].is_string());
    }

    #[tokio::test]
    async fn missing_content_type_rejected() {
        let h = harness(true);
        let request = Request::post("/generate-docx")
            .body(Body::from(physics_lab().to_string()))
            .unwrap();

        let response = h.app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn storage_failure_returns_500_with_detail() {
        let h = harness(true);
        std::fs::remove_dir_all(&h.output_dir).unwrap();
        std::fs::write(&h.output_dir, b"not a directory").unwrap();

        let response = h
            .app
            .oneshot(post_json(physics_lab().to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let detail = body_json(response).await["detail"].as_str().unwrap().to_string();
        assert!(detail.starts_with("failed to store generated document"));
    }

    #[tokio::test]
    async fn cors_mirrors_origin_with_credentials() {
        let h = harness(false);
        let request = Request::get("/health")
            .header(header::ORIGIN, "https://labs.example.edu")
            .body(Body::empty())
            .unwrap();

        let response = h.app.oneshot(request).await.unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://labs.example.edu"
        );
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
            "true"
        );
    }

    #[tokio::test]
    async fn cors_preflight_allows_any_method_and_header() {
        let h = harness(false);
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/generate-docx")
            .header(header::ORIGIN, "https://labs.example.edu")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-lab-client")
            .body(Body::empty())
            .unwrap();

        let response = h.app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://labs.example.edu"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
        assert!(headers[header::ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap()
            .contains("POST"));
        assert!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
            .to_str()
            .unwrap()
            .to_ascii_lowercase()
            .contains("x-lab-client"));
    }

    #[tokio::test]
    async fn openapi_document_lists_routes() {
        let h = harness(false);

        let response = h
            .app
            .oneshot(
                Request::get("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let doc = body_json(response).await;
        assert!(doc["paths"]["/generate-docx"]["post"].is_object());
        assert!(doc["paths"]["/health"]["get"].is_object());
    }

    #[test]
    fn disposition_keeps_plain_names() {
        assert_eq!(
            attachment_disposition("21CS001_Lab_Record.docx"),
            "attachment; filename=\"21CS001_Lab_Record.docx\""
        );
    }

    #[test]
    fn disposition_escapes_unsafe_characters() {
        assert_eq!(
            attachment_disposition("a\"b\\c\nd_é.docx"),
            "attachment; filename=\"a_b_c_d__.docx\"; filename*=UTF-8''a%22b%5Cc%0Ad_%C3%A9.docx"
        );
    }

    #[test]
    fn disposition_keeps_quoted_register_number_exact() {
        let header = attachment_disposition("21 \"CS\"_Lab_Record.docx");

        assert!(header.starts_with("attachment; filename=\"21 _CS__Lab_Record.docx\"; "));
        assert!(header.ends_with("filename*=UTF-8''21%20%22CS%22_Lab_Record.docx"));
    }

    #[tokio::test]
    async fn generate_keeps_non_ascii_register_number_in_download_name() {
        let h = harness(false);
        let mut record = physics_lab();
        record["register_number"] = json!("21CSé01");

        let response = h.app.oneshot(post_json(record.to_string())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        let encoded = disposition
            .split("filename*=UTF-8''")
            .nth(1)
            .unwrap();
        let decoded = percent_encoding::percent_decode_str(encoded)
            .decode_utf8()
            .unwrap();

        assert_eq!(decoded, "21CSé01_Lab_Record.docx");
        assert!(disposition.contains("filename=\"21CS_01_Lab_Record.docx\""));
    }
}
