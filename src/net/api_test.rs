use super::*;

fn make_payload() -> ScoreboardPayload {
    ScoreboardPayload {
        description: "Placar quadra 1".to_owned(),
        serial_number: "1234".to_owned(),
        static_token: "tok-1234".to_owned(),
    }
}

// =============================================================
// Endpoint builders
// =============================================================

#[test]
fn index_endpoint_carries_all_query_params() {
    assert_eq!(
        scoreboard_index_endpoint("ac-1", "", 1),
        "/api/scoreboard?academyId=ac-1&currentPage=1&search=&perPage=10"
    );
}

#[test]
fn index_endpoint_encodes_search_term() {
    assert_eq!(
        scoreboard_index_endpoint("ac-1", "quadra 1", 3),
        "/api/scoreboard?academyId=ac-1&currentPage=3&search=quadra%201&perPage=10"
    );
}

#[test]
fn index_endpoint_encodes_academy_id() {
    let url = scoreboard_index_endpoint("ac/1", "", 1);
    assert_eq!(url, "/api/scoreboard?academyId=ac%2F1&currentPage=1&search=&perPage=10");
}

#[test]
fn entry_endpoint_formats_expected_path() {
    assert_eq!(scoreboard_entry_endpoint("sb-42"), "/api/scoreboard/sb-42");
}

#[test]
fn academy_endpoint_formats_expected_path() {
    assert_eq!(academy_endpoint("ac-7"), "/api/academy/ac-7");
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn create_body_merges_academy_id() {
    let body = create_scoreboard_body("ac-1", &make_payload());
    assert_eq!(
        body,
        serde_json::json!({
            "description": "Placar quadra 1",
            "serialNumber": "1234",
            "staticToken": "tok-1234",
            "academyId": "ac-1",
        })
    );
}

#[test]
fn update_body_omits_academy_id() {
    let body = update_scoreboard_body(&make_payload());
    assert_eq!(
        body,
        serde_json::json!({
            "description": "Placar quadra 1",
            "serialNumber": "1234",
            "staticToken": "tok-1234",
        })
    );
    assert!(body.get("academyId").is_none());
}

// =============================================================
// Server error messages
// =============================================================

#[test]
fn extract_server_message_reads_message_field() {
    let body = r#"{"message": "Identificador já cadastrado"}"#;
    assert_eq!(extract_server_message(body).as_deref(), Some("Identificador já cadastrado"));
}

#[test]
fn extract_server_message_ignores_missing_field() {
    assert_eq!(extract_server_message(r#"{"error": "nope"}"#), None);
}

#[test]
fn extract_server_message_ignores_empty_message() {
    assert_eq!(extract_server_message(r#"{"message": ""}"#), None);
}

#[test]
fn extract_server_message_ignores_invalid_json() {
    assert_eq!(extract_server_message("<html>502</html>"), None);
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn status_error_exposes_server_message() {
    let err = ApiError::Status {
        status: 422,
        message: Some("token inválido".to_owned()),
    };
    assert_eq!(err.server_message(), Some("token inválido"));
    assert_eq!(err.message_or("fallback"), "token inválido");
}

#[test]
fn status_error_without_message_uses_fallback() {
    let err = ApiError::Status {
        status: 500,
        message: None,
    };
    assert_eq!(err.server_message(), None);
    assert_eq!(err.message_or("fallback"), "fallback");
}

#[test]
fn transport_error_uses_fallback() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(err.server_message(), None);
    assert_eq!(err.message_or("fallback"), "fallback");
}

#[test]
fn errors_format_for_logging() {
    assert_eq!(
        ApiError::Transport("connection refused".to_owned()).to_string(),
        "request failed: connection refused"
    );
    assert_eq!(
        ApiError::Status {
            status: 404,
            message: None
        }
        .to_string(),
        "server returned status 404"
    );
    assert_eq!(
        ApiError::Decode("missing field".to_owned()).to_string(),
        "invalid response body: missing field"
    );
}
