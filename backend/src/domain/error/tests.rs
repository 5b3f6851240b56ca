//! Tests for the domain error payload.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(DomainError::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(DomainError::unauthorized("no auth"), ErrorCode::Unauthorized)]
#[case(DomainError::forbidden("denied"), ErrorCode::Forbidden)]
#[case(DomainError::not_found("missing"), ErrorCode::NotFound)]
#[case(DomainError::service_unavailable("busy"), ErrorCode::ServiceUnavailable)]
#[case(DomainError::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: DomainError, #[case] code: ErrorCode) {
    assert_eq!(error.code(), code);
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = DomainError::internal("boom");
    assert!(error.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    let error = TraceId::scope(trace_id, async move {
        DomainError::service_unavailable("busy")
    })
    .await;

    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
fn redaction_hides_internal_message_and_details(expected_trace_id: String) {
    let error = DomainError::internal("connection refused on 10.0.0.4")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({ "dsn": "postgres://secret" }));

    let redacted = error.redacted();

    assert_eq!(redacted.code(), ErrorCode::InternalError);
    assert_eq!(redacted.message(), "Internal server error");
    assert!(redacted.details().is_none());
    assert_eq!(redacted.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
fn redaction_leaves_client_errors_untouched() {
    let error = DomainError::invalid_request("bad code")
        .with_details(json!({ "field": "code", "code": "invalid_access_code" }));

    assert_eq!(error.redacted(), error);
}

#[rstest]
#[case(ErrorCode::ServiceUnavailable, "service_unavailable")]
#[case(ErrorCode::InvalidRequest, "invalid_request")]
#[case(ErrorCode::InternalError, "internal_error")]
fn error_codes_serialize_as_snake_case(#[case] code: ErrorCode, #[case] expected: &str) {
    assert_eq!(
        serde_json::to_value(code).expect("error code serialises"),
        json!(expected)
    );
}

#[rstest]
fn payload_serialises_camel_case_and_omits_empty_fields(expected_trace_id: String) {
    let with_trace = DomainError::service_unavailable("busy").with_trace_id(expected_trace_id);
    let bare = DomainError::not_found("missing");

    assert_eq!(
        serde_json::to_value(&with_trace).expect("error serialises"),
        json!({
            "code": "service_unavailable",
            "message": "busy",
            "traceId": TRACE_ID,
        })
    );
    assert_eq!(
        serde_json::to_value(&bare).expect("error serialises"),
        json!({ "code": "not_found", "message": "missing" })
    );
}

#[rstest]
fn payload_round_trips_through_json() {
    let error = DomainError::invalid_request("bad").with_details(json!({ "field": "namespace" }));

    let text = serde_json::to_string(&error).expect("error serialises");
    let decoded: DomainError = serde_json::from_str(&text).expect("error deserialises");

    assert_eq!(decoded, error);
}

#[rstest]
fn unknown_fields_are_rejected() {
    let result = serde_json::from_value::<DomainError>(json!({
        "code": "not_found",
        "message": "missing",
        "extra": true,
    }));
    assert!(result.is_err());
}

#[rstest]
fn display_uses_the_message() {
    assert_eq!(DomainError::forbidden("denied").to_string(), "denied");
}
