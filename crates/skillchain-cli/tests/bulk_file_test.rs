//! Upload file parsing and bulk submission.

use std::io::Write;

use skillchain_cli::bulk::{load_entries, prepare, run_bulk_issue, BulkError, BulkIssueArgs};
use skillchain_client::{ClientConfig, RetryPolicy, SubmissionClient};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HASH_A: &str = "2a33349e7e606a8ad2e30e3c84521f9377450cf09083e162e0a9b1480ce0f972";

fn write_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn json_upload() -> String {
    serde_json::json!([
        {
            "certificate_id": "CERT-100",
            "student_address": "STUDENTA",
            "aadhar_hash": HASH_A,
            "degree_type": "B.Tech",
            "cgpa": "8.50",
            "skillset": "Python,React,SQL",
            "certification_type": "degree",
            "institution_name": "IIT Delhi"
        },
        {
            "student_address": "STUDENTB",
            "aadhar_hash": "b".repeat(64),
            "degree_type": "M.Sc",
            "cgpa": "92%",
            "skillset": "Rust",
            "certification_type": "degree",
            "institution_name": "IIT Delhi"
        }
    ])
    .to_string()
}

fn client(uri: &str) -> SubmissionClient {
    let endpoint = url::Url::parse(uri).unwrap();
    let config = ClientConfig::exact(vec![endpoint], Some("ISSUER:secret".into())).unwrap();
    SubmissionClient::new(config)
        .unwrap()
        .with_policy(RetryPolicy::immediate())
}

// ── Parsing ──────────────────────────────────────────────────────────

#[test]
fn json_upload_parses_and_prepares() {
    let file = write_file(".json", &json_upload());
    let entries = load_entries(file.path()).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].cgpa, "8.50");

    let requests = prepare(entries).unwrap();
    assert_eq!(requests[0].cert_id.as_str(), "CERT-100");
    assert_eq!(requests[1].cert_id.as_str(), "CERT-002");
    assert_eq!(requests[1].cgpa, "92%");
}

#[test]
fn yaml_upload_parses() {
    let yaml = format!(
        "- student_address: STUDENTA\n  aadhar_hash: {HASH_A}\n  degree_type: B.Tech\n  cgpa: \"9.0\"\n  skillset: Python\n  certification_type: diploma\n  institution_name: IIT Delhi\n"
    );
    let file = write_file(".yaml", &yaml);
    let requests = prepare(load_entries(file.path()).unwrap()).unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].cgpa, "9.0");
    assert_eq!(requests[0].cert_type, "diploma");
    assert_eq!(requests[0].aadhar_hash.as_str(), HASH_A);
}

#[test]
fn unquoted_grade_rejected_in_json() {
    let content = serde_json::json!([{
        "student_address": "STUDENTA",
        "aadhar_hash": HASH_A,
        "degree_type": "B.Tech",
        "cgpa": 90.0,
        "skillset": "Python",
        "certification_type": "degree",
        "institution_name": "IIT Delhi"
    }])
    .to_string();
    let file = write_file(".json", &content);
    let err = load_entries(file.path()).unwrap_err();
    assert!(matches!(err, BulkError::Parse { .. }));
    assert!(err.to_string().contains("quoted string"), "{err}");
}

#[test]
fn unquoted_grade_rejected_in_yaml() {
    let yaml = format!(
        "- student_address: STUDENTA\n  aadhar_hash: {HASH_A}\n  degree_type: B.Tech\n  cgpa: 8.50\n  skillset: Python\n  certification_type: degree\n  institution_name: IIT Delhi\n"
    );
    let file = write_file(".yml", &yaml);
    assert!(matches!(
        load_entries(file.path()),
        Err(BulkError::Parse { .. })
    ));
}

#[test]
fn blank_rows_are_skipped() {
    let content = serde_json::json!([
        {},
        {
            "student_address": "STUDENTA",
            "aadhar_hash": HASH_A,
            "degree_type": "B.Tech",
            "cgpa": "8.5",
            "skillset": "Python",
            "certification_type": "degree",
            "institution_name": "IIT Delhi"
        },
        {"certificate_id": ""}
    ])
    .to_string();
    let file = write_file(".json", &content);
    let entries = load_entries(file.path()).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].student_address, "STUDENTA");
}

#[test]
fn malformed_file_is_parse_error() {
    let file = write_file(".json", "[{\"student_address\": ");
    assert!(matches!(
        load_entries(file.path()),
        Err(BulkError::Parse { .. })
    ));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_entries(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, BulkError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn empty_upload_rejected() {
    let file = write_file(".json", "[]");
    let entries = load_entries(file.path()).unwrap();
    assert!(matches!(prepare(entries), Err(BulkError::Empty)));
}

#[test]
fn bad_hash_reports_row() {
    let content = serde_json::json!([{
        "student_address": "STUDENTA",
        "aadhar_hash": "123456789012",
        "degree_type": "B.Tech",
        "cgpa": "8.5",
        "skillset": "Python",
        "certification_type": "degree",
        "institution_name": "IIT Delhi"
    }])
    .to_string();
    let file = write_file(".json", &content);
    let err = prepare(load_entries(file.path()).unwrap()).unwrap_err();
    assert!(matches!(err, BulkError::InvalidEntry { row: 1, .. }));
}

// ── Submission ───────────────────────────────────────────────────────

#[tokio::test]
async fn bulk_issue_submits_every_entry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/call"))
        .and(body_partial_json(
            serde_json::json!({"method": "bulk_issue_certificates"}),
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"output": "Certificate issued successfully"})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let file = write_file(".json", &json_upload());
    let args = BulkIssueArgs {
        file: file.path().to_path_buf(),
        dry_run: false,
    };
    let code = run_bulk_issue(&args, &client(&server.uri())).await.unwrap();
    assert_eq!(code, 0);
}

#[tokio::test]
async fn bulk_issue_reports_rejections() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/call"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": {"code": "UNAUTHORIZED", "message": "Only issuer can issue certificates"}
        })))
        .mount(&server)
        .await;

    let file = write_file(".json", &json_upload());
    let args = BulkIssueArgs {
        file: file.path().to_path_buf(),
        dry_run: false,
    };
    let code = run_bulk_issue(&args, &client(&server.uri())).await.unwrap();
    assert_eq!(code, 1);
}

#[tokio::test]
async fn dry_run_submits_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let file = write_file(".json", &json_upload());
    let args = BulkIssueArgs {
        file: file.path().to_path_buf(),
        dry_run: true,
    };
    let code = run_bulk_issue(&args, &client(&server.uri())).await.unwrap();
    assert_eq!(code, 0);
}
