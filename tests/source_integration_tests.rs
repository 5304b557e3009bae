use std::time::Duration;

use masjid_quiz::source::{HttpQuestionSource, QuestionSource, SourceError};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

const QUESTIONS_PATH: &str = "/public/lecture-exams/lec-1/questions/by-lecture";

fn source(server: &MockServer, user_id: Option<&str>) -> HttpQuestionSource {
    HttpQuestionSource::new(
        server.uri(),
        user_id.map(str::to_string),
        Duration::from_secs(5),
    )
    .unwrap()
}

fn wire_question(id: &str, correct: &str) -> serde_json::Value {
    json!({
        "lecture_sessions_question_id": id,
        "lecture_sessions_question": format!("<p>Soal <b>{id}</b></p>"),
        "lecture_sessions_question_answers": ["A. Satu", "B. Dua", "C. Tiga"],
        "lecture_sessions_question_correct": correct,
        "lecture_sessions_question_explanation": "Penjelasan&nbsp;singkat"
    })
}

// ============================================================================
// HttpQuestionSource Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_maps_questions_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(QUESTIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "exam_id": "exam-1",
            "questions": [wire_question("q1", "A"), wire_question("q2", "C")]
        })))
        .mount(&mock_server)
        .await;

    let set = source(&mock_server, None)
        .fetch_questions("lec-1")
        .await
        .unwrap();

    assert_eq!(set.exam_id.as_deref(), Some("exam-1"));
    let ids: Vec<_> = set.questions.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, vec!["q1", "q2"]);
    assert_eq!(set.questions[0].prompt, "Soal q1");
    assert_eq!(set.questions[0].explanation, "Penjelasan singkat");
    assert!(set.questions[1].is_correct("C. Tiga"));
}

#[tokio::test]
async fn test_fetch_without_questions_is_empty_set() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(QUESTIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "exam_id": null })))
        .mount(&mock_server)
        .await;

    let set = source(&mock_server, None)
        .fetch_questions("lec-1")
        .await
        .unwrap();
    assert!(set.is_empty());
    assert!(set.exam_id.is_none());
}

#[tokio::test]
async fn test_fetch_forwards_user_id_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(QUESTIONS_PATH))
        .and(header("X-User-Id", "user-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "questions": [wire_question("q1", "A")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let set = source(&mock_server, Some("user-7"))
        .fetch_questions("lec-1")
        .await
        .unwrap();
    assert_eq!(set.len(), 1);
}

#[tokio::test]
async fn test_fetch_not_found_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(QUESTIONS_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_string("lecture not found"))
        .mount(&mock_server)
        .await;

    let result = source(&mock_server, None).fetch_questions("lec-1").await;
    match result {
        Err(SourceError::Api { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "lecture not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(QUESTIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let result = source(&mock_server, None).fetch_questions("lec-1").await;
    assert!(matches!(result, Err(SourceError::Parse(_))));
}

#[tokio::test]
async fn test_fetch_unreachable_server_is_network_error() {
    // Grab a free port, then release it so nothing is listening there.
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };
    let source = HttpQuestionSource::new(uri, None, Duration::from_secs(2)).unwrap();
    let result = source.fetch_questions("lec-1").await;
    assert!(matches!(result, Err(SourceError::Network(_))));
}
