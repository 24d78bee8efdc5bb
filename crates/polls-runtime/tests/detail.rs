mod common;

use axum::http::StatusCode;
use common::TestApp;

#[tokio::test]
async fn future_question_detail_is_not_found() {
    let app = TestApp::new();
    let future = app.question("Future question.", 5).await;

    let response = app.get(&format!("/polls/{}/", future.id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert!(!response.body.contains("Future question."));
}

#[tokio::test]
async fn past_question_detail_shows_text() {
    let app = TestApp::new();
    let past = app.question_with_choices("Past Question.", -5, &["Yes", "No"]).await;

    let response = app.get(&format!("/polls/{}/", past.id)).await;
    response.assert_status(StatusCode::OK);
    assert!(response.body.contains("Past Question."));
    assert!(response.body.contains("<label for=\"choice1\">Yes</label>"));
    assert!(response.body.contains(&format!("action=\"/polls/{}/vote/\"", past.id)));
}

#[tokio::test]
async fn unknown_and_future_questions_look_the_same() {
    let app = TestApp::new();
    let future = app.question("Future question.", 5).await;

    let hidden = app.get(&format!("/polls/{}/", future.id)).await;
    let missing = app.get("/polls/999/").await;
    hidden.assert_status(StatusCode::NOT_FOUND);
    missing.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(hidden.body, missing.body);
}

#[tokio::test]
async fn non_numeric_id_is_not_found() {
    let app = TestApp::new();
    app.get("/polls/abc/").await.assert_status(StatusCode::NOT_FOUND);
    app.get("/polls/-1/").await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn future_question_results_are_not_found() {
    let app = TestApp::new();
    let future = app.question_with_choices("Future question.", 5, &["Yes"]).await;

    app.get(&format!("/polls/{}/results/", future.id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn past_question_results_list_counts() {
    let app = TestApp::new();
    let past = app.question_with_choices("Past Question.", -1, &["Yes", "No"]).await;

    let response = app.get(&format!("/polls/{}/results/", past.id)).await;
    response.assert_status(StatusCode::OK);
    assert!(response.body.contains("Yes -- 0 votes"));
    assert!(response.body.contains("No -- 0 votes"));
}

#[tokio::test]
async fn signed_or_zero_padded_id_is_not_found() {
    let app = TestApp::new();
    let past = app.question("Past Question.", -1).await;
    assert_eq!(past.id.to_string(), "1");

    app.get("/polls/1/").await.assert_status(StatusCode::OK);
    for uri in ["/polls/+1/", "/polls/001/", "/polls/+1/results/", "/polls/01/results/"] {
        let response = app.get(uri).await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert!(!response.body.contains("Past Question."));
    }
}
