use anyhow::Result;
use axum::http::StatusCode;
use axum_test::TestServer;
use clubhouse_core::api::routes::{paths::activities, utils};
use serde_json::Value;

mod common;
use common::{build_test_server, test_state};

const CHESS: &str = "Chess Club";

fn signup_path(activity: &str) -> String {
    utils::activity_route(activities::SIGNUP, activity)
}

fn unregister_path(activity: &str) -> String {
    utils::activity_route(activities::UNREGISTER, activity)
}

async fn participants(server: &TestServer, activity: &str) -> Vec<String> {
    let body: Value = server.get(activities::COLLECTION).await.json();
    body[activity]["participants"]
        .as_array()
        .unwrap_or_else(|| panic!("{activity} missing from listing"))
        .iter()
        .map(|p| p.as_str().expect("email string").to_string())
        .collect()
}

#[tokio::test]
async fn listing_returns_every_activity_with_full_records() -> Result<()> {
    let server = build_test_server(test_state())?;

    let response = server.get(activities::COLLECTION).await;
    response.assert_status_ok();
    let body: Value = response.json();
    let map = body.as_object().expect("listing is an object");

    assert_eq!(map.len(), 9);
    assert!(map.contains_key("Chess Club"));
    assert!(map.contains_key("Programming Class"));

    for (name, details) in map {
        assert!(
            !details["description"].as_str().unwrap_or_default().is_empty(),
            "{name} description"
        );
        assert!(
            !details["schedule"].as_str().unwrap_or_default().is_empty(),
            "{name} schedule"
        );
        assert!(details["max_participants"].is_u64(), "{name} capacity");
        assert!(details["participants"].is_array(), "{name} roster");
        assert_eq!(details.as_object().map(|d| d.len()), Some(4));
    }
    Ok(())
}

#[tokio::test]
async fn chess_club_signup_and_unregister_scenario() -> Result<()> {
    let server = build_test_server(test_state())?;

    let signup = server
        .post(&signup_path(CHESS))
        .add_query_param("email", "test@mergington.edu")
        .await;
    signup.assert_status_ok();
    let body: Value = signup.json();
    assert_eq!(
        body["message"],
        "Signed up test@mergington.edu for Chess Club"
    );
    assert_eq!(
        participants(&server, CHESS).await,
        vec![
            "michael@mergington.edu",
            "daniel@mergington.edu",
            "test@mergington.edu"
        ]
    );

    let again = server
        .post(&signup_path(CHESS))
        .add_query_param("email", "test@mergington.edu")
        .await;
    again.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = again.json();
    assert_eq!(body["detail"], "Already signed up for this activity");
    assert_eq!(participants(&server, CHESS).await.len(), 3);

    let removed = server
        .delete(&unregister_path(CHESS))
        .add_query_param("email", "daniel@mergington.edu")
        .await;
    removed.assert_status_ok();
    let body: Value = removed.json();
    let message = body["message"].as_str().expect("message present");
    assert!(message.contains("Unregistered"));
    assert!(message.contains("daniel@mergington.edu"));
    assert_eq!(
        participants(&server, CHESS).await,
        vec!["michael@mergington.edu", "test@mergington.edu"]
    );

    let missing = server
        .delete(&unregister_path(CHESS))
        .add_query_param("email", "daniel@mergington.edu")
        .await;
    missing.assert_status(StatusCode::NOT_FOUND);
    let body: Value = missing.json();
    assert_eq!(body["detail"], "Student not found");
    Ok(())
}

#[tokio::test]
async fn unknown_activity_is_not_found_for_both_operations() -> Result<()> {
    let server = build_test_server(test_state())?;
    let before: Value = server.get(activities::COLLECTION).await.json();

    let signup = server
        .post(&signup_path("Nonexistent Club"))
        .add_query_param("email", "test@mergington.edu")
        .await;
    signup.assert_status(StatusCode::NOT_FOUND);
    let body: Value = signup.json();
    assert_eq!(body["detail"], "Activity not found");

    let unregister = server
        .delete(&unregister_path("Nonexistent Club"))
        .add_query_param("email", "michael@mergington.edu")
        .await;
    unregister.assert_status(StatusCode::NOT_FOUND);
    let body: Value = unregister.json();
    assert_eq!(body["detail"], "Activity not found");

    let after: Value = server.get(activities::COLLECTION).await.json();
    assert_eq!(before, after);
    Ok(())
}

#[tokio::test]
async fn plus_signs_in_emails_round_trip() -> Result<()> {
    let server = build_test_server(test_state())?;
    let email = "test+special@mergington.edu";

    server
        .post(&utils::with_query(
            &signup_path(CHESS),
            &[("email", email)],
        ))
        .await
        .assert_status_ok();
    assert!(participants(&server, CHESS).await.contains(&email.to_string()));

    let removed = server
        .delete(&utils::with_query(
            &unregister_path(CHESS),
            &[("email", email)],
        ))
        .await;
    removed.assert_status_ok();
    let body: Value = removed.json();
    assert!(body["message"].as_str().unwrap_or_default().contains(email));
    assert!(!participants(&server, CHESS).await.contains(&email.to_string()));
    Ok(())
}

#[tokio::test]
async fn signup_then_unregister_restores_roster_order() -> Result<()> {
    let server = build_test_server(test_state())?;
    let activity = "Drama Club";
    let original = participants(&server, activity).await;

    server
        .post(&signup_path(activity))
        .add_query_param("email", "workflow@mergington.edu")
        .await
        .assert_status_ok();
    assert_eq!(participants(&server, activity).await.len(), original.len() + 1);

    server
        .delete(&unregister_path(activity))
        .add_query_param("email", "workflow@mergington.edu")
        .await
        .assert_status_ok();
    assert_eq!(participants(&server, activity).await, original);
    Ok(())
}

#[tokio::test]
async fn one_student_can_join_several_activities() -> Result<()> {
    let server = build_test_server(test_state())?;
    let email = "multitasker@mergington.edu";
    let joined = ["Chess Club", "Programming Class", "Art Studio"];

    for activity in joined {
        server
            .post(&signup_path(activity))
            .add_query_param("email", email)
            .await
            .assert_status_ok();
    }

    for activity in joined {
        assert!(
            participants(&server, activity)
                .await
                .contains(&email.to_string()),
            "{email} missing from {activity}"
        );
    }
    Ok(())
}

#[tokio::test]
async fn fresh_state_per_server_isolates_tests() -> Result<()> {
    let first = build_test_server(test_state())?;
    first
        .post(&signup_path(CHESS))
        .add_query_param("email", "isolated@mergington.edu")
        .await
        .assert_status_ok();

    let second = build_test_server(test_state())?;
    assert_eq!(participants(&second, CHESS).await.len(), 2);
    Ok(())
}

#[tokio::test]
async fn missing_email_is_rejected_without_mutation() -> Result<()> {
    let server = build_test_server(test_state())?;

    let response = server.post(&signup_path(CHESS)).await;
    assert!(response.status_code().is_client_error());
    assert_eq!(participants(&server, CHESS).await.len(), 2);
    Ok(())
}
