use crate::helpers::spawn_app;
use serde_json::json;
use wiremock::{
    matchers::{any, method, path},
    Mock, ResponseTemplate,
};

#[actix_web::test]
async fn subscribe_returns_a_200_for_a_valid_email() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.email_server)
        .await;

    let response = app
        .post_subscribe(&json!({ "email": "traveler@example.com" }))
        .await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "success": true }));
}

#[actix_web::test]
async fn subscribe_sends_a_welcome_email_to_the_subscriber() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    app.post_subscribe(&json!({ "email": "traveler@example.com" }))
        .await;

    let emails = app.sent_emails().await;
    assert_eq!(emails.len(), 1);
    let email = &emails[0];
    assert_eq!(email["to"], "traveler@example.com");
    assert_eq!(email["from"], "onboarding@resend.dev");
    assert_eq!(email["subject"], "Welcome to SkyScout South! 🎉");
    assert!(email["html"].as_str().unwrap().contains("<li>ATL - Atlanta</li>"));
}

#[actix_web::test]
async fn subscribing_twice_sends_two_emails() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    for _ in 0..2 {
        let response = app
            .post_subscribe(&json!({ "email": "traveler@example.com" }))
            .await;
        assert_eq!(200, response.status().as_u16());
    }
}

#[actix_web::test]
async fn subscribe_returns_a_400_when_the_email_is_invalid() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        (json!({ "email": "not-an-email" }), "an address without an @"),
        (json!({}), "a missing email"),
        (json!({ "email": "" }), "an empty email"),
        (json!({ "email": null }), "a null email"),
        (json!({ "email": 42 }), "a numeric email"),
        (json!({ "address": "traveler@example.com" }), "a misnamed field"),
    ];

    for (body, description) in test_cases {
        let response = app.post_subscribe(&body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with a 400 Bad Request when the payload was {}.",
            description
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "error": "Invalid email address" }));
    }
}

#[actix_web::test]
async fn subscribe_returns_a_400_when_the_body_is_not_json() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        ("email=traveler%40example.com", "application/x-www-form-urlencoded"),
        ("{\"email\": ", "application/json"),
        ("", "application/json"),
    ];

    for (body, content_type) in test_cases {
        let response = app.post_subscribe_raw(body, content_type).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with a 400 Bad Request for `{}` sent as {}.",
            body,
            content_type
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Invalid email address");
    }
}

#[actix_web::test]
async fn subscribe_rejects_methods_other_than_post() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    for method in [
        reqwest::Method::GET,
        reqwest::Method::PUT,
        reqwest::Method::PATCH,
        reqwest::Method::DELETE,
    ] {
        let response = app.request_subscribe(method.clone()).await;

        assert_eq!(
            405,
            response.status().as_u16(),
            "{} was not rejected with a 405",
            method
        );
        assert_eq!(response.headers().get("Allow").unwrap(), "POST");
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "error": "Method not allowed" }));
    }
}

#[actix_web::test]
async fn subscribe_returns_a_500_when_the_email_api_fails() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_subscribe(&json!({ "email": "traveler@example.com" }))
        .await;

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "error": "Failed to subscribe. Please try again." })
    );
}

#[actix_web::test]
async fn subscribe_returns_a_500_when_the_email_api_is_too_slow() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(30)))
        .mount(&app.email_server)
        .await;

    let response = app
        .post_subscribe(&json!({ "email": "traveler@example.com" }))
        .await;

    assert_eq!(500, response.status().as_u16());
}
