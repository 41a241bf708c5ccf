use portfolio::relay::{RelayConfig, RECIPIENT_EMAIL};
use wiremock::{
    matchers::{any, method, path},
    Mock, ResponseTemplate,
};

use crate::helper::{spawn_app, spawn_app_with_relay};

fn jane() -> serde_json::Value {
    serde_json::json!({
        "name": "Jane",
        "email": "jane@x.com",
        "message": "Need a site",
    })
}

#[tokio::test]
async fn successful_submission_clears_form_and_thanks_sender() {
    let app = spawn_app().await;

    Mock::given(path("/api/v1.0/email/send"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let res = app.post_contact(&jane()).await;
    assert_eq!(200, res.status().as_u16());

    let html_page = res.text().await.unwrap();
    assert!(html_page.contains("Thanks! I will get back to you shortly."));
    assert!(html_page.contains(r#"class="status success""#));
    assert!(html_page.contains(r#"name="name" placeholder="Your name" value="""#));
    assert!(!html_page.contains("jane@x.com"));
    assert!(!html_page.contains("Need a site"));
}

#[tokio::test]
async fn submission_payload_reaches_the_relay() {
    let app = spawn_app().await;

    Mock::given(path("/api/v1.0/email/send"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    app.post_contact(&jane()).await;

    let email_request = &app.email_server.received_requests().await.unwrap()[0];
    let body: serde_json::Value = serde_json::from_slice(&email_request.body).unwrap();
    assert_eq!("service_test", body["service_id"]);
    assert_eq!("template_test", body["template_id"]);
    assert_eq!("public-key", body["user_id"]);
    assert_eq!(
        serde_json::json!({
            "from_name": "Jane",
            "reply_to": "jane@x.com",
            "message": "Need a site",
            "to_email": RECIPIENT_EMAIL,
        }),
        body["template_params"]
    );
}

#[tokio::test]
async fn padded_email_is_trimmed_before_sending() {
    let app = spawn_app().await;

    Mock::given(path("/api/v1.0/email/send"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let body = serde_json::json!({
        "name": "Jane",
        "email": "  jane@x.com  ",
        "message": "Need a site",
    });
    let res = app.post_contact(&body).await;
    assert_eq!(200, res.status().as_u16());

    let email_request = &app.email_server.received_requests().await.unwrap()[0];
    let body: serde_json::Value = serde_json::from_slice(&email_request.body).unwrap();
    assert_eq!("jane@x.com", body["template_params"]["reply_to"]);
}

#[tokio::test]
async fn rejected_submission_keeps_fields_for_retry() {
    let app = spawn_app().await;

    Mock::given(path("/api/v1.0/email/send"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let res = app.post_contact(&jane()).await;
    assert_eq!(502, res.status().as_u16());

    let html_page = res.text().await.unwrap();
    assert!(html_page.contains("Something went wrong. Please try again."));
    assert!(html_page.contains(r#"class="status failed""#));
    assert!(html_page.contains(r#"value="Jane""#));
    assert!(html_page.contains(r#"value="jane@x.com""#));
    assert!(html_page.contains("Need a site</textarea>"));
}

#[tokio::test]
async fn missing_relay_config_never_reaches_the_relay() {
    let relays = [
        RelayConfig::new("", "template_test", "public-key"),
        RelayConfig::new("service_test", "", "public-key"),
        RelayConfig::new("service_test", "template_test", ""),
    ];
    for relay in relays {
        let app = spawn_app_with_relay(relay).await;

        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&app.email_server)
            .await;

        let res = app.post_contact(&jane()).await;
        assert_eq!(503, res.status().as_u16());

        let html_page = res.text().await.unwrap();
        assert!(html_page.contains("Email service is not configured yet."));
        assert!(html_page.contains(r#"value="Jane""#));
    }
}

#[tokio::test]
async fn invalid_submission_is_rejected() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let cases = [
        (
            serde_json::json!({"name": "", "email": "jane@x.com", "message": "Need a site"}),
            "name is empty.",
        ),
        (
            serde_json::json!({"name": "Jane", "email": "  ", "message": "Need a site"}),
            "email is blank.",
        ),
        (
            serde_json::json!({"name": "Jane", "email": "jane@x.com", "message": ""}),
            "message is empty.",
        ),
        (
            serde_json::json!({"name": "Jane", "email": "jane.x.com", "message": "Need a site"}),
            "email is malformed.",
        ),
        (
            serde_json::json!({"name": "Jane", "email": "jane@x.com"}),
            "message is missing.",
        ),
    ];
    for (body, payload) in cases {
        let res = app.post_contact(&body).await;
        assert_eq!(400, res.status().as_u16(), "{payload}");
    }
}

#[tokio::test]
async fn submitted_values_are_escaped() {
    let app = spawn_app().await;

    Mock::given(path("/api/v1.0/email/send"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.email_server)
        .await;

    let body = serde_json::json!({
        "name": r#""><script>alert(1)</script>"#,
        "email": "jane@x.com",
        "message": "</textarea><b>hi</b>",
    });
    let html_page = app.post_contact(&body).await.text().await.unwrap();
    assert!(!html_page.contains("<script>alert(1)</script>"));
    assert!(!html_page.contains("</textarea><b>hi</b>"));
}

#[tokio::test]
async fn retry_after_failure_can_succeed() {
    let app = spawn_app().await;

    Mock::given(path("/api/v1.0/email/send"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&app.email_server)
        .await;
    Mock::given(path("/api/v1.0/email/send"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let res = app.post_contact(&jane()).await;
    assert_eq!(502, res.status().as_u16());

    let res = app.post_contact(&jane()).await;
    assert_eq!(200, res.status().as_u16());
    assert!(res
        .text()
        .await
        .unwrap()
        .contains("Thanks! I will get back to you shortly."));
}
