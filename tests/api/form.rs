use crate::helpers::spawn_app;
use outure_contact::form::{
    Field, FormController, FormFields, FormStatus, HttpContactGateway,
    TRANSPORT_FAILURE_MESSAGE
};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn a_filled_form_submitted_end_to_end_reaches_succeeded() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let mut controller = FormController::new(HttpContactGateway::new(app.address.clone()));
    controller.edit(Field::Name, "Jane");
    controller.edit(Field::Email, "jane@x.com");
    controller.edit(Field::Company, "Acme");
    controller.edit(Field::Message, "Hello");

    // Act
    let state = controller.submit().await;

    // Assert
    assert_eq!(state.status, FormStatus::Succeeded);
    assert_eq!(state.fields, FormFields::default());
    assert_eq!(state.error_message, None);
}

#[tokio::test]
async fn a_rejected_submission_surfaces_the_server_reason() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let mut controller = FormController::new(HttpContactGateway::new(app.address.clone()));
    // The name stays empty: the server is the authority on validity
    controller.edit(Field::Email, "jane@x.com");
    controller.edit(Field::Message, "Hello");

    let state = controller.submit().await;

    assert_eq!(state.status, FormStatus::Failed);
    assert_eq!(
        state.error_message.as_deref(),
        Some("Name, email, and message are required")
    );
    // The visitor keeps what they typed and can correct it
    assert_eq!(state.fields.email, "jane@x.com");
    assert_eq!(state.fields.message, "Hello");
}

#[tokio::test]
async fn an_unreachable_endpoint_surfaces_the_generic_message() {
    // Nothing listens on this address
    let mut controller =
        FormController::new(HttpContactGateway::new("http://127.0.0.1:1".to_string()));
    controller.edit(Field::Name, "Jane");
    controller.edit(Field::Email, "jane@x.com");
    controller.edit(Field::Message, "Hello");

    let state = controller.submit().await;

    assert_eq!(state.status, FormStatus::Failed);
    assert_eq!(state.error_message.as_deref(), Some(TRANSPORT_FAILURE_MESSAGE));
    assert_eq!(state.fields.name, "Jane");
}

#[tokio::test]
async fn a_corrected_form_can_be_resubmitted_after_a_rejection() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let mut controller = FormController::new(HttpContactGateway::new(app.address.clone()));
    controller.edit(Field::Email, "jane@x.com");
    controller.edit(Field::Message, "Hello");

    let state = controller.submit().await;
    assert_eq!(state.status, FormStatus::Failed);

    controller.edit(Field::Name, "Jane");
    let state = controller.submit().await;

    assert_eq!(state.status, FormStatus::Succeeded);
}

#[tokio::test]
async fn acknowledging_a_success_returns_the_form_to_idle() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.email_server)
        .await;

    let mut controller = FormController::new(HttpContactGateway::new(app.address.clone()));
    controller.edit(Field::Name, "Jane");
    controller.edit(Field::Email, "jane@x.com");
    controller.edit(Field::Message, "Hello");

    controller.submit().await;
    assert_eq!(controller.state().status, FormStatus::Succeeded);

    controller.start_over();

    assert_eq!(controller.state().status, FormStatus::Idle);
    assert_eq!(controller.state().fields, FormFields::default());
}
