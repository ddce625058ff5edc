use once_cell::sync::Lazy;
use outure_contact::configuration::get_configuration;
use outure_contact::startup::Application;
use outure_contact::telemetry::{get_subscriber, init_subscriber};
use wiremock::MockServer;

// The tracing stack is initialised once for the whole test binary; set
// TEST_LOG to see the output.
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer
}

impl TestApp {
    pub async fn post_contact(&self, body: serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/api/contact", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    // Stands in for the mail API
    let email_server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("Failed to load configuration file");
        // A random OS-assigned port per test application
        c.application.port = 0;
        c.email_client.base_url = email_server.uri();
        c
    };

    let application = Application::build(configuration)
        .expect("Failed to build the application");
    let address = format!("http://127.0.0.1:{}", application.port());
    let _ = tokio::spawn(application.run_until_stopped());

    //We return the application handle to the caller
    TestApp {
        address,
        email_server
    }
}
