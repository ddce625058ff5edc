use actix_web::{
    web,
    App,
    HttpResponse,
    HttpServer,
    dev::Server
};
use std::net::TcpListener;
use super::configuration::Settings;
use super::routes::health_check;
use super::routes::submit_contact;
use super::routes::ContactRejected;
use super::email_client::EmailClient;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server
}

impl Application {
    pub fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let sender = configuration.email_client
            .sender()
            .map_err(anyhow::Error::msg)?;
        let recipient = configuration.email_client
            .recipient()
            .map_err(anyhow::Error::msg)?;
        let timeout = configuration.email_client.timeout();
        let email_client = EmailClient::new(
            configuration.email_client.base_url,
            sender,
            recipient,
            configuration.email_client.authorization_token,
            timeout
        );

        let address = format!(
            "{}:{}",
            configuration.application.host,
            configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, email_client)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    email_client: EmailClient
    ) -> Result<Server, std::io::Error> {
    let email_client = web::Data::new(email_client);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(json_config())
            .route("/health_check", web::get().to(health_check))
            .route("/api/contact", web::post().to(submit_contact))
            .app_data(email_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

// Bodies the JSON extractor cannot parse get the same {"error": ...}
// envelope as domain rejections.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|error, _req| {
        let body = ContactRejected { error: error.to_string() };
        actix_web::error::InternalError::from_response(
            error,
            HttpResponse::BadRequest().json(body)
        )
        .into()
    })
}
