use std::net::TcpListener;

use actix_web::{dev::Server, web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use url::Url;

use crate::{
    configuration::Settings,
    email_client::EmailClient,
    routes::{account_created, health_check},
};

/// A running application
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Build an HTTP server running our app. The behavior of the app is
    /// configured through the `settings` argument.
    ///
    /// Panics on an invalid delivery-provider configuration; there is no
    /// point serving events we can never dispatch.
    pub async fn build(settings: Settings) -> std::io::Result<Self> {
        let email_config = settings.email_client;
        let base_url = Url::parse(&email_config.base_url).expect("Invalid base URL");
        let sender_email = email_config.sender().expect("Invalid sender email address");
        let email_client =
            EmailClient::new(base_url, sender_email, email_config.authorization_token);

        let app_config = settings.application;
        let app_address = format!("{}:{}", &app_config.host, app_config.port);
        let listener = TcpListener::bind(app_address)?;
        let port = listener.local_addr().unwrap().port();

        let server = run(listener, email_client)?;
        Ok(Self { port, server })
    }

    /// The port that the app is listening on
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Listen and handle requests until we receive a stop signal
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

/// Starts a server, listening on `listener`, running in the background and returns it
fn run(listener: TcpListener, email_client: EmailClient) -> std::io::Result<Server> {
    let email_client = web::Data::new(email_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .service(health_check)
            .service(account_created)
            .app_data(email_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
