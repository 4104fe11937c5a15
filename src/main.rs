use rutau_welcome::configuration::get_configuration;
use rutau_welcome::startup::Application;
use rutau_welcome::telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("rutau-welcome".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration");

    let app = Application::build(configuration).await?;
    app.run_until_stopped().await
}
