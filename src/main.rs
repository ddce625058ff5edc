use outure_contact::{
    configuration::get_configuration,
    telemetry::*,
    startup::*
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    //setting the subscriber (telemetry)
    let subscriber = get_subscriber("outure_contact".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration()
        .expect("Failed to load configuration file");

    let application = Application::build(configuration)?;
    application.run_until_stopped().await?;

    Ok(())
}
