use ratewatch::app::App;
use ratewatch::settings::Settings;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let settings = match Settings::load_or_default("config.toml") {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load settings: {e}");
            std::process::exit(1);
        }
    };

    settings.init_logging();
    info!("ratewatch starting");

    if let Err(e) = App::run(settings).await {
        error!(error = %e, "Fatal error");
        std::process::exit(1);
    }

    info!("ratewatch stopped");
}
