use clap::Parser;

use horizon_backend::{GeminiClient, DEFAULT_API_URL};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API key for the generative backend (falls back to GEMINI_API_KEY)
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Override the backend base URL
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Turn debugging information on
    #[arg(short, long)]
    debug: bool,
}

fn main() -> eframe::Result {
    let cli = Cli::parse();
    horizon_app::logging::setup(cli.debug);

    let api_key = cli
        .api_key
        .or_else(|| std::env::var("GEMINI_API_KEY").ok())
        .unwrap_or_default();
    if api_key.is_empty() {
        log::warn!("no API key configured; generation requests will fail");
    }
    let api_url = cli.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let client = GeminiClient::new(api_key, api_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Horizon"),
        vsync: true,
        ..Default::default()
    };

    eframe::run_native(
        "Horizon",
        options,
        Box::new(|cc| Ok(Box::new(horizon_app::HorizonApp::new(cc, client)))),
    )
}
