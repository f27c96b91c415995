use std::sync::Arc;

use disaster_triage::{TriageConfig, TriageEngine, TriageError, TriageRequest, TriageService};
use tower::ServiceExt;
use tracing::Level;

const USAGE: &str = "usage: disaster-triage <message> [image-path]";

fn init_logging() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
}

fn load_configuration() -> TriageConfig {
    TriageConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Falling back to default thresholds: {}", e);
        TriageConfig::default()
    })
}

fn build_request(message: String, image_path: Option<String>) -> Result<TriageRequest, TriageError> {
    let mut request = TriageRequest::new(message);
    if let Some(path) = image_path {
        let size_kb = std::fs::metadata(&path)?.len() as f64 / 1024.0;
        let image = image::open(&path)?;
        tracing::info!(
            "Image metadata: {}x{} px | Size: {:.2} KB",
            image.width(),
            image.height(),
            size_kb
        );
        request = request.with_image(image);
    }
    Ok(request)
}

#[tokio::main]
async fn main() -> Result<(), TriageError> {
    init_logging();
    let configuration = load_configuration();

    let mut args = std::env::args().skip(1);
    let message = args.next().unwrap_or_default();
    let image_path = args.next();
    if message.is_empty() && image_path.is_none() {
        eprintln!("{USAGE}");
        return Err(TriageError::EmptyReport);
    }

    let request = build_request(message, image_path)?;
    let service = TriageService::new(Arc::new(TriageEngine::from_config(&configuration)));
    let report = service.oneshot(request).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
