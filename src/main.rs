use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use std::sync::Arc;

use nanogen::{logger, IncomingEvent, NanoBananoClient, RequestHandler, UpstreamConfig};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_with_config(logger::LoggerConfig::production()).map_err(Error::from)?;

    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    let config = UpstreamConfig::from_env();
    log::info!("🚀 Starting nanogen v{}", env!("CARGO_PKG_VERSION"));
    log::info!("🎨 Upstream endpoint: {}", config.api_url);
    log::info!("🤖 Model: {}, size: {}", config.model, config.image_size);

    let backend = Arc::new(NanoBananoClient::new(config.clone())?);
    let handler = RequestHandler::new(config, backend);
    let handler = &handler;

    run(service_fn(move |event: LambdaEvent<IncomingEvent>| async move {
        let (payload, context) = event.into_parts();
        log::info!("📥 Invocation {}: {}", context.request_id, payload.http_method);

        let envelope = handler.handle(payload).await;
        log::info!(
            "📤 Invocation {} completed with status {}",
            context.request_id,
            envelope.status_code
        );

        Ok::<_, Error>(envelope)
    }))
    .await
}
