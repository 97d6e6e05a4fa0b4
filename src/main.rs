use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Result;
use sentibot::{routes, Chatbot, Settings};

#[actix_web::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load()?;
    log::info!(
        "Scoring profile {:?}, weights {:?}, clamp_combined={}",
        settings.scoring.profile,
        settings.scoring.weights,
        settings.scoring.clamp_combined
    );
    if settings.conversation.idle_ttl_secs.is_none() {
        log::warn!("No idle_ttl_secs configured; sessions are kept until the process exits.");
    }

    let data = web::Data::new(Chatbot::new(&settings)?);

    let host = settings.server.host.clone();
    let port = settings.server.port;
    log::info!("Starting server at http://{}:{}", host, port);
    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(Logger::default())
            .configure(routes::configure)
    })
    .bind((host, port))?
    .run()
    .await?;
    Ok(())
}
