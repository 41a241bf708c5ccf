use std::net::TcpListener;

use actix_web::{dev::Server, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::{email_client::EmailJsClient, relay::RelayConfig, routes};

pub fn run(
    listener: TcpListener,
    email_client: web::Data<EmailJsClient>,
    relay_config: web::Data<RelayConfig>,
) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(email_client.clone())
            .app_data(relay_config.clone())
            .route("/", web::get().to(routes::home))
            .route("/health_check", web::get().to(routes::health_check))
            .route("/contact", web::post().to(routes::contact))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
