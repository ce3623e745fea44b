use std::net::TcpListener;

use actix_web::{dev::Server, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::{
    configuration::Settings,
    email_client::Notifier,
    routes::{health_check, home, json_error_handler, method_not_allowed, subscribe},
};

/// A running application
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Build an HTTP server running our app. The behavior of the app is configured
    /// through the `settings` argument.
    ///
    /// Fails if the email client settings are unusable or the listener can't be bound.
    pub async fn build(settings: Settings) -> anyhow::Result<Self> {
        let email_client = settings.email_client.client()?;

        let app_config = settings.application;
        let app_address = format!("{}:{}", &app_config.host, app_config.port);
        let listener = TcpListener::bind(app_address)?;
        let port = listener.local_addr()?.port();
        tracing::info!(port, "Listening for subscriptions");

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

/// Starts a server listening on `listener` and returns it without awaiting it.
///
/// Welcome emails go through `notifier`, which is shared by every worker.
pub fn run<N>(listener: TcpListener, notifier: N) -> std::io::Result<Server>
where
    N: Notifier + Send + Sync + 'static,
{
    let notifier = web::Data::new(notifier);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .service(home)
            .service(health_check)
            .service(
                web::resource("/api/subscribe")
                    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                    .route(web::post().to(subscribe::<N>))
                    .default_service(web::route().to(method_not_allowed)),
            )
            .app_data(notifier.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
