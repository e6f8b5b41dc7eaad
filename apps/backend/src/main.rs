use actix_web::{web, App, HttpServer};
use guessr::config::db::DbKind;
use guessr::infra::state::build_state;
use guessr::telemetry::init_tracing;
use guessr::{cors_middleware, routes, RequestTrace, StructuredLogger, TraceSpan};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let host = std::env::var("GUESSR_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = match std::env::var("GUESSR_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
    {
        Ok(port) => port,
        Err(_) => {
            error!("GUESSR_PORT must be a valid port number");
            std::process::exit(1);
        }
    };

    let db_kind = match DbKind::from_env() {
        Ok(kind) => kind,
        Err(e) => {
            error!(error = %e, "invalid database configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state().with_db(db_kind).build().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(%host, port, "starting guessr backend");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
