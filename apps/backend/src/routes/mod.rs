use actix_web::web;

use crate::middleware::CallerIdentity;

pub mod games;
pub mod guesses;
pub mod health;
pub mod pagination;
pub mod phrases;
pub mod rounds;
pub mod teams;

fn configure_api(cfg: &mut web::ServiceConfig) {
    games::configure_routes(cfg);
    phrases::configure_routes(cfg);
    teams::configure_routes(cfg);
    rounds::configure_routes(cfg);
    guesses::configure_routes(cfg);
}

/// Register every route. Shared by `main.rs` and the integration tests so
/// both see the same paths and identity handling.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // /health sits outside the identity scope.
    health::configure_routes(cfg);

    cfg.service(
        web::scope("/api")
            .wrap(CallerIdentity)
            .configure(configure_api),
    );
}
