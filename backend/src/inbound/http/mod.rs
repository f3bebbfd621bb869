//! HTTP inbound adapter exposing the booking REST endpoints.

pub mod body;
pub mod campaigns;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;

use actix_web::web;

pub use error::ApiResult;

/// Register every HTTP route plus the JSON 404 fallback.
///
/// Expects `web::Data<HttpState>` and `web::Data<HealthState>` to be
/// registered on the app.
///
/// # Examples
/// ```
/// use actix_web::App;
///
/// let _app = App::new().configure(backend::inbound::http::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(health::api_health)
            .service(campaigns::list_campaigns)
            .service(campaigns::create_campaign)
            .service(campaigns::create_session),
    )
    .service(health::ready)
    .service(health::live)
    .default_service(web::to(error::route_not_found));
}
