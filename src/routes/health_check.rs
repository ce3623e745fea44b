use actix_web::{get, HttpResponse, Responder};

/// Liveness probe. Always responds with an empty 200.
#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok()
}
