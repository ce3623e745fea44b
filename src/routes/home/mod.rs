use actix_web::{get, http::header::ContentType, HttpResponse};

/// The landing page with the sign-up form.
#[get("/")]
pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(include_str!("home.html"))
}
