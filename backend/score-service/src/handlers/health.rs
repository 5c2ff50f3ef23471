use actix_web::HttpResponse;

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}

// No downstream dependencies, so ready as soon as the server accepts connections
pub async fn ready() -> HttpResponse {
    HttpResponse::Ok().body("READY")
}
