mod contact;
mod home;

pub use contact::*;
pub use home::*;

use actix_web::{HttpResponse, Responder};

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok()
}
