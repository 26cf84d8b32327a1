pub mod admin_handler;
pub mod auth_handler;
pub mod health_handler;
pub mod image_handler;
pub mod student_handler;

pub use admin_handler::list_students;
pub use auth_handler::{current_user, login, logout};
pub use health_handler::{health_check, health_check_ready};
pub use image_handler::generate_image;
pub use student_handler::{get_dashboard, start_round, submit_round};

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(health_check_ready)
        .service(login)
        .service(logout)
        .service(current_user)
        .service(get_dashboard)
        .service(start_round)
        .service(submit_round)
        .service(list_students)
        .service(generate_image);
}
