use actix_web::web;

pub mod health;
pub mod pull_request;
pub mod stats;
pub mod team;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/team")
            .service(team::add::add)
            .service(team::get::get)
            .service(team::deactivate::deactivate),
    );
    cfg.service(
        web::scope("/users")
            .service(user::set_active::set_is_active)
            .service(user::reviews::get_review),
    );
    cfg.service(
        web::scope("/pullRequest")
            .service(pull_request::create::create)
            .service(pull_request::merge::merge)
            .service(pull_request::reassign::reassign),
    );
    cfg.service(stats::stats);
}
