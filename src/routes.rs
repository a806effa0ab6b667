use actix_web::web;

use crate::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(handlers::index)));

    cfg.service(
        web::scope("/employees")
            // /employees
            .service(
                web::resource("")
                    .route(web::get().to(handlers::employees_page))
                    .route(web::post().to(handlers::create_employee)),
            )
            // /employees/new
            .service(web::resource("/new").route(web::get().to(handlers::new_employee))),
    );

    cfg.service(
        web::scope("/salaries")
            // /salaries
            .service(web::resource("").route(web::get().to(handlers::salaries_page)))
            // /salaries/generate
            .service(
                web::resource("/generate")
                    .route(web::get().to(handlers::confirm_generate))
                    .route(web::post().to(handlers::generate_salaries)),
            )
            // /salaries/pay/method
            .service(web::resource("/pay/method").route(web::post().to(handlers::change_payment_method)))
            // /salaries/{id}/pay
            .service(
                web::resource("/{id}/pay")
                    .route(web::get().to(handlers::open_pay_form))
                    .route(web::post().to(handlers::submit_payment)),
            ),
    );

    cfg.service(
        web::scope("/session")
            .service(web::resource("").route(web::post().to(handlers::store_token)))
            .service(web::resource("/logout").route(web::post().to(handlers::logout)))
            .service(web::resource("/status").route(web::get().to(handlers::session_status))),
    );
}
