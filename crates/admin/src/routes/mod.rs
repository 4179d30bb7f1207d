//! Admin panel route handlers.
//!
//! Route table:
//!
//! | Method | Path                    | Handler                  | Auth    |
//! |--------|-------------------------|--------------------------|---------|
//! | GET    | /                       | dashboard::index         | staff   |
//! | GET    | /auth/login             | auth::login_page         | -       |
//! | POST   | /auth/login             | auth::login              | -       |
//! | POST   | /auth/logout            | auth::logout             | staff   |
//! | GET    | /products               | products::index          | staff   |
//! | GET    | /products/new           | products::new_page       | staff   |
//! | POST   | /products               | products::create         | staff   |
//! | GET    | /products/{id}/edit     | products::edit_page      | staff   |
//! | POST   | /products/{id}          | products::update         | staff   |
//! | POST   | /products/{id}/delete   | products::delete         | staff   |
//! | POST   | /products/{id}/image    | products::upload_image   | staff   |
//! | POST   | /products/{id}/guide    | products::upload_guide   | staff   |
//! | GET    | /orders                 | orders::list::index      | staff   |
//! | GET    | /orders/{id}            | orders::detail::show     | staff   |
//! | POST   | /orders/{id}/status     | orders::detail::status   | staff   |
//! | GET    | /users                  | users::index             | staff   |
//! | GET    | /users/{id}             | users::show              | staff   |
//! | POST   | /users/{id}/delete      | users::delete            | manager |
//! | GET    | /staff                  | staff::index             | manager |
//! | GET    | /staff/new              | staff::new_page          | manager |
//! | POST   | /staff                  | staff::create            | manager |
//! | GET    | /staff/{id}/edit        | staff::edit_page         | manager |
//! | POST   | /staff/{id}             | staff::update            | manager |
//! | POST   | /staff/{id}/delete      | staff::delete            | manager |

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub mod auth;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod staff;
pub mod users;

/// Build the complete admin router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/auth/login", get(auth::login_page).post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/products", get(products::index).post(products::create))
        .route("/products/new", get(products::new_page))
        .route("/products/{id}/edit", get(products::edit_page))
        .route("/products/{id}", post(products::update))
        .route("/products/{id}/delete", post(products::delete))
        .route("/products/{id}/image", post(products::upload_image))
        .route("/products/{id}/guide", post(products::upload_guide))
        .route("/orders", get(orders::list::index))
        .route("/orders/{id}", get(orders::detail::show))
        .route("/orders/{id}/status", post(orders::detail::status))
        .route("/users", get(users::index))
        .route("/users/{id}", get(users::show))
        .route("/users/{id}/delete", post(users::delete))
        .route("/staff", get(staff::index).post(staff::create))
        .route("/staff/new", get(staff::new_page))
        .route("/staff/{id}/edit", get(staff::edit_page))
        .route("/staff/{id}", post(staff::update))
        .route("/staff/{id}/delete", post(staff::delete))
}
