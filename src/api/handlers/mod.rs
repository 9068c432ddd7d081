//! HTTP request handlers for both services.
//!
//! Shortener: [`health`], [`shorten`], [`redirect`], [`stats`].
//! User management: [`users`].

pub mod fallback;
pub mod health;
pub mod redirect;
pub mod shorten;
pub mod stats;
pub mod users;

pub use fallback::{shortener_not_found, users_not_found};
pub use health::{health_handler, service_status_handler, users_home_handler};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
pub use users::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    login_handler, search_users_handler, update_user_handler,
};
