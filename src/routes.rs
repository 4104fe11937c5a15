#[path = "routes/account_created.rs"]
mod account_created_route;
#[path = "routes/health_check.rs"]
mod health_check_route;

pub use account_created_route::account_created;
pub use health_check_route::health_check;
