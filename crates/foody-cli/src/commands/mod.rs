pub mod count;
pub mod dispatch;
pub mod indexes;
pub mod kinds;
pub mod nearest;
pub mod schema;
pub mod seed;
pub mod setup;
pub mod shared;
pub mod validate;
