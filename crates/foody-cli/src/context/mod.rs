mod app_context;
mod store;

pub use app_context::AppContext;
pub use store::Store;
