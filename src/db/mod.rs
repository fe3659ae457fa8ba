// Database access: connection handling, repositories and startup data

mod error;
mod pool;
pub mod repositories;
pub mod seed;

pub use error::DbError;
pub use pool::DbPool;
pub use repositories::Repositories;
