//! ItemService: validation plus store calls for the four item operations.

mod crud;
mod validation;
pub use crud::ItemService;
pub use validation::ItemName;
