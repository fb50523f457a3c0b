pub mod handlers;
pub mod model;
pub mod store;

pub use handlers::PRODUCTS_PATH;
pub use model::{CreateProductRequest, Product, UpdateProductRequest};
pub use store::ProductStore;
