use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier for the product.
    #[schema(example = "1")]
    pub id: String,
    /// Name of the product.
    #[schema(example = "Laptop")]
    pub name: String,
    /// Price of the product.
    #[schema(example = 1200.00)]
    pub price: f64,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// Payload for creating a product. The server assigns the id.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Monitor")]
    pub name: String,
    #[schema(example = 300.0)]
    pub price: f64,
}

impl CreateProductRequest {
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
        }
    }
}

/// Full replacement payload for an existing product.
///
/// `id` may be omitted; when present it must equal the id in the path.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(default)]
    #[schema(example = "2")]
    pub id: Option<String>,
    #[schema(example = "Mouse Pro")]
    pub name: String,
    #[schema(example = 30.0)]
    pub price: f64,
}
