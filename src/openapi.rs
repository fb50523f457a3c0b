use crate::product::{CreateProductRequest, Product, UpdateProductRequest, handlers};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Path the OpenAPI document is served from.
pub const API_DOCS_PATH: &str = "/v3/api-docs";

/// Path of the interactive Swagger UI page.
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product API",
        version = "3.0",
        description = "API for managing products"
    ),
    paths(
        handlers::list_products,
        handlers::get_product,
        handlers::create_product,
        handlers::update_product,
        handlers::delete_product,
    ),
    components(schemas(Product, CreateProductRequest, UpdateProductRequest)),
    tags((name = "Product API", description = "Operations related to products"))
)]
pub struct ApiDoc;

/// Swagger UI at [`SWAGGER_UI_PATH`], also serving the document at [`API_DOCS_PATH`].
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(SWAGGER_UI_PATH).url(API_DOCS_PATH, ApiDoc::openapi())
}
