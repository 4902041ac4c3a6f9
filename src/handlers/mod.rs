pub mod customers;
pub mod orders;
pub mod products;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        customers::create_customer,
        customers::get_customer,
        products::create_product,
        orders::create_order,
        orders::get_order,
        orders::list_orders,
    ),
    components(schemas(
        customers::CreateCustomerRequest,
        customers::CustomerResponse,
        products::CreateProductRequest,
        products::ProductResponse,
        orders::CreateOrderRequest,
        orders::CreateOrderLineRequest,
        orders::OrderResponse,
        orders::OrderLineResponse,
        orders::ListOrdersResponse,
    )),
    tags(
        (name = "customers", description = "Customer registration and lookup"),
        (name = "products", description = "Product catalog"),
        (name = "orders", description = "Order creation and retrieval"),
    )
)]
pub struct ApiDoc;
