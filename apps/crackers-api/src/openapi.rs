//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api::{diagnostics, meta, schema};

/// Combined OpenAPI documentation for the Crackers Shop API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Crackers Shop API",
        version = "0.1.0",
        description = "Catalog and ordering API for a crackers shop, with \
                       schema introspection for the external document viewer"
    ),
    paths(
        meta::read_root,
        meta::hello,
        diagnostics::test_store,
        schema::get_schema
    ),
    components(schemas(
        meta::Message,
        diagnostics::DiagnosticsReport,
        schema::SchemaEntry
    )),
    nest(
        (path = "/api/crackers", api = domain_catalog::ApiDoc),
        (path = "/api/orders", api = domain_orders::ApiDoc)
    ),
    tags(
        (name = "Meta", description = "Liveness and greeting endpoints"),
        (name = "Diagnostics", description = "Store connectivity and schema introspection")
    )
)]
pub struct ApiDoc;
