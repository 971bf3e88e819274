//! OpenAPI documentation.
//!
//! [`ApiDoc`] registers every route handler and the payloads they exchange.
//! The document is served on `GET /docs/openapi.json`, next to the
//! hand-written `docs/index.html`.

use utoipa::OpenApi;

use crate::account::{AccountRegister, AccountResponse, AccountUpdate};
use crate::error::ResponseError;
use crate::response::{Link, SuccessResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Account API",
        description = "Create, list, update and remove accounts.",
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::router::index::handler,
        crate::router::accounts::register::handler,
        crate::router::accounts::find_all::handler,
        crate::router::accounts::update::handler,
        crate::router::accounts::remove::handler,
        crate::router::status::status,
    ),
    components(schemas(
        AccountRegister,
        AccountUpdate,
        AccountResponse,
        SuccessResponse,
        Link,
        ResponseError,
    )),
    tags(
        (name = "index", description = "Entry point of the API"),
        (name = "accounts", description = "Operations related to accounts"),
        (name = "status", description = "Instance information")
    )
)]
pub struct ApiDoc;
