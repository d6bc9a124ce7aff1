use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ClienteDoc {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub telefono: String,
    pub ciudad: String,
}

/// All fields required on create; on update, omitted fields keep their stored value.
#[derive(ToSchema)]
pub struct ClienteInputDoc {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub ciudad: Option<String>,
}

#[derive(ToSchema)]
pub struct ErrorBodyDoc {
    pub message: String,
    pub errors: Option<std::collections::HashMap<String, String>>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::clientes::list,
        crate::routes::clientes::get,
        crate::routes::clientes::create,
        crate::routes::clientes::update,
        crate::routes::clientes::delete,
        crate::routes::clientes::list_by_ciudad,
    ),
    components(
        schemas(
            HealthResponse,
            ClienteDoc,
            ClienteInputDoc,
            ErrorBodyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "clientes", description = "Cliente management")
    )
)]
pub struct ApiDoc;
