use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

/// `passwordHash` is accepted in place of `password`.
#[derive(ToSchema)]
pub struct RegisterRequest { pub email: String, pub username: String, pub password: String }

#[derive(ToSchema)]
pub struct LoginRequest { pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct LoginResponse { pub token: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct StudentDoc {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub age: i32,
    pub is_check: bool,
}

/// Absent fields default to empty / 0 / false.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct StudentInputDoc {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub age: i32,
    pub is_check: bool,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct StudentPageDoc {
    pub total: u64,
    pub page: i64,
    pub page_size: i64,
    pub data: Vec<StudentDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::students::list,
        crate::routes::students::get,
        crate::routes::students::add,
        crate::routes::students::update,
        crate::routes::students::delete,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            StudentDoc,
            StudentInputDoc,
            StudentPageDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "students")
    )
)]
pub struct ApiDoc;
