//! User table handler.

use actix_web::{get, web};
use mock_data::UserRecord;

use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// The generated user table, in user id order.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "User table", body = [Object])
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserRecord>>> {
    Ok(web::Json(state.users().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test as actix_test};
    use mock_data::{Dataset, GeneratorConfig};
    use serde_json::Value;

    #[actix_web::test]
    async fn returns_every_generated_user() {
        let dataset = Dataset::generate(&GeneratorConfig::default());
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::new(dataset.sales, dataset.users)))
                .service(list_users),
        )
        .await;
        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/users").to_request())
                .await;
        assert!(res.status().is_success());
        let body: Value = actix_test::read_body_json(res).await;
        let users = body.as_array().expect("array body");
        assert_eq!(users.len(), 100);
        assert_eq!(
            users[0].get("displayName").and_then(Value::as_str),
            Some("User 1")
        );
        assert!(users[0].get("userId").is_some());
    }
}
