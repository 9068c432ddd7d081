//! Handlers for user CRUD, search and login.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::api::dto::users::{
    CreateUserRequest, LoginRequest, SearchParams, UpdateUserRequest, UserDetail, UserIdData,
    UserList,
};
use crate::api::envelope::{ApiSuccess, EnvelopeError};
use crate::error::AppError;
use crate::state::UsersState;
use crate::utils::user_validator::{sanitize_input, validate_email_format, validate_user_data};

type ApiResult<T> = Result<ApiSuccess<T>, EnvelopeError>;

/// Parses a path id; only positive decimal integers are accepted.
fn parse_user_id(raw: &str) -> Result<i64, AppError> {
    raw.bytes()
        .all(|b| b.is_ascii_digit())
        .then(|| raw.parse::<i64>().ok())
        .flatten()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::bad_request("Invalid user ID", json!({ "id": raw })))
}

/// Extracts a request body; anything but a non-empty JSON object is rejected.
fn json_body<T: DeserializeOwned>(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<T, AppError> {
    let invalid =
        |reason: String| AppError::bad_request("Invalid JSON data", json!({ "reason": reason }));

    match payload {
        Ok(Json(Value::Object(body))) if !body.is_empty() => {
            serde_json::from_value(Value::Object(body)).map_err(|e| invalid(e.to_string()))
        }
        Ok(Json(_)) => Err(invalid("Expected a non-empty JSON object".to_string())),
        Err(rejection) => Err(invalid(rejection.body_text())),
    }
}

/// `GET /users` - lists all users.
pub async fn list_users_handler(State(state): State<UsersState>) -> ApiResult<UserList> {
    let users = state.user_service.list().await?;
    Ok(ApiSuccess::data(UserList { users }))
}

/// `GET /user/{id}` - fetches one user.
///
/// # Errors
///
/// 400 if `id` is not a positive integer, 404 if the user doesn't exist.
pub async fn get_user_handler(
    State(state): State<UsersState>,
    Path(id): Path<String>,
) -> ApiResult<UserDetail> {
    let id = parse_user_id(&id)?;
    let user = state.user_service.get(id).await?;
    Ok(ApiSuccess::data(UserDetail { user }))
}

/// `POST /users` - registers a user.
///
/// # Request Body
///
/// ```json
/// { "name": "John Doe", "email": "john@example.com", "password": "SecurePass123!" }
/// ```
///
/// # Errors
///
/// - 400 with every violated rule in `errors` if validation fails
/// - 409 if the e-mail is already registered
pub async fn create_user_handler(
    State(state): State<UsersState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<UserIdData> {
    let payload: CreateUserRequest = json_body(payload)?;

    validate_user_data(&payload.fields(), true)
        .map_err(|errors| AppError::invalid_fields("Validation failed", errors))?;

    let name = sanitize_input(payload.name.as_deref().unwrap_or_default());
    let email = sanitize_input(payload.email.as_deref().unwrap_or_default());
    let password = payload.password.unwrap_or_default();

    let user_id = state.user_service.register(name, email, password).await?;

    Ok(ApiSuccess::created(
        "User created successfully",
        UserIdData { user_id },
    ))
}

/// `PUT /user/{id}` - replaces name and e-mail.
///
/// # Errors
///
/// 400 on invalid id or payload, 404 if the user doesn't exist,
/// 409 if the e-mail belongs to another user.
pub async fn update_user_handler(
    State(state): State<UsersState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<()> {
    let id = parse_user_id(&id)?;
    let payload: UpdateUserRequest = json_body(payload)?;

    validate_user_data(&payload.fields(), false)
        .map_err(|errors| AppError::invalid_fields("Validation failed", errors))?;

    let name = sanitize_input(payload.name.as_deref().unwrap_or_default());
    let email = sanitize_input(payload.email.as_deref().unwrap_or_default());

    state.user_service.update(id, name, email).await?;

    Ok(ApiSuccess::message("User updated successfully"))
}

/// `DELETE /user/{id}` - deletes a user.
pub async fn delete_user_handler(
    State(state): State<UsersState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let id = parse_user_id(&id)?;
    state.user_service.delete(id).await?;
    Ok(ApiSuccess::message("User deleted successfully"))
}

/// `GET /search?name=` - case-insensitive name substring search.
///
/// # Errors
///
/// 400 if `name` is missing, blank, or shorter than 2 characters after trimming.
pub async fn search_users_handler(
    State(state): State<UsersState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<UserList> {
    let term = params.name.unwrap_or_default();
    let users = state.user_service.search(&term).await?;
    Ok(ApiSuccess::data(UserList { users }))
}

/// `POST /login` - checks credentials.
///
/// # Response
///
/// `200` with `data.user_id` on success.
///
/// # Errors
///
/// - 400 if a field is missing or the e-mail is malformed
/// - 404 if no user has this e-mail
/// - 401 if the password doesn't match
pub async fn login_handler(
    State(state): State<UsersState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<UserIdData> {
    let payload: LoginRequest = json_body(payload)?;

    let (Some(email), Some(password)) = (payload.email, payload.password) else {
        return Err(AppError::bad_request("Email and password are required", json!({})).into());
    };
    if email.is_empty() || password.is_empty() {
        return Err(AppError::bad_request("Email and password are required", json!({})).into());
    }

    let email = sanitize_input(&email);
    validate_email_format(&email)
        .map_err(|e| AppError::bad_request(format!("Email: {e}"), json!({})))?;

    let user_id = state.user_service.login(&email, password).await?;

    Ok(ApiSuccess::data(UserIdData { user_id }).with_message("Login successful"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id_accepts_positive_integers() {
        assert_eq!(parse_user_id("1").unwrap(), 1);
        assert_eq!(parse_user_id("42").unwrap(), 42);
    }

    #[test]
    fn test_parse_user_id_rejects_zero_and_signs() {
        assert!(parse_user_id("0").is_err());
        assert!(parse_user_id("-1").is_err());
        assert!(parse_user_id("+1").is_err());
    }

    #[test]
    fn test_json_body_rejects_empty_and_non_object() {
        for body in [json!({}), json!([]), json!(null), json!("x")] {
            let err = json_body::<LoginRequest>(Ok(Json(body))).unwrap_err();
            assert_eq!(err.to_string(), "Invalid JSON data");
        }
    }

    #[test]
    fn test_json_body_rejects_wrong_field_types() {
        let err = json_body::<LoginRequest>(Ok(Json(json!({ "email": 5 })))).unwrap_err();
        assert_eq!(err.to_string(), "Invalid JSON data");
    }

    #[test]
    fn test_json_body_accepts_partial_object() {
        let body: LoginRequest =
            json_body(Ok(Json(json!({ "email": "john@example.com" })))).unwrap();
        assert_eq!(body.email.as_deref(), Some("john@example.com"));
        assert!(body.password.is_none());
    }

    #[test]
    fn test_parse_user_id_rejects_garbage() {
        assert!(parse_user_id("").is_err());
        assert!(parse_user_id("abc").is_err());
        assert!(parse_user_id("1.5").is_err());
        assert!(parse_user_id("99999999999999999999").is_err());
    }
}
