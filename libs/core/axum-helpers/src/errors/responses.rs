//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "error": "A database error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "error": "Request validation failed",
        "details": {
            "first_name": [{
                "code": "length",
                "message": null,
                "params": {"min": 2, "max": 100, "value": "A"}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Malformed identifier",
    content_type = "application/json",
    example = json!({
        "error": "invalid id: not-an-id"
    })
)]
pub struct BadRequestIdResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "error": "not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
