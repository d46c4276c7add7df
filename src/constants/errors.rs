//! Error message constants used throughout the application.

// Identifier errors
pub const ERR_MISSING_USER_ID: &str = "Query parameter 'id' is required";
pub const ERR_INVALID_USER_ID: &str = "Invalid user ID format";

// Lookup errors
pub const ERR_USER_NOT_FOUND: &str = "User not found";

// Body errors
pub const ERR_EMPTY_BODY: &str = "Request body is empty";
pub const ERR_INVALID_BODY: &str = "Request body is not a valid user record";
pub const ERR_INVALID_QUERY: &str = "Invalid query string";
pub const ERR_PAYLOAD_TOO_LARGE: &str = "Request body exceeds the size limit";
pub const ERR_VALIDATION_FAILED: &str = "Validation failed";

// Field validation errors
pub const ERR_NAME_REQUIRED: &str = "Name must not be blank";
pub const ERR_TOO_MANY_KEYWORDS: &str = "At most 50 keywords are allowed";
pub const ERR_KEYWORD_BLANK: &str = "Keywords must not be blank";
pub const ERR_KEYWORD_TOO_LONG: &str = "Keywords must be at most 50 characters";
pub const ERR_CERTIFICATE_NAME_REQUIRED: &str = "Certificate name must not be blank";
pub const ERR_CERTIFICATE_EXPIRES_BEFORE_ISSUED: &str =
    "Certificate expiry date must not precede its issue date";

// Storage errors
pub const ERR_STORAGE_FAILURE: &str = "The user store could not complete the request";
