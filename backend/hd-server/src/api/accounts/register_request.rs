use hd_accounts::RegistrationRequest;

use serde::Deserialize;

/// Missing fields deserialize to empty so validation can report them by name
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password2: Option<String>,
    /// One of REPORTER, TECHNICIAN, MANAGER, ADMIN
    pub role: Option<String>,
}

impl From<RegisterRequest> for RegistrationRequest {
    fn from(request: RegisterRequest) -> Self {
        Self {
            username: request.username,
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            password: request.password,
            password2: request.password2,
            role: request.role,
        }
    }
}
