use crate::controller::Intake;
use application::transfer::RegisterUserDto;
use serde::Deserialize;

// Both fields are optional here so a missing one, or a missing body, is
// reported as a validation failure rather than a json rejection.
#[derive(Default, Deserialize)]
pub struct RegisterUserRequest {
    username: Option<String>,
    password: Option<String>,
}

pub struct UserTransformer;

impl Intake<RegisterUserRequest> for UserTransformer {
    type To = RegisterUserDto;
    fn emit(&self, input: RegisterUserRequest) -> Self::To {
        RegisterUserDto {
            username: input.username,
            password: input.password,
        }
    }
}
