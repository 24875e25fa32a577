pub struct RegisterUserDto {
    pub username: Option<String>,
    pub password: Option<String>,
}
