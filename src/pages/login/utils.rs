pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required".into());
    }
    if !email.contains('@') {
        return Err("Enter a valid email address".into());
    }
    if password.is_empty() {
        return Err("Password is required".into());
    }
    Ok(())
}
