use crate::error::validation::ValidationErrors;
use crate::model::person::{
    ChangePasswordDto, CreatePersonDto, SignInDto, UpdatePersonDto, ROLES,
};
use crate::validator::{
    char_len, is_strong_password, is_valid_email, is_valid_hex_color, is_valid_username,
};

fn check_username(errors: &mut ValidationErrors, username: &str) {
    let len = char_len(username);
    if !(3..=30).contains(&len) {
        errors.add("username", "Username must be between 3 and 30 characters");
    }
    if !is_valid_username(username) {
        errors.add(
            "username",
            "Username can only contain letters, numbers, hyphens and underscores",
        );
    }
}

fn check_name(errors: &mut ValidationErrors, field: &str, label: &str, value: &str) {
    let len = char_len(value);
    if !(2..=50).contains(&len) {
        errors.add(field, format!("{} must be between 2 and 50 characters", label));
    }
}

fn check_email(errors: &mut ValidationErrors, email: &str) {
    if !is_valid_email(email) {
        errors.add("email", "Invalid email format");
    }
    if char_len(email) > 255 {
        errors.add("email", "Email must not exceed 255 characters");
    }
}

fn check_roles(errors: &mut ValidationErrors, roles: &[String]) {
    for role in roles {
        if !ROLES.contains(&role.as_str()) {
            errors.add("roles", "Invalid role");
        }
    }
}

fn check_password(errors: &mut ValidationErrors, field: &str, password: &str) {
    if !(8..=128).contains(&char_len(password)) {
        errors.add(field, "Password must be between 8 and 128 characters");
    } else if !is_strong_password(password) {
        errors.add(
            field,
            "Password must contain at least one lowercase letter, one uppercase letter, \
             one digit, and one special character",
        );
    }
}

pub fn validate_create(dto: &CreatePersonDto) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    check_username(&mut errors, dto.username.trim());
    check_name(&mut errors, "firstName", "First name", dto.first_name.trim());
    check_name(&mut errors, "lastName", "Last name", dto.last_name.trim());
    check_email(&mut errors, dto.email.trim());

    if let Some(role) = &dto.role {
        if !ROLES.contains(&role.as_str()) {
            errors.add("role", "Invalid role");
        }
    }
    if let Some(roles) = &dto.roles {
        check_roles(&mut errors, roles);
    }
    if let Some(hex) = &dto.hex {
        if !is_valid_hex_color(hex) {
            errors.add("hex", "Invalid hex color format");
        }
    }

    check_password(&mut errors, "password", &dto.password);
    if dto.confirm_password != dto.password {
        errors.add("confirmPassword", "Passwords do not match");
    }

    if let Some(bio) = &dto.bio {
        if char_len(bio) > 500 {
            errors.add("bio", "Bio must not exceed 500 characters");
        }
    }

    errors.into_result()
}

pub fn validate_update(dto: &UpdatePersonDto) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Some(username) = &dto.username {
        check_username(&mut errors, username.trim());
    }
    if let Some(first_name) = &dto.first_name {
        check_name(&mut errors, "firstName", "First name", first_name.trim());
    }
    if let Some(last_name) = &dto.last_name {
        check_name(&mut errors, "lastName", "Last name", last_name.trim());
    }
    if let Some(email) = &dto.email {
        check_email(&mut errors, email.trim());
    }
    if let Some(roles) = &dto.roles {
        check_roles(&mut errors, roles);
    }
    if let Some(hex) = &dto.hex {
        if !is_valid_hex_color(hex) {
            errors.add("hex", "Invalid hex color format");
        }
    }
    if let Some(bio) = &dto.bio {
        if char_len(bio) > 500 {
            errors.add("bio", "Bio must not exceed 500 characters");
        }
    }

    errors.into_result()
}

pub fn validate_change_password(dto: &ChangePasswordDto) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if dto.current_password.is_empty() {
        errors.add("currentPassword", "Current password is required");
    }
    check_password(&mut errors, "newPassword", &dto.new_password);
    if dto.confirm_password != dto.new_password {
        errors.add("confirmPassword", "Password confirmation does not match");
    }

    errors.into_result()
}

pub fn validate_sign_in(dto: &SignInDto) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if dto.identifier.trim().is_empty() {
        errors.add("identifier", "Identifier is required");
    }
    if dto.password.is_empty() {
        errors.add("password", "Password is required");
    }

    errors.into_result()
}

/// Validates the `role` filter on the listing endpoint.
pub fn validate_role_filter(role: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if !ROLES.contains(&role) {
        errors.add("role", "Invalid role filter");
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_create() -> CreatePersonDto {
        CreatePersonDto {
            username: "alice".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Silva".to_string(),
            email: "alice@example.com".to_string(),
            role: None,
            roles: None,
            hex: None,
            password: "Str0ng!pass".to_string(),
            confirm_password: "Str0ng!pass".to_string(),
            bio: None,
            social: None,
            github: None,
            linkedin: None,
            twitter: None,
            instagram: None,
            facebook: None,
            avatar_id: None,
            cover_id: None,
            newsletter: None,
        }
    }

    #[test]
    fn accepts_a_well_formed_create() {
        assert!(validate_create(&base_create()).is_ok());
    }

    #[test]
    fn rejects_mismatched_password_confirmation() {
        let mut dto = base_create();
        dto.confirm_password = "Different1!".to_string();

        let errors = validate_create(&dto).unwrap_err();
        assert_eq!(errors.fields(), vec!["confirmPassword"]);
    }

    #[test]
    fn rejects_unknown_roles() {
        let mut dto = base_create();
        dto.roles = Some(vec!["user".to_string(), "wizard".to_string()]);

        let errors = validate_create(&dto).unwrap_err();
        assert_eq!(errors.fields(), vec!["roles"]);
    }

    #[test]
    fn collects_multiple_field_failures() {
        let mut dto = base_create();
        dto.username = "a!".to_string();
        dto.email = "not-an-email".to_string();

        let errors = validate_create(&dto).unwrap_err();
        assert_eq!(errors.fields(), vec!["email", "username"]);
    }
}
