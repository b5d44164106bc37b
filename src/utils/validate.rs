use crate::types::error::{AppError, FieldError};
use crate::types::user::{RUserLogin, RUserRegister, RUserUpdate};

const MAX_FIELD_LEN: usize = 100;

fn check_field(field: &'static str, value: &str, errors: &mut Vec<FieldError>) {
    if value.is_empty() {
        errors.push(FieldError {
            field,
            message: format!("{field} must not be empty"),
        });
    } else if value.chars().count() > MAX_FIELD_LEN {
        errors.push(FieldError {
            field,
            message: format!("{field} must be at most {MAX_FIELD_LEN} characters"),
        });
    }
}

pub fn validate_register(req: &RUserRegister) -> Result<(), AppError> {
    let mut errors = Vec::new();
    check_field("username", &req.username, &mut errors);
    check_field("password", &req.password, &mut errors);
    check_field("name", &req.name, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

pub fn validate_login(req: &RUserLogin) -> Result<(), AppError> {
    let mut errors = Vec::new();
    check_field("username", &req.username, &mut errors);
    check_field("password", &req.password, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

/// Absent fields are fine on update; present ones still have to pass.
pub fn validate_update(req: &RUserUpdate) -> Result<(), AppError> {
    let mut errors = Vec::new();
    if let Some(name) = &req.name {
        check_field("name", name, &mut errors);
    }
    if let Some(password) = &req.password {
        check_field("password", password, &mut errors);
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_rejects_empty_fields() {
        let req = RUserRegister {
            username: "".to_string(),
            password: "".to_string(),
            name: "".to_string(),
        };
        let err = validate_register(&req).unwrap_err();
        match err {
            AppError::Validation(fields) => assert_eq!(fields.len(), 3),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn register_rejects_overlong_username() {
        let req = RUserRegister {
            username: "x".repeat(101),
            password: "pw".to_string(),
            name: "X".to_string(),
        };
        assert!(validate_register(&req).is_err());
    }

    #[test]
    fn update_accepts_empty_request() {
        assert!(validate_update(&RUserUpdate::default()).is_ok());
    }

    #[test]
    fn update_rejects_present_but_empty_name() {
        let req = RUserUpdate {
            name: Some("".to_string()),
            password: None,
        };
        assert!(validate_update(&req).is_err());
    }
}
