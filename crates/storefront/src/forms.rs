//! Form payloads and local validation.
//!
//! Every form is validated before any Platform API call: a submission with
//! a required field empty re-renders with field-level errors and issues no
//! network request. Server-side 422 errors merge into the same
//! `Vec<FieldError>` for inline display.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use bristle_core::Email;

use crate::api::FieldError;
use crate::api::types::{Address, CheckoutPayload, ProfileUpdate};

/// Permissive E.164-ish phone pattern.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)] // pattern is a compile-time constant
    Regex::new(r"^\+?[0-9 ()\-]{7,20}$").unwrap()
});

const MIN_PASSWORD_LENGTH: usize = 8;

fn require(errors: &mut Vec<FieldError>, field: &str, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "This field is required"));
        return false;
    }
    true
}

fn check_email(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if require(errors, field, value) && Email::parse(value.trim()).is_err() {
        errors.push(FieldError::new(field, "Enter a valid email address"));
    }
}

fn check_phone(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if require(errors, field, value) && !PHONE_RE.is_match(value.trim()) {
        errors.push(FieldError::new(field, "Enter a valid phone number"));
    }
}

/// Login form.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Validate locally. No network call happens while this fails.
    ///
    /// # Errors
    ///
    /// Returns field-level errors for inline display.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        check_email(&mut errors, "email", &self.email);
        require(&mut errors, "password", &self.password);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Registration form.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl RegisterForm {
    /// Validate locally. No network call happens while this fails.
    ///
    /// # Errors
    ///
    /// Returns field-level errors for inline display.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        check_email(&mut errors, "email", &self.email);
        require(&mut errors, "name", &self.name);
        if require(&mut errors, "password", &self.password)
            && self.password.len() < MIN_PASSWORD_LENGTH
        {
            errors.push(FieldError::new(
                "password",
                format!("Must be at least {MIN_PASSWORD_LENGTH} characters"),
            ));
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Profile edit form.
#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    #[serde(default)]
    pub phone: String,
}

impl ProfileForm {
    /// Validate locally. Phone is optional but must be well-formed if set.
    ///
    /// # Errors
    ///
    /// Returns field-level errors for inline display.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require(&mut errors, "name", &self.name);
        if !self.phone.trim().is_empty() && !PHONE_RE.is_match(self.phone.trim()) {
            errors.push(FieldError::new("phone", "Enter a valid phone number"));
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Convert to the Platform API payload. Call after `validate`.
    #[must_use]
    pub fn into_update(self) -> ProfileUpdate {
        let phone = self.phone.trim();
        ProfileUpdate {
            name: self.name.trim().to_string(),
            phone: if phone.is_empty() {
                None
            } else {
                Some(phone.to_string())
            },
        }
    }
}

/// Checkout details form (shipping + contact).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutForm {
    pub email: String,
    pub name: String,
    pub line1: String,
    #[serde(default)]
    pub line2: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub phone: String,
}

impl CheckoutForm {
    /// Validate locally. No network call happens while this fails.
    ///
    /// # Errors
    ///
    /// Returns field-level errors for inline display.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        check_email(&mut errors, "email", &self.email);
        require(&mut errors, "name", &self.name);
        require(&mut errors, "line1", &self.line1);
        require(&mut errors, "city", &self.city);
        require(&mut errors, "postal_code", &self.postal_code);
        require(&mut errors, "country", &self.country);
        check_phone(&mut errors, "phone", &self.phone);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Build the order payload. Call after `validate`.
    #[must_use]
    pub fn into_payload(self, cart_id: String) -> CheckoutPayload {
        let line2 = self.line2.trim();
        CheckoutPayload {
            cart_id,
            email: self.email.trim().to_string(),
            shipping_address: Address {
                name: self.name.trim().to_string(),
                line1: self.line1.trim().to_string(),
                line2: if line2.is_empty() {
                    None
                } else {
                    Some(line2.to_string())
                },
                city: self.city.trim().to_string(),
                postal_code: self.postal_code.trim().to_string(),
                country: self.country.trim().to_string(),
                phone: self.phone.trim().to_string(),
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn checkout_form() -> CheckoutForm {
        CheckoutForm {
            email: "buyer@example.com".to_string(),
            name: "Sam Doe".to_string(),
            line1: "1 Brush Lane".to_string(),
            line2: String::new(),
            city: "Portland".to_string(),
            postal_code: "97201".to_string(),
            country: "US".to_string(),
            phone: "+1 (503) 555-0100".to_string(),
        }
    }

    #[test]
    fn test_login_empty_fields_produce_field_errors() {
        let form = LoginForm {
            email: String::new(),
            password: String::new(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "email"));
        assert!(errors.iter().any(|e| e.field == "password"));
    }

    #[test]
    fn test_login_invalid_email() {
        let form = LoginForm {
            email: "not-an-email".to_string(),
            password: "hunter2hunter2".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.iter().all(|e| e.field == "email"));
    }

    #[test]
    fn test_register_short_password() {
        let form = RegisterForm {
            email: "buyer@example.com".to_string(),
            password: "short".to_string(),
            name: "Sam".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "password"));
    }

    #[test]
    fn test_checkout_valid_form_passes() {
        assert!(checkout_form().validate().is_ok());
    }

    #[test]
    fn test_checkout_each_required_field() {
        for field in ["email", "name", "line1", "city", "postal_code", "country", "phone"] {
            let mut form = checkout_form();
            match field {
                "email" => form.email.clear(),
                "name" => form.name.clear(),
                "line1" => form.line1.clear(),
                "city" => form.city.clear(),
                "postal_code" => form.postal_code.clear(),
                "country" => form.country.clear(),
                "phone" => form.phone.clear(),
                _ => unreachable!(),
            }
            let errors = form.validate().unwrap_err();
            assert!(
                errors.iter().any(|e| e.field == field),
                "expected error for {field}"
            );
        }
    }

    #[test]
    fn test_checkout_whitespace_only_is_empty() {
        let mut form = checkout_form();
        form.city = "   ".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_checkout_bad_phone() {
        let mut form = checkout_form();
        form.phone = "call me".to_string();
        let errors = form.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "phone"));
    }

    #[test]
    fn test_profile_optional_phone() {
        let form = ProfileForm {
            name: "Sam".to_string(),
            phone: String::new(),
        };
        assert!(form.validate().is_ok());
        assert!(form.into_update().phone.is_none());
    }

    #[test]
    fn test_checkout_payload_trims_and_drops_empty_line2() {
        let mut form = checkout_form();
        form.line2 = "  ".to_string();
        let payload = form.into_payload("cart-9".to_string());
        assert_eq!(payload.cart_id, "cart-9");
        assert!(payload.shipping_address.line2.is_none());
    }
}
