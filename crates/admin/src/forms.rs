//! Back-office form payloads and local validation.
//!
//! Every form is validated before any Platform API call; server 422 field
//! errors merge into the same `Vec<FieldError>` for inline display.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use bristle_core::{CategoryId, Discount, Email, StaffRole};

use crate::platform::FieldError;
use crate::platform::types::{ProductPayload, ProductStatus, StaffPayload};

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

/// Staff login form.
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

/// Product create/edit form. Numeric fields arrive as strings and are
/// parsed during validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub handle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category_id: String,
    pub price: String,
    pub stock: String,
    /// "none", "percentage", or "fixed".
    #[serde(default)]
    pub discount_kind: String,
    #[serde(default)]
    pub discount_value: String,
    pub status: String,
    /// Checkbox; present when checked.
    #[serde(default)]
    pub featured: Option<String>,
}

impl ProductForm {
    /// Validate and convert to the Platform API payload.
    ///
    /// Discount bounds are enforced here, before any network call:
    /// percentage must be within 0..=100, fixed must be non-negative.
    ///
    /// # Errors
    ///
    /// Returns field-level errors for inline display.
    pub fn validate(&self) -> Result<ProductPayload, Vec<FieldError>> {
        let mut errors = Vec::new();

        require(&mut errors, "name", &self.name);
        if require(&mut errors, "handle", &self.handle) && !is_valid_handle(self.handle.trim()) {
            errors.push(FieldError::new(
                "handle",
                "Use lowercase letters, digits, and hyphens only",
            ));
        }

        let price = parse_decimal(&mut errors, "price", &self.price, "Enter a price");
        if let Some(price) = price
            && price < Decimal::ZERO
        {
            errors.push(FieldError::new("price", "Price cannot be negative"));
        }

        let stock = if require(&mut errors, "stock", &self.stock) {
            match self.stock.trim().parse::<u32>() {
                Ok(stock) => Some(stock),
                Err(_) => {
                    errors.push(FieldError::new("stock", "Enter a whole number"));
                    None
                }
            }
        } else {
            None
        };

        let discount = self.parse_discount(&mut errors);

        let status = match ProductStatus::ALL
            .iter()
            .find(|s| s.as_str() == self.status)
        {
            Some(status) => Some(*status),
            None => {
                errors.push(FieldError::new("status", "Choose a status"));
                None
            }
        };

        let category_id = if self.category_id.trim().is_empty() {
            None
        } else {
            match self.category_id.trim().parse::<i64>() {
                Ok(id) => Some(CategoryId::new(id)),
                Err(_) => {
                    errors.push(FieldError::new("category_id", "Choose a category"));
                    None
                }
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        // All Nones produced errors above
        #[allow(clippy::unwrap_used)]
        Ok(ProductPayload {
            name: self.name.trim().to_string(),
            handle: self.handle.trim().to_string(),
            description: self.description.trim().to_string(),
            category_id,
            price: price.unwrap(),
            discount,
            stock: stock.unwrap(),
            status: status.unwrap(),
            featured: self.featured.is_some(),
        })
    }

    fn parse_discount(&self, errors: &mut Vec<FieldError>) -> Option<Discount> {
        match self.discount_kind.as_str() {
            "" | "none" => None,
            "percentage" => {
                let value = parse_decimal(
                    errors,
                    "discount_value",
                    &self.discount_value,
                    "Enter a percentage",
                )?;
                if !(Decimal::ZERO..=Decimal::from(100)).contains(&value) {
                    errors.push(FieldError::new(
                        "discount_value",
                        "Percentage must be between 0 and 100",
                    ));
                    return None;
                }
                Some(Discount::Percentage(value))
            }
            "fixed" => {
                let value = parse_decimal(
                    errors,
                    "discount_value",
                    &self.discount_value,
                    "Enter an amount",
                )?;
                if value < Decimal::ZERO {
                    errors.push(FieldError::new(
                        "discount_value",
                        "Amount cannot be negative",
                    ));
                    return None;
                }
                Some(Discount::Fixed(value))
            }
            _ => {
                errors.push(FieldError::new("discount_kind", "Choose a discount type"));
                None
            }
        }
    }
}

/// Staff create/edit form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaffForm {
    pub email: String,
    pub name: String,
    pub role: String,
}

impl StaffForm {
    /// Validate and convert to the Platform API payload.
    ///
    /// # Errors
    ///
    /// Returns field-level errors for inline display.
    pub fn validate(&self) -> Result<StaffPayload, Vec<FieldError>> {
        let mut errors = Vec::new();
        check_email(&mut errors, "email", &self.email);
        require(&mut errors, "name", &self.name);

        let role = match StaffRole::from_str(&self.role) {
            Ok(role) => Some(role),
            Err(_) => {
                errors.push(FieldError::new("role", "Choose a role"));
                None
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        #[allow(clippy::unwrap_used)]
        Ok(StaffPayload {
            email: self.email.trim().to_string(),
            name: self.name.trim().to_string(),
            role: role.unwrap(),
        })
    }
}

fn is_valid_handle(handle: &str) -> bool {
    !handle.is_empty()
        && handle
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn parse_decimal(
    errors: &mut Vec<FieldError>,
    field: &str,
    value: &str,
    empty_message: &str,
) -> Option<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(field, empty_message));
        return None;
    }
    match Decimal::from_str(trimmed) {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(FieldError::new(field, "Enter a valid number"));
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product_form() -> ProductForm {
        ProductForm {
            name: "Beard Oil".to_string(),
            handle: "beard-oil".to_string(),
            description: "Cedar and citrus.".to_string(),
            category_id: "3".to_string(),
            price: "24.00".to_string(),
            stock: "40".to_string(),
            discount_kind: "none".to_string(),
            discount_value: String::new(),
            status: "active".to_string(),
            featured: Some("on".to_string()),
        }
    }

    #[test]
    fn test_valid_product_form() {
        let payload = product_form().validate().unwrap();
        assert_eq!(payload.handle, "beard-oil");
        assert_eq!(payload.stock, 40);
        assert!(payload.featured);
        assert!(payload.discount.is_none());
    }

    #[test]
    fn test_product_required_fields() {
        for field in ["name", "handle", "price", "stock"] {
            let mut form = product_form();
            match field {
                "name" => form.name.clear(),
                "handle" => form.handle.clear(),
                "price" => form.price.clear(),
                "stock" => form.stock.clear(),
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
    fn test_product_bad_handle() {
        let mut form = product_form();
        form.handle = "Beard Oil!".to_string();
        let errors = form.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "handle"));
    }

    #[test]
    fn test_discount_percentage_out_of_range() {
        let mut form = product_form();
        form.discount_kind = "percentage".to_string();
        form.discount_value = "120".to_string();
        let errors = form.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "discount_value"));
    }

    #[test]
    fn test_discount_percentage_in_range() {
        let mut form = product_form();
        form.discount_kind = "percentage".to_string();
        form.discount_value = "15".to_string();
        let payload = form.validate().unwrap();
        assert!(matches!(payload.discount, Some(Discount::Percentage(_))));
    }

    #[test]
    fn test_discount_fixed_negative() {
        let mut form = product_form();
        form.discount_kind = "fixed".to_string();
        form.discount_value = "-5".to_string();
        let errors = form.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "discount_value"));
    }

    #[test]
    fn test_staff_form_role_parse() {
        let form = StaffForm {
            email: "ops@bristle.shop".to_string(),
            name: "Sam".to_string(),
            role: "manager".to_string(),
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.role, StaffRole::Manager);

        let bad = StaffForm {
            role: "wizard".to_string(),
            ..form
        };
        let errors = bad.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "role"));
    }

    #[test]
    fn test_login_empty_is_local_error() {
        let form = LoginForm {
            email: String::new(),
            password: String::new(),
        };
        assert_eq!(form.validate().unwrap_err().len(), 2);
    }
}
