//! Base contract system

use taska_core::error::ValidationErrors;

/// Result of contract validation
pub type ValidationResult = Result<(), ValidationErrors>;

/// Base contract trait
pub trait Contract<T>: Send + Sync {
    /// Validate the entity
    fn validate(&self, entity: &T) -> ValidationResult;
}

/// Copy `validator` derive failures into a `ValidationErrors` collection
pub fn merge_derived(errors: &mut ValidationErrors, derived: validator::ValidationErrors) {
    for (field, field_errors) in derived.field_errors() {
        for error in field_errors {
            let message = match error.code.as_ref() {
                "length" => length_message(error),
                code => format!("is invalid ({})", code),
            };
            errors.add(camel_case(field), message);
        }
    }
}

fn length_message(error: &validator::ValidationError) -> String {
    let param = |name: &str| error.params.get(name).and_then(|v| v.as_u64());
    let len = error
        .params
        .get("value")
        .and_then(|v| v.as_str())
        .map(|s| s.chars().count() as u64);

    match (param("min"), param("max"), len) {
        (Some(min), _, Some(len)) if len < min => "can't be blank".to_string(),
        (_, Some(max), _) => format!("is too long (maximum is {} characters)", max),
        _ => "has an invalid length".to_string(),
    }
}

/// Field names are reported the way they travel on the wire
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("customer_id"), "customerId");
        assert_eq!(camel_case("name"), "name");
        assert_eq!(camel_case("presale_manager_id"), "presaleManagerId");
    }

    #[test]
    fn test_merge_derived_length() {
        let mut derived = validator::ValidationErrors::new();
        let mut error = validator::ValidationError::new("length");
        error.add_param("max".into(), &255);
        derived.add("customer_id", error);

        let mut errors = ValidationErrors::new();
        merge_derived(&mut errors, derived);

        assert_eq!(
            errors.get("customerId"),
            Some(&vec!["is too long (maximum is 255 characters)".to_string()])
        );
    }
}
