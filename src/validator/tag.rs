use crate::error::validation::ValidationErrors;
use crate::model::tag::{CreateTagDto, UpdateTagDto};
use crate::validator::{char_len, is_valid_hex_color};

fn is_valid_tag_name(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_'))
}

fn check_tag_name(errors: &mut ValidationErrors, tag_name: &str) {
    if !(2..=50).contains(&char_len(tag_name)) {
        errors.add("tagName", "Tag name must be between 2 and 50 characters");
    }
    if !is_valid_tag_name(tag_name) {
        errors.add(
            "tagName",
            "Tag name can only contain letters, numbers, spaces, hyphens and underscores",
        );
    }
}

fn check_description(errors: &mut ValidationErrors, description: &str) {
    if !(10..=500).contains(&char_len(description)) {
        errors.add(
            "description",
            "Description must be between 10 and 500 characters",
        );
    }
}

fn check_color(errors: &mut ValidationErrors, color: &str) {
    if !is_valid_hex_color(color) {
        errors.add("color", "Invalid hex color format");
    }
}

pub fn validate_create(dto: &CreateTagDto) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    check_tag_name(&mut errors, dto.tag_name.trim());
    check_description(&mut errors, dto.description.trim());
    check_color(&mut errors, dto.color.trim());

    errors.into_result()
}

pub fn validate_update(dto: &UpdateTagDto) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Some(tag_name) = &dto.tag_name {
        check_tag_name(&mut errors, tag_name.trim());
    }
    if let Some(description) = &dto.description {
        check_description(&mut errors, description.trim());
    }
    if let Some(color) = &dto.color {
        check_color(&mut errors, color.trim());
    }

    errors.into_result()
}

/// Validates the `color` path/query parameter.
pub fn validate_color(color: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    check_color(&mut errors, color);
    errors.into_result()
}
