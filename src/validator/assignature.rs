use crate::error::validation::ValidationErrors;
use crate::model::assignature::{CreateAssignatureDto, UpdateAssignatureDto, ASSIGNATURE_TYPES};

fn check_type(errors: &mut ValidationErrors, assignature_type: &str) {
    if !ASSIGNATURE_TYPES.contains(&assignature_type) {
        errors.add("type", "Invalid type");
    }
}

pub fn validate_create(dto: &CreateAssignatureDto) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if dto.tag_name.trim().is_empty() {
        errors.add("tagName", "Tag name is required");
    }
    if let Some(assignature_type) = &dto.assignature_type {
        check_type(&mut errors, assignature_type);
    }
    if dto.description.trim().is_empty() {
        errors.add("description", "Description is required");
    }

    errors.into_result()
}

pub fn validate_update(dto: &UpdateAssignatureDto) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Some(tag_name) = &dto.tag_name {
        if tag_name.trim().is_empty() {
            errors.add("tagName", "Tag name is required");
        }
    }
    if let Some(assignature_type) = &dto.assignature_type {
        check_type(&mut errors, assignature_type);
    }
    if let Some(description) = &dto.description {
        if description.trim().is_empty() {
            errors.add("description", "Description is required");
        }
    }

    errors.into_result()
}

/// Validates the `type` filter on the listing endpoint.
pub fn validate_type_filter(assignature_type: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    check_type(&mut errors, assignature_type);
    errors.into_result()
}
