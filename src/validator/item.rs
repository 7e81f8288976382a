use crate::error::validation::ValidationErrors;
use crate::model::item::{CreateItemDto, UpdateItemDto, ITEM_TYPES};
use crate::validator::is_valid_url;

fn check_type(errors: &mut ValidationErrors, item_type: &str) {
    if !ITEM_TYPES.contains(&item_type) {
        errors.add("type", "Invalid type");
    }
}

fn check_link(errors: &mut ValidationErrors, field: &str, value: &str) {
    if !is_valid_url(value) {
        errors.add(field, "Invalid URL format");
    }
}

pub fn validate_create(dto: &CreateItemDto) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if dto.tag_name.trim().is_empty() {
        errors.add("tagName", "Tag name is required");
    }
    if let Some(item_type) = &dto.item_type {
        check_type(&mut errors, item_type);
    }
    if dto.description.trim().is_empty() {
        errors.add("description", "Description is required");
    }
    if let Some(repo) = &dto.repo {
        check_link(&mut errors, "repo", repo.trim());
    }
    if let Some(deploy) = &dto.deploy {
        check_link(&mut errors, "deploy", deploy.trim());
    }

    errors.into_result()
}

pub fn validate_update(dto: &UpdateItemDto) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Some(tag_name) = &dto.tag_name {
        if tag_name.trim().is_empty() {
            errors.add("tagName", "Tag name is required");
        }
    }
    if let Some(item_type) = &dto.item_type {
        check_type(&mut errors, item_type);
    }
    if let Some(description) = &dto.description {
        if description.trim().is_empty() {
            errors.add("description", "Description is required");
        }
    }
    if let Some(repo) = &dto.repo {
        check_link(&mut errors, "repo", repo.trim());
    }
    if let Some(deploy) = &dto.deploy {
        check_link(&mut errors, "deploy", deploy.trim());
    }

    errors.into_result()
}

/// Validates the `type` filter on the listing endpoint.
pub fn validate_type_filter(item_type: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    check_type(&mut errors, item_type);
    errors.into_result()
}
