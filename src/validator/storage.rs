use crate::error::validation::ValidationErrors;
use crate::model::storage::{CreateStorageDto, UpdateStorageDto};
use crate::validator::{is_valid_filename, is_valid_url};

fn check_url(errors: &mut ValidationErrors, url: &str) {
    if !is_valid_url(url) {
        errors.add("url", "Invalid URL format");
    }
}

fn check_filename(errors: &mut ValidationErrors, filename: &str) {
    if !is_valid_filename(filename) {
        errors.add("filename", "Filename contains invalid characters");
    }
}

pub fn validate_create(dto: &CreateStorageDto) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    check_url(&mut errors, dto.url.trim());
    check_filename(&mut errors, dto.filename.trim());

    errors.into_result()
}

pub fn validate_update(dto: &UpdateStorageDto) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Some(url) = &dto.url {
        check_url(&mut errors, url.trim());
    }
    if let Some(filename) = &dto.filename {
        check_filename(&mut errors, filename.trim());
    }

    errors.into_result()
}
