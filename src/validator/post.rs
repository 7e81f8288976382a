use crate::error::validation::ValidationErrors;
use crate::model::post::{CreatePostDto, UpdatePostDto};
use crate::validator::char_len;

fn check_title(errors: &mut ValidationErrors, title: &str) {
    if !(5..=200).contains(&char_len(title)) {
        errors.add("title", "Title must be between 5 and 200 characters");
    }
}

fn check_content(errors: &mut ValidationErrors, content: &str) {
    if char_len(content) < 10 {
        errors.add("content", "Content must be at least 10 characters long");
    }
}

pub fn validate_create(dto: &CreatePostDto) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    check_title(&mut errors, dto.title.trim());
    check_content(&mut errors, dto.content.trim());
    if dto.author_id <= 0 {
        errors.add("authorId", "Invalid author ID");
    }

    errors.into_result()
}

pub fn validate_update(dto: &UpdatePostDto) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Some(title) = &dto.title {
        check_title(&mut errors, title.trim());
    }
    if let Some(content) = &dto.content {
        check_content(&mut errors, content.trim());
    }

    errors.into_result()
}
