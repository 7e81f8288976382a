use crate::error::validation::ValidationErrors;
use crate::model::course::{CreateCourseDto, UpdateCourseDto, VariationDto};
use crate::validator::char_len;

fn check_name(errors: &mut ValidationErrors, name: &str) {
    if !(2..=100).contains(&char_len(name)) {
        errors.add("curso", "Course name must be between 2 and 100 characters");
    }
}

fn check_duration(errors: &mut ValidationErrors, years: i32) {
    if !(1..=10).contains(&years) {
        errors.add("anos", "Duration must be an integer between 1 and 10");
    }
}

fn check_abbr(errors: &mut ValidationErrors, abbr: &str) {
    if !(2..=10).contains(&char_len(abbr)) {
        errors.add("abbr", "Abbreviation must be between 2 and 10 characters");
    }
}

fn check_variations(errors: &mut ValidationErrors, variations: &[String]) {
    if variations.iter().any(|v| v.trim().is_empty()) {
        errors.add("variacoes", "Each variation must be a non-empty string");
    }
}

pub fn validate_create(dto: &CreateCourseDto) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    check_name(&mut errors, dto.name.trim());
    check_duration(&mut errors, dto.duration_years);
    check_abbr(&mut errors, dto.abbr.trim());
    if let Some(variations) = &dto.variations {
        check_variations(&mut errors, variations);
    }

    errors.into_result()
}

pub fn validate_update(dto: &UpdateCourseDto) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Some(name) = &dto.name {
        check_name(&mut errors, name.trim());
    }
    if let Some(years) = dto.duration_years {
        check_duration(&mut errors, years);
    }
    if let Some(abbr) = &dto.abbr {
        check_abbr(&mut errors, abbr.trim());
    }
    if let Some(variations) = &dto.variations {
        check_variations(&mut errors, variations);
    }

    errors.into_result()
}

pub fn validate_variation(dto: &VariationDto) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if dto.variation.trim().is_empty() {
        errors.add("variacao", "Variation must be a non-empty string");
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_duration() {
        let dto = CreateCourseDto {
            name: "Engenharia".to_string(),
            duration_years: 11,
            abbr: "ENG".to_string(),
            variations: None,
        };

        let errors = validate_create(&dto).unwrap_err();
        assert_eq!(errors.fields(), vec!["anos"]);
    }

    #[test]
    fn accepts_a_well_formed_create() {
        let dto = CreateCourseDto {
            name: "Engenharia".to_string(),
            duration_years: 5,
            abbr: "eng".to_string(),
            variations: Some(vec!["Engenharia Civil".to_string()]),
        };

        assert!(validate_create(&dto).is_ok());
    }
}
