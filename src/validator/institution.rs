use crate::error::validation::ValidationErrors;
use crate::model::institution::{CreateInstitutionDto, UpdateInstitutionDto, DOMAINS};
use crate::validator::{char_len, is_valid_email};

/// Accepts the formatted `NN.NNN.NNN/NNNN-NN` form or a bare 14-digit string.
fn is_valid_tax_id(value: &str) -> bool {
    if value.len() == 14 && value.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    let bytes = value.as_bytes();
    if bytes.len() != 18 {
        return false;
    }
    value.char_indices().all(|(i, c)| match i {
        2 | 6 => c == '.',
        10 => c == '/',
        15 => c == '-',
        _ => c.is_ascii_digit(),
    })
}

fn check_domains(errors: &mut ValidationErrors, domains: &[String]) {
    for domain in domains {
        if !DOMAINS.contains(&domain.as_str()) {
            errors.add("dominio", "Invalid domain");
        }
    }
}

pub fn validate_create(dto: &CreateInstitutionDto) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if !(2..=200).contains(&char_len(dto.legal_name.trim())) {
        errors.add(
            "razaoSocial",
            "Legal name must be between 2 and 200 characters",
        );
    }
    if dto.trade_name.trim().is_empty() {
        errors.add("nomeFantasia", "Trade name is required");
    }
    if dto.abbr.trim().is_empty() {
        errors.add("abbr", "Abbreviation is required");
    }
    if !is_valid_email(dto.email.trim()) {
        errors.add("email", "Invalid email format");
    }
    if let Some(domains) = &dto.domains {
        check_domains(&mut errors, domains);
    }
    if !is_valid_tax_id(dto.tax_id.trim()) {
        errors.add("CNPJ", "Invalid CNPJ format");
    }

    errors.into_result()
}

pub fn validate_update(dto: &UpdateInstitutionDto) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Some(legal_name) = &dto.legal_name {
        if !(2..=200).contains(&char_len(legal_name.trim())) {
            errors.add(
                "razaoSocial",
                "Legal name must be between 2 and 200 characters",
            );
        }
    }
    if let Some(trade_name) = &dto.trade_name {
        if trade_name.trim().is_empty() {
            errors.add("nomeFantasia", "Trade name is required");
        }
    }
    if let Some(email) = &dto.email {
        if !is_valid_email(email.trim()) {
            errors.add("email", "Invalid email format");
        }
    }
    if let Some(domains) = &dto.domains {
        check_domains(&mut errors, domains);
    }
    if let Some(tax_id) = &dto.tax_id {
        if !is_valid_tax_id(tax_id.trim()) {
            errors.add("CNPJ", "Invalid CNPJ format");
        }
    }

    errors.into_result()
}

/// Validates the `dominio` path/query parameter against the closed set.
pub fn validate_domain(domain: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if !DOMAINS.contains(&domain) {
        errors.add("dominio", "Invalid domain");
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tax_id_accepts_both_canonical_forms() {
        assert!(is_valid_tax_id("12345678000195"));
        assert!(is_valid_tax_id("12.345.678/0001-95"));
        assert!(!is_valid_tax_id("12.345.678/0001-9"));
        assert!(!is_valid_tax_id("1234567800019"));
        assert!(!is_valid_tax_id("12-345-678/0001.95"));
    }
}
