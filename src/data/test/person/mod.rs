use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

use crate::data::page::PageParams;
use crate::data::person::PersonRepository;
use crate::model::person::{NewPerson, PersonListParams, SocialLinks, UpdatePersonDto};

mod get_all;
mod insert;
mod update;

fn new_person(username: &str, email: &str) -> NewPerson {
    NewPerson {
        username: username.to_string(),
        first_name: "Test".to_string(),
        last_name: "Person".to_string(),
        email: email.to_string(),
        roles: vec!["user".to_string()],
        hex: "#3498db".to_string(),
        password_hash: "test-hash".to_string(),
        bio: String::new(),
        social: SocialLinks::default(),
        avatar_id: None,
        cover_id: None,
        newsletter: false,
    }
}
