use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::tag::TagFactory;

use crate::data::tag::TagRepository;

mod lookups;
