use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::course::CourseFactory;

use crate::data::course::CourseRepository;
use crate::data::page::PageParams;
use crate::model::course::CourseListParams;
use crate::model::from_json;

mod get_all;
mod variations;
