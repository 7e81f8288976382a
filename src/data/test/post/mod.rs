use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::person::create_person;
use test_utils::factory::post::{create_post, PostFactory};

use crate::data::page::PageParams;
use crate::data::post::PostRepository;
use crate::model::post::PostListParams;

mod counters;
mod get_all;
mod push_comment;
mod soft_delete;
