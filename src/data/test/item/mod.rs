use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::item::{create_item, ItemFactory};

use crate::data::item::ItemRepository;
use crate::data::page::PageParams;
use crate::model::item::ItemListParams;

mod counters;
mod get_all;
