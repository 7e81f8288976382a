use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::storage::{create_storage, StorageFactory};

use crate::data::page::PageParams;
use crate::data::storage::StorageRepository;
use crate::model::storage::StorageListParams;

mod get_all;
mod soft_delete;
