pub use super::assignature::Entity as Assignature;
pub use super::course::Entity as Course;
pub use super::institution::Entity as Institution;
pub use super::item::Entity as Item;
pub use super::person::Entity as Person;
pub use super::post::Entity as Post;
pub use super::storage::Entity as Storage;
pub use super::tag::Entity as Tag;
