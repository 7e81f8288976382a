use super::*;
use crate::model::from_json;

/// Comment ids append in call order.
#[tokio::test]
async fn appends_comment_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_person(db).await?;
    let post = create_post(db, author.id).await?;

    let repo = PostRepository::new(db);
    repo.push_comment(post.id, 101).await?;
    let updated = repo.push_comment(post.id, 102).await?.unwrap();

    let comments: Vec<i64> = from_json(updated.comments);
    assert_eq!(comments, vec![101, 102]);

    Ok(())
}
