use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::comment::CommentRepository, model::comment::CreateCommentParam};

/// Tests creating and listing comments.
///
/// Verifies the optional announcement filter.
///
/// Expected: both comments unfiltered, one per announcement when filtered
#[tokio::test]
async fn get_all_filters_by_announcement() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_announcement_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, first) = factory::helpers::create_announcement_with_commenter(db).await?;
    let second = factory::create_announcement(db).await?;

    let repo = CommentRepository::new(db);
    let created = repo
        .create(CreateCommentParam {
            announcement_id: first.id,
            user_id: user.id,
            name: "Fan".to_string(),
            content: "Go CSE!".to_string(),
        })
        .await?;
    factory::create_comment(db, second.id, user.id, "Go ECE!").await?;

    assert_eq!(repo.get_all(None).await?.len(), 2);

    let filtered = repo.get_all(Some(first.id)).await?;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, created.id);
    assert_eq!(filtered[0].content, "Go CSE!");

    Ok(())
}

/// Tests deleting a comment.
///
/// Expected: true once, then false
#[tokio::test]
async fn delete_reports_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_announcement_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, announcement) = factory::helpers::create_announcement_with_commenter(db).await?;
    let comment = factory::create_comment(db, announcement.id, user.id, "Nice").await?;

    let repo = CommentRepository::new(db);
    assert!(repo.delete(comment.id).await?);
    assert!(!repo.delete(comment.id).await?);

    Ok(())
}
