use super::*;

fn tokens() -> TokenService {
    TokenService::new("guard-test-secret", Duration::hours(1))
}

/// Tests an admin token against the admin permission.
///
/// Expected: Ok(User) with role Admin
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let admin = factory::create_admin(db).await?;
    let bearer = BearerToken(Some(tokens.issue(admin.id)?));

    let user = AuthGuard::new(db, &tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.id, admin.id);
    assert_eq!(user.role, UserRole::Admin);

    Ok(())
}

/// Tests a public user's token against the admin permission.
///
/// Expected: Err(AuthError::AccessDenied) naming the user
#[tokio::test]
async fn denies_admin_access_to_public_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let fan = factory::create_user(db).await?;
    let bearer = BearerToken(Some(tokens.issue(fan.id)?));

    let result = AuthGuard::new(db, &tokens, &bearer)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, fan.id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests an admin token against the public user permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_public_access_to_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let admin = factory::create_admin(db).await?;
    let bearer = BearerToken(Some(tokens.issue(admin.id)?));

    let result = AuthGuard::new(db, &tokens, &bearer)
        .require(&[Permission::PublicUser])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests an empty permission list.
///
/// Expected: any authenticated user passes
#[tokio::test]
async fn empty_permissions_require_only_authentication() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let fan = factory::create_user(db).await?;
    let bearer = BearerToken(Some(tokens.issue(fan.id)?));

    let user = AuthGuard::new(db, &tokens, &bearer).require(&[]).await?;

    assert_eq!(user.id, fan.id);

    Ok(())
}

/// Tests a request without a bearer token.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn denies_access_without_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let bearer = BearerToken(None);

    let result = AuthGuard::new(db, &tokens, &bearer).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn denies_access_with_foreign_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let admin = factory::create_admin(db).await?;
    let foreign = TokenService::new("someone-else", Duration::hours(1));
    let bearer = BearerToken(Some(foreign.issue(admin.id)?));

    let result = AuthGuard::new(db, &tokens, &bearer)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token for a user that no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_access_when_user_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let bearer = BearerToken(Some(tokens.issue(999)?));

    let result = AuthGuard::new(db, &tokens, &bearer).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(999)))
    ));

    Ok(())
}
