//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{
    EmailAddress, PasswordDigest, User, UserAccount, UserId, UserName, UserRole,
};

use super::diesel_error_mapping::{is_unique_violation, map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_error(error: diesel::result::Error, email: &EmailAddress) -> UserPersistenceError {
    if is_unique_violation(&error) {
        return UserPersistenceError::duplicate_email(email.as_ref());
    }
    map_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

fn row_to_account(row: UserRow) -> Result<UserAccount, UserPersistenceError> {
    let UserRow {
        id,
        name,
        email,
        password_hash,
        role,
    } = row;
    let corrupt = |err: crate::domain::UserValidationError| {
        UserPersistenceError::query(format!("stored user {id} is invalid: {err}"))
    };

    let user = User::new(
        UserId::from_uuid(id),
        UserName::new(name).map_err(corrupt)?,
        EmailAddress::new(email).map_err(corrupt)?,
        UserRole::new(role).map_err(corrupt)?,
    );
    Ok(UserAccount {
        user,
        password_digest: PasswordDigest::new(password_hash).map_err(corrupt)?,
    })
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, account: &UserAccount) -> Result<(), UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserPersistenceError::connection))?;

        let user = &account.user;
        let row = NewUserRow {
            id: *user.id().as_uuid(),
            name: user.name().as_ref(),
            email: user.email().as_ref(),
            password_hash: account.password_digest.as_str(),
            role: user.role().as_ref(),
        };

        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_error(err, user.email()))
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserAccount>, UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserPersistenceError::connection))?;

        let row = users::table
            .filter(users::email.eq(email.as_ref()))
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(|err| map_error(err, email))?;

        row.map(row_to_account).transpose()
    }
}

#[cfg(test)]
mod tests {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;
    use uuid::Uuid;

    use super::*;

    fn valid_row() -> UserRow {
        UserRow {
            id: Uuid::new_v4(),
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            password_hash: "$argon2id$v=19$m=8,t=1,p=1$c2FsdA$aGFzaA".to_owned(),
            role: "official".to_owned(),
        }
    }

    #[rstest]
    fn unique_violation_maps_to_duplicate_email() {
        let email = EmailAddress::new("ada@example.com").expect("email");
        let err = map_error(
            DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                Box::new("duplicate key value violates unique constraint".to_string()),
            ),
            &email,
        );
        assert_eq!(err, UserPersistenceError::duplicate_email("ada@example.com"));
    }

    #[rstest]
    fn row_converts_to_account() {
        let row = valid_row();
        let id = row.id;
        let account = row_to_account(row).expect("valid row");
        assert_eq!(account.user.id().as_uuid(), &id);
        assert_eq!(account.user.role().as_ref(), "official");
        assert!(account.password_digest.as_str().starts_with("$argon2id$"));
    }

    #[rstest]
    fn corrupt_row_is_a_query_error() {
        let row = UserRow {
            password_hash: String::new(),
            ..valid_row()
        };
        let err = row_to_account(row).expect_err("empty digest");
        assert!(matches!(err, UserPersistenceError::Query { .. }));
    }
}
