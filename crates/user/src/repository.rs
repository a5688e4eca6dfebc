use async_trait::async_trait;
use issuetrack_db::table::User as UserTable;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};
use ulid::Ulid;

use crate::{User, UserStore, password::hash_password};

#[derive(FromRow)]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub password: String,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        Self {
            id: value.id,
            email: value.email,
            password: value.password,
        }
    }
}

pub(crate) async fn find_by_email(
    pool: &SqlitePool,
    email: impl Into<String>,
) -> issuetrack_shared::Result<Option<UserRow>> {
    let statement = Query::select()
        .columns([UserTable::Id, UserTable::Email, UserTable::Password])
        .from(UserTable::Table)
        .and_where(Expr::col(UserTable::Email).eq(email.into()))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

/// Insert a user row. Returns `false` when the email is already taken.
pub(crate) async fn create(
    pool: &SqlitePool,
    id: String,
    email: String,
    password: String,
) -> issuetrack_shared::Result<bool> {
    let statement = Query::insert()
        .into_table(UserTable::Table)
        .columns([UserTable::Id, UserTable::Email, UserTable::Password])
        .values_panic([id.into(), email.into(), password.into()])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    match sqlx::query_with(&sql, values).execute(pool).await {
        Ok(_) => Ok(true),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// [`UserStore`] backed by the `user` table.
#[derive(Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn get_user_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        Ok(find_by_email(&self.pool, email).await?.map(User::from))
    }

    async fn create_user(&self, email: &str, password: &str) -> anyhow::Result<Option<User>> {
        let password = hash_password(password)?;
        let id = Ulid::new().to_string();

        if !create(&self.pool, id.to_owned(), email.to_owned(), password.to_owned()).await? {
            tracing::warn!(email, "Email already taken on insert");

            return Ok(None);
        }

        Ok(Some(User {
            id,
            email: email.to_owned(),
            password,
        }))
    }
}
