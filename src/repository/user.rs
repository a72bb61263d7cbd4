use crate::model::response::ListParams;
use crate::model::schema::users;
use crate::model::user::{NewUser, User};
use crate::repository::database::{Database, RepositoryError};
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;

impl Database {
    pub async fn list_active_users(&self, params: ListParams) -> Result<Vec<User>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let rows = users::table
            .filter(users::is_active.eq(true))
            .order(users::id.asc())
            .offset(params.offset())
            .limit(params.limit())
            .select(User::as_select())
            .load(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn find_user(&self, user_id: i32) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let user = users::table
            .find(user_id)
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        Ok(user)
    }

    pub async fn find_user_by_email(&self, user_email: &str) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let user = users::table
            .filter(users::email.eq(user_email))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        Ok(user)
    }

    pub async fn find_user_by_username(
        &self,
        user_name: &str,
    ) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let user = users::table
            .filter(users::username.eq(user_name))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        Ok(user)
    }

    pub async fn insert_user(&self, new_user: &NewUser) -> Result<User, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let user = diesel::insert_into(users::table)
            .values(new_user)
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await?;
        Ok(user)
    }

    pub async fn save_user(&self, user: &User) -> Result<User, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let user = diesel::update(users::table.find(user.id))
            .set(user)
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await?;
        Ok(user)
    }
}
