use chrono::Utc;
use entity::sea_orm_active_enums::Role;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{error::Error, model::form::UserForm};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user, `date_joined` is set to now
    pub async fn create(&self, form: UserForm) -> Result<entity::campus_user::Model, Error> {
        form.validate()?;

        let user = entity::campus_user::ActiveModel {
            username: ActiveValue::Set(form.username),
            first_name: ActiveValue::Set(form.first_name),
            last_name: ActiveValue::Set(form.last_name),
            email: ActiveValue::Set(form.email),
            is_staff: ActiveValue::Set(form.is_staff),
            is_active: ActiveValue::Set(form.is_active),
            role: ActiveValue::Set(form.role),
            department: ActiveValue::Set(form.department),
            date_joined: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(self.db).await?)
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::campus_user::Model>, Error> {
        Ok(entity::prelude::CampusUser::find_by_id(user_id)
            .one(self.db)
            .await?)
    }

    pub async fn get_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::campus_user::Model>, Error> {
        Ok(entity::prelude::CampusUser::find()
            .filter(entity::campus_user::Column::Username.eq(username))
            .one(self.db)
            .await?)
    }

    /// Gets all users ordered by ID
    pub async fn list(&self) -> Result<Vec<entity::campus_user::Model>, Error> {
        Ok(entity::prelude::CampusUser::find()
            .order_by_asc(entity::campus_user::Column::Id)
            .all(self.db)
            .await?)
    }

    pub async fn list_by_role(&self, role: Role) -> Result<Vec<entity::campus_user::Model>, Error> {
        Ok(entity::prelude::CampusUser::find()
            .filter(entity::campus_user::Column::Role.eq(role))
            .order_by_asc(entity::campus_user::Column::Id)
            .all(self.db)
            .await?)
    }

    /// Overwrites every editable field of a user
    ///
    /// # Returns
    /// - `Ok(Some(user))` - The updated user
    /// - `Ok(None)` - No user with that ID
    pub async fn update(
        &self,
        user_id: i32,
        form: UserForm,
    ) -> Result<Option<entity::campus_user::Model>, Error> {
        form.validate()?;

        let user = match entity::prelude::CampusUser::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.username = ActiveValue::Set(form.username);
        user_am.first_name = ActiveValue::Set(form.first_name);
        user_am.last_name = ActiveValue::Set(form.last_name);
        user_am.email = ActiveValue::Set(form.email);
        user_am.is_staff = ActiveValue::Set(form.is_staff);
        user_am.is_active = ActiveValue::Set(form.is_active);
        user_am.role = ActiveValue::Set(form.role);
        user_am.department = ActiveValue::Set(form.department);

        Ok(Some(user_am.update(self.db).await?))
    }

    /// Deletes a user
    ///
    /// Events created by the user and the user's registrations, feedback and coordinator
    /// rows are removed by the database. Returns OK regardless of the user existing, to
    /// confirm the deletion check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, Error> {
        Ok(entity::prelude::CampusUser::delete_by_id(user_id)
            .exec(self.db)
            .await?)
    }
}
