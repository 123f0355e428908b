use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{error::Error, model::form::RegistrationForm};

pub struct RegistrationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RegistrationRepository<'a, C> {
    /// Creates a new instance of [`RegistrationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Registers a user for an event
    ///
    /// `registered_at` is set to now and `attended` defaults to `false`. A user may register
    /// for the same event more than once, and neither the event's registration deadline nor
    /// its target audience is checked.
    pub async fn create(
        &self,
        form: RegistrationForm,
    ) -> Result<entity::registration::Model, Error> {
        let registration = entity::registration::ActiveModel {
            event_id: ActiveValue::Set(form.event_id),
            user_id: ActiveValue::Set(form.user_id),
            registered_at: ActiveValue::Set(Utc::now().naive_utc()),
            attended: ActiveValue::Set(form.attended.unwrap_or(false)),
            ..Default::default()
        };

        Ok(registration.insert(self.db).await?)
    }

    pub async fn get(
        &self,
        registration_id: i32,
    ) -> Result<Option<entity::registration::Model>, Error> {
        Ok(entity::prelude::Registration::find_by_id(registration_id)
            .one(self.db)
            .await?)
    }

    pub async fn list(&self) -> Result<Vec<entity::registration::Model>, Error> {
        Ok(entity::prelude::Registration::find()
            .order_by_asc(entity::registration::Column::Id)
            .all(self.db)
            .await?)
    }

    pub async fn list_by_event_id(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::registration::Model>, Error> {
        Ok(entity::prelude::Registration::find()
            .filter(entity::registration::Column::EventId.eq(event_id))
            .order_by_asc(entity::registration::Column::Id)
            .all(self.db)
            .await?)
    }

    pub async fn list_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::registration::Model>, Error> {
        Ok(entity::prelude::Registration::find()
            .filter(entity::registration::Column::UserId.eq(user_id))
            .order_by_asc(entity::registration::Column::Id)
            .all(self.db)
            .await?)
    }

    /// Overwrites event and user, and attendance when given
    ///
    /// Returns `None` if the registration does not exist.
    pub async fn update(
        &self,
        registration_id: i32,
        form: RegistrationForm,
    ) -> Result<Option<entity::registration::Model>, Error> {
        let registration = match entity::prelude::Registration::find_by_id(registration_id)
            .one(self.db)
            .await?
        {
            Some(registration) => registration,
            None => return Ok(None),
        };

        let mut registration_am = registration.into_active_model();
        registration_am.event_id = ActiveValue::Set(form.event_id);
        registration_am.user_id = ActiveValue::Set(form.user_id);
        if let Some(attended) = form.attended {
            registration_am.attended = ActiveValue::Set(attended);
        }

        Ok(Some(registration_am.update(self.db).await?))
    }

    /// Marks whether the user turned up, returns `None` if the registration does not exist
    pub async fn set_attended(
        &self,
        registration_id: i32,
        attended: bool,
    ) -> Result<Option<entity::registration::Model>, Error> {
        let registration = match entity::prelude::Registration::find_by_id(registration_id)
            .one(self.db)
            .await?
        {
            Some(registration) => registration,
            None => return Ok(None),
        };

        let mut registration_am = registration.into_active_model();
        registration_am.attended = ActiveValue::Set(attended);

        Ok(Some(registration_am.update(self.db).await?))
    }

    pub async fn count_by_event_id(&self, event_id: i32) -> Result<u64, Error> {
        Ok(entity::prelude::Registration::find()
            .filter(entity::registration::Column::EventId.eq(event_id))
            .count(self.db)
            .await?)
    }

    pub async fn count_attended_by_event_id(&self, event_id: i32) -> Result<u64, Error> {
        Ok(entity::prelude::Registration::find()
            .filter(entity::registration::Column::EventId.eq(event_id))
            .filter(entity::registration::Column::Attended.eq(true))
            .count(self.db)
            .await?)
    }

    pub async fn delete(&self, registration_id: i32) -> Result<DeleteResult, Error> {
        Ok(entity::prelude::Registration::delete_by_id(registration_id)
            .exec(self.db)
            .await?)
    }
}
