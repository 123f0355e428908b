use chrono::Utc;
use entity::sea_orm_active_enums::EventStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::{error::Error, model::form::EventForm};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    /// Creates a new instance of [`EventRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new event
    ///
    /// `status` falls back to [`EventStatus::Draft`], `is_registration_required` to `true` and
    /// `created_at` is set to now. Neither the datetimes nor the venue are checked for
    /// overlap with other events.
    pub async fn create(&self, form: EventForm) -> Result<entity::event::Model, Error> {
        form.validate()?;

        let event = entity::event::ActiveModel {
            title: ActiveValue::Set(form.title),
            description: ActiveValue::Set(form.description),
            event_type: ActiveValue::Set(form.event_type),
            status: ActiveValue::Set(form.status.unwrap_or_default()),
            start_datetime: ActiveValue::Set(form.start_datetime),
            end_datetime: ActiveValue::Set(form.end_datetime),
            duration_minutes: ActiveValue::Set(form.duration_minutes),
            organizing_department: ActiveValue::Set(form.organizing_department),
            created_by: ActiveValue::Set(form.created_by),
            venue_id: ActiveValue::Set(form.venue_id),
            is_registration_required: ActiveValue::Set(
                form.is_registration_required.unwrap_or(true),
            ),
            registration_deadline: ActiveValue::Set(form.registration_deadline),
            target_audience: ActiveValue::Set(form.target_audience),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(event.insert(self.db).await?)
    }

    pub async fn get(&self, event_id: i32) -> Result<Option<entity::event::Model>, Error> {
        Ok(entity::prelude::Event::find_by_id(event_id)
            .one(self.db)
            .await?)
    }

    /// Gets all events ordered by ID
    pub async fn list(&self) -> Result<Vec<entity::event::Model>, Error> {
        Ok(entity::prelude::Event::find()
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?)
    }

    pub async fn list_by_status(
        &self,
        status: EventStatus,
    ) -> Result<Vec<entity::event::Model>, Error> {
        Ok(entity::prelude::Event::find()
            .filter(entity::event::Column::Status.eq(status))
            .order_by_asc(entity::event::Column::StartDatetime)
            .all(self.db)
            .await?)
    }

    pub async fn list_by_creator(&self, user_id: i32) -> Result<Vec<entity::event::Model>, Error> {
        Ok(entity::prelude::Event::find()
            .filter(entity::event::Column::CreatedBy.eq(user_id))
            .order_by_asc(entity::event::Column::StartDatetime)
            .all(self.db)
            .await?)
    }

    pub async fn list_by_venue(&self, venue_id: i32) -> Result<Vec<entity::event::Model>, Error> {
        Ok(entity::prelude::Event::find()
            .filter(entity::event::Column::VenueId.eq(venue_id))
            .order_by_asc(entity::event::Column::StartDatetime)
            .all(self.db)
            .await?)
    }

    /// Gets the events a user coordinates
    pub async fn list_coordinated_by(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::event::Model>, Error> {
        Ok(entity::prelude::Event::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::event::Relation::EventCoordinator.def(),
            )
            .filter(entity::event_coordinator::Column::UserId.eq(user_id))
            .order_by_asc(entity::event::Column::StartDatetime)
            .all(self.db)
            .await?)
    }

    /// Overwrites every editable column, returns `None` if the event does not exist
    ///
    /// A `None` status or registration flag in the form keeps the stored value.
    pub async fn update(
        &self,
        event_id: i32,
        form: EventForm,
    ) -> Result<Option<entity::event::Model>, Error> {
        form.validate()?;

        let event = match entity::prelude::Event::find_by_id(event_id)
            .one(self.db)
            .await?
        {
            Some(event) => event,
            None => return Ok(None),
        };

        let status = form.status.unwrap_or(event.status);
        let is_registration_required = form
            .is_registration_required
            .unwrap_or(event.is_registration_required);

        let mut event_am = event.into_active_model();
        event_am.title = ActiveValue::Set(form.title);
        event_am.description = ActiveValue::Set(form.description);
        event_am.event_type = ActiveValue::Set(form.event_type);
        event_am.status = ActiveValue::Set(status);
        event_am.start_datetime = ActiveValue::Set(form.start_datetime);
        event_am.end_datetime = ActiveValue::Set(form.end_datetime);
        event_am.duration_minutes = ActiveValue::Set(form.duration_minutes);
        event_am.organizing_department = ActiveValue::Set(form.organizing_department);
        event_am.created_by = ActiveValue::Set(form.created_by);
        event_am.venue_id = ActiveValue::Set(form.venue_id);
        event_am.is_registration_required = ActiveValue::Set(is_registration_required);
        event_am.registration_deadline = ActiveValue::Set(form.registration_deadline);
        event_am.target_audience = ActiveValue::Set(form.target_audience);

        Ok(Some(event_am.update(self.db).await?))
    }

    /// Sets the status without consulting the approval workflow
    ///
    /// See [`crate::server::service::event::EventService::transition_status`] for the guarded
    /// variant. Returns `None` if the event does not exist.
    pub async fn set_status(
        &self,
        event_id: i32,
        status: EventStatus,
    ) -> Result<Option<entity::event::Model>, Error> {
        let event = match entity::prelude::Event::find_by_id(event_id)
            .one(self.db)
            .await?
        {
            Some(event) => event,
            None => return Ok(None),
        };

        let mut event_am = event.into_active_model();
        event_am.status = ActiveValue::Set(status);

        Ok(Some(event_am.update(self.db).await?))
    }

    /// Deletes an event
    ///
    /// Coordinator links, resource requests, registrations, feedback and the success report
    /// are removed with it.
    pub async fn delete(&self, event_id: i32) -> Result<DeleteResult, Error> {
        Ok(entity::prelude::Event::delete_by_id(event_id)
            .exec(self.db)
            .await?)
    }

    /// Links a coordinator to an event, any role is accepted
    pub async fn add_coordinator(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<entity::event_coordinator::Model, Error> {
        let coordinator = entity::event_coordinator::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
        };

        Ok(entity::prelude::EventCoordinator::insert(coordinator)
            .exec_with_returning(self.db)
            .await?)
    }

    pub async fn remove_coordinator(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<DeleteResult, Error> {
        Ok(
            entity::prelude::EventCoordinator::delete_by_id((event_id, user_id))
                .exec(self.db)
                .await?,
        )
    }

    /// Gets the users coordinating an event ordered by user ID
    pub async fn get_coordinators(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::campus_user::Model>, Error> {
        Ok(entity::prelude::CampusUser::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::campus_user::Relation::EventCoordinator.def(),
            )
            .filter(entity::event_coordinator::Column::EventId.eq(event_id))
            .order_by_asc(entity::campus_user::Column::Id)
            .all(self.db)
            .await?)
    }
}
