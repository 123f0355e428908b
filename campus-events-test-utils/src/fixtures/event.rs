use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{EventStatus, EventType, TargetAudience};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{
        test_event_end, test_event_start, TEST_DEPARTMENT, TEST_EVENT_DURATION_MINUTES,
        TEST_EVENT_TITLE,
    },
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn event(&self) -> EventFixtures<'_> {
        EventFixtures { setup: self }
    }
}

pub struct EventFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> EventFixtures<'a> {
    /// Insert a DRAFT workshop in the standard fixture time window.
    pub async fn insert_event(
        &self,
        created_by: i32,
        venue_id: Option<i32>,
    ) -> Result<entity::event::Model, TestError> {
        self.insert_event_at(created_by, venue_id, test_event_start(), test_event_end())
            .await
    }

    pub async fn insert_event_at(
        &self,
        created_by: i32,
        venue_id: Option<i32>,
        start_datetime: NaiveDateTime,
        end_datetime: NaiveDateTime,
    ) -> Result<entity::event::Model, TestError> {
        Ok(
            entity::prelude::Event::insert(entity::event::ActiveModel {
                title: ActiveValue::Set(TEST_EVENT_TITLE.to_string()),
                description: ActiveValue::Set("Annual technology festival".to_string()),
                event_type: ActiveValue::Set(EventType::Workshop),
                status: ActiveValue::Set(EventStatus::Draft),
                start_datetime: ActiveValue::Set(start_datetime),
                end_datetime: ActiveValue::Set(end_datetime),
                duration_minutes: ActiveValue::Set(TEST_EVENT_DURATION_MINUTES),
                organizing_department: ActiveValue::Set(TEST_DEPARTMENT.to_string()),
                created_by: ActiveValue::Set(created_by),
                venue_id: ActiveValue::Set(venue_id),
                is_registration_required: ActiveValue::Set(true),
                registration_deadline: ActiveValue::Set(None),
                target_audience: ActiveValue::Set(TargetAudience::All),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_coordinator(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<entity::event_coordinator::Model, TestError> {
        Ok(
            entity::prelude::EventCoordinator::insert(entity::event_coordinator::ActiveModel {
                event_id: ActiveValue::Set(event_id),
                user_id: ActiveValue::Set(user_id),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_resource_request(
        &self,
        event_id: i32,
        resource_id: i32,
        quantity_needed: i32,
    ) -> Result<entity::event_resource_request::Model, TestError> {
        Ok(entity::prelude::EventResourceRequest::insert(
            entity::event_resource_request::ActiveModel {
                event_id: ActiveValue::Set(event_id),
                resource_id: ActiveValue::Set(resource_id),
                quantity_needed: ActiveValue::Set(quantity_needed),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_registration(
        &self,
        event_id: i32,
        user_id: i32,
        attended: bool,
    ) -> Result<entity::registration::Model, TestError> {
        Ok(
            entity::prelude::Registration::insert(entity::registration::ActiveModel {
                event_id: ActiveValue::Set(event_id),
                user_id: ActiveValue::Set(user_id),
                registered_at: ActiveValue::Set(Utc::now().naive_utc()),
                attended: ActiveValue::Set(attended),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_feedback(
        &self,
        event_id: i32,
        user_id: i32,
        rating: i32,
    ) -> Result<entity::feedback::Model, TestError> {
        Ok(
            entity::prelude::Feedback::insert(entity::feedback::ActiveModel {
                event_id: ActiveValue::Set(event_id),
                user_id: ActiveValue::Set(user_id),
                rating: ActiveValue::Set(rating),
                comments: ActiveValue::Set("Well organised".to_string()),
                submitted_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
