use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{error::Error, model::form::FeedbackForm};

pub struct FeedbackRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FeedbackRepository<'a, C> {
    /// Creates a new instance of [`FeedbackRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a rating for an event, `submitted_at` is set to now
    ///
    /// The rating must be within 1 to 5. Whether the user registered for or attended the
    /// event is not checked.
    pub async fn create(&self, form: FeedbackForm) -> Result<entity::feedback::Model, Error> {
        form.validate()?;

        let feedback = entity::feedback::ActiveModel {
            event_id: ActiveValue::Set(form.event_id),
            user_id: ActiveValue::Set(form.user_id),
            rating: ActiveValue::Set(form.rating),
            comments: ActiveValue::Set(form.comments),
            submitted_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(feedback.insert(self.db).await?)
    }

    pub async fn get(&self, feedback_id: i32) -> Result<Option<entity::feedback::Model>, Error> {
        Ok(entity::prelude::Feedback::find_by_id(feedback_id)
            .one(self.db)
            .await?)
    }

    pub async fn list(&self) -> Result<Vec<entity::feedback::Model>, Error> {
        Ok(entity::prelude::Feedback::find()
            .order_by_asc(entity::feedback::Column::Id)
            .all(self.db)
            .await?)
    }

    pub async fn list_by_event_id(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::feedback::Model>, Error> {
        Ok(entity::prelude::Feedback::find()
            .filter(entity::feedback::Column::EventId.eq(event_id))
            .order_by_asc(entity::feedback::Column::Id)
            .all(self.db)
            .await?)
    }

    pub async fn list_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::feedback::Model>, Error> {
        Ok(entity::prelude::Feedback::find()
            .filter(entity::feedback::Column::UserId.eq(user_id))
            .order_by_asc(entity::feedback::Column::Id)
            .all(self.db)
            .await?)
    }

    /// Overwrites every editable column, returns `None` if the feedback does not exist
    pub async fn update(
        &self,
        feedback_id: i32,
        form: FeedbackForm,
    ) -> Result<Option<entity::feedback::Model>, Error> {
        form.validate()?;

        let feedback = match entity::prelude::Feedback::find_by_id(feedback_id)
            .one(self.db)
            .await?
        {
            Some(feedback) => feedback,
            None => return Ok(None),
        };

        let mut feedback_am = feedback.into_active_model();
        feedback_am.event_id = ActiveValue::Set(form.event_id);
        feedback_am.user_id = ActiveValue::Set(form.user_id);
        feedback_am.rating = ActiveValue::Set(form.rating);
        feedback_am.comments = ActiveValue::Set(form.comments);

        Ok(Some(feedback_am.update(self.db).await?))
    }

    pub async fn delete(&self, feedback_id: i32) -> Result<DeleteResult, Error> {
        Ok(entity::prelude::Feedback::delete_by_id(feedback_id)
            .exec(self.db)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use campus_events_test_utils::prelude::*;
    use entity::sea_orm_active_enums::Role;

    use crate::server::{
        data::feedback::FeedbackRepository,
        error::{validation::ValidationError, Error},
        model::form::FeedbackForm,
    };

    fn rating(event_id: i32, user_id: i32, rating: i32) -> FeedbackForm {
        FeedbackForm {
            event_id,
            user_id,
            rating,
            comments: "Loved the robotics demo".to_string(),
        }
    }

    mod create_tests {
        use super::*;

        /// Expect ratings 1 through 5 to be accepted
        #[tokio::test]
        async fn test_create_feedback_valid_ratings() -> Result<(), TestError> {
            let test = TestBuilder::new().with_campus_tables().build().await?;
            let feedback_repository = FeedbackRepository::new(&test.db);
            let teacher = test.user().insert_user("teacher", Role::Teacher).await?;
            let student = test.user().insert_user("student", Role::Student).await?;
            let event = test.event().insert_event(teacher.id, None).await?;

            for value in 1..=5 {
                let feedback = feedback_repository
                    .create(rating(event.id, student.id, value))
                    .await
                    .unwrap();
                assert_eq!(feedback.rating, value);
            }

            assert_eq!(
                feedback_repository
                    .list_by_event_id(event.id)
                    .await
                    .unwrap()
                    .len(),
                5
            );

            Ok(())
        }

        /// Expect ratings 0 and 6 to be rejected before reaching the database
        #[tokio::test]
        async fn test_create_feedback_out_of_range() -> Result<(), TestError> {
            let test = TestBuilder::new().with_campus_tables().build().await?;
            let feedback_repository = FeedbackRepository::new(&test.db);
            let teacher = test.user().insert_user("teacher", Role::Teacher).await?;
            let student = test.user().insert_user("student", Role::Student).await?;
            let event = test.event().insert_event(teacher.id, None).await?;

            for value in [0, 6] {
                let result = feedback_repository
                    .create(rating(event.id, student.id, value))
                    .await;

                assert!(matches!(
                    result,
                    Err(Error::ValidationError(ValidationError::OutOfRange {
                        field: "rating",
                        ..
                    }))
                ));
            }
            assert!(feedback_repository.list().await.unwrap().is_empty());

            Ok(())
        }

        /// Expect feedback from a user who never registered to be accepted
        #[tokio::test]
        async fn test_create_feedback_without_registration() -> Result<(), TestError> {
            let test = TestBuilder::new().with_campus_tables().build().await?;
            let feedback_repository = FeedbackRepository::new(&test.db);
            let teacher = test.user().insert_user("teacher", Role::Teacher).await?;
            let parent = test.user().insert_user("parent", Role::Parent).await?;
            let event = test.event().insert_event(teacher.id, None).await?;

            let result = feedback_repository
                .create(rating(event.id, parent.id, 3))
                .await;

            assert!(result.is_ok());
            assert_eq!(
                feedback_repository
                    .list_by_user_id(parent.id)
                    .await
                    .unwrap()
                    .len(),
                1
            );

            Ok(())
        }
    }

    mod update_tests {
        use super::*;

        /// Expect the rating to be revalidated on update
        #[tokio::test]
        async fn test_update_feedback() -> Result<(), TestError> {
            let test = TestBuilder::new().with_campus_tables().build().await?;
            let feedback_repository = FeedbackRepository::new(&test.db);
            let teacher = test.user().insert_user("teacher", Role::Teacher).await?;
            let student = test.user().insert_user("student", Role::Student).await?;
            let event = test.event().insert_event(teacher.id, None).await?;
            let feedback = test.event().insert_feedback(event.id, student.id, 2).await?;

            let updated = feedback_repository
                .update(feedback.id, rating(event.id, student.id, 5))
                .await
                .unwrap()
                .unwrap();
            assert_eq!(updated.rating, 5);
            assert_eq!(updated.submitted_at, feedback.submitted_at);

            let result = feedback_repository
                .update(feedback.id, rating(event.id, student.id, 9))
                .await;
            assert!(matches!(result, Err(Error::ValidationError(_))));

            let result = feedback_repository.delete(feedback.id).await.unwrap();
            assert_eq!(result.rows_affected, 1);

            Ok(())
        }
    }
}
