use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{error::Error, model::form::SuccessReportForm};

pub struct EventSuccessReportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventSuccessReportRepository<'a, C> {
    /// Creates a new instance of [`EventSuccessReportRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the report for an event, `generated_at` is set to now
    ///
    /// Each event has at most one report, a second report for the same event is a unique
    /// constraint violation. Counts default to 0 and are not cross-checked with the event's
    /// registrations. The average rating is stored rounded to two decimal places.
    pub async fn create(
        &self,
        form: SuccessReportForm,
    ) -> Result<entity::event_success_report::Model, Error> {
        let form = form.clean()?;

        let report = entity::event_success_report::ActiveModel {
            event_id: ActiveValue::Set(form.event_id),
            total_registrations: ActiveValue::Set(form.total_registrations.unwrap_or(0)),
            actual_turnout: ActiveValue::Set(form.actual_turnout.unwrap_or(0)),
            attendance_percentage: ActiveValue::Set(form.attendance_percentage),
            average_rating: ActiveValue::Set(form.average_rating),
            success_summary: ActiveValue::Set(form.success_summary),
            generated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(report.insert(self.db).await?)
    }

    pub async fn get(
        &self,
        report_id: i32,
    ) -> Result<Option<entity::event_success_report::Model>, Error> {
        Ok(entity::prelude::EventSuccessReport::find_by_id(report_id)
            .one(self.db)
            .await?)
    }

    pub async fn get_by_event_id(
        &self,
        event_id: i32,
    ) -> Result<Option<entity::event_success_report::Model>, Error> {
        Ok(entity::prelude::EventSuccessReport::find()
            .filter(entity::event_success_report::Column::EventId.eq(event_id))
            .one(self.db)
            .await?)
    }

    pub async fn list(&self) -> Result<Vec<entity::event_success_report::Model>, Error> {
        Ok(entity::prelude::EventSuccessReport::find()
            .order_by_asc(entity::event_success_report::Column::Id)
            .all(self.db)
            .await?)
    }

    /// Overwrites every editable column, returns `None` if the report does not exist
    ///
    /// `generated_at` keeps the creation time.
    pub async fn update(
        &self,
        report_id: i32,
        form: SuccessReportForm,
    ) -> Result<Option<entity::event_success_report::Model>, Error> {
        let form = form.clean()?;

        let report = match entity::prelude::EventSuccessReport::find_by_id(report_id)
            .one(self.db)
            .await?
        {
            Some(report) => report,
            None => return Ok(None),
        };

        let mut report_am = report.into_active_model();
        report_am.event_id = ActiveValue::Set(form.event_id);
        report_am.total_registrations = ActiveValue::Set(form.total_registrations.unwrap_or(0));
        report_am.actual_turnout = ActiveValue::Set(form.actual_turnout.unwrap_or(0));
        report_am.attendance_percentage = ActiveValue::Set(form.attendance_percentage);
        report_am.average_rating = ActiveValue::Set(form.average_rating);
        report_am.success_summary = ActiveValue::Set(form.success_summary);

        Ok(Some(report_am.update(self.db).await?))
    }

    /// Creates the event's report or overwrites the existing one
    ///
    /// An overwritten report gets a fresh `generated_at`.
    pub async fn upsert_for_event(
        &self,
        form: SuccessReportForm,
    ) -> Result<entity::event_success_report::Model, Error> {
        let form = form.clean()?;

        let existing = match self.get_by_event_id(form.event_id).await? {
            Some(report) => report,
            None => return self.create(form).await,
        };

        let mut report_am = existing.into_active_model();
        report_am.total_registrations = ActiveValue::Set(form.total_registrations.unwrap_or(0));
        report_am.actual_turnout = ActiveValue::Set(form.actual_turnout.unwrap_or(0));
        report_am.attendance_percentage = ActiveValue::Set(form.attendance_percentage);
        report_am.average_rating = ActiveValue::Set(form.average_rating);
        report_am.success_summary = ActiveValue::Set(form.success_summary);
        report_am.generated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(report_am.update(self.db).await?)
    }

    pub async fn delete(&self, report_id: i32) -> Result<DeleteResult, Error> {
        Ok(entity::prelude::EventSuccessReport::delete_by_id(report_id)
            .exec(self.db)
            .await?)
    }
}
