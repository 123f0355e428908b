use sea_orm::{prelude::Decimal, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        event::EventRepository, event_success_report::EventSuccessReportRepository,
        feedback::FeedbackRepository, registration::RegistrationRepository,
    },
    error::{event::EventError, Error},
    model::form::SuccessReportForm,
};

/// Builds event success reports from registrations and feedback.
pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    /// Creates a new instance of [`ReportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes and stores the success report for an event
    ///
    /// Counts registrations and attended registrations, derives the attendance percentage and
    /// the mean feedback rating rounded to two decimals, then creates or overwrites the
    /// event's single report row. Runs in one transaction.
    ///
    /// # Returns
    /// - `Ok(report)`: The stored report
    /// - `Err(Error::EventError(EventError::EventNotFound))`: No event with that ID
    /// - `Err(Error::DbErr(_))`: Database error
    pub async fn generate(
        &self,
        event_id: i32,
    ) -> Result<entity::event_success_report::Model, Error> {
        let txn = self.db.begin().await?;
        let event_repository = EventRepository::new(&txn);
        let registration_repository = RegistrationRepository::new(&txn);
        let feedback_repository = FeedbackRepository::new(&txn);
        let report_repository = EventSuccessReportRepository::new(&txn);

        let event = event_repository
            .get(event_id)
            .await?
            .ok_or(EventError::EventNotFound(event_id))?;

        let total_registrations = registration_repository.count_by_event_id(event_id).await?;
        let actual_turnout = registration_repository
            .count_attended_by_event_id(event_id)
            .await?;
        let ratings: Vec<i32> = feedback_repository
            .list_by_event_id(event_id)
            .await?
            .into_iter()
            .map(|feedback| feedback.rating)
            .collect();

        let attendance_percentage = attendance_percentage(total_registrations, actual_turnout);
        let average_rating = average_rating(&ratings);

        let report = report_repository
            .upsert_for_event(SuccessReportForm {
                event_id,
                total_registrations: Some(saturating_i32(total_registrations)),
                actual_turnout: Some(saturating_i32(actual_turnout)),
                attendance_percentage,
                average_rating,
                success_summary: summarize(
                    &event.title,
                    total_registrations,
                    actual_turnout,
                    attendance_percentage,
                    average_rating,
                    ratings.len(),
                ),
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            event_id,
            total_registrations,
            actual_turnout,
            "Generated success report"
        );

        Ok(report)
    }
}

/// Turnout as a share of registrations, 0.0 when nobody registered.
pub fn attendance_percentage(total_registrations: u64, actual_turnout: u64) -> f64 {
    if total_registrations == 0 {
        return 0.0;
    }

    actual_turnout as f64 * 100.0 / total_registrations as f64
}

/// Mean rating rounded to two decimal places, `None` without ratings.
pub fn average_rating(ratings: &[i32]) -> Option<Decimal> {
    if ratings.is_empty() {
        return None;
    }

    let sum: i64 = ratings.iter().map(|&rating| i64::from(rating)).sum();
    let count = Decimal::from(ratings.len() as u64);

    Some((Decimal::from(sum) / count).round_dp(2))
}

fn saturating_i32(count: u64) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

fn summarize(
    title: &str,
    total_registrations: u64,
    actual_turnout: u64,
    attendance_percentage: f64,
    average_rating: Option<Decimal>,
    responses: usize,
) -> String {
    let attendance = format!(
        "{}: {} of {} registered attendees turned up ({:.2}%).",
        title, actual_turnout, total_registrations, attendance_percentage
    );

    match average_rating {
        Some(rating) => format!(
            "{} Average rating {:.2} from {} responses.",
            attendance, rating, responses
        ),
        None => format!("{} No feedback received.", attendance),
    }
}
