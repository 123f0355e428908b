//! Tests for ReportService over a realistic event.

use campus_events::server::{
    admin::report_title,
    data::{event_success_report::EventSuccessReportRepository, registration::RegistrationRepository},
    service::report::ReportService,
};
use campus_events_test_utils::prelude::*;
use entity::sea_orm_active_enums::Role;
use sea_orm::prelude::Decimal;

/// Tests marking attendance after registration and regenerating the report.
///
/// Expected: the report follows attendance changes and stays a single row
#[tokio::test]
async fn report_follows_attendance() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campus_tables().build().await?;
    let teacher = test.user().insert_user("teacher", Role::Teacher).await?;
    let event = test.event().insert_event(teacher.id, None).await?;
    let mut registrations = Vec::new();
    for username in ["amy", "ben", "cal", "dee", "eve"] {
        let student = test.user().insert_user(username, Role::Student).await?;
        registrations.push(
            test.event()
                .insert_registration(event.id, student.id, false)
                .await?,
        );
        test.event().insert_feedback(event.id, student.id, 3).await?;
    }
    let report_service = ReportService::new(&test.db);

    let before = report_service.generate(event.id).await.unwrap();
    assert_eq!(before.actual_turnout, 0);
    assert_eq!(before.attendance_percentage, 0.0);
    assert_eq!(before.average_rating, Some(Decimal::new(3, 0)));

    let registration_repository = RegistrationRepository::new(&test.db);
    for registration in registrations.iter().take(2) {
        registration_repository
            .set_attended(registration.id, true)
            .await
            .unwrap();
    }
    let after = report_service.generate(event.id).await.unwrap();

    assert_eq!(after.id, before.id);
    assert_eq!(after.total_registrations, 5);
    assert_eq!(after.actual_turnout, 2);
    assert_eq!(after.attendance_percentage, 40.0);
    assert_eq!(
        EventSuccessReportRepository::new(&test.db)
            .list()
            .await
            .unwrap()
            .len(),
        1
    );
    assert_eq!(report_title(&event), "Report for: Tech Fest");

    Ok(())
}
