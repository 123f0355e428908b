use chrono::Utc;
use entity::sea_orm_active_enums::Role;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_DEPARTMENT, error::TestError, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(
        &self,
        username: &str,
        role: Role,
    ) -> Result<entity::campus_user::Model, TestError> {
        Ok(
            entity::prelude::CampusUser::insert(entity::campus_user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                first_name: ActiveValue::Set("Test".to_string()),
                last_name: ActiveValue::Set("User".to_string()),
                email: ActiveValue::Set(format!("{}@campus.test", username)),
                is_staff: ActiveValue::Set(matches!(role, Role::Admin)),
                is_active: ActiveValue::Set(true),
                role: ActiveValue::Set(role),
                department: ActiveValue::Set(Some(TEST_DEPARTMENT.to_string())),
                date_joined: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
