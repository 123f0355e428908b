use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn venue(&self) -> VenueFixtures<'_> {
        VenueFixtures { setup: self }
    }
}

pub struct VenueFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> VenueFixtures<'a> {
    pub async fn insert_venue(
        &self,
        name: &str,
        capacity: i32,
    ) -> Result<entity::venue::Model, TestError> {
        Ok(
            entity::prelude::Venue::insert(entity::venue::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                capacity: ActiveValue::Set(capacity),
                location: ActiveValue::Set("North Campus".to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_resource(
        &self,
        name: &str,
        total_quantity: i32,
    ) -> Result<entity::resource::Model, TestError> {
        Ok(
            entity::prelude::Resource::insert(entity::resource::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                total_quantity: ActiveValue::Set(total_quantity),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
