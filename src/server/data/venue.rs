use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DeleteResult, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::{error::Error, model::form::VenueForm};

pub struct VenueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VenueRepository<'a, C> {
    /// Creates a new instance of [`VenueRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, form: VenueForm) -> Result<entity::venue::Model, Error> {
        form.validate()?;

        let venue = entity::venue::ActiveModel {
            name: ActiveValue::Set(form.name),
            capacity: ActiveValue::Set(form.capacity),
            location: ActiveValue::Set(form.location),
            ..Default::default()
        };

        Ok(venue.insert(self.db).await?)
    }

    pub async fn get(&self, venue_id: i32) -> Result<Option<entity::venue::Model>, Error> {
        Ok(entity::prelude::Venue::find_by_id(venue_id)
            .one(self.db)
            .await?)
    }

    pub async fn list(&self) -> Result<Vec<entity::venue::Model>, Error> {
        Ok(entity::prelude::Venue::find()
            .order_by_asc(entity::venue::Column::Id)
            .all(self.db)
            .await?)
    }

    /// Overwrites name, capacity and location, returns `None` if the venue does not exist
    pub async fn update(
        &self,
        venue_id: i32,
        form: VenueForm,
    ) -> Result<Option<entity::venue::Model>, Error> {
        form.validate()?;

        let venue = match entity::prelude::Venue::find_by_id(venue_id)
            .one(self.db)
            .await?
        {
            Some(venue) => venue,
            None => return Ok(None),
        };

        let mut venue_am = venue.into_active_model();
        venue_am.name = ActiveValue::Set(form.name);
        venue_am.capacity = ActiveValue::Set(form.capacity);
        venue_am.location = ActiveValue::Set(form.location);

        Ok(Some(venue_am.update(self.db).await?))
    }

    /// Deletes a venue
    ///
    /// Events held at the venue are kept with their `venue_id` set to NULL.
    pub async fn delete(&self, venue_id: i32) -> Result<DeleteResult, Error> {
        Ok(entity::prelude::Venue::delete_by_id(venue_id)
            .exec(self.db)
            .await?)
    }
}
