use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{error::Error, model::form::ResourceRequestForm};

/// Quantity used when a request does not specify one.
pub const DEFAULT_QUANTITY_NEEDED: i32 = 1;

pub struct EventResourceRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventResourceRequestRepository<'a, C> {
    /// Creates a new instance of [`EventResourceRequestRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Requests a resource for an event
    ///
    /// The quantity is not compared against the resource's stock and the same resource may be
    /// requested more than once for one event.
    pub async fn create(
        &self,
        form: ResourceRequestForm,
    ) -> Result<entity::event_resource_request::Model, Error> {
        let request = entity::event_resource_request::ActiveModel {
            event_id: ActiveValue::Set(form.event_id),
            resource_id: ActiveValue::Set(form.resource_id),
            quantity_needed: ActiveValue::Set(
                form.quantity_needed.unwrap_or(DEFAULT_QUANTITY_NEEDED),
            ),
            ..Default::default()
        };

        Ok(request.insert(self.db).await?)
    }

    pub async fn get(
        &self,
        request_id: i32,
    ) -> Result<Option<entity::event_resource_request::Model>, Error> {
        Ok(entity::prelude::EventResourceRequest::find_by_id(request_id)
            .one(self.db)
            .await?)
    }

    pub async fn list(&self) -> Result<Vec<entity::event_resource_request::Model>, Error> {
        Ok(entity::prelude::EventResourceRequest::find()
            .order_by_asc(entity::event_resource_request::Column::Id)
            .all(self.db)
            .await?)
    }

    /// Gets an event's requests along with the requested resource
    pub async fn list_by_event_id(
        &self,
        event_id: i32,
    ) -> Result<
        Vec<(
            entity::event_resource_request::Model,
            Option<entity::resource::Model>,
        )>,
        Error,
    > {
        Ok(entity::prelude::EventResourceRequest::find()
            .filter(entity::event_resource_request::Column::EventId.eq(event_id))
            .order_by_asc(entity::event_resource_request::Column::Id)
            .find_also_related(entity::prelude::Resource)
            .all(self.db)
            .await?)
    }

    /// Overwrites event, resource and quantity, returns `None` if the request does not exist
    pub async fn update(
        &self,
        request_id: i32,
        form: ResourceRequestForm,
    ) -> Result<Option<entity::event_resource_request::Model>, Error> {
        let request = match entity::prelude::EventResourceRequest::find_by_id(request_id)
            .one(self.db)
            .await?
        {
            Some(request) => request,
            None => return Ok(None),
        };

        let mut request_am = request.into_active_model();
        request_am.event_id = ActiveValue::Set(form.event_id);
        request_am.resource_id = ActiveValue::Set(form.resource_id);
        request_am.quantity_needed =
            ActiveValue::Set(form.quantity_needed.unwrap_or(DEFAULT_QUANTITY_NEEDED));

        Ok(Some(request_am.update(self.db).await?))
    }

    /// Sets the quantity needed, returns `None` if the request does not exist
    pub async fn update_quantity(
        &self,
        request_id: i32,
        quantity_needed: i32,
    ) -> Result<Option<entity::event_resource_request::Model>, Error> {
        let request = match entity::prelude::EventResourceRequest::find_by_id(request_id)
            .one(self.db)
            .await?
        {
            Some(request) => request,
            None => return Ok(None),
        };

        let mut request_am = request.into_active_model();
        request_am.quantity_needed = ActiveValue::Set(quantity_needed);

        Ok(Some(request_am.update(self.db).await?))
    }

    pub async fn delete(&self, request_id: i32) -> Result<DeleteResult, Error> {
        Ok(entity::prelude::EventResourceRequest::delete_by_id(request_id)
            .exec(self.db)
            .await?)
    }
}
