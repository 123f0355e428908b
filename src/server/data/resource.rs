use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DeleteResult, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::{error::Error, model::form::ResourceForm};

pub struct ResourceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ResourceRepository<'a, C> {
    /// Creates a new instance of [`ResourceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, form: ResourceForm) -> Result<entity::resource::Model, Error> {
        form.validate()?;

        let resource = entity::resource::ActiveModel {
            name: ActiveValue::Set(form.name),
            total_quantity: ActiveValue::Set(form.total_quantity),
            ..Default::default()
        };

        Ok(resource.insert(self.db).await?)
    }

    pub async fn get(&self, resource_id: i32) -> Result<Option<entity::resource::Model>, Error> {
        Ok(entity::prelude::Resource::find_by_id(resource_id)
            .one(self.db)
            .await?)
    }

    pub async fn list(&self) -> Result<Vec<entity::resource::Model>, Error> {
        Ok(entity::prelude::Resource::find()
            .order_by_asc(entity::resource::Column::Id)
            .all(self.db)
            .await?)
    }

    /// Overwrites name and total quantity, returns `None` if the resource does not exist
    pub async fn update(
        &self,
        resource_id: i32,
        form: ResourceForm,
    ) -> Result<Option<entity::resource::Model>, Error> {
        form.validate()?;

        let resource = match entity::prelude::Resource::find_by_id(resource_id)
            .one(self.db)
            .await?
        {
            Some(resource) => resource,
            None => return Ok(None),
        };

        let mut resource_am = resource.into_active_model();
        resource_am.name = ActiveValue::Set(form.name);
        resource_am.total_quantity = ActiveValue::Set(form.total_quantity);

        Ok(Some(resource_am.update(self.db).await?))
    }

    /// Deletes a resource along with every request made for it
    pub async fn delete(&self, resource_id: i32) -> Result<DeleteResult, Error> {
        Ok(entity::prelude::Resource::delete_by_id(resource_id)
            .exec(self.db)
            .await?)
    }
}
