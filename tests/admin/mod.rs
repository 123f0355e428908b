mod form_error;
mod registry;
