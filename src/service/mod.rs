//! CrudService: generic CRUD using the safe SQL builder through a Store.

mod crud;
mod validation;
pub use crud::CrudService;
pub use validation::RequestValidator;
