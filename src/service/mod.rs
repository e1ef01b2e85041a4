//! CrudService: forwards each operation to the entity's repository.

mod crud;
pub use crud::CrudService;
