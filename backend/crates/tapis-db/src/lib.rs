pub mod connection;
pub mod error;
pub mod password;
pub mod repositories;

pub use connection::connection_manager::ConnectionManager;
pub use error::{DbError, Result};
pub use repositories::project_relation_repository::ProjectRelationRepository;
pub use repositories::project_repository::ProjectRepository;
pub use repositories::role_repository::RoleRepository;
pub use repositories::user_repository::UserRepository;
