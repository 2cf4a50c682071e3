pub mod project_relation_repository;
pub mod project_repository;
pub mod role_repository;
pub mod user_repository;
