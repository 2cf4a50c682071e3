mod common;

use common::{count_rows, create_test_new_user, create_test_pool};

use tapis_core::{PERSONAL_OWNER_ROLE, Project, ProjectRelation, ProjectType};
use tapis_db::{ProjectRelationRepository, ProjectRepository, UserRepository};

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_user_when_personal_project_created_then_found_by_creator() {
    // Given: A stored user
    let pool = create_test_pool().await;
    let users = UserRepository::new(pool.clone());
    let user = users
        .create(&create_test_new_user("jdoe", None))
        .await
        .unwrap();
    let repo = ProjectRepository::new(pool.clone());

    // When: Creating the personal project
    let project = Project::personal("jdoe (Tapis) <jdoe@tacc.utexas.edu>".to_string(), user.id);
    repo.create(&project).await.unwrap();

    // Then: It is found by id and by creator
    let found = repo.find_by_id(project.id).await.unwrap().unwrap();
    assert_that!(found.project_type, eq(ProjectType::Personal));
    assert_that!(found.creator_id, eq(Some(user.id)));
    let personal = repo.find_personal_by_creator(user.id).await.unwrap();
    assert_that!(personal.len(), eq(1));
    assert_that!(personal[0].name.as_str(), eq("jdoe (Tapis) <jdoe@tacc.utexas.edu>"));
}

#[tokio::test]
async fn given_project_when_relation_created_then_found_by_user() {
    let pool = create_test_pool().await;
    let users = UserRepository::new(pool.clone());
    let user = users
        .create(&create_test_new_user("jdoe", None))
        .await
        .unwrap();
    let project = Project::personal("Personal".to_string(), user.id);
    ProjectRepository::new(pool.clone())
        .create(&project)
        .await
        .unwrap();
    let relations = ProjectRelationRepository::new(pool.clone());

    relations
        .create(&ProjectRelation::new(project.id, user.id, PERSONAL_OWNER_ROLE))
        .await
        .unwrap();

    let found = relations.find_by_user(user.id).await.unwrap();
    assert_that!(found.len(), eq(1));
    assert_that!(found[0].project_id, eq(project.id));
    assert_that!(found[0].role.as_str(), eq("project:personalOwner"));
}

#[tokio::test]
async fn given_relation_to_missing_project_when_created_then_fails() {
    let pool = create_test_pool().await;
    let users = UserRepository::new(pool.clone());
    let user = users
        .create(&create_test_new_user("jdoe", None))
        .await
        .unwrap();
    let relations = ProjectRelationRepository::new(pool.clone());

    let result = relations
        .create(&ProjectRelation::new(Uuid::new_v4(), user.id, PERSONAL_OWNER_ROLE))
        .await;

    assert_that!(result, err(anything()));
    assert_that!(count_rows(&pool, "project_relations").await, eq(0));
}

#[tokio::test]
async fn given_transaction_when_rolled_back_then_nothing_is_persisted() {
    // Given: A user and project written inside one transaction
    let pool = create_test_pool().await;
    let users = UserRepository::new(pool.clone());
    let mut tx = users.begin().await.unwrap();
    let user = users
        .create_in_tx(&mut tx, &create_test_new_user("jdoe", None))
        .await
        .unwrap();
    ProjectRepository::new(pool.clone())
        .create_in_tx(&mut tx, &Project::personal("Personal".to_string(), user.id))
        .await
        .unwrap();

    // When: The transaction is rolled back
    tx.rollback().await.unwrap();

    // Then: Neither row exists
    assert_that!(count_rows(&pool, "users").await, eq(0));
    assert_that!(count_rows(&pool, "projects").await, eq(0));
}
