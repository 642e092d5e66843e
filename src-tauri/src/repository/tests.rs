//! Repository Integration Tests
//!
//! Tests for TodoRepository with in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, Todo};
    use crate::repository::migrations::latest_version;
    use crate::repository::{open_connection, DbState, Repository, TodoRepository};
    use std::path::{Path, PathBuf};

    async fn init_db(db_path: &Path) -> Result<DbState, String> {
        let state = DbState::new(db_path.to_path_buf());
        state.install(open_connection(db_path)?).await;
        Ok(state)
    }

    async fn setup_test_db() -> TodoRepository {
        // Use in-memory database for tests
        let db_path = PathBuf::from(":memory:");
        let db_state = init_db(&db_path).await.expect("Failed to init test DB");
        TodoRepository::new(db_state.conn.clone())
    }

    #[tokio::test]
    async fn test_create_todo() {
        let repo = setup_test_db().await;

        let todo = Todo::new("Test todo".to_string());
        let created = repo.create(&todo).await.expect("Failed to create");

        assert!(created.id.unwrap() > 0);
        assert_eq!(created.title, "Test todo");
        assert!(!created.completed);
        assert_eq!(created.created_at, todo.created_at);
    }

    #[tokio::test]
    async fn test_create_trims_title() {
        let repo = setup_test_db().await;

        let created = repo.create(&Todo::new("  padded  ".to_string())).await.unwrap();
        assert_eq!(created.title, "padded");
    }

    #[tokio::test]
    async fn test_create_rejects_blank_title() {
        let repo = setup_test_db().await;

        let err = repo.create(&Todo::new("   ".to_string())).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_persisted_todo() {
        let repo = setup_test_db().await;

        let created = repo.create(&Todo::new("Once".to_string())).await.unwrap();
        let err = repo.create(&created).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let repo = setup_test_db().await;

        let a = repo.create(&Todo::new("A".to_string())).await.unwrap();
        let b = repo.create(&Todo::new("B".to_string())).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = setup_test_db().await;

        let created = repo.create(&Todo::new("Find me".to_string())).await.unwrap();

        let found = repo.find_by_id(created.id.unwrap()).await.expect("Find failed");
        assert_eq!(found, Some(created));
        assert_eq!(repo.find_by_id(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_todos_in_creation_order() {
        let repo = setup_test_db().await;

        let mut later = Todo::new("Later".to_string());
        later.created_at = 200;
        let mut earlier = Todo::new("Earlier".to_string());
        earlier.created_at = 100;
        repo.create(&later).await.unwrap();
        repo.create(&earlier).await.unwrap();

        let todos = repo.list().await.expect("List failed");
        let titles: Vec<_> = todos.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Earlier", "Later"]);
    }

    #[tokio::test]
    async fn test_update_todo() {
        let repo = setup_test_db().await;

        let mut created = repo.create(&Todo::new("Original".to_string())).await.unwrap();
        created.title = "Updated".to_string();
        created.completed = true;

        let updated = repo.update(&created).await.expect("Update failed");
        assert_eq!(updated.title, "Updated");
        assert!(updated.completed);

        let found = repo.find_by_id(created.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(found, updated);
    }

    #[tokio::test]
    async fn test_update_missing_or_unsaved() {
        let repo = setup_test_db().await;

        let mut ghost = Todo::new("Ghost".to_string());
        assert!(matches!(repo.update(&ghost).await, Err(DomainError::InvalidInput(_))));

        ghost.id = Some(42);
        assert!(matches!(repo.update(&ghost).await, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_toggle_completed() {
        let repo = setup_test_db().await;

        let created = repo.create(&Todo::new("Toggle".to_string())).await.unwrap();
        let id = created.id.unwrap();

        let toggled = repo.toggle_completed(id).await.unwrap();
        assert!(toggled.completed);
        assert_eq!(toggled.id, created.id);
        assert_eq!(toggled.created_at, created.created_at);

        let back = repo.toggle_completed(id).await.unwrap();
        assert!(!back.completed);
    }

    #[tokio::test]
    async fn test_toggle_missing() {
        let repo = setup_test_db().await;

        let err = repo.toggle_completed(5).await.unwrap_err();
        assert_eq!(err, DomainError::NotFound("Todo 5".to_string()));
    }

    #[tokio::test]
    async fn test_update_fields_title_only_keeps_completed() {
        let repo = setup_test_db().await;

        let created = repo.create(&Todo::new("Draft".to_string())).await.unwrap();
        let id = created.id.unwrap();

        // A rename issued from a stale read must not undo a toggle in between
        let stale = repo.find_by_id(id).await.unwrap().unwrap();
        assert!(!stale.completed);
        assert!(repo.toggle_completed(id).await.unwrap().completed);

        let renamed = repo.update_fields(id, Some("  Final  "), None).await.unwrap();
        assert_eq!(renamed.title, "Final");
        assert!(renamed.completed);
        assert_eq!(renamed.created_at, created.created_at);

        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found, renamed);
    }

    #[tokio::test]
    async fn test_update_fields_completed_only_keeps_title() {
        let repo = setup_test_db().await;

        let created = repo.create(&Todo::new("Keep me".to_string())).await.unwrap();
        let id = created.id.unwrap();

        let updated = repo.update_fields(id, None, Some(true)).await.unwrap();
        assert_eq!(updated.title, "Keep me");
        assert!(updated.completed);

        let unchanged = repo.update_fields(id, None, None).await.unwrap();
        assert_eq!(unchanged, updated);
    }

    #[tokio::test]
    async fn test_update_fields_rejects_blank_title() {
        let repo = setup_test_db().await;

        let created = repo.create(&Todo::new("Named".to_string())).await.unwrap();
        let id = created.id.unwrap();

        let result = repo.update_fields(id, Some("   "), Some(true)).await;
        assert!(matches!(result, Err(DomainError::InvalidInput(_))));

        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_update_fields_missing() {
        let repo = setup_test_db().await;

        let err = repo.update_fields(7, Some("Nothing"), None).await.unwrap_err();
        assert_eq!(err, DomainError::NotFound("Todo 7".to_string()));
        assert_eq!(err.to_string(), "Not found: Todo 7");
    }

    #[tokio::test]
    async fn test_delete_todo() {
        let repo = setup_test_db().await;

        let created = repo.create(&Todo::new("To delete".to_string())).await.unwrap();
        let id = created.id.unwrap();

        repo.delete(id).await.expect("Delete failed");

        assert!(repo.find_by_id(id).await.unwrap().is_none());
        assert!(matches!(repo.delete(id).await, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_uninitialized_state() {
        let state = DbState::new(PathBuf::from("unused.db"));
        assert!(!state.is_ready().await);

        let repo = TodoRepository::new(state.conn.clone());
        let err = repo.list().await.unwrap_err();
        assert_eq!(err, DomainError::Internal("Database not initialized".to_string()));
    }

    #[tokio::test]
    async fn test_install_makes_repo_usable() {
        let state = DbState::new(PathBuf::from(":memory:"));
        let repo = TodoRepository::new(state.conn.clone());

        let conn = open_connection(state.path()).unwrap();
        state.install(conn).await;

        assert!(state.is_ready().await);
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_file_database_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("tasks.db");

        {
            let state = init_db(&db_path).await.unwrap();
            let repo = TodoRepository::new(state.conn.clone());
            repo.create(&Todo::new("Survive restart".to_string())).await.unwrap();
        }

        let state = init_db(&db_path).await.unwrap();
        let repo = TodoRepository::new(state.conn.clone());
        let todos = repo.list().await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "Survive restart");

        let guard = state.conn.lock().await;
        let version: u32 = guard
            .as_ref()
            .unwrap()
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, latest_version());
    }

    #[tokio::test]
    async fn test_rejects_newer_schema() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("future.db");

        {
            let conn = rusqlite::Connection::open(&db_path).unwrap();
            conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version() + 1))
                .unwrap();
        }

        assert!(open_connection(&db_path).is_err());
    }

    #[test]
    fn test_no_rows_maps_to_not_found() {
        let err: DomainError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
