//! Record store: the trait seam plus the default in-memory implementation.
//!
//! # Design
//! Handlers only see `SharedStore`, so a durable backend can replace
//! [`InMemoryStore`] without touching route code. Every trait method takes
//! the collection lock exactly once for the whole logical operation; no
//! operation spans multiple acquisitions, so callers observe each store call
//! as atomic. Absent records are values (`Option` / `bool`), not errors.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::todo::{CreateTodo, Todo};

/// Shared handle to the record store, injected into every handler.
pub type SharedStore = Arc<dyn TodoStore>;

/// CRUD contract over the todo collection.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// All records, in ascending id order.
    async fn list(&self) -> Vec<Todo>;

    /// The subset of records with `is_complete` set.
    async fn list_completed(&self) -> Vec<Todo>;

    /// Lookup by id. `None` means no such record.
    async fn find_by_id(&self, id: i64) -> Option<Todo>;

    /// Assign the next id, insert, and return the stored record.
    async fn add(&self, input: CreateTodo) -> Todo;

    /// Overwrite `name` and `is_complete` of the identified record.
    /// Returns the updated record, or `None` when the id is absent.
    async fn update(&self, id: i64, name: String, is_complete: bool) -> Option<Todo>;

    /// Remove the identified record. Returns false when the id is absent.
    async fn remove(&self, id: i64) -> bool;
}

/// Process-lifetime store. A `BTreeMap` keeps listings in ascending id
/// order; ids are handed out once and never reused, even after a remove.
pub struct InMemoryStore {
    todos: RwLock<BTreeMap<i64, Todo>>,
    next_id: AtomicI64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            todos: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoStore for InMemoryStore {
    async fn list(&self) -> Vec<Todo> {
        self.todos.read().await.values().cloned().collect()
    }

    async fn list_completed(&self) -> Vec<Todo> {
        self.todos
            .read()
            .await
            .values()
            .filter(|todo| todo.is_complete)
            .cloned()
            .collect()
    }

    async fn find_by_id(&self, id: i64) -> Option<Todo> {
        self.todos.read().await.get(&id).cloned()
    }

    async fn add(&self, input: CreateTodo) -> Todo {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let todo = Todo {
            id,
            name: input.name,
            is_complete: input.is_complete,
        };
        self.todos.write().await.insert(id, todo.clone());
        todo
    }

    async fn update(&self, id: i64, name: String, is_complete: bool) -> Option<Todo> {
        let mut todos = self.todos.write().await;
        let todo = todos.get_mut(&id)?;
        todo.name = name;
        todo.is_complete = is_complete;
        Some(todo.clone())
    }

    async fn remove(&self, id: i64) -> bool {
        self.todos.write().await.remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, is_complete: bool) -> CreateTodo {
        CreateTodo {
            name: name.to_string(),
            is_complete,
        }
    }

    #[tokio::test]
    async fn find_by_id_returns_created_record() {
        let store = InMemoryStore::new();
        let created = store.add(input("buy milk", false)).await;
        assert_eq!(created.id, 1);
        let found = store.find_by_id(created.id).await.unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn ids_are_monotonic_and_not_reused() {
        let store = InMemoryStore::new();
        let first = store.add(input("one", false)).await;
        let second = store.add(input("two", false)).await;
        assert!(second.id > first.id);

        assert!(store.remove(second.id).await);
        let third = store.add(input("three", false)).await;
        assert!(third.id > second.id);
    }

    #[tokio::test]
    async fn remove_then_find_returns_absent() {
        let store = InMemoryStore::new();
        let created = store.add(input("ephemeral", false)).await;
        assert!(store.remove(created.id).await);
        assert!(store.find_by_id(created.id).await.is_none());
    }

    #[tokio::test]
    async fn second_remove_reports_absent() {
        let store = InMemoryStore::new();
        let created = store.add(input("once", false)).await;
        assert!(store.remove(created.id).await);
        assert!(!store.remove(created.id).await);
    }

    #[tokio::test]
    async fn remove_on_empty_store_reports_absent() {
        let store = InMemoryStore::new();
        assert!(!store.remove(999).await);
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_keeps_id() {
        let store = InMemoryStore::new();
        let created = store.add(input("draft", false)).await;

        let updated = store
            .update(created.id, "final".to_string(), true)
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "final");
        assert!(updated.is_complete);

        let found = store.find_by_id(created.id).await.unwrap();
        assert_eq!(found, updated);
    }

    #[tokio::test]
    async fn update_absent_id_returns_none() {
        let store = InMemoryStore::new();
        let result = store.update(42, "nope".to_string(), true).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn list_completed_is_the_completed_subset_of_list() {
        let store = InMemoryStore::new();
        store.add(input("a", false)).await;
        let b = store.add(input("b", true)).await;
        let c = store.add(input("c", false)).await;
        store.update(c.id, "c".to_string(), true).await.unwrap();

        let all = store.list().await;
        let completed = store.list_completed().await;
        assert_eq!(all.len(), 3);
        assert_eq!(completed.len(), 2);

        let expected: Vec<Todo> = all.into_iter().filter(|t| t.is_complete).collect();
        assert_eq!(completed, expected);
        assert!(completed.iter().any(|t| t.id == b.id));
    }

    #[tokio::test]
    async fn list_is_sorted_by_id() {
        let store = InMemoryStore::new();
        for name in ["x", "y", "z"] {
            store.add(input(name, false)).await;
        }
        let ids: Vec<i64> = store.list().await.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_adds_assign_distinct_ids() {
        let store = Arc::new(InMemoryStore::new());
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.add(CreateTodo {
                    name: format!("task {i}"),
                    is_complete: false,
                })
                .await
                .id
            }));
        }

        let mut ids = std::collections::HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap());
        }
        assert_eq!(ids.len(), 32);
        assert_eq!(store.list().await.len(), 32);
    }
}
