//! Entity Store: the in-memory aggregate of tasks, columns and users.
//!
//! The store owns all three collections. It does no ordering math itself;
//! the ordering engine computes new task collections and the store swaps
//! them in whole, so readers never see a half-renumbered column.
//!
//! Every mutation notifies subscribers once, after it has settled. Views
//! subscribe to recompute derived state, and the persistence mirror
//! subscribes to save the changed collection.

use crate::types::{Column, ColumnId, Task, TaskId, User, UserId};
use std::fmt;

/// Handle returned by [`EntityStore::subscribe`]
pub type SubscriptionId = u64;

/// Which collection a mutation touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreChange {
    Tasks,
    Columns,
    Users,
}

type Subscriber = Box<dyn FnMut(StoreChange, &EntityStore)>;

/// In-memory collections of tasks, columns and users
#[derive(Default)]
pub struct EntityStore {
    tasks: Vec<Task>,
    columns: Vec<Column>,
    users: Vec<User>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: SubscriptionId,
}

impl fmt::Debug for EntityStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityStore")
            .field("tasks", &self.tasks)
            .field("columns", &self.columns)
            .field("users", &self.users)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl EntityStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from loaded collections
    pub fn from_parts(tasks: Vec<Task>, columns: Vec<Column>, users: Vec<User>) -> Self {
        Self {
            tasks,
            columns,
            users,
            ..Self::default()
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// All tasks in collection order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// All columns in collection order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// All users in collection order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    /// The user a task is assigned to, if the reference resolves
    pub fn assigned_user(&self, task: &Task) -> Option<&User> {
        task.assigned_to.as_ref().and_then(|id| self.user(id))
    }

    /// Tasks of one column, ascending by order
    pub fn tasks_in_column(&self, column: &ColumnId) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.iter().filter(|t| t.is_in(column)).collect();
        tasks.sort_by_key(|t| t.order);
        tasks
    }

    /// Number of tasks in a column
    pub fn task_count(&self, column: &ColumnId) -> usize {
        self.tasks.iter().filter(|t| t.is_in(column)).count()
    }

    /// Columns left to right
    pub fn columns_in_order(&self) -> Vec<&Column> {
        let mut columns: Vec<&Column> = self.columns.iter().collect();
        columns.sort_by_key(|c| c.order);
        columns
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Replace the whole task collection
    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.notify(StoreChange::Tasks);
    }

    /// Append a task
    pub fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
        self.notify(StoreChange::Tasks);
    }

    /// Edit a task in place. Returns false (and notifies nobody) when the
    /// id is unknown.
    pub fn update_task(&mut self, id: &TaskId, edit: impl FnOnce(&mut Task)) -> bool {
        match self.tasks.iter_mut().find(|t| &t.id == id) {
            Some(task) => {
                edit(task);
                self.notify(StoreChange::Tasks);
                true
            }
            None => false,
        }
    }

    /// Append a column
    pub fn push_column(&mut self, column: Column) {
        self.columns.push(column);
        self.notify(StoreChange::Columns);
    }

    /// Edit a column in place. Returns false when the id is unknown.
    pub fn update_column(&mut self, id: &ColumnId, edit: impl FnOnce(&mut Column)) -> bool {
        match self.columns.iter_mut().find(|c| &c.id == id) {
            Some(column) => {
                edit(column);
                self.notify(StoreChange::Columns);
                true
            }
            None => false,
        }
    }

    /// Replace the whole user collection
    pub fn set_users(&mut self, users: Vec<User>) {
        self.users = users;
        self.notify(StoreChange::Users);
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Register a callback run after every mutation
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(StoreChange, &EntityStore) + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self, change: StoreChange) {
        // Callbacks get a shared view of the store, so they cannot mutate it
        // or register new subscribers while we iterate.
        let mut subscribers = std::mem::take(&mut self.subscribers);
        for (_, callback) in subscribers.iter_mut() {
            callback(change, self);
        }
        self.subscribers = subscribers;
    }
}
