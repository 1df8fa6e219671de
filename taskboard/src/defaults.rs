//! Seed dataset used when a board has no stored state.
//!
//! Ids are literal (`column-1`, `user-1`, `task-1`, ...) rather than ULIDs so
//! a freshly seeded board is addressable by hand from the command line.

use crate::types::{Column, Task, User, DEFAULT_AVATAR};
use chrono::Utc;

/// Three workflow stages, left to right
pub fn seed_columns() -> Vec<Column> {
    vec![
        Column::new("К выполнению", 0).with_id("column-1"),
        Column::new("В процессе", 1).with_id("column-2"),
        Column::new("Выполнено", 2).with_id("column-3"),
    ]
}

/// The static team
pub fn seed_users() -> Vec<User> {
    vec![
        User::new("user-1", "Александр Петров").with_avatar(DEFAULT_AVATAR),
        User::new("user-2", "Елена Смирнова").with_avatar(DEFAULT_AVATAR),
        User::new("user-3", "Дмитрий Иванов").with_avatar(DEFAULT_AVATAR),
    ]
}

/// Four starter tasks, all created now
pub fn seed_tasks() -> Vec<Task> {
    let now = Utc::now();
    vec![
        Task::new("Создать дизайн проекта", "column-1", 0)
            .with_id("task-1")
            .with_description("Разработать UI/UX для новой версии приложения")
            .with_assignee("user-1")
            .with_created_at(now),
        Task::new("Настроить CI/CD", "column-1", 1)
            .with_id("task-2")
            .with_description("Настроить автоматическую сборку и деплой проекта")
            .with_created_at(now),
        Task::new("Написать тесты", "column-2", 0)
            .with_id("task-3")
            .with_description("Покрыть основной функционал unit-тестами")
            .with_assignee("user-2")
            .with_created_at(now),
        Task::new("Обновить документацию", "column-3", 0)
            .with_id("task-4")
            .with_description("Актуализировать документацию API")
            .with_assignee("user-3")
            .with_created_at(now),
    ]
}
