//! In-memory Draftsmith backend for tests.
//!
//! Implements every endpoint the client calls: flat note CRUD with content
//! toggling, tag and task CRUD, hierarchy attach/detach/relations for all
//! three resources, note-tag association, and the nested tree views. State
//! lives in a single `Db` behind `Arc<RwLock<_>>`; ids are sequential per
//! resource starting at 1. DTOs are defined here independently of the
//! client crate so the integration tests catch schema drift.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Router;
use tokio::{net::TcpListener, sync::RwLock};

pub mod notes;
pub mod tags;
pub mod tasks;

pub use notes::{Note, NoteWithoutContent, TreeNote};
pub use tags::{Tag, TreeTag, TreeTagWithNotes};
pub use tasks::{Task, TaskStatus, TreeTask};

/// Parent-child link between two notes; notes carry a hierarchy type.
#[derive(Debug, Clone)]
pub struct NoteLink {
    pub parent_id: i32,
    pub child_id: i32,
    pub hierarchy_type: String,
}

/// Parent-child link between two tags or two tasks.
#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub parent_id: i32,
    pub child_id: i32,
}

/// Whole backend state. `BTreeMap` keeps list responses in id order.
#[derive(Default)]
pub struct Db {
    next_note_id: i32,
    pub(crate) notes: BTreeMap<i32, Note>,
    pub(crate) note_links: Vec<NoteLink>,
    next_tag_id: i32,
    pub(crate) tags: BTreeMap<i32, Tag>,
    pub(crate) note_tags: Vec<(i32, i32)>,
    pub(crate) tag_links: Vec<Link>,
    next_task_id: i32,
    pub(crate) tasks: BTreeMap<i32, Task>,
    pub(crate) task_links: Vec<Link>,
}

impl Db {
    pub(crate) fn next_note_id(&mut self) -> i32 {
        self.next_note_id += 1;
        self.next_note_id
    }

    pub(crate) fn next_tag_id(&mut self) -> i32 {
        self.next_tag_id += 1;
        self.next_tag_id
    }

    pub(crate) fn next_task_id(&mut self) -> i32 {
        self.next_task_id += 1;
        self.next_task_id
    }
}

pub type SharedDb = Arc<RwLock<Db>>;

pub fn app() -> Router {
    let db: SharedDb = Arc::new(RwLock::new(Db::default()));
    Router::new()
        .merge(notes::router())
        .merge(tags::router())
        .merge(tasks::router())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
