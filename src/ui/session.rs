use crate::config::ExhaustionPolicy;
use crate::core::branch::BranchRecord;
use crate::core::deletion::DeletionService;
use crate::core::git::GitOperations;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    MoveUp,
    MoveDown,
    DeleteCurrent,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Browsing,
    Empty,
    Terminated,
}

/// Line shown under the table after a deletion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Deleted(String),
    Error(String),
}

/// Interactive review of a working set of branches.
///
/// The session owns its records and cursor outright; the only mutation is
/// removing a record after git confirms the deletion.
pub struct InteractiveSession<'a, G: GitOperations + ?Sized> {
    branches: Vec<BranchRecord>,
    cursor: usize,
    state: SessionState,
    status: Option<StatusMessage>,
    on_exhausted: ExhaustionPolicy,
    deleter: DeletionService<'a, G>,
}

impl<'a, G: GitOperations + ?Sized> InteractiveSession<'a, G> {
    pub fn new(branches: Vec<BranchRecord>, git: &'a G, on_exhausted: ExhaustionPolicy) -> Self {
        let state = if branches.is_empty() {
            SessionState::Empty
        } else {
            SessionState::Browsing
        };

        Self {
            branches,
            cursor: 0,
            state,
            status: None,
            on_exhausted,
            deleter: DeletionService::new(git),
        }
    }

    pub fn branches(&self) -> &[BranchRecord] {
        &self.branches
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn current(&self) -> Option<&BranchRecord> {
        self.branches.get(self.cursor)
    }

    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }

    pub fn handle(&mut self, event: SessionEvent) -> SessionState {
        if self.is_terminated() {
            return self.state;
        }

        match event {
            SessionEvent::MoveUp => self.cursor = self.cursor.saturating_sub(1),
            SessionEvent::MoveDown => {
                self.cursor = (self.cursor + 1).min(self.branches.len().saturating_sub(1))
            }
            SessionEvent::DeleteCurrent => self.delete_current(),
            SessionEvent::Quit => self.state = SessionState::Terminated,
        }

        debug!(
            event = "ui.session.event_handled",
            input = ?event,
            state = ?self.state,
            cursor = self.cursor
        );
        self.state
    }

    fn delete_current(&mut self) {
        if self.state == SessionState::Empty {
            return;
        }

        let name = match self.current() {
            Some(record) => record.name.clone(),
            None => return,
        };

        match self.deleter.delete(&name, false) {
            Ok(()) => {
                self.branches.remove(self.cursor);
                self.cursor = self.cursor.min(self.branches.len().saturating_sub(1));
                self.status = Some(StatusMessage::Deleted(name));

                if self.branches.is_empty() {
                    self.state = match self.on_exhausted {
                        ExhaustionPolicy::Quit => SessionState::Terminated,
                        ExhaustionPolicy::Stay => SessionState::Empty,
                    };
                }
            }
            Err(e) => self.status = Some(StatusMessage::Error(e.to_string())),
        }
    }
}
