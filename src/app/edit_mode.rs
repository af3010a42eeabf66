//! Edit-mode state machine
//!
//! Distinguishes "creating a new record" from "updating an existing
//! one" so a single input path serves both, instead of rewiring which
//! handler an action invokes. One controller per entity type; the four
//! entity types are independent and may be mid-edit simultaneously.

use crate::domain::Record;
use crate::error::{Error, Result};
use crate::infrastructure::persistence::FileRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Create,
    Editing(u32),
}

/// Per-entity edit controller holding the current mode and, while
/// editing, a buffer pre-filled with the target record's field values.
#[derive(Debug)]
pub struct EditController<R: Record> {
    mode: EditMode,
    buffer: Option<R>,
}

impl<R: Record> Default for EditController<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> EditController<R> {
    pub fn new() -> Self {
        Self {
            mode: EditMode::Create,
            buffer: None,
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing(_))
    }

    /// Pre-filled field values of the record being edited.
    pub fn buffer(&self) -> Option<&R> {
        self.buffer.as_ref()
    }

    /// Transition `Create -> Editing(id)`, pre-filling the buffer from
    /// the target record.
    pub fn begin_edit(&mut self, repo: &FileRepository<R>, id: u32) -> Result<&R> {
        let record = repo
            .get(id)
            .ok_or(Error::NotFound { kind: R::KIND, id })?
            .clone();
        self.mode = EditMode::Editing(id);
        Ok(&*self.buffer.insert(record))
    }

    /// Dispatch on the current mode: insert in `Create`, replace in
    /// `Editing(id)`. Either way the controller returns to `Create`.
    /// On a rejected submission (validation/duplicate) the mode is kept
    /// so the caller can correct the input and resubmit.
    pub fn submit(&mut self, repo: &mut FileRepository<R>, record: R) -> Result<R> {
        let stored = match self.mode {
            EditMode::Create => repo.create(record)?.clone(),
            EditMode::Editing(id) => repo.update(id, record)?.clone(),
        };
        self.mode = EditMode::Create;
        self.buffer = None;
        Ok(stored)
    }

    /// Leave edit mode without touching the repository.
    pub fn cancel(&mut self) {
        self.mode = EditMode::Create;
        self.buffer = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Driver;
    use tempfile::tempdir;

    #[test]
    fn submit_in_create_mode_inserts() {
        let dir = tempdir().unwrap();
        let mut repo = FileRepository::<Driver>::open(dir.path()).unwrap();
        let mut ctl = EditController::new();

        let stored = ctl.submit(&mut repo, Driver::new("Maria").unwrap()).unwrap();
        assert_eq!(stored.id, 1);
        assert_eq!(ctl.mode(), EditMode::Create);
    }

    #[test]
    fn submit_in_editing_mode_updates_and_resets() {
        let dir = tempdir().unwrap();
        let mut repo = FileRepository::<Driver>::open(dir.path()).unwrap();
        let mut ctl = EditController::new();
        ctl.submit(&mut repo, Driver::new("Maria").unwrap()).unwrap();

        let buffered = ctl.begin_edit(&repo, 1).unwrap().clone();
        assert_eq!(buffered.name, "Maria");
        assert_eq!(ctl.mode(), EditMode::Editing(1));

        let stored = ctl.submit(&mut repo, Driver::new("Eleni").unwrap()).unwrap();
        assert_eq!(stored.id, 1);
        assert_eq!(repo.len(), 1);
        // No accidental double-submission path: back in Create mode
        assert_eq!(ctl.mode(), EditMode::Create);
        assert!(ctl.buffer().is_none());
    }

    #[test]
    fn cancel_leaves_repository_untouched() {
        let dir = tempdir().unwrap();
        let mut repo = FileRepository::<Driver>::open(dir.path()).unwrap();
        let mut ctl = EditController::new();
        ctl.submit(&mut repo, Driver::new("Maria").unwrap()).unwrap();

        ctl.begin_edit(&repo, 1).unwrap();
        ctl.cancel();
        assert_eq!(ctl.mode(), EditMode::Create);
        assert_eq!(repo.get(1).unwrap().name, "Maria");
    }

    #[test]
    fn rejected_submit_keeps_editing_mode() {
        let dir = tempdir().unwrap();
        let mut repo = FileRepository::<Driver>::open(dir.path()).unwrap();
        let mut ctl = EditController::new();
        ctl.submit(&mut repo, Driver::new("Maria").unwrap()).unwrap();
        ctl.submit(&mut repo, Driver::new("Nikos").unwrap()).unwrap();

        ctl.begin_edit(&repo, 2).unwrap();
        let err = ctl.submit(&mut repo, Driver::new("maria").unwrap()).unwrap_err();
        assert!(err.is_input_error());
        assert_eq!(ctl.mode(), EditMode::Editing(2));
    }
}
