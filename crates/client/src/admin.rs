//! Administrative console: create, edit, and delete questions.
//!
//! Mutations are applied to the console's local catalog before the source
//! is asked, then confirmed or undone. On any failure the local catalog is
//! restored to the exact snapshot taken before the mutation.

use chrono::Utc;
use validator::Validate;

use devinterview_core::category::Category;
use devinterview_core::error::CoreError;
use devinterview_core::question::{validate_resource_index, ENTITY_QUESTION};
use devinterview_core::types::DbId;
use devinterview_store::models::question::{LearningResource, Question, QuestionDraft};

use crate::notice::Notice;
use crate::operation::{Failure, Settled};
use crate::session::Session;

// ---------------------------------------------------------------------------
// Editor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(DbId),
}

/// Draft being edited, with draft-local learning resource editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionEditor {
    mode: EditorMode,
    draft: QuestionDraft,
}

impl QuestionEditor {
    /// A blank draft; the category selector starts on Backend.
    pub fn create() -> Self {
        Self {
            mode: EditorMode::Create,
            draft: QuestionDraft {
                category: Some(Category::default()),
                ..QuestionDraft::default()
            },
        }
    }

    /// A draft holding every field of `question`.
    pub fn edit(question: &Question) -> Self {
        Self {
            mode: EditorMode::Edit(question.id),
            draft: QuestionDraft::from(question),
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn draft(&self) -> &QuestionDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut QuestionDraft {
        &mut self.draft
    }

    /// Append a resource to the draft. Title and URL are required.
    pub fn add_resource(&mut self, resource: LearningResource) -> Result<(), CoreError> {
        resource.validate()?;
        self.draft.learning_resources.push(resource);
        Ok(())
    }

    /// Remove the resource at `index`; identical resources are told apart
    /// only by position.
    pub fn remove_resource(&mut self, index: usize) -> Result<LearningResource, CoreError> {
        validate_resource_index(index, self.draft.learning_resources.len())?;
        Ok(self.draft.learning_resources.remove(index))
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        self.draft.validate().map_err(CoreError::from)
    }
}

/// Proof that deletion of a question was requested. Only
/// [`AdminConsole::request_delete`] creates one, so
/// [`AdminConsole::confirm_delete`] cannot be reached without that step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionRequest {
    id: DbId,
    title: String,
}

impl DeletionRequest {
    pub fn id(&self) -> DbId {
        self.id
    }

    /// Title to show in the confirmation prompt.
    pub fn title(&self) -> &str {
        &self.title
    }
}

// ---------------------------------------------------------------------------
// Console
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct AdminConsole {
    catalog: Vec<Question>,
    editor: Option<QuestionEditor>,
    notice: Option<Notice>,
    /// Ids for records not yet confirmed by the source. Negative, so they
    /// never collide with source ids.
    next_provisional_id: DbId,
}

impl Default for AdminConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminConsole {
    pub fn new() -> Self {
        Self {
            catalog: Vec::new(),
            editor: None,
            notice: None,
            next_provisional_id: -1,
        }
    }

    pub fn catalog(&self) -> &[Question] {
        &self.catalog
    }

    pub fn editor(&self) -> Option<&QuestionEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut QuestionEditor> {
        self.editor.as_mut()
    }

    /// Acknowledgement of the last settled action.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Replace the local catalog with the source's.
    pub async fn load(&mut self, session: &Session) -> Settled<()> {
        let settled = session
            .call("list_questions", |source| async move {
                source.list_questions().await
            })
            .settle()
            .await;

        match settled {
            Settled::Succeeded(questions) => {
                self.catalog = questions;
                Settled::Succeeded(())
            }
            Settled::Failed(failure) => self.fail(failure),
        }
    }

    // ---- editor ----

    pub fn open_create(&mut self) -> &mut QuestionEditor {
        self.editor.insert(QuestionEditor::create())
    }

    pub fn open_edit(&mut self, id: DbId) -> Result<&mut QuestionEditor, CoreError> {
        let question = self
            .find(id)
            .ok_or_else(|| CoreError::not_found(ENTITY_QUESTION, id))?;
        let editor = QuestionEditor::edit(question);
        Ok(self.editor.insert(editor))
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    /// Validate the open draft, apply it locally, and send it to the source.
    ///
    /// A draft that fails validation never reaches the source. When the
    /// source call fails the catalog is rolled back and the editor stays
    /// open with the draft intact.
    pub async fn save(&mut self, session: &Session) -> Settled<Question> {
        let Some(editor) = self.editor.as_ref() else {
            return self.fail(CoreError::Validation("No question is open for editing".into()).into());
        };
        if let Err(err) = editor.validate() {
            return self.fail(err.into());
        }

        let mode = editor.mode;
        let draft = editor.draft.clone();
        let snapshot = self.catalog.clone();

        let (local_id, op) = match mode {
            EditorMode::Create => {
                let provisional_id = self.next_provisional_id;
                self.next_provisional_id -= 1;
                self.catalog
                    .push(draft.clone().into_question(provisional_id, Utc::now()));

                let op = session.call("create_question", move |source| async move {
                    source.create_question(draft).await
                });
                (provisional_id, op)
            }
            EditorMode::Edit(id) => {
                let Some(slot) = self.catalog.iter_mut().find(|q| q.id == id) else {
                    return self.fail(CoreError::not_found(ENTITY_QUESTION, id).into());
                };
                let mut replacement = draft.clone().into_question(id, Utc::now());
                replacement.created_at = slot.created_at;
                *slot = replacement;

                let op = session.call("update_question", move |source| async move {
                    source.update_question(id, draft).await
                });
                (id, op)
            }
        };

        match op.settle().await {
            Settled::Succeeded(saved) => {
                if let Some(slot) = self.catalog.iter_mut().find(|q| q.id == local_id) {
                    *slot = saved.clone();
                }
                tracing::info!(question_id = saved.id, ?mode, "Question saved");
                self.editor = None;
                self.notice = Some(Notice::success("Question saved"));
                Settled::Succeeded(saved)
            }
            Settled::Failed(failure) => {
                self.rollback(snapshot, "save");
                self.fail(failure)
            }
        }
    }

    // ---- deletion ----

    /// First step of deletion: name the record to be removed.
    pub fn request_delete(&self, id: DbId) -> Result<DeletionRequest, CoreError> {
        let question = self
            .find(id)
            .ok_or_else(|| CoreError::not_found(ENTITY_QUESTION, id))?;
        Ok(DeletionRequest {
            id,
            title: question.title.clone(),
        })
    }

    /// Second step of deletion: remove locally, then from the source.
    pub async fn confirm_delete(&mut self, session: &Session, request: DeletionRequest) -> Settled<()> {
        let id = request.id;
        let Some(position) = self.catalog.iter().position(|q| q.id == id) else {
            return self.fail(CoreError::not_found(ENTITY_QUESTION, id).into());
        };

        let snapshot = self.catalog.clone();
        self.catalog.remove(position);

        let settled = session
            .call("delete_question", move |source| async move {
                source.delete_question(id).await
            })
            .settle()
            .await;

        match settled {
            Settled::Succeeded(()) => {
                tracing::info!(question_id = id, "Question deleted");
                if self.editor.as_ref().map(|e| e.mode) == Some(EditorMode::Edit(id)) {
                    self.editor = None;
                }
                self.notice = Some(Notice::success(format!("Deleted \"{}\"", request.title)));
                Settled::Succeeded(())
            }
            Settled::Failed(failure) => {
                self.rollback(snapshot, "delete");
                self.fail(failure)
            }
        }
    }

    // ---- private helpers ----

    fn find(&self, id: DbId) -> Option<&Question> {
        self.catalog.iter().find(|q| q.id == id)
    }

    fn rollback(&mut self, snapshot: Vec<Question>, action: &'static str) {
        tracing::warn!(action, "Source rejected change, restoring local catalog");
        self.catalog = snapshot;
    }

    fn fail<T>(&mut self, failure: Failure) -> Settled<T> {
        self.notice = Some(failure.notice());
        Settled::Failed(failure)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use assert_matches::assert_matches;

    use devinterview_store::repositories::QuestionRepo;

    use super::*;
    use crate::testing::ScriptedSource;

    async fn loaded_console(source: &std::sync::Arc<ScriptedSource>) -> AdminConsole {
        let mut console = AdminConsole::new();
        assert!(console.load(&source.session()).await.is_succeeded());
        console
    }

    fn ids(console: &AdminConsole) -> Vec<DbId> {
        console.catalog().iter().map(|q| q.id).collect()
    }

    fn fill(editor: &mut QuestionEditor, title: &str) {
        let draft = editor.draft_mut();
        draft.title = title.to_string();
        draft.model_answer = "An answer".to_string();
    }

    // ---- editor ----

    #[test]
    fn new_draft_defaults_to_backend() {
        let editor = QuestionEditor::create();
        assert_eq!(editor.draft().category, Some(Category::Backend));
        assert_eq!(editor.mode(), EditorMode::Create);
    }

    #[test]
    fn resources_are_removed_by_position_among_duplicates() {
        let mut editor = QuestionEditor::create();
        let docs = LearningResource::new("Docs", "https://docs.test");
        editor.add_resource(docs.clone()).unwrap();
        editor
            .add_resource(docs.clone().with_description("second"))
            .unwrap();
        editor.add_resource(docs.clone()).unwrap();

        let removed = editor.remove_resource(1).unwrap();
        assert_eq!(removed.description.as_deref(), Some("second"));
        assert_eq!(editor.draft().learning_resources, vec![docs.clone(), docs]);
    }

    #[test]
    fn incomplete_resource_is_rejected() {
        let mut editor = QuestionEditor::create();
        let err = editor
            .add_resource(LearningResource::new("", "https://x.test"))
            .unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
        assert!(editor.draft().learning_resources.is_empty());
        assert_matches!(editor.remove_resource(0), Err(CoreError::Validation(_)));
    }

    // ---- create ----

    #[tokio::test]
    async fn create_appends_record_with_source_id() {
        let source = ScriptedSource::seeded();
        let mut console = loaded_console(&source).await;

        fill(console.open_create(), "What is a mutex?");
        let saved = console.save(&source.session()).await.into_result().unwrap();

        assert!(saved.id > 5);
        assert_eq!(ids(&console), vec![1, 2, 3, 4, 5, saved.id]);
        assert!(console.editor().is_none());
        assert!(!console.notice().unwrap().is_error());
        assert_eq!(source.store().question_count().await, 6);
    }

    #[tokio::test]
    async fn create_with_empty_title_never_reaches_source() {
        let source = ScriptedSource::seeded();
        let mut console = loaded_console(&source).await;
        let calls = source.calls();

        fill(console.open_create(), "");
        let settled = console.save(&source.session()).await;

        assert_matches!(settled, Settled::Failed(Failure::Rejected(CoreError::Validation(_))));
        assert_eq!(console.catalog().len(), 5);
        assert_eq!(source.calls(), calls);
        assert!(console.editor().is_some());
    }

    #[tokio::test]
    async fn failed_create_restores_snapshot() {
        let source = ScriptedSource::seeded();
        let mut console = loaded_console(&source).await;
        let before = console.catalog().to_vec();

        source.set_failing(true);
        fill(console.open_create(), "What is a mutex?");
        let settled = console.save(&source.session()).await;

        assert_matches!(settled, Settled::Failed(f) if f.is_retryable());
        assert_eq!(console.catalog(), before.as_slice());
        assert_eq!(console.editor().unwrap().draft().title, "What is a mutex?");
        assert!(console.notice().unwrap().retryable);
    }

    #[tokio::test(start_paused = true)]
    async fn timed_out_create_restores_snapshot() {
        let source = ScriptedSource::seeded();
        let mut console = loaded_console(&source).await;
        let before = console.catalog().to_vec();

        source.set_hanging(true);
        fill(console.open_create(), "What is a mutex?");
        let started = tokio::time::Instant::now();
        let settled = console.save(&source.session()).await;

        assert_eq!(settled, Settled::Failed(Failure::TimedOut));
        assert!(started.elapsed() >= Duration::from_secs(10));
        assert_eq!(console.catalog(), before.as_slice());
    }

    // ---- update ----

    #[tokio::test]
    async fn update_replaces_in_place() {
        let source = ScriptedSource::seeded();
        let mut console = loaded_console(&source).await;

        let editor = console.open_edit(2).unwrap();
        editor.draft_mut().title = "Reconciliation".to_string();
        let saved = console.save(&source.session()).await.into_result().unwrap();

        assert_eq!(saved.id, 2);
        assert_eq!(ids(&console), vec![1, 2, 3, 4, 5]);
        assert_eq!(console.catalog()[1].title, "Reconciliation");
        let stored = QuestionRepo::find_by_id(source.store(), 2).await.unwrap();
        assert_eq!(stored.title, "Reconciliation");
    }

    #[tokio::test]
    async fn failed_update_restores_snapshot() {
        let source = ScriptedSource::seeded();
        let mut console = loaded_console(&source).await;
        let before = console.catalog().to_vec();

        console.open_edit(3).unwrap().draft_mut().title = "Changed".to_string();
        source.set_failing(true);
        assert!(!console.save(&source.session()).await.is_succeeded());
        assert_eq!(console.catalog(), before.as_slice());
    }

    #[tokio::test]
    async fn editing_unknown_question_is_not_found() {
        let source = ScriptedSource::seeded();
        let mut console = loaded_console(&source).await;
        assert_matches!(console.open_edit(999), Err(CoreError::NotFound { .. }));
    }

    // ---- delete ----

    #[tokio::test]
    async fn delete_is_two_step_and_keeps_order() {
        let source = ScriptedSource::seeded();
        let mut console = loaded_console(&source).await;

        let request = console.request_delete(3).unwrap();
        assert_eq!(request.id(), 3);
        assert!(!request.title().is_empty());
        assert_eq!(console.catalog().len(), 5);

        let settled = console.confirm_delete(&source.session(), request).await;
        assert_eq!(settled, Settled::Succeeded(()));
        assert_eq!(ids(&console), vec![1, 2, 4, 5]);
        assert!(QuestionRepo::find_by_id(source.store(), 3).await.is_none());
    }

    #[tokio::test]
    async fn failed_delete_restores_record_at_its_position() {
        let source = ScriptedSource::seeded();
        let mut console = loaded_console(&source).await;
        let before = console.catalog().to_vec();

        let request = console.request_delete(3).unwrap();
        source.set_failing(true);
        let settled = console.confirm_delete(&source.session(), request).await;

        assert!(!settled.is_succeeded());
        assert_eq!(console.catalog(), before.as_slice());
        assert!(console.notice().unwrap().is_error());
    }

    #[tokio::test]
    async fn deleting_the_edited_question_closes_editor() {
        let source = ScriptedSource::seeded();
        let mut console = loaded_console(&source).await;

        console.open_edit(5).unwrap();
        let request = console.request_delete(5).unwrap();
        console.confirm_delete(&source.session(), request).await;
        assert!(console.editor().is_none());
    }

    #[tokio::test]
    async fn request_for_unknown_question_is_not_found() {
        let source = ScriptedSource::seeded();
        let console = loaded_console(&source).await;
        assert_matches!(console.request_delete(42), Err(CoreError::NotFound { .. }));
    }
}
