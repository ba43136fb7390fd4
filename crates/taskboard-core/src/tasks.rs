//! Task List Controller
//!
//! [`TaskList`] mirrors the server's last answer for the active filter and
//! patches it from mutation responses without re-fetching. A created or
//! toggled task stays visible even when it no longer matches the filter.
//!
//! Every operation is split into a `begin_*` step (validate, clear the error,
//! produce request data) and an `apply_*` step (fold the response in). A
//! failed request only sets the error.

use crate::api::TaskApi;
use crate::domain::{ClientError, ClientResult, StatusFilter, Task, TaskStatus};

/// Text of the new-task inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
}

impl TaskDraft {
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty()
    }
}

/// Identifies one list fetch; only the newest may replace the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    filter: StatusFilter,
}

impl FetchTicket {
    pub fn filter(&self) -> StatusFilter {
        self.filter
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
    filter: StatusFilter,
    draft: TaskDraft,
    error: Option<String>,
    creating: bool,
    generation: u64,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything loaded so far
    ///
    /// The fetch generation keeps counting, so a fetch started before the
    /// reset can never be mistaken for one started after it.
    pub fn reset(&mut self) {
        *self = Self { generation: self.generation, ..Self::default() };
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut TaskDraft {
        &mut self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// A create is in flight; the add button stays disabled
    pub fn is_creating(&self) -> bool {
        self.creating
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn fail(&mut self, err: ClientError) {
        log::warn!("[TASKS] {}", err);
        self.error = Some(err.to_string());
    }

    // ========================
    // List
    // ========================

    /// Switch filter; returns the fetch to run, or `None` if it did not change
    pub fn select_filter(&mut self, filter: StatusFilter) -> Option<FetchTicket> {
        if filter == self.filter {
            return None;
        }
        self.filter = filter;
        Some(self.begin_fetch())
    }

    /// Start a fetch for the current filter
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.error = None;
        self.generation += 1;
        FetchTicket { generation: self.generation, filter: self.filter }
    }

    /// Replace the list with a fetch result
    ///
    /// Returns false when the ticket was superseded and the result dropped.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, result: ClientResult<Vec<Task>>) -> bool {
        if ticket.generation != self.generation {
            log::debug!("[TASKS] Dropping stale {} list", ticket.filter.as_str());
            return false;
        }
        match result {
            Ok(tasks) => self.tasks = tasks,
            Err(err) => self.fail(err),
        }
        true
    }

    // ========================
    // Create
    // ========================

    /// Start a create from the draft
    ///
    /// `None` for a blank title or while another create is in flight; the
    /// state (error included) is left untouched then.
    pub fn begin_create(&mut self) -> Option<TaskDraft> {
        if self.draft.is_blank() || self.creating {
            return None;
        }
        self.error = None;
        self.creating = true;
        Some(self.draft.clone())
    }

    pub fn apply_create(&mut self, result: ClientResult<Task>) {
        self.creating = false;
        match result {
            Ok(task) => {
                self.tasks.insert(0, task);
                self.draft = TaskDraft::default();
            }
            Err(err) => self.fail(err),
        }
    }

    // ========================
    // Toggle
    // ========================

    /// Start a status toggle; returns the status to send
    pub fn begin_toggle(&mut self, id: &str) -> Option<TaskStatus> {
        let status = self.tasks.iter().find(|t| t.id == id)?.status;
        self.error = None;
        Some(status.toggled())
    }

    /// Replace the task with `id` by the server's copy, in place
    pub fn apply_update(&mut self, id: &str, result: ClientResult<Task>) {
        match result {
            Ok(updated) => {
                if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                    *task = updated;
                }
            }
            Err(err) => self.fail(err),
        }
    }

    // ========================
    // Delete
    // ========================

    pub fn begin_delete(&mut self) {
        self.error = None;
    }

    /// Remove the first task with `id`; the others keep their order
    pub fn apply_delete(&mut self, id: &str, result: ClientResult<()>) {
        match result {
            Ok(()) => {
                if let Some(index) = self.tasks.iter().position(|t| t.id == id) {
                    self.tasks.remove(index);
                }
            }
            Err(err) => self.fail(err),
        }
    }
}

/// [`TaskList`] bound to an API and a bearer token
pub struct TaskListController<A> {
    api: A,
    token: String,
    list: TaskList,
}

impl<A: TaskApi> TaskListController<A> {
    pub fn new(api: A, token: impl Into<String>) -> Self {
        Self { api, token: token.into(), list: TaskList::new() }
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    pub fn draft_mut(&mut self) -> &mut TaskDraft {
        self.list.draft_mut()
    }

    /// Fetch for the current filter
    pub async fn refresh(&mut self) {
        let ticket = self.list.begin_fetch();
        self.fetch(ticket).await;
    }

    /// Switch filter, fetching only when it changed
    pub async fn set_filter(&mut self, filter: StatusFilter) {
        if let Some(ticket) = self.list.select_filter(filter) {
            self.fetch(ticket).await;
        }
    }

    async fn fetch(&mut self, ticket: FetchTicket) {
        let result = self.api.list_tasks(&self.token, ticket.filter()).await;
        self.list.apply_fetch(ticket, result);
    }

    /// Create a task from the draft
    pub async fn create(&mut self) {
        let Some(draft) = self.list.begin_create() else {
            return;
        };
        let result = self.api.create_task(&self.token, &draft.title, &draft.description).await;
        self.list.apply_create(result);
    }

    pub async fn toggle_status(&mut self, id: &str) {
        let Some(status) = self.list.begin_toggle(id) else {
            return;
        };
        let result = self.api.update_status(&self.token, id, status).await;
        self.list.apply_update(id, result);
    }

    pub async fn delete(&mut self, id: &str) {
        self.list.begin_delete();
        let result = self.api.delete_task(&self.token, id).await;
        self.list.apply_delete(id, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{task, Call, FakeApi};
    use crate::api::{CREATE_FAILED, DELETE_FAILED};

    fn controller_with(tasks: Vec<Task>) -> TaskListController<FakeApi> {
        let mut controller = TaskListController::new(FakeApi::default(), "tok");
        controller.list.tasks = tasks;
        controller
    }

    fn ids(list: &TaskList) -> Vec<&str> {
        list.tasks().iter().map(|t| t.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_refresh_replaces_list() {
        let mut controller = controller_with(vec![task("old", "Old", TaskStatus::Pending)]);
        controller.api.lists.borrow_mut().push_back(Ok(vec![
            task("1", "A", TaskStatus::Pending),
            task("2", "B", TaskStatus::Completed),
        ]));

        controller.refresh().await;

        assert_eq!(ids(controller.list()), vec!["1", "2"]);
        assert_eq!(
            controller.api.calls(),
            vec![Call::List { token: "tok".into(), filter: StatusFilter::All }]
        );
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_list_and_sets_error() {
        let mut controller = controller_with(vec![task("1", "A", TaskStatus::Pending)]);
        controller.api.lists.borrow_mut().push_back(Err(ClientError::Network("offline".into())));

        controller.refresh().await;

        assert_eq!(ids(controller.list()), vec!["1"]);
        assert_eq!(controller.list().error(), Some("offline"));
    }

    #[tokio::test]
    async fn test_switching_filter_fetches_exactly_once() {
        let mut controller = controller_with(vec![]);
        controller.api.lists.borrow_mut().push_back(Ok(vec![task("1", "A", TaskStatus::Pending)]));

        controller.set_filter(StatusFilter::Pending).await;
        controller.set_filter(StatusFilter::Pending).await;

        assert_eq!(
            controller.api.calls(),
            vec![Call::List { token: "tok".into(), filter: StatusFilter::Pending }]
        );
        assert_eq!(controller.list().filter(), StatusFilter::Pending);
    }

    #[test]
    fn test_stale_fetch_is_dropped() {
        let mut list = TaskList::new();
        let first = list.select_filter(StatusFilter::Completed).unwrap();
        let second = list.select_filter(StatusFilter::Pending).unwrap();

        assert!(list.apply_fetch(second, Ok(vec![task("p", "P", TaskStatus::Pending)])));
        assert!(!list.apply_fetch(first, Ok(vec![task("c", "C", TaskStatus::Completed)])));
        assert_eq!(ids(&list), vec!["p"]);
        assert!(!list.apply_fetch(first, Err(ClientError::Network("late".into()))));
        assert_eq!(list.error(), None);
    }

    #[test]
    fn test_fetch_from_before_reset_is_dropped() {
        let mut list = TaskList::new();
        let before = list.begin_fetch();
        list.draft_mut().title = "half typed".into();

        list.reset();
        assert_eq!(list.draft(), &TaskDraft::default());
        assert_eq!(list.filter(), StatusFilter::All);

        let after = list.begin_fetch();
        assert!(!list.apply_fetch(before, Ok(vec![task("old", "Old", TaskStatus::Pending)])));
        assert!(list.is_empty());
        assert!(list.apply_fetch(after, Ok(vec![task("new", "New", TaskStatus::Pending)])));
        assert_eq!(ids(&list), vec!["new"]);
    }

    #[tokio::test]
    async fn test_blank_title_is_a_silent_noop() {
        let mut controller = controller_with(vec![task("1", "A", TaskStatus::Pending)]);
        controller.list.error = Some("previous".into());
        controller.draft_mut().title = "   \t".into();
        controller.draft_mut().description = "details".into();

        controller.create().await;

        assert!(controller.api.calls().is_empty());
        assert_eq!(ids(controller.list()), vec!["1"]);
        assert_eq!(controller.list().error(), Some("previous"));
        assert_eq!(controller.list().draft().description, "details");
    }

    #[tokio::test]
    async fn test_create_prepends_and_clears_draft() {
        let mut controller = controller_with(vec![task("0", "Existing", TaskStatus::Completed)]);
        controller.list.filter = StatusFilter::Completed;
        controller.api.tasks.borrow_mut().push_back(Ok(task("1", "Buy milk", TaskStatus::Pending)));
        controller.draft_mut().title = "Buy milk".into();

        controller.create().await;

        // Not re-filtered: a pending task shows under "completed" until the next fetch
        assert_eq!(ids(controller.list()), vec!["1", "0"]);
        assert_eq!(controller.list().draft(), &TaskDraft::default());
        assert!(!controller.list().is_creating());
        assert_eq!(
            controller.api.calls(),
            vec![Call::Create { title: "Buy milk".into(), description: String::new() }]
        );
    }

    #[tokio::test]
    async fn test_failed_create_keeps_draft() {
        let mut controller = controller_with(vec![]);
        controller.api.tasks.borrow_mut().push_back(Err(ClientError::Api {
            status: 400,
            message: CREATE_FAILED.into(),
        }));
        controller.draft_mut().title = "Buy milk".into();

        controller.create().await;

        assert!(controller.list().is_empty());
        assert_eq!(controller.list().draft().title, "Buy milk");
        assert_eq!(controller.list().error(), Some(CREATE_FAILED));
        assert!(!controller.list().is_creating());
    }

    #[test]
    fn test_create_while_creating_is_ignored() {
        let mut list = TaskList::new();
        list.draft_mut().title = "A".into();
        assert!(list.begin_create().is_some());
        assert!(list.begin_create().is_none());
    }

    #[tokio::test]
    async fn test_toggle_sends_opposite_and_patches_in_place() {
        let mut controller = controller_with(vec![
            task("1", "A", TaskStatus::Pending),
            task("2", "B", TaskStatus::Pending),
        ]);
        controller.api.tasks.borrow_mut().push_back(Ok(task("1", "A", TaskStatus::Completed)));

        controller.toggle_status("1").await;

        assert_eq!(
            controller.api.calls(),
            vec![Call::Update { id: "1".into(), status: TaskStatus::Completed }]
        );
        let tasks = controller.list().tasks();
        assert_eq!(tasks[0].status, TaskStatus::Completed);
        assert_eq!(tasks[1].status, TaskStatus::Pending);
    }

    #[tokio::test]
    async fn test_toggle_completed_goes_back_to_pending() {
        let mut controller = controller_with(vec![task("1", "A", TaskStatus::Completed)]);
        controller.api.tasks.borrow_mut().push_back(Ok(task("1", "A", TaskStatus::Pending)));

        controller.toggle_status("1").await;

        assert_eq!(controller.api.calls(), vec![Call::Update { id: "1".into(), status: TaskStatus::Pending }]);
        assert_eq!(controller.list().tasks()[0].status, TaskStatus::Pending);
    }

    #[tokio::test]
    async fn test_toggle_unknown_id_sends_nothing() {
        let mut controller = controller_with(vec![task("1", "A", TaskStatus::Pending)]);
        controller.toggle_status("nope").await;
        assert!(controller.api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_failed_toggle_leaves_status() {
        let mut controller = controller_with(vec![task("1", "A", TaskStatus::Pending)]);
        controller.api.tasks.borrow_mut().push_back(Err(ClientError::Network("offline".into())));

        controller.toggle_status("1").await;

        assert_eq!(controller.list().tasks()[0].status, TaskStatus::Pending);
        assert_eq!(controller.list().error(), Some("offline"));
    }

    #[tokio::test]
    async fn test_delete_removes_one_and_keeps_order() {
        let mut controller = controller_with(vec![
            task("1", "A", TaskStatus::Pending),
            task("2", "B", TaskStatus::Pending),
            task("3", "C", TaskStatus::Completed),
        ]);
        controller.api.deletes.borrow_mut().push_back(Ok(()));

        controller.delete("2").await;

        assert_eq!(ids(controller.list()), vec!["1", "3"]);
        assert_eq!(controller.api.calls(), vec![Call::Delete { id: "2".into() }]);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_task() {
        let mut controller = controller_with(vec![task("1", "A", TaskStatus::Pending)]);
        controller.api.deletes.borrow_mut().push_back(Err(ClientError::Api {
            status: 404,
            message: DELETE_FAILED.into(),
        }));

        controller.delete("1").await;

        assert_eq!(ids(controller.list()), vec!["1"]);
        assert_eq!(controller.list().error(), Some(DELETE_FAILED));
    }

    #[tokio::test]
    async fn test_latest_error_wins_and_success_clears_it() {
        let mut controller = controller_with(vec![task("1", "A", TaskStatus::Pending)]);
        controller.api.deletes.borrow_mut().push_back(Err(ClientError::Network("first".into())));
        controller.api.lists.borrow_mut().push_back(Err(ClientError::Network("second".into())));
        controller.api.lists.borrow_mut().push_back(Ok(vec![]));

        controller.delete("1").await;
        controller.refresh().await;
        assert_eq!(controller.list().error(), Some("second"));

        controller.refresh().await;
        assert_eq!(controller.list().error(), None);
    }
}
