//! Catalog listing with category tabs and free-text search.
//!
//! [`CatalogBrowser`] owns a copy of the catalog and the current
//! [`CatalogFilter`]; the visible subset is re-derived synchronously
//! whenever either changes.

use devinterview_core::category::{Category, CategorySelector};
use devinterview_core::search::CatalogFilter;
use devinterview_store::models::question::{Question, QuestionSummary};

use crate::notice::Notice;
use crate::operation::{Operation, Settled};
use crate::session::Session;

/// Whether the catalog has been fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Loaded,
    Failed(Notice),
}

/// What the listing shows right now.
#[derive(Debug, PartialEq, Eq)]
pub enum ListingView<'a> {
    Loading,
    Failed(&'a Notice),
    /// Loaded, but nothing passes the filter.
    NoResults,
    Results(Vec<&'a Question>),
}

#[derive(Debug)]
pub struct CatalogBrowser {
    catalog: Vec<Question>,
    filter: CatalogFilter,
    /// Positions in `catalog` that pass `filter`, ascending.
    visible: Vec<usize>,
    status: LoadStatus,
}

impl Default for CatalogBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogBrowser {
    pub fn new() -> Self {
        Self {
            catalog: Vec::new(),
            filter: CatalogFilter::default(),
            visible: Vec::new(),
            status: LoadStatus::Loading,
        }
    }

    /// Tabs offered above the listing: `All`, then every category.
    pub fn selector_options() -> impl Iterator<Item = CategorySelector> {
        std::iter::once(CategorySelector::All)
            .chain(Category::ALL.into_iter().map(CategorySelector::Only))
    }

    // ---- loading ----

    /// Start fetching the catalog. The listing shows `Loading` until
    /// [`finish_load`](Self::finish_load) is called with the outcome.
    pub fn begin_load(&mut self, session: &Session) -> Operation<Vec<Question>> {
        self.status = LoadStatus::Loading;
        session.call("list_questions", |source| async move {
            source.list_questions().await
        })
    }

    pub fn finish_load(&mut self, settled: Settled<Vec<Question>>) {
        match settled {
            Settled::Succeeded(questions) => {
                tracing::debug!(count = questions.len(), "Catalog loaded");
                self.status = LoadStatus::Loaded;
                self.set_catalog(questions);
            }
            Settled::Failed(failure) => {
                self.status = LoadStatus::Failed(failure.notice());
            }
        }
    }

    /// Fetch the catalog and wait for the outcome.
    pub async fn load(&mut self, session: &Session) {
        let settled = self.begin_load(session).settle().await;
        self.finish_load(settled);
    }

    // ---- inputs ----

    pub fn set_catalog(&mut self, catalog: Vec<Question>) {
        self.catalog = catalog;
        self.recompute();
    }

    pub fn set_selector(&mut self, selector: CategorySelector) {
        self.filter.selector = selector;
        self.recompute();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        self.recompute();
    }

    fn recompute(&mut self) {
        let filter = &self.filter;
        self.visible = self
            .catalog
            .iter()
            .enumerate()
            .filter(|(_, q)| filter.matches(*q))
            .map(|(i, _)| i)
            .collect();
    }

    // ---- outputs ----

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn catalog(&self) -> &[Question] {
        &self.catalog
    }

    /// Records passing the current filter, in catalog order.
    pub fn visible(&self) -> Vec<&Question> {
        self.visible.iter().map(|&i| &self.catalog[i]).collect()
    }

    pub fn summaries(&self) -> Vec<QuestionSummary> {
        self.visible().into_iter().map(Question::summary).collect()
    }

    pub fn view(&self) -> ListingView<'_> {
        match &self.status {
            LoadStatus::Loading => ListingView::Loading,
            LoadStatus::Failed(notice) => ListingView::Failed(notice),
            LoadStatus::Loaded if self.visible.is_empty() => ListingView::NoResults,
            LoadStatus::Loaded => ListingView::Results(self.visible()),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use devinterview_store::seed::example_questions;

    use super::*;
    use crate::testing::ScriptedSource;

    fn loaded() -> CatalogBrowser {
        let mut browser = CatalogBrowser::new();
        browser.set_catalog(example_questions());
        browser.status = LoadStatus::Loaded;
        browser
    }

    fn visible_ids(browser: &CatalogBrowser) -> Vec<i64> {
        browser.visible().iter().map(|q| q.id).collect()
    }

    #[test]
    fn unrestricted_filter_shows_whole_catalog() {
        let browser = loaded();
        assert_eq!(visible_ids(&browser), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn selector_and_query_changes_recompute_immediately() {
        let mut browser = loaded();
        browser.set_selector(CategorySelector::Only(Category::Database));
        assert_eq!(visible_ids(&browser), vec![3]);

        browser.set_selector(CategorySelector::All);
        browser.set_query("JVM");
        assert_eq!(visible_ids(&browser), vec![1]);

        browser.set_selector(CategorySelector::Only(Category::Frontend));
        assert_matches!(browser.view(), ListingView::NoResults);
    }

    #[test]
    fn catalog_change_recomputes_with_current_filter() {
        let mut browser = loaded();
        browser.set_query("jvm");
        let mut catalog = example_questions();
        catalog.retain(|q| q.id != 1);
        browser.set_catalog(catalog);
        assert_matches!(browser.view(), ListingView::NoResults);
    }

    #[test]
    fn selector_options_start_with_all() {
        let options: Vec<_> = CatalogBrowser::selector_options().collect();
        assert_eq!(options.len(), 6);
        assert_eq!(options[0], CategorySelector::All);
        assert_eq!(options[5], CategorySelector::Only(Category::Database));
    }

    #[tokio::test]
    async fn load_populates_catalog() {
        let source = ScriptedSource::seeded();
        let mut browser = CatalogBrowser::new();
        assert_matches!(browser.view(), ListingView::Loading);

        browser.load(&source.session()).await;
        assert_eq!(browser.status(), &LoadStatus::Loaded);
        assert_matches!(browser.view(), ListingView::Results(items) if items.len() == 5);
        assert_eq!(browser.summaries()[0].badge_tone, Category::Backend.badge_tone());
    }

    #[tokio::test]
    async fn failed_load_is_reported_and_retryable() {
        let source = ScriptedSource::seeded();
        source.set_failing(true);
        let mut browser = CatalogBrowser::new();

        browser.load(&source.session()).await;
        assert_matches!(browser.view(), ListingView::Failed(notice) if notice.retryable);

        source.set_failing(false);
        browser.load(&source.session()).await;
        assert_eq!(browser.status(), &LoadStatus::Loaded);
    }

    #[tokio::test(start_paused = true)]
    async fn hanging_load_times_out() {
        let source = ScriptedSource::seeded();
        source.set_hanging(true);
        let mut browser = CatalogBrowser::new();

        browser.load(&source.session()).await;
        assert_matches!(browser.status(), LoadStatus::Failed(_));
    }
}
