//! Paginated responses

use super::envelope::{Page, PageParser};
use crate::error::{Error, Result};
use crate::request::{Execution, Executor, RequestDescriptor};
use futures::stream::{self, Stream, StreamExt};
use tracing::debug;
use url::Url;

/// One page of a collection
///
/// Holds the parser used for this page so that every following page is
/// decoded the same way.
pub struct PaginatedApiResponse<T> {
    page: Result<Vec<T>>,
    next_page: Option<Url>,
    parser: PageParser<T>,
    executor: Executor,
}

impl<T: Send + 'static> PaginatedApiResponse<T> {
    /// Execute the descriptor of a first page
    pub async fn fetch(
        executor: &Executor,
        parser: PageParser<T>,
        descriptor: RequestDescriptor<Page<T>>,
    ) -> Self {
        let execution = executor.execute(descriptor).await;
        Self::from_execution(execution, parser, executor.clone())
    }

    /// Wrap an executed page request
    ///
    /// A failed request yields a failed page with no next locator.
    pub fn from_execution(
        execution: Execution<Page<T>>,
        parser: PageParser<T>,
        executor: Executor,
    ) -> Self {
        let (page, next_page) = match execution.result {
            Ok(page) => (page.items, page.next),
            Err(e) => (Err(e), None),
        };

        Self {
            page,
            next_page,
            parser,
            executor,
        }
    }

    /// Borrow the items of this page
    pub fn page(&self) -> &Result<Vec<T>> {
        &self.page
    }

    /// Take the items of this page
    pub fn into_page(self) -> Result<Vec<T>> {
        self.page
    }

    /// Locator of the next page
    pub fn next_page(&self) -> Option<&Url> {
        self.next_page.as_ref()
    }

    /// Check whether another page can be fetched
    pub fn has_next_page(&self) -> bool {
        self.next_page.is_some()
    }

    /// Fetch the next page
    ///
    /// Returns `Error::NoMorePages` without any request when there is no next
    /// locator. A failed fetch is reported through the new response's page.
    pub async fn advance(&self) -> Result<Self> {
        let url = self.next_page.clone().ok_or(Error::NoMorePages)?;
        debug!("Advancing to {url}");
        let descriptor = self.parser.descriptor(url);
        Ok(Self::fetch(&self.executor, self.parser.clone(), descriptor).await)
    }

    /// Turn this response into a lazy stream of pages
    ///
    /// Yields this page first, then fetches each following page only when
    /// polled. Ends after the last page or after the first failed page.
    pub fn into_pages(self) -> impl Stream<Item = Result<Vec<T>>> {
        let (first, rest) = self.split();

        let rest = stream::unfold(rest, |rest| async move {
            let response = rest?.advance().await.ok()?;
            Some(response.split())
        });

        stream::once(async move { first }).chain(rest)
    }

    /// Separate the page from a response that can still be advanced
    fn split(self) -> (Result<Vec<T>>, Option<Self>) {
        let Self {
            page,
            next_page,
            parser,
            executor,
        } = self;

        let rest = match (&page, next_page) {
            (Ok(_), Some(next_page)) => Some(Self {
                page: Ok(Vec::new()),
                next_page: Some(next_page),
                parser,
                executor,
            }),
            _ => None,
        };

        (page, rest)
    }
}

impl<T> std::fmt::Debug for PaginatedApiResponse<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let page = match &self.page {
            Ok(items) => format!("{} items", items.len()),
            Err(e) => format!("error: {e}"),
        };
        f.debug_struct("PaginatedApiResponse")
            .field("page", &page)
            .field("next_page", &self.next_page.as_ref().map(Url::as_str))
            .finish_non_exhaustive()
    }
}
