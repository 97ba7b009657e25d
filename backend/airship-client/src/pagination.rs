//! Cursor-following iteration over list endpoints.
//!
//! Airship has exposed two cursor styles for listing named users over time, and
//! they do not compose. The caller picks one per stream via [`PageCursor`].

use crate::client::AirshipClient;
use crate::credentials::Credentials;
use crate::error::ApiError;
use crate::operation::Operation;
use crate::transport::{HttpMethod, Transport};

use std::collections::{BTreeMap, VecDeque};

use log::{debug, warn};
use serde_json::Value;

const NEXT_PAGE_FIELD: &str = "next_page";
const PAGE_PARAM: &str = "page";
const PAGE_SIZE_PARAM: &str = "page_size";

pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// How the stream advances from one page to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageCursor {
    /// Follow the absolute `next_page` URL of each response, reusing its query string.
    ///
    /// Stops on an empty page or when `next_page` is missing or empty.
    #[default]
    NextPageUrl,
    /// Send `page` (starting at 1) and `page_size`; a short page is the last page.
    PageNumber { page_size: u32 },
}

impl PageCursor {
    pub fn page_number() -> Self {
        PageCursor::PageNumber {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A GET endpoint whose response holds a JSON array of elements.
pub trait ListOperation: Operation {
    /// Response field holding the page's elements, e.g. `named_users`.
    fn items_field(&self) -> &'static str;
}

#[derive(Debug, Clone)]
enum CursorState {
    NextPageUrl { params: BTreeMap<String, String> },
    PageNumber { page: u32, page_size: u32 },
}

/// One page request: the list's endpoint and query plus the cursor parameters.
struct PageRequest {
    endpoint: String,
    query: BTreeMap<String, String>,
}

impl Operation for PageRequest {
    fn endpoint(&self) -> String {
        self.endpoint.clone()
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn query(&self) -> BTreeMap<String, String> {
        self.query.clone()
    }
}

/// A lazy, finite, non-restartable sequence of list elements.
///
/// Buffers at most one page. Page N+1 is requested only after every element of
/// page N has been handed out. A cursor error found while reading page N is
/// returned only after page N's elements. After exhaustion or an error the stream
/// stays finished.
pub struct PageStream<'c, T: Transport, L: ListOperation> {
    client: &'c AirshipClient<T>,
    credentials: Credentials,
    list: L,
    cursor: CursorState,
    buffer: VecDeque<Value>,
    pending_error: Option<ApiError>,
    pages_fetched: usize,
    done: bool,
}

impl<'c, T: Transport, L: ListOperation> PageStream<'c, T, L> {
    pub(crate) fn new(
        client: &'c AirshipClient<T>,
        credentials: Credentials,
        list: L,
        cursor: PageCursor,
    ) -> Result<Self, ApiError> {
        let cursor = match cursor {
            PageCursor::NextPageUrl => CursorState::NextPageUrl {
                params: BTreeMap::new(),
            },
            PageCursor::PageNumber { page_size: 0 } => {
                return Err(ApiError::invalid_argument("page_size must be greater than 0"));
            }
            PageCursor::PageNumber { page_size } => CursorState::PageNumber { page: 1, page_size },
        };

        Ok(Self {
            client,
            credentials,
            list,
            cursor,
            buffer: VecDeque::new(),
            pending_error: None,
            pages_fetched: 0,
            done: false,
        })
    }

    /// Fetch the next element, requesting a new page when the current one is used up.
    ///
    /// Returns `Ok(None)` once all pages have been exhausted.
    pub async fn next(&mut self) -> Result<Option<Value>, ApiError> {
        // A short or empty page can still leave nothing buffered
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some(item));
            }

            if let Some(error) = self.pending_error.take() {
                return Err(error);
            }

            if self.done {
                return Ok(None);
            }

            if let Err(e) = self.fetch_page().await {
                self.done = true;
                return Err(e);
            }
        }
    }

    /// Hand every remaining element to `visit`, in server order.
    ///
    /// Returns the number of elements visited.
    pub async fn for_each<F>(mut self, mut visit: F) -> Result<usize, ApiError>
    where
        F: FnMut(Value),
    {
        let mut visited = 0;
        while let Some(item) = self.next().await? {
            visit(item);
            visited += 1;
        }
        Ok(visited)
    }

    /// Collect all remaining elements into a `Vec`.
    pub async fn collect(mut self) -> Result<Vec<Value>, ApiError> {
        let mut all = Vec::new();
        while let Some(item) = self.next().await? {
            all.push(item);
        }
        Ok(all)
    }

    /// Number of HTTP calls made so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    fn page_query(&self) -> BTreeMap<String, String> {
        let mut query = self.list.query();
        match &self.cursor {
            CursorState::NextPageUrl { params } => {
                query.extend(params.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
            CursorState::PageNumber { page, page_size } => {
                query.insert(PAGE_PARAM.to_string(), page.to_string());
                query.insert(PAGE_SIZE_PARAM.to_string(), page_size.to_string());
            }
        }
        query
    }

    async fn fetch_page(&mut self) -> Result<(), ApiError> {
        let request = PageRequest {
            endpoint: self.list.endpoint(),
            query: self.page_query(),
        };

        let mut page = self.client.call(&self.credentials, &request).await?;
        self.pages_fetched += 1;

        let items = match page.get_mut(self.list.items_field()).map(Value::take) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        };

        debug!(
            "Fetched page {} of {} ({} elements)",
            self.pages_fetched,
            request.endpoint,
            items.len()
        );

        let next_params = match self.cursor {
            CursorState::NextPageUrl { .. } if !items.is_empty() => self.next_page_params(&page),
            _ => Ok(None),
        };
        let item_count = items.len();
        self.buffer.extend(items);

        match &mut self.cursor {
            CursorState::NextPageUrl { params } => match next_params {
                Ok(Some(next)) => *params = next,
                Ok(None) => self.done = true,
                Err(e) => {
                    warn!("next_page of {} is not a valid URL: {e}", request.endpoint);
                    self.done = true;
                    self.pending_error = Some(e);
                }
            },
            CursorState::PageNumber { page, page_size } => {
                if item_count < *page_size as usize {
                    self.done = true;
                } else {
                    *page += 1;
                }
            }
        }

        Ok(())
    }

    /// Query parameters of the response's `next_page` URL, or `None` at the end.
    fn next_page_params(&self, page: &Value) -> Result<Option<BTreeMap<String, String>>, ApiError> {
        let next_page = match page.get(NEXT_PAGE_FIELD).and_then(Value::as_str) {
            Some(next_page) if !next_page.is_empty() => next_page,
            _ => return Ok(None),
        };

        let url = self.client.base_url().join(next_page)?;
        let params: BTreeMap<String, String> = url.query_pairs().into_owned().collect();

        if params.is_empty() {
            // Without a query string the next request would repeat the first page
            warn!("next_page '{next_page}' carries no cursor, stopping pagination");
            return Ok(None);
        }

        Ok(Some(params))
    }
}
