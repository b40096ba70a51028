// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::invoker::{invoke, label};
use super::{CancelToken, Marker, PagedOperation, Selected, Selector};
use crate::common::{ClientContext, Error};
use crate::log::StringLogger;
use futures::stream::{BoxStream, StreamExt};
use std::mem;

/// One unit of paginated output.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<R> {
    /// 1-based number of the page. For an echo emitted after the walk, the number of
    /// pages fetched.
    pub number: usize,
    /// The projected page, or the echoed parameter.
    pub selected: Selected<R>,
    /// Resubmit this marker to fetch the following page.
    pub next_marker: Option<Marker>,
}

enum PageState {
    Fetching,
    Flushing,
    Stalled(Marker),
    Done,
}

/// Walks a list operation page by page, advancing the marker until it runs out.
pub(crate) struct Paginator<'a, O: PagedOperation> {
    cancel: CancelToken,
    context: &'a ClientContext,
    fetched: usize,
    logger: StringLogger,
    manual: bool,
    marker: Option<Marker>,
    max_pages: Option<usize>,
    operation: &'a O,
    request: O::Request,
    selector: Selector<O::Response>,
    state: PageState,
}

impl<'a, O: PagedOperation> Paginator<'a, O> {
    pub(crate) fn new(
        operation: &'a O,
        context: &'a ClientContext,
        request: O::Request,
        selector: Selector<O::Response>,
        marker: Option<Marker>,
        manual: bool,
    ) -> Self {
        Self {
            cancel: CancelToken::default(),
            context,
            fetched: 0,
            logger: StringLogger::default(),
            manual,
            marker,
            max_pages: None,
            operation,
            request,
            selector,
            state: PageState::Fetching,
        }
    }

    pub(crate) fn cancel(self, cancel: CancelToken) -> Self {
        Self { cancel, ..self }
    }

    pub(crate) fn logger(self, logger: StringLogger) -> Self {
        Self { logger, ..self }
    }

    pub(crate) fn max_pages(self, max_pages: Option<usize>) -> Self {
        Self { max_pages, ..self }
    }

    pub(crate) fn into_stream(self) -> BoxStream<'a, Result<Page<O::Response>, Error>> {
        futures::stream::try_unfold(self, |mut paginator| async move {
            let page = paginator.step().await?;
            Ok::<_, Error>(page.map(|page| (page, paginator)))
        })
        .boxed()
    }

    /// Advances until the next page to emit, or the end of the walk.
    async fn step(&mut self) -> Result<Option<Page<O::Response>>, Error> {
        loop {
            match mem::replace(&mut self.state, PageState::Done) {
                PageState::Done => return Ok(None),
                PageState::Stalled(marker) => {
                    return Err(Error::Paging(format!(
                        "{} returned marker {marker} twice in a row",
                        label::<O>()
                    )))
                }
                PageState::Flushing => {
                    return Ok(self.selector.project(None).map(|selected| Page {
                        number: self.fetched,
                        selected,
                        next_marker: self.marker.clone(),
                    }))
                }
                PageState::Fetching => {
                    if let Some(page) = self.fetch().await? {
                        return Ok(Some(page));
                    }
                }
            }
        }
    }

    /// Fetches one page and decides what follows it. Returns the page unless an echo
    /// defers output until the walk is over.
    async fn fetch(&mut self) -> Result<Option<Page<O::Response>>, Error> {
        if self.cancel.is_cancelled() {
            self.logger
                .warn(format!("{} cancelled after {} pages", label::<O>(), self.fetched));
            return Err(Error::Cancelled(label::<O>()));
        }
        if let Some(max_pages) = self.max_pages.filter(|&max| self.fetched >= max) {
            return Err(Error::Paging(format!(
                "{} stopped after {max_pages} pages",
                label::<O>()
            )));
        }
        let number = self.fetched + 1;
        let mut request = self.request.clone();
        O::set_marker(&mut request, self.marker.clone());
        let response = self.logger.call(
            format!("{} page {number}", label::<O>()),
            invoke(self.operation, self.context, request).await,
        )?;
        self.fetched = number;

        let next_marker = Marker::normalize(O::next_marker(&response).map(String::from));
        let sent = mem::replace(&mut self.marker, next_marker);
        self.state = match &self.marker {
            _ if self.manual => PageState::Flushing,
            None => PageState::Flushing,
            Some(next) if sent.as_ref() == Some(next) => PageState::Stalled(next.clone()),
            Some(_) => PageState::Fetching,
        };

        if self.selector.is_parameter() {
            return Ok(None);
        }
        Ok(self.selector.project(Some(response)).map(|selected| Page {
            number,
            selected,
            next_marker: self.marker.clone(),
        }))
    }
}
