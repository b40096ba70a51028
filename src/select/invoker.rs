// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::paginator::{Page, Paginator};
use super::{CancelToken, Marker, Operation, PagedOperation, Parameters, Selected, Selector};
use crate::common::{AlwaysProceed, AnyhowError, ClientContext, ConfirmPolicy, Error, SelectConfig};
use crate::log::StringLogger;
use futures::stream::BoxStream;
use serde_json::Value;

/// Substrings which identify a failure to resolve the service endpoint's host name.
const NAME_RESOLUTION_HINTS: [&str; 5] = [
    "dns error",
    "failed to lookup address",
    "name or service not known",
    "no such host",
    "nodename nor servname",
];

/// Makes one remote call and translates its fault.
pub async fn invoke<O: Operation>(
    operation: &O,
    context: &ClientContext,
    request: O::Request,
) -> Result<O::Response, Error> {
    operation
        .invoke(context, request)
        .await
        .map_err(|fault| translate_fault(fault, label::<O>(), context))
}

/// Wraps a remote fault, rewording name resolution failures.
pub fn translate_fault(fault: AnyhowError, label: String, context: &ClientContext) -> Error {
    if is_name_resolution_failure(&fault) {
        let message = format!(
            "{label}: cannot resolve the service endpoint in region {}; check the region and endpoint configuration ({})",
            context.region_name(),
            fault.root_cause()
        );
        Error::NameResolution(fault, message)
    } else {
        Error::Service(fault, label)
    }
}

fn is_name_resolution_failure(fault: &AnyhowError) -> bool {
    fault.chain().any(|cause| {
        let text = cause.to_string().to_ascii_lowercase();
        NAME_RESOLUTION_HINTS.iter().any(|hint| text.contains(hint))
    })
}

pub(crate) fn label<O: Operation>() -> String {
    format!("{}:{}", O::SERVICE, O::NAME)
}

enum Projection<R> {
    Default,
    Expression(String),
    Selector(Selector<R>),
}

/// A single invocation of an operation, configured with a builder.
///
/// # Example
///
/// Invocation::new(&DescribeUsers, &context).parameter("OrganizationId", "d-1234").select("Users").pages()
pub struct Invocation<'a, O: Operation> {
    cancel: CancelToken,
    confirm: &'a dyn ConfirmPolicy,
    context: &'a ClientContext,
    force: bool,
    logger: StringLogger,
    max_pages: Option<usize>,
    no_auto_iteration: bool,
    operation: &'a O,
    parameters: Parameters,
    pass_thru: bool,
    projection: Projection<O::Response>,
}

impl<'a, O: Operation> Invocation<'a, O> {
    /// Starts an invocation of `operation` using the credentials and region of `context`.
    pub fn new(operation: &'a O, context: &'a ClientContext) -> Self {
        Self {
            cancel: CancelToken::default(),
            confirm: &AlwaysProceed,
            context,
            force: false,
            logger: StringLogger::default(),
            max_pages: None,
            no_auto_iteration: false,
            operation,
            parameters: Parameters::default(),
            pass_thru: false,
            projection: Projection::Default,
        }
    }

    /// Observes `cancel` between pages.
    pub fn cancel(self, cancel: CancelToken) -> Self {
        Self { cancel, ..self }
    }

    /// Applies debug logging and the page ceiling of `select_config`. The logger set so
    /// far is kept.
    pub fn configure(self, select_config: &SelectConfig) -> Result<Self, Error> {
        let settings = select_config.select()?;
        let logger = if select_config.debug() {
            self.logger.clone().with_debug(true)
        } else {
            self.logger.clone()
        };
        Ok(Self {
            logger,
            max_pages: settings.max_pages.or(self.max_pages),
            ..self
        })
    }

    /// Consults `confirm` before a mutating call.
    pub fn confirm(self, confirm: &'a dyn ConfirmPolicy) -> Self {
        Self { confirm, ..self }
    }

    /// Skips confirmation.
    pub fn force(self, force: bool) -> Self {
        Self { force, ..self }
    }

    /// Records calls in `logger`.
    pub fn logger(self, logger: StringLogger) -> Self {
        Self { logger, ..self }
    }

    /// Stops an auto-iterating walk after `max_pages` pages.
    pub fn max_pages(self, max_pages: usize) -> Self {
        Self {
            max_pages: Some(max_pages),
            ..self
        }
    }

    /// Binds one parameter.
    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(name, value);
        self
    }

    /// Binds every parameter of `parameters`.
    pub fn parameters(mut self, parameters: Parameters) -> Self {
        for (name, value) in parameters.iter() {
            self.parameters.insert(name, value.clone());
        }
        self
    }

    /// Echoes the operation's pass-through parameter instead of projecting the response.
    pub fn pass_thru(self, pass_thru: bool) -> Self {
        Self { pass_thru, ..self }
    }

    /// Projects through `expression`: `*`, a field name, or `^Parameter`.
    pub fn select(self, expression: impl Into<String>) -> Self {
        Self {
            projection: Projection::Expression(expression.into()),
            ..self
        }
    }

    /// Projects through an already resolved selector.
    pub fn selector(self, selector: Selector<O::Response>) -> Self {
        Self {
            projection: Projection::Selector(selector),
            ..self
        }
    }

    /// Makes the call and projects its response. Returns `Ok(None)` if confirmation was
    /// declined, in which case nothing was sent.
    pub async fn send(self) -> Result<Option<Selected<O::Response>>, Error> {
        let (parameters, selector, request) = self.prepare()?;
        if !self.confirmed(&parameters) {
            return Ok(None);
        }
        if selector.is_parameter() && !O::MUTATING {
            self.logger
                .trace(format!("{} not sent, echoing {selector:?}", label::<O>()));
            return Ok(selector.project(None));
        }
        let response = self.logger.call(
            label::<O>(),
            invoke(self.operation, self.context, request).await,
        )?;
        Ok(selector.project(Some(response)))
    }

    /// Same as `send`, on a private single-threaded runtime. Must not be called from
    /// within an async context.
    pub fn send_blocking(self) -> Result<Option<Selected<O::Response>>, Error> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| runtime_error(label::<O>(), e))?;
        runtime.block_on(self.send())
    }

    fn confirmed(&self, parameters: &Parameters) -> bool {
        if !O::MUTATING || self.force {
            return true;
        }
        let resource_id = resource_id::<O>(parameters);
        let proceed = self.confirm.proceed(O::NAME, &resource_id);
        if !proceed {
            self.logger.trace(format!(
                "{} declined for resource {resource_id}",
                label::<O>()
            ));
        }
        proceed
    }

    /// Validates everything the call depends on: parameters, projection and request.
    fn prepare(&self) -> Result<(Parameters, Selector<O::Response>, O::Request), Error> {
        let parameters = self.parameters.bind(O::PARAMETERS, O::NAME)?;
        let selector = match (&self.projection, self.pass_thru) {
            (Projection::Default, false) => Selector::resolve::<O>(O::DEFAULT_SELECT, &parameters)?,
            (Projection::Expression(expression), false) => {
                Selector::resolve::<O>(expression, &parameters)?
            }
            (Projection::Selector(selector), false) => selector.clone(),
            (Projection::Default, true) => {
                let name = O::PASS_THRU.ok_or_else(|| {
                    Error::argument(
                        "PassThru",
                        format!("{} has no pass-through parameter", O::NAME),
                    )
                })?;
                Selector::resolve::<O>(&format!("^{name}"), &parameters)?
            }
            (_, true) => {
                return Err(Error::argument(
                    "PassThru",
                    "pass-through cannot be used when a projection is specified",
                ))
            }
        };
        let request = parameters.to_request(O::NAME)?;
        Ok((parameters, selector, request))
    }
}

impl<'a, O: PagedOperation> Invocation<'a, O> {
    /// Starts from `marker`, which also switches to manual paging.
    pub fn marker(self, marker: impl Into<String>) -> Self {
        self.parameter(O::MARKER, marker.into())
    }

    /// Fetches only one page.
    pub fn no_auto_iteration(self, no_auto_iteration: bool) -> Self {
        Self {
            no_auto_iteration,
            ..self
        }
    }

    /// Validates the invocation, then returns the pages as a stream. Nothing is sent
    /// until the stream is polled. A failed page ends the stream after the pages before it.
    pub fn pages(self) -> Result<BoxStream<'a, Result<Page<O::Response>, Error>>, Error> {
        let (parameters, selector, request) = self.prepare()?;
        if !self.confirmed(&parameters) {
            return Ok(Box::pin(futures::stream::empty()));
        }
        let marker = Marker::normalize(
            parameters
                .get(O::MARKER)
                .and_then(Value::as_str)
                .map(str::to_owned),
        );
        // An empty marker is unbound once validated, but still asks for one page.
        let manual = self.no_auto_iteration || self.parameters.is_bound(O::MARKER);
        Ok(Paginator::new(
            self.operation,
            self.context,
            request,
            selector,
            marker,
            manual,
        )
        .cancel(self.cancel)
        .logger(self.logger)
        .max_pages(self.max_pages)
        .into_stream())
    }
}

/// A local failure to start the blocking runtime, which is never a remote fault.
pub(crate) fn runtime_error(label: String, error: std::io::Error) -> Error {
    Error::Config(format!("{label}: cannot start runtime: {error}"))
}

/// The resource a mutating call acts on: the pass-through parameter, or else the first
/// required parameter.
fn resource_id<O: Operation>(parameters: &Parameters) -> String {
    O::PASS_THRU
        .or_else(|| O::PARAMETERS.iter().find(|p| p.required).map(|p| p.name))
        .and_then(|name| parameters.get(name))
        .map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_default()
}
