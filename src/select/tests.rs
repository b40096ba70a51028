// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

#[cfg(test)]
mod select_tests {
    use crate::common::{AnyhowError, ClientContext, DryRun, Error, SelectConfig};
    use crate::log::StringLogger;
    use crate::select::{
        CancelToken, Invocation, Marker, Operation, PagedOperation, ParamSpec, Parameters,
        Selected, Selector,
    };
    use async_trait::async_trait;
    use aws_config::{Region, SdkConfig};
    use futures::StreamExt;
    use serde::{Deserialize, Serialize};
    use serde_json::json;
    use std::collections::VecDeque;
    use std::error::Error as StdError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn test_context() -> ClientContext {
        ClientContext::from_sdk_config(SdkConfig::builder().region(Region::new("us-west-2")).build())
    }

    #[derive(Clone, Debug, Default, Deserialize, PartialEq)]
    #[serde(rename_all = "PascalCase")]
    struct Filter {
        state: Option<String>,
        tags: Option<Vec<String>>,
    }

    #[derive(Clone, Debug, Default, Deserialize, PartialEq)]
    #[serde(rename_all = "PascalCase")]
    struct ListThingsRequest {
        owner: Option<String>,
        marker: Option<String>,
        limit: Option<i32>,
        filter: Option<Filter>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize)]
    struct ListThingsResponse {
        items: Vec<String>,
        marker: Option<String>,
    }

    fn page(items: &[&str], marker: Option<&str>) -> Result<ListThingsResponse, String> {
        Ok(ListThingsResponse {
            items: items.iter().map(|s| s.to_string()).collect(),
            marker: marker.map(str::to_owned),
        })
    }

    /// Replays scripted pages and records every request it receives.
    #[derive(Default)]
    struct ListThings {
        cancel_after: Option<(usize, CancelToken)>,
        script: Mutex<VecDeque<Result<ListThingsResponse, String>>>,
        sent: Mutex<Vec<ListThingsRequest>>,
    }

    impl ListThings {
        fn new(script: Vec<Result<ListThingsResponse, String>>) -> Self {
            Self {
                script: Mutex::new(script.into()),
                ..Default::default()
            }
        }

        fn sent_markers(&self) -> Vec<Option<String>> {
            self.sent
                .lock()
                .unwrap()
                .iter()
                .map(|r| r.marker.clone())
                .collect()
        }
    }

    /// The scenario of three pages holding 3, 2 and 1 items.
    fn three_pages() -> ListThings {
        ListThings::new(vec![
            page(&["a", "b", "c"], Some("m1")),
            page(&["d", "e"], Some("m2")),
            page(&["f"], None),
        ])
    }

    #[async_trait]
    impl Operation for ListThings {
        type Request = ListThingsRequest;
        type Response = ListThingsResponse;

        const SERVICE: &'static str = "Test";
        const NAME: &'static str = "ListThings";
        const DEFAULT_SELECT: &'static str = "Items";
        const PARAMETERS: &'static [ParamSpec] = &[
            ParamSpec::optional("Owner"),
            ParamSpec::marker("Marker"),
            ParamSpec::optional("Limit"),
            ParamSpec::optional("Filter.State"),
            ParamSpec::optional("Filter.Tags"),
        ];

        crate::select_fields!(ListThingsResponse { "Items" => items, "Marker" => marker });

        async fn invoke(
            &self,
            _context: &ClientContext,
            request: ListThingsRequest,
        ) -> Result<ListThingsResponse, AnyhowError> {
            let sent = {
                let mut sent = self.sent.lock().unwrap();
                sent.push(request);
                sent.len()
            };
            if let Some((after, cancel)) = &self.cancel_after {
                if sent == *after {
                    cancel.cancel();
                }
            }
            match self.script.lock().unwrap().pop_front() {
                Some(Ok(response)) => Ok(response),
                Some(Err(fault)) => Err(anyhow::anyhow!(fault)),
                None => Err(anyhow::anyhow!("script exhausted")),
            }
        }
    }

    impl PagedOperation for ListThings {
        const MARKER: &'static str = "Marker";

        fn set_marker(request: &mut ListThingsRequest, marker: Option<Marker>) {
            request.marker = marker.map(String::from);
        }

        fn next_marker(response: &ListThingsResponse) -> Option<Marker> {
            response.marker.as_deref().map(Marker::from)
        }
    }

    #[derive(Clone, Debug, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    struct ThingRequest {
        thing_id: String,
    }

    #[derive(Clone, Debug, PartialEq, Serialize)]
    struct ThingResponse {
        name: String,
        request_id: String,
    }

    /// Counts calls and optionally fails them all with `fault`.
    #[derive(Default)]
    struct GetThing {
        calls: AtomicUsize,
        fault: Option<fn() -> AnyhowError>,
    }

    #[async_trait]
    impl Operation for GetThing {
        type Request = ThingRequest;
        type Response = ThingResponse;

        const SERVICE: &'static str = "Test";
        const NAME: &'static str = "GetThing";
        const DEFAULT_SELECT: &'static str = "Name";
        const PARAMETERS: &'static [ParamSpec] = &[ParamSpec::required("ThingId")];

        crate::select_fields!(ThingResponse { "Name" => name, "RequestId" => request_id });

        async fn invoke(
            &self,
            _context: &ClientContext,
            request: ThingRequest,
        ) -> Result<ThingResponse, AnyhowError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.fault {
                Some(fault) => Err(fault()),
                None => Ok(ThingResponse {
                    name: format!("thing {}", request.thing_id),
                    request_id: "r-1".to_string(),
                }),
            }
        }
    }

    #[derive(Default)]
    struct DeleteThing {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Operation for DeleteThing {
        type Request = ThingRequest;
        type Response = ThingResponse;

        const SERVICE: &'static str = "Test";
        const NAME: &'static str = "DeleteThing";
        const DEFAULT_SELECT: &'static str = "*";
        const PARAMETERS: &'static [ParamSpec] = &[ParamSpec::required("ThingId")];
        const MUTATING: bool = true;
        const PASS_THRU: Option<&'static str> = Some("ThingId");

        crate::select_fields!(ThingResponse { "RequestId" => request_id });

        async fn invoke(
            &self,
            _context: &ClientContext,
            _request: ThingRequest,
        ) -> Result<ThingResponse, AnyhowError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ThingResponse {
                name: String::new(),
                request_id: "r-2".to_string(),
            })
        }
    }

    fn items(result: &Result<crate::select::Page<ListThingsResponse>, Error>) -> usize {
        match result {
            Ok(page) => page
                .selected
                .as_value()
                .and_then(|v| v.as_array())
                .map(|a| a.len())
                .unwrap_or(0),
            Err(e) => panic!("unexpected error: {e:?}"),
        }
    }

    #[tokio::test]
    async fn auto_iteration_tests() {
        let context = test_context();
        let operation = three_pages();
        let results: Vec<_> = Invocation::new(&operation, &context)
            .pages()
            .expect("pages")
            .collect()
            .await;
        assert_eq!(results.len(), 3);
        assert_eq!(results.iter().map(items).sum::<usize>(), 6);
        assert_eq!(
            operation.sent_markers(),
            vec![None, Some("m1".to_string()), Some("m2".to_string())]
        );
        let last = results[2].as_ref().expect("page 3");
        assert_eq!(last.number, 3);
        assert_eq!(last.next_marker, None);
        assert_eq!(last.selected, Selected::Field(json!(["f"])));
    }

    #[tokio::test]
    async fn manual_paging_tests() {
        let context = test_context();
        let operation = three_pages();
        let results: Vec<_> = Invocation::new(&operation, &context)
            .no_auto_iteration(true)
            .pages()
            .expect("pages")
            .collect()
            .await;
        assert_eq!(results.len(), 1);
        assert_eq!(items(&results[0]), 3);
        let first = results[0].as_ref().expect("page 1");
        assert_eq!(first.next_marker, Some(Marker::from("m1")));
        assert_eq!(operation.sent_markers(), vec![None]);

        // A caller-supplied marker resumes from there and also fetches one page.
        let operation = ListThings::new(vec![page(&["d", "e"], Some("m2"))]);
        let results: Vec<_> = Invocation::new(&operation, &context)
            .marker("m1")
            .pages()
            .expect("pages")
            .collect()
            .await;
        assert_eq!(results.len(), 1);
        assert_eq!(operation.sent_markers(), vec![Some("m1".to_string())]);
        assert_eq!(
            results[0].as_ref().expect("page").next_marker,
            Some(Marker::from("m2"))
        );

        // An empty marker is bound, so paging stays manual, but it is sent as absent.
        let operation = three_pages();
        let results: Vec<_> = Invocation::new(&operation, &context)
            .marker("")
            .pages()
            .expect("pages")
            .collect()
            .await;
        assert_eq!(results.len(), 1);
        assert_eq!(operation.sent_markers(), vec![None]);
    }

    #[tokio::test]
    async fn empty_marker_tests() {
        let context = test_context();
        let operation = ListThings::new(vec![
            page(&["a"], Some("m1")),
            page(&["b"], Some("")),
            page(&["never"], None),
        ]);
        let results: Vec<_> = Invocation::new(&operation, &context)
            .pages()
            .expect("pages")
            .collect()
            .await;
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].as_ref().expect("page 2").next_marker, None);
        assert_eq!(operation.sent.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn fault_tests() {
        let context = test_context();
        let operation = ListThings::new(vec![
            page(&["a"], Some("m1")),
            Err("service unavailable".to_string()),
            page(&["c"], Some("m3")),
            page(&["d"], Some("m4")),
            page(&["e"], None),
        ]);
        let logger = StringLogger::default();
        let results: Vec<_> = Invocation::new(&operation, &context)
            .logger(logger.clone())
            .pages()
            .expect("pages")
            .collect()
            .await;
        assert_eq!(results.len(), 2);
        assert_eq!(items(&results[0]), 1);
        let error = results[1].as_ref().expect_err("page 2 fails");
        assert!(matches!(error, Error::Service(_, _)));
        assert_eq!(
            error.source().map(|s| s.to_string()).as_deref(),
            Some("service unavailable")
        );
        assert_eq!(operation.sent.lock().unwrap().len(), 2);
        assert!(logger.contains_warnings());
        assert!(logger.to_string().contains("Test:ListThings page 1 succeeded"));
    }

    #[tokio::test]
    async fn cancel_tests() {
        let context = test_context();
        let operation = three_pages();
        let cancel = CancelToken::new();
        cancel.cancel();
        let results: Vec<_> = Invocation::new(&operation, &context)
            .cancel(cancel)
            .pages()
            .expect("pages")
            .collect()
            .await;
        assert_eq!(results.len(), 1);
        assert!(results[0].as_ref().expect_err("cancelled").is_cancelled());
        assert!(operation.sent.lock().unwrap().is_empty());

        let cancel = CancelToken::new();
        let operation = ListThings {
            cancel_after: Some((1, cancel.clone())),
            ..three_pages()
        };
        let results: Vec<_> = Invocation::new(&operation, &context)
            .cancel(cancel)
            .pages()
            .expect("pages")
            .collect()
            .await;
        assert_eq!(results.len(), 2);
        assert_eq!(items(&results[0]), 3);
        assert!(results[1].as_ref().expect_err("cancelled").is_cancelled());
        assert_eq!(operation.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn paged_projection_tests() {
        let context = test_context();

        // Echoes are emitted once, after the walk.
        let operation = three_pages();
        let results: Vec<_> = Invocation::new(&operation, &context)
            .parameter("Owner", "alice")
            .select("^owner")
            .pages()
            .expect("pages")
            .collect()
            .await;
        assert_eq!(results.len(), 1);
        let echo = results[0].as_ref().expect("echo");
        assert_eq!(echo.selected, Selected::Parameter(json!("alice")));
        assert_eq!(echo.number, 3);
        assert_eq!(operation.sent.lock().unwrap().len(), 3);

        let operation = ListThings::new(vec![page(&["a", "b"], None)]);
        let results: Vec<_> = Invocation::new(&operation, &context)
            .select("*")
            .pages()
            .expect("pages")
            .collect()
            .await;
        assert_eq!(
            results[0].as_ref().expect("page").selected,
            Selected::Response(ListThingsResponse {
                items: vec!["a".to_string(), "b".to_string()],
                marker: None,
            })
        );

        let operation = ListThings::new(vec![page(&["a"], Some("m1")), page(&["b"], None)]);
        let results: Vec<_> = Invocation::new(&operation, &context)
            .selector(Selector::accessor("Count", |r: &ListThingsResponse| {
                json!(r.items.len())
            }))
            .pages()
            .expect("pages")
            .collect()
            .await;
        assert_eq!(results.len(), 2);
        assert_eq!(
            results[1].as_ref().expect("page").selected,
            Selected::Field(json!(1))
        );
    }

    #[tokio::test]
    async fn stop_tests() {
        let context = test_context();
        let operation = ListThings::new(vec![
            page(&["a"], Some("m1")),
            page(&["b"], Some("m1")),
            page(&["never"], None),
        ]);
        let results: Vec<_> = Invocation::new(&operation, &context)
            .pages()
            .expect("pages")
            .collect()
            .await;
        assert_eq!(results.len(), 3);
        assert!(matches!(results[2], Err(Error::Paging(_))));
        assert_eq!(operation.sent.lock().unwrap().len(), 2);

        let select_config = SelectConfig::builder()
            .toml_str(
                r#"
                [select]
                max_pages = 2
                "#,
            )
            .build()
            .expect("stop_tests.toml");
        let operation = three_pages();
        let results: Vec<_> = Invocation::new(&operation, &context)
            .configure(&select_config)
            .expect("configure")
            .pages()
            .expect("pages")
            .collect()
            .await;
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok() && results[1].is_ok());
        assert!(matches!(results[2], Err(Error::Paging(_))));
        assert_eq!(operation.sent.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn validation_tests() {
        let context = test_context();
        let operation = three_pages();
        for expression in ["Nope", "^Nope", "^", "", "  "] {
            let error = Invocation::new(&operation, &context)
                .select(expression)
                .pages()
                .err()
                .expect("invalid projection");
            assert!(error.is_argument(), "{expression}: {error:?}");
        }
        let error = Invocation::new(&operation, &context)
            .parameter("Colour", "red")
            .pages()
            .err()
            .expect("unknown parameter");
        assert!(matches!(error, Error::Argument { ref name, .. } if name == "Colour"));
        let error = Invocation::new(&operation, &context)
            .parameter("Limit", "ten")
            .pages()
            .err()
            .expect("wrong type");
        assert!(error.is_argument());
        assert!(operation.sent.lock().unwrap().is_empty());

        let get = GetThing::default();
        let error = Invocation::new(&get, &context)
            .send()
            .await
            .expect_err("missing ThingId");
        assert!(matches!(error, Error::Argument { ref name, .. } if name == "ThingId"));
        let error = Invocation::new(&get, &context)
            .parameter("ThingId", "t-1")
            .pass_thru(true)
            .send()
            .await
            .expect_err("no pass-through parameter");
        assert!(error.is_argument());
        assert_eq!(get.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn request_builder_tests() {
        let context = test_context();
        let operation = ListThings::new(vec![page(&[], None)]);
        let parameters = Parameters::new()
            .with("owner", "bob")
            .with("Filter.State", "active")
            .with("filter.tags", vec!["x", "y"])
            .with("Limit", 25);
        let results: Vec<_> = Invocation::new(&operation, &context)
            .parameters(parameters)
            .pages()
            .expect("pages")
            .collect()
            .await;
        assert_eq!(results.len(), 1);
        assert_eq!(
            operation.sent.lock().unwrap()[0],
            ListThingsRequest {
                owner: Some("bob".to_string()),
                marker: None,
                limit: Some(25),
                filter: Some(Filter {
                    state: Some("active".to_string()),
                    tags: Some(vec!["x".to_string(), "y".to_string()]),
                }),
            }
        );

        let duplicated = Parameters::new().with("Owner", "a").with("OWNER", "b");
        assert!(duplicated
            .bind(ListThings::PARAMETERS, "ListThings")
            .expect_err("bound twice")
            .is_argument());
        let conflicting = Parameters::new()
            .with("Filter", "x")
            .with("Filter.State", "y");
        assert!(conflicting
            .to_request::<serde_json::Value>("Conflict")
            .expect_err("group conflict")
            .is_argument());
        let nulls = Parameters::new().with("Owner", serde_json::Value::Null);
        assert!(!nulls.is_bound("Owner"));
    }

    #[tokio::test]
    async fn send_tests() {
        let context = test_context();
        let get = GetThing::default();
        let selected = Invocation::new(&get, &context)
            .parameter("ThingId", "t-1")
            .send()
            .await
            .expect("send");
        assert_eq!(selected, Some(Selected::Field(json!("thing t-1"))));
        let whole = Invocation::new(&get, &context)
            .parameter("ThingId", "t-2")
            .select("*")
            .send()
            .await
            .expect("send")
            .and_then(Selected::into_response)
            .expect("whole response");
        assert_eq!(whole.request_id, "r-1");
        assert_eq!(get.calls.load(Ordering::SeqCst), 2);

        // Echoing an input of a read needs no call at all.
        let echoed = Invocation::new(&get, &context)
            .parameter("ThingId", "t-3")
            .select("^ThingId")
            .send()
            .await
            .expect("send");
        assert_eq!(echoed, Some(Selected::Parameter(json!("t-3"))));
        assert_eq!(get.calls.load(Ordering::SeqCst), 2);

        // A single call of a list operation sends an empty marker as absent.
        let operation = three_pages();
        let first = Invocation::new(&operation, &context)
            .marker("")
            .send()
            .await
            .expect("send");
        assert_eq!(first, Some(Selected::Field(json!(["a", "b", "c"]))));
        let second = Invocation::new(&operation, &context)
            .parameter("marker", "")
            .send()
            .await
            .expect("send");
        assert_eq!(second, Some(Selected::Field(json!(["d", "e"]))));
        assert_eq!(operation.sent_markers(), vec![None, None]);
    }

    #[tokio::test]
    async fn configure_tests() {
        let context = test_context();
        let select_config = SelectConfig::builder()
            .toml_str(
                r#"
                [select]
                max_pages = 5
                "#,
            )
            .debug(true)
            .build()
            .expect("configure_tests.toml");
        let operation = ListThings::new(vec![page(&["a"], None)]);
        let logger = StringLogger::default();
        let results: Vec<_> = Invocation::new(&operation, &context)
            .logger(logger.clone())
            .configure(&select_config)
            .expect("configure")
            .pages()
            .expect("pages")
            .collect()
            .await;
        assert_eq!(results.len(), 1);
        assert!(
            logger.to_string().contains("Test:ListThings page 1 succeeded"),
            "{logger}"
        );

        // Configuring without a page ceiling keeps the one set on the builder.
        let select_config = SelectConfig::builder()
            .toml_str("")
            .build()
            .expect("empty.toml");
        let operation = three_pages();
        let results: Vec<_> = Invocation::new(&operation, &context)
            .max_pages(1)
            .configure(&select_config)
            .expect("configure")
            .pages()
            .expect("pages")
            .collect()
            .await;
        assert_eq!(results.len(), 2);
        assert!(matches!(results[1], Err(Error::Paging(_))));
    }

    #[tokio::test]
    async fn confirm_tests() {
        let context = test_context();
        let delete = DeleteThing::default();
        let passed = Invocation::new(&delete, &context)
            .parameter("ThingId", "t-1")
            .pass_thru(true)
            .send()
            .await
            .expect("send");
        assert_eq!(passed, Some(Selected::Parameter(json!("t-1"))));
        assert_eq!(delete.calls.load(Ordering::SeqCst), 1);

        let error = Invocation::new(&delete, &context)
            .parameter("ThingId", "t-1")
            .select("RequestId")
            .pass_thru(true)
            .send()
            .await
            .expect_err("pass-through with select");
        assert!(error.is_argument());

        let logger = StringLogger::default();
        let declined = Invocation::new(&delete, &context)
            .parameter("ThingId", "t-2")
            .confirm(&DryRun)
            .logger(logger.clone())
            .send()
            .await
            .expect("send");
        assert_eq!(declined, None);
        assert!(logger.to_string().contains("declined for resource t-2"));
        assert_eq!(delete.calls.load(Ordering::SeqCst), 1);

        let forced = Invocation::new(&delete, &context)
            .parameter("ThingId", "t-2")
            .confirm(&DryRun)
            .force(true)
            .select("RequestId")
            .send()
            .await
            .expect("send");
        assert_eq!(forced, Some(Selected::Field(json!("r-2"))));
        assert_eq!(delete.calls.load(Ordering::SeqCst), 2);

        let asked = Mutex::new(Vec::new());
        let policy = |operation: &str, resource_id: &str| {
            asked
                .lock()
                .unwrap()
                .push(format!("{operation}({resource_id})"));
            true
        };
        Invocation::new(&delete, &context)
            .parameter("ThingId", "t-3")
            .confirm(&policy)
            .send()
            .await
            .expect("send");
        assert_eq!(*asked.lock().unwrap(), vec!["DeleteThing(t-3)".to_string()]);
    }

    fn dns_failure() -> AnyhowError {
        AnyhowError::new(std::io::Error::new(
            std::io::ErrorKind::Other,
            "dns error: failed to lookup address information: Name or service not known",
        ))
        .context("dispatch failure")
    }

    fn access_denied() -> AnyhowError {
        anyhow::anyhow!("AccessDenied")
    }

    #[tokio::test]
    async fn name_resolution_tests() {
        let context = test_context();
        let get = GetThing {
            fault: Some(dns_failure as fn() -> AnyhowError),
            ..Default::default()
        };
        let error = Invocation::new(&get, &context)
            .parameter("ThingId", "t-1")
            .send()
            .await
            .expect_err("dns failure");
        assert!(matches!(error, Error::NameResolution(_, _)));
        let message = error.to_string();
        assert!(message.starts_with("Test:GetThing: cannot resolve"), "{message}");
        assert!(message.contains("us-west-2"), "{message}");
        assert_eq!(
            error.source().map(|s| s.to_string()).as_deref(),
            Some("dispatch failure")
        );

        let get = GetThing {
            fault: Some(access_denied as fn() -> AnyhowError),
            ..Default::default()
        };
        let error = Invocation::new(&get, &context)
            .parameter("ThingId", "t-1")
            .send()
            .await
            .expect_err("access denied");
        assert!(matches!(error, Error::Service(_, _)));
        assert_eq!(error.to_string(), "Test:GetThing: AccessDenied");
    }

    #[test]
    fn send_blocking_tests() {
        let context = test_context();
        let get = GetThing::default();
        let selected = Invocation::new(&get, &context)
            .parameter("ThingId", "t-9")
            .select("RequestId")
            .send_blocking()
            .expect("send_blocking");
        assert_eq!(selected.and_then(|s| s.as_value().cloned()), Some(json!("r-1")));
    }

    #[test]
    fn marker_tests() {
        assert_eq!(Marker::normalize(Some("")), None);
        assert_eq!(Marker::normalize::<String>(None), None);
        assert_eq!(Marker::normalize(Some("m1")), Some(Marker::from("m1")));
        assert_eq!(Marker::from("m1").as_str(), "m1");

        let specs = [ParamSpec::marker("Marker"), ParamSpec::optional("Owner")];
        let bound = Parameters::new()
            .with("Marker", "")
            .with("Owner", "")
            .bind(&specs, "ListThings")
            .expect("bind");
        assert!(!bound.is_bound("Marker"));
        assert_eq!(bound.get("Owner"), Some(&json!("")));
    }

    #[test]
    fn to_value_tests() {
        use crate::select::to_value;
        use std::collections::BTreeMap;

        assert_eq!(to_value(&vec!["a", "b"]), json!(["a", "b"]));
        let tuple_keys = BTreeMap::from([((1, 2), 3)]);
        assert_eq!(to_value(&tuple_keys), serde_json::Value::Null);
    }

    #[test]
    fn runtime_error_tests() {
        use crate::select::invoker::runtime_error;

        let error = runtime_error(
            "Test:GetThing".to_string(),
            std::io::Error::new(std::io::ErrorKind::Other, "no threads"),
        );
        assert!(matches!(error, Error::Config(_)));
        assert!(error.fault().is_none());
        assert!(error.source().is_none());
        assert!(error.to_string().starts_with("Test:GetThing: cannot start runtime"));
    }
}
