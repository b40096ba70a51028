// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::shape::{enumeration, string, timestamp, Optional};
use crate::common::{AnyhowError, ClientContext};
use crate::select::{Marker, Operation, PagedOperation, ParamSpec};
use crate::select_fields;
use async_trait::async_trait;
use aws_sdk_appfabric::operation::RequestId;
use aws_sdk_appfabric::types::{self, ApiKeyCredential, AuthType, Credential, Oauth2Credential};
use serde::{Deserialize, Serialize};

/// A convenient alias for AppFabric client so consuming code doesn't need to add it to `Cargo.toml`
pub type AppFabricClient = aws_sdk_appfabric::Client;

fn client(context: &ClientContext) -> AppFabricClient {
    AppFabricClient::new(context.sdk_config())
}

/// A key-value tag, in requests and responses alike.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

fn to_sdk_tags(tags: Option<Vec<Tag>>) -> Result<Option<Vec<types::Tag>>, AnyhowError> {
    let Some(tags) = tags else {
        return Ok(None);
    };
    let tags = tags
        .into_iter()
        .map(|tag| types::Tag::builder().key(tag.key).value(tag.value).build())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some(tags))
}

/// An app bundle, which holds the app authorizations and ingestions of a customer.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppBundle {
    pub arn: Option<String>,
    pub customer_managed_key_arn: Option<String>,
}

impl From<&types::AppBundle> for AppBundle {
    fn from(bundle: &types::AppBundle) -> Self {
        Self {
            arn: string(bundle.arn()),
            customer_managed_key_arn: string(bundle.customer_managed_key_arn()),
        }
    }
}

/// An app bundle, as listed.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppBundleSummary {
    pub arn: Option<String>,
}

impl From<&types::AppBundleSummary> for AppBundleSummary {
    fn from(summary: &types::AppBundleSummary) -> Self {
        Self {
            arn: string(summary.arn()),
        }
    }
}

/// An ingestion of audit logs from one app and tenant, as listed.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IngestionSummary {
    pub arn: Option<String>,
    pub app: Option<String>,
    pub tenant_id: Option<String>,
    pub state: Option<String>,
}

impl From<&types::IngestionSummary> for IngestionSummary {
    fn from(ingestion: &types::IngestionSummary) -> Self {
        Self {
            arn: string(ingestion.arn()),
            app: string(ingestion.app()),
            tenant_id: string(ingestion.tenant_id()),
            state: enumeration(ingestion.state()),
        }
    }
}

/// The tenant of an app, in requests and responses alike.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tenant {
    pub tenant_identifier: String,
    pub tenant_display_name: String,
}

impl From<&types::Tenant> for Tenant {
    fn from(tenant: &types::Tenant) -> Self {
        Self {
            tenant_identifier: string(tenant.tenant_identifier()).unwrap_or_default(),
            tenant_display_name: string(tenant.tenant_display_name()).unwrap_or_default(),
        }
    }
}

/// An authorization of AppFabric to read an app's audit logs.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppAuthorization {
    pub app_authorization_arn: Option<String>,
    pub app_bundle_arn: Option<String>,
    pub app: Option<String>,
    pub tenant: Option<Tenant>,
    pub auth_type: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub persona: Option<String>,
    pub auth_url: Option<String>,
}

impl From<&types::AppAuthorization> for AppAuthorization {
    fn from(authorization: &types::AppAuthorization) -> Self {
        Self {
            app_authorization_arn: string(authorization.app_authorization_arn()),
            app_bundle_arn: string(authorization.app_bundle_arn()),
            app: string(authorization.app()),
            tenant: authorization.tenant().optional().map(Tenant::from),
            auth_type: enumeration(authorization.auth_type()),
            status: enumeration(authorization.status()),
            created_at: timestamp(authorization.created_at()),
            updated_at: timestamp(authorization.updated_at()),
            persona: enumeration(authorization.persona()),
            auth_url: string(authorization.auth_url()),
        }
    }
}

/// Lists the app bundles of the account.
pub struct ListAppBundles;

/// Parameters of `ListAppBundles`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ListAppBundlesRequest {
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
}

/// Result of `ListAppBundles`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAppBundlesResponse {
    pub app_bundle_summary_list: Vec<AppBundleSummary>,
    pub next_token: Option<String>,
}

#[async_trait]
impl Operation for ListAppBundles {
    type Request = ListAppBundlesRequest;
    type Response = ListAppBundlesResponse;

    const SERVICE: &'static str = "AppFabric";
    const NAME: &'static str = "ListAppBundles";
    const DEFAULT_SELECT: &'static str = "AppBundleSummaryList";
    const PARAMETERS: &'static [ParamSpec] = &[
        ParamSpec::optional("MaxResults"),
        ParamSpec::marker("NextToken"),
    ];

    select_fields!(ListAppBundlesResponse {
        "AppBundleSummaryList" => app_bundle_summary_list,
        "NextToken" => next_token,
    });

    async fn invoke(
        &self,
        context: &ClientContext,
        request: ListAppBundlesRequest,
    ) -> Result<ListAppBundlesResponse, AnyhowError> {
        let output = client(context)
            .list_app_bundles()
            .set_max_results(request.max_results)
            .set_next_token(request.next_token)
            .send()
            .await?;
        Ok(ListAppBundlesResponse {
            app_bundle_summary_list: output
                .app_bundle_summary_list()
                .iter()
                .map(AppBundleSummary::from)
                .collect(),
            next_token: string(output.next_token()),
        })
    }
}

impl PagedOperation for ListAppBundles {
    const MARKER: &'static str = "NextToken";

    fn set_marker(request: &mut ListAppBundlesRequest, marker: Option<Marker>) {
        request.next_token = marker.map(String::from);
    }

    fn next_marker(response: &ListAppBundlesResponse) -> Option<Marker> {
        Marker::normalize(response.next_token.clone())
    }
}

/// Describes one app bundle.
pub struct GetAppBundle;

/// Parameters of `GetAppBundle`, `DeleteAppBundle`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct AppBundleRequest {
    pub app_bundle_identifier: String,
}

/// Result of `GetAppBundle`, `CreateAppBundle`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppBundleResponse {
    pub app_bundle: Option<AppBundle>,
    pub request_id: Option<String>,
}

#[async_trait]
impl Operation for GetAppBundle {
    type Request = AppBundleRequest;
    type Response = AppBundleResponse;

    const SERVICE: &'static str = "AppFabric";
    const NAME: &'static str = "GetAppBundle";
    const DEFAULT_SELECT: &'static str = "AppBundle";
    const PARAMETERS: &'static [ParamSpec] = &[ParamSpec::required("AppBundleIdentifier")];

    select_fields!(AppBundleResponse { "AppBundle" => app_bundle, "RequestId" => request_id });

    async fn invoke(
        &self,
        context: &ClientContext,
        request: AppBundleRequest,
    ) -> Result<AppBundleResponse, AnyhowError> {
        let output = client(context)
            .get_app_bundle()
            .app_bundle_identifier(request.app_bundle_identifier)
            .send()
            .await?;
        Ok(AppBundleResponse {
            app_bundle: output.app_bundle().optional().map(AppBundle::from),
            request_id: string(output.request_id()),
        })
    }
}

/// Creates an app bundle.
pub struct CreateAppBundle;

/// Parameters of `CreateAppBundle`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAppBundleRequest {
    pub client_token: Option<String>,
    pub customer_managed_key_identifier: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

#[async_trait]
impl Operation for CreateAppBundle {
    type Request = CreateAppBundleRequest;
    type Response = AppBundleResponse;

    const SERVICE: &'static str = "AppFabric";
    const NAME: &'static str = "CreateAppBundle";
    const DEFAULT_SELECT: &'static str = "AppBundle";
    const PARAMETERS: &'static [ParamSpec] = &[
        ParamSpec::optional("ClientToken"),
        ParamSpec::optional("CustomerManagedKeyIdentifier"),
        ParamSpec::optional("Tags"),
    ];
    const MUTATING: bool = true;

    select_fields!(AppBundleResponse { "AppBundle" => app_bundle, "RequestId" => request_id });

    async fn invoke(
        &self,
        context: &ClientContext,
        request: CreateAppBundleRequest,
    ) -> Result<AppBundleResponse, AnyhowError> {
        let output = client(context)
            .create_app_bundle()
            .set_client_token(request.client_token)
            .set_customer_managed_key_identifier(request.customer_managed_key_identifier)
            .set_tags(to_sdk_tags(request.tags)?)
            .send()
            .await?;
        Ok(AppBundleResponse {
            app_bundle: output.app_bundle().optional().map(AppBundle::from),
            request_id: string(output.request_id()),
        })
    }
}

/// Deletes an app bundle. Its app authorizations must be deleted first.
pub struct DeleteAppBundle;

/// Result of an operation which returns nothing but its request id.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmptyResponse {
    pub request_id: Option<String>,
}

#[async_trait]
impl Operation for DeleteAppBundle {
    type Request = AppBundleRequest;
    type Response = EmptyResponse;

    const SERVICE: &'static str = "AppFabric";
    const NAME: &'static str = "DeleteAppBundle";
    const DEFAULT_SELECT: &'static str = "*";
    const PARAMETERS: &'static [ParamSpec] = &[ParamSpec::required("AppBundleIdentifier")];
    const MUTATING: bool = true;
    const PASS_THRU: Option<&'static str> = Some("AppBundleIdentifier");

    select_fields!(EmptyResponse { "RequestId" => request_id });

    async fn invoke(
        &self,
        context: &ClientContext,
        request: AppBundleRequest,
    ) -> Result<EmptyResponse, AnyhowError> {
        let output = client(context)
            .delete_app_bundle()
            .app_bundle_identifier(request.app_bundle_identifier)
            .send()
            .await?;
        Ok(EmptyResponse {
            request_id: string(output.request_id()),
        })
    }
}

/// Lists the ingestions of an app bundle.
pub struct ListIngestions;

/// Parameters of `ListIngestions`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ListIngestionsRequest {
    pub app_bundle_identifier: String,
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
}

/// Result of `ListIngestions`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListIngestionsResponse {
    pub ingestions: Vec<IngestionSummary>,
    pub next_token: Option<String>,
}

#[async_trait]
impl Operation for ListIngestions {
    type Request = ListIngestionsRequest;
    type Response = ListIngestionsResponse;

    const SERVICE: &'static str = "AppFabric";
    const NAME: &'static str = "ListIngestions";
    const DEFAULT_SELECT: &'static str = "Ingestions";
    const PARAMETERS: &'static [ParamSpec] = &[
        ParamSpec::required("AppBundleIdentifier"),
        ParamSpec::optional("MaxResults"),
        ParamSpec::marker("NextToken"),
    ];

    select_fields!(ListIngestionsResponse {
        "Ingestions" => ingestions,
        "NextToken" => next_token,
    });

    async fn invoke(
        &self,
        context: &ClientContext,
        request: ListIngestionsRequest,
    ) -> Result<ListIngestionsResponse, AnyhowError> {
        let output = client(context)
            .list_ingestions()
            .app_bundle_identifier(request.app_bundle_identifier)
            .set_max_results(request.max_results)
            .set_next_token(request.next_token)
            .send()
            .await?;
        Ok(ListIngestionsResponse {
            ingestions: output
                .ingestions()
                .iter()
                .map(IngestionSummary::from)
                .collect(),
            next_token: string(output.next_token()),
        })
    }
}

impl PagedOperation for ListIngestions {
    const MARKER: &'static str = "NextToken";

    fn set_marker(request: &mut ListIngestionsRequest, marker: Option<Marker>) {
        request.next_token = marker.map(String::from);
    }

    fn next_marker(response: &ListIngestionsResponse) -> Option<Marker> {
        Marker::normalize(response.next_token.clone())
    }
}

/// Starts (or resumes) an ingestion.
pub struct StartIngestion;

/// Parameters of `StartIngestion`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct StartIngestionRequest {
    pub ingestion_identifier: String,
    pub app_bundle_identifier: String,
}

#[async_trait]
impl Operation for StartIngestion {
    type Request = StartIngestionRequest;
    type Response = EmptyResponse;

    const SERVICE: &'static str = "AppFabric";
    const NAME: &'static str = "StartIngestion";
    const DEFAULT_SELECT: &'static str = "*";
    const PARAMETERS: &'static [ParamSpec] = &[
        ParamSpec::required("IngestionIdentifier"),
        ParamSpec::required("AppBundleIdentifier"),
    ];
    const MUTATING: bool = true;
    const PASS_THRU: Option<&'static str> = Some("IngestionIdentifier");

    select_fields!(EmptyResponse { "RequestId" => request_id });

    async fn invoke(
        &self,
        context: &ClientContext,
        request: StartIngestionRequest,
    ) -> Result<EmptyResponse, AnyhowError> {
        let output = client(context)
            .start_ingestion()
            .ingestion_identifier(request.ingestion_identifier)
            .app_bundle_identifier(request.app_bundle_identifier)
            .send()
            .await?;
        Ok(EmptyResponse {
            request_id: string(output.request_id()),
        })
    }
}

/// Authorizes AppFabric to read the audit logs of one app tenant.
pub struct CreateAppAuthorization;

/// The `Credential` group. Exactly one member must be set.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub enum CredentialRequest {
    #[serde(rename_all = "PascalCase")]
    ApiKeyCredential { api_key: String },
    #[serde(rename_all = "PascalCase")]
    Oauth2Credential {
        client_id: String,
        client_secret: String,
    },
}

/// Parameters of `CreateAppAuthorization`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAppAuthorizationRequest {
    pub app_bundle_identifier: String,
    pub app: String,
    pub credential: CredentialRequest,
    pub tenant: Tenant,
    pub auth_type: String,
    pub client_token: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

/// Result of `CreateAppAuthorization`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAppAuthorizationResponse {
    pub app_authorization: Option<AppAuthorization>,
    pub request_id: Option<String>,
}

#[async_trait]
impl Operation for CreateAppAuthorization {
    type Request = CreateAppAuthorizationRequest;
    type Response = CreateAppAuthorizationResponse;

    const SERVICE: &'static str = "AppFabric";
    const NAME: &'static str = "CreateAppAuthorization";
    const DEFAULT_SELECT: &'static str = "AppAuthorization";
    const PARAMETERS: &'static [ParamSpec] = &[
        ParamSpec::required("AppBundleIdentifier"),
        ParamSpec::required("App"),
        ParamSpec::optional("Credential.ApiKeyCredential.ApiKey"),
        ParamSpec::optional("Credential.Oauth2Credential.ClientId"),
        ParamSpec::optional("Credential.Oauth2Credential.ClientSecret"),
        ParamSpec::required("Tenant.TenantIdentifier"),
        ParamSpec::required("Tenant.TenantDisplayName"),
        ParamSpec::required("AuthType"),
        ParamSpec::optional("ClientToken"),
        ParamSpec::optional("Tags"),
    ];
    const MUTATING: bool = true;

    select_fields!(CreateAppAuthorizationResponse {
        "AppAuthorization" => app_authorization,
        "RequestId" => request_id,
    });

    async fn invoke(
        &self,
        context: &ClientContext,
        request: CreateAppAuthorizationRequest,
    ) -> Result<CreateAppAuthorizationResponse, AnyhowError> {
        let credential = match request.credential {
            CredentialRequest::ApiKeyCredential { api_key } => Credential::ApiKeyCredential(
                ApiKeyCredential::builder().api_key(api_key).build()?,
            ),
            CredentialRequest::Oauth2Credential {
                client_id,
                client_secret,
            } => Credential::Oauth2Credential(
                Oauth2Credential::builder()
                    .client_id(client_id)
                    .client_secret(client_secret)
                    .build()?,
            ),
        };
        let tenant = types::Tenant::builder()
            .tenant_identifier(request.tenant.tenant_identifier)
            .tenant_display_name(request.tenant.tenant_display_name)
            .build()?;
        let output = client(context)
            .create_app_authorization()
            .app_bundle_identifier(request.app_bundle_identifier)
            .app(request.app)
            .credential(credential)
            .tenant(tenant)
            .auth_type(AuthType::from(request.auth_type.as_str()))
            .set_client_token(request.client_token)
            .set_tags(to_sdk_tags(request.tags)?)
            .send()
            .await?;
        Ok(CreateAppAuthorizationResponse {
            app_authorization: output
                .app_authorization()
                .optional()
                .map(AppAuthorization::from),
            request_id: string(output.request_id()),
        })
    }
}
