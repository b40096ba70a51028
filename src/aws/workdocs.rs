// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::shape::{enumeration, string, timestamp, to_date_time};
use crate::common::{AnyhowError, ClientContext};
use crate::select::{Marker, Operation, PagedOperation, ParamSpec};
use crate::select_fields;
use async_trait::async_trait;
use aws_sdk_workdocs::operation::RequestId;
use aws_sdk_workdocs::types::{
    self, FolderContentType, NotificationOptions, OrderType, PrincipalType, ResourceSortType,
    RoleType, SharePrincipal, UserFilterType, UserSortType,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A convenient alias for WorkDocs client so consuming code doesn't need to add it to `Cargo.toml`
pub type WorkDocsClient = aws_sdk_workdocs::Client;

fn client(context: &ClientContext) -> WorkDocsClient {
    WorkDocsClient::new(context.sdk_config())
}

/// A WorkDocs user.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub id: Option<String>,
    pub username: Option<String>,
    pub email_address: Option<String>,
    pub given_name: Option<String>,
    pub surname: Option<String>,
    pub organization_id: Option<String>,
    pub root_folder_id: Option<String>,
    pub recycle_bin_folder_id: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    pub created_timestamp: Option<String>,
    pub modified_timestamp: Option<String>,
    pub time_zone_id: Option<String>,
}

impl From<&types::User> for User {
    fn from(user: &types::User) -> Self {
        Self {
            id: string(user.id()),
            username: string(user.username()),
            email_address: string(user.email_address()),
            given_name: string(user.given_name()),
            surname: string(user.surname()),
            organization_id: string(user.organization_id()),
            root_folder_id: string(user.root_folder_id()),
            recycle_bin_folder_id: string(user.recycle_bin_folder_id()),
            status: enumeration(user.status()),
            kind: enumeration(user.r#type()),
            created_timestamp: timestamp(user.created_timestamp()),
            modified_timestamp: timestamp(user.modified_timestamp()),
            time_zone_id: string(user.time_zone_id()),
        }
    }
}

/// The identity of a user, as embedded in other resources.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserMetadata {
    pub id: Option<String>,
    pub username: Option<String>,
    pub given_name: Option<String>,
    pub surname: Option<String>,
    pub email_address: Option<String>,
}

impl From<&types::UserMetadata> for UserMetadata {
    fn from(user: &types::UserMetadata) -> Self {
        Self {
            id: string(user.id()),
            username: string(user.username()),
            given_name: string(user.given_name()),
            surname: string(user.surname()),
            email_address: string(user.email_address()),
        }
    }
}

/// A WorkDocs folder.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Folder {
    pub id: Option<String>,
    pub name: Option<String>,
    pub creator_id: Option<String>,
    pub parent_folder_id: Option<String>,
    pub created_timestamp: Option<String>,
    pub modified_timestamp: Option<String>,
    pub resource_state: Option<String>,
    pub signature: Option<String>,
    pub labels: Vec<String>,
}

impl From<&types::FolderMetadata> for Folder {
    fn from(folder: &types::FolderMetadata) -> Self {
        Self {
            id: string(folder.id()),
            name: string(folder.name()),
            creator_id: string(folder.creator_id()),
            parent_folder_id: string(folder.parent_folder_id()),
            created_timestamp: timestamp(folder.created_timestamp()),
            modified_timestamp: timestamp(folder.modified_timestamp()),
            resource_state: enumeration(folder.resource_state()),
            signature: string(folder.signature()),
            labels: folder.labels().to_vec(),
        }
    }
}

/// A WorkDocs document, described by its latest version.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Document {
    pub id: Option<String>,
    pub name: Option<String>,
    pub content_type: Option<String>,
    pub creator_id: Option<String>,
    pub parent_folder_id: Option<String>,
    pub created_timestamp: Option<String>,
    pub modified_timestamp: Option<String>,
    pub resource_state: Option<String>,
    pub labels: Vec<String>,
}

impl From<&types::DocumentMetadata> for Document {
    fn from(document: &types::DocumentMetadata) -> Self {
        let latest = document.latest_version_metadata();
        Self {
            id: string(document.id()),
            name: latest.and_then(|v| string(v.name())),
            content_type: latest.and_then(|v| string(v.content_type())),
            creator_id: string(document.creator_id()),
            parent_folder_id: string(document.parent_folder_id()),
            created_timestamp: timestamp(document.created_timestamp()),
            modified_timestamp: timestamp(document.modified_timestamp()),
            resource_state: enumeration(document.resource_state()),
            labels: document.labels().to_vec(),
        }
    }
}

/// The resource an activity acted on.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceMetadata {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    pub version_id: Option<String>,
    pub parent_id: Option<String>,
    pub owner: Option<UserMetadata>,
}

impl From<&types::ResourceMetadata> for ResourceMetadata {
    fn from(resource: &types::ResourceMetadata) -> Self {
        Self {
            id: string(resource.id()),
            name: string(resource.name()),
            kind: enumeration(resource.r#type()),
            version_id: string(resource.version_id()),
            parent_id: string(resource.parent_id()),
            owner: resource.owner().map(UserMetadata::from),
        }
    }
}

/// One entry of a user activity feed.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Activity {
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    pub time_stamp: Option<String>,
    pub organization_id: Option<String>,
    pub initiator: Option<UserMetadata>,
    pub resource_metadata: Option<ResourceMetadata>,
}

impl From<&types::Activity> for Activity {
    fn from(activity: &types::Activity) -> Self {
        Self {
            kind: enumeration(activity.r#type()),
            time_stamp: timestamp(activity.time_stamp()),
            organization_id: string(activity.organization_id()),
            initiator: activity.initiator().map(UserMetadata::from),
            resource_metadata: activity.resource_metadata().map(ResourceMetadata::from),
        }
    }
}

/// The outcome of sharing a resource with one principal.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShareResult {
    pub principal_id: Option<String>,
    pub invitee_principal_id: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub share_id: Option<String>,
    pub status_message: Option<String>,
}

impl From<&types::ShareResult> for ShareResult {
    fn from(result: &types::ShareResult) -> Self {
        Self {
            principal_id: string(result.principal_id()),
            invitee_principal_id: string(result.invitee_principal_id()),
            role: enumeration(result.role()),
            status: enumeration(result.status()),
            share_id: string(result.share_id()),
            status_message: string(result.status_message()),
        }
    }
}

/// Lists the users of an organization.
pub struct DescribeUsers;

/// Parameters of `DescribeUsers`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUsersRequest {
    pub authentication_token: Option<String>,
    pub organization_id: Option<String>,
    pub user_ids: Option<String>,
    pub query: Option<String>,
    pub include: Option<String>,
    pub order: Option<String>,
    pub sort: Option<String>,
    pub marker: Option<String>,
    pub limit: Option<i32>,
    pub fields: Option<String>,
}

/// Result of `DescribeUsers`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUsersResponse {
    pub users: Vec<User>,
    pub marker: Option<String>,
}

impl From<&aws_sdk_workdocs::operation::describe_users::DescribeUsersOutput>
    for DescribeUsersResponse
{
    fn from(output: &aws_sdk_workdocs::operation::describe_users::DescribeUsersOutput) -> Self {
        Self {
            users: output.users().iter().map(User::from).collect(),
            marker: string(output.marker()),
        }
    }
}

#[async_trait]
impl Operation for DescribeUsers {
    type Request = DescribeUsersRequest;
    type Response = DescribeUsersResponse;

    const SERVICE: &'static str = "WorkDocs";
    const NAME: &'static str = "DescribeUsers";
    const DEFAULT_SELECT: &'static str = "Users";
    const PARAMETERS: &'static [ParamSpec] = &[
        ParamSpec::optional("AuthenticationToken"),
        ParamSpec::optional("OrganizationId"),
        ParamSpec::optional("UserIds"),
        ParamSpec::optional("Query"),
        ParamSpec::optional("Include"),
        ParamSpec::optional("Order"),
        ParamSpec::optional("Sort"),
        ParamSpec::marker("Marker"),
        ParamSpec::optional("Limit"),
        ParamSpec::optional("Fields"),
    ];

    select_fields!(DescribeUsersResponse { "Users" => users, "Marker" => marker });

    async fn invoke(
        &self,
        context: &ClientContext,
        request: DescribeUsersRequest,
    ) -> Result<DescribeUsersResponse, AnyhowError> {
        let output = client(context)
            .describe_users()
            .set_authentication_token(request.authentication_token)
            .set_organization_id(request.organization_id)
            .set_user_ids(request.user_ids)
            .set_query(request.query)
            .set_include(request.include.as_deref().map(UserFilterType::from))
            .set_order(request.order.as_deref().map(OrderType::from))
            .set_sort(request.sort.as_deref().map(UserSortType::from))
            .set_marker(request.marker)
            .set_limit(request.limit)
            .set_fields(request.fields)
            .send()
            .await?;
        Ok(DescribeUsersResponse::from(&output))
    }
}

impl PagedOperation for DescribeUsers {
    const MARKER: &'static str = "Marker";

    fn set_marker(request: &mut DescribeUsersRequest, marker: Option<Marker>) {
        request.marker = marker.map(String::from);
    }

    fn next_marker(response: &DescribeUsersResponse) -> Option<Marker> {
        Marker::normalize(response.marker.clone())
    }
}

/// Describes the user who owns the authentication token.
pub struct GetCurrentUser;

/// Parameters of `GetCurrentUser`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct GetCurrentUserRequest {
    pub authentication_token: String,
}

/// Result of `GetCurrentUser`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCurrentUserResponse {
    pub user: Option<User>,
    pub request_id: Option<String>,
}

#[async_trait]
impl Operation for GetCurrentUser {
    type Request = GetCurrentUserRequest;
    type Response = GetCurrentUserResponse;

    const SERVICE: &'static str = "WorkDocs";
    const NAME: &'static str = "GetCurrentUser";
    const DEFAULT_SELECT: &'static str = "User";
    const PARAMETERS: &'static [ParamSpec] = &[ParamSpec::required("AuthenticationToken")];

    select_fields!(GetCurrentUserResponse { "User" => user, "RequestId" => request_id });

    async fn invoke(
        &self,
        context: &ClientContext,
        request: GetCurrentUserRequest,
    ) -> Result<GetCurrentUserResponse, AnyhowError> {
        let output = client(context)
            .get_current_user()
            .authentication_token(request.authentication_token)
            .send()
            .await?;
        Ok(GetCurrentUserResponse {
            user: output.user().map(User::from),
            request_id: string(output.request_id()),
        })
    }
}

/// Lists the folders and documents of a folder.
pub struct DescribeFolderContents;

/// Parameters of `DescribeFolderContents`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeFolderContentsRequest {
    pub authentication_token: Option<String>,
    pub folder_id: String,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub limit: Option<i32>,
    pub marker: Option<String>,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    pub include: Option<String>,
}

/// Result of `DescribeFolderContents`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeFolderContentsResponse {
    pub folders: Vec<Folder>,
    pub documents: Vec<Document>,
    pub marker: Option<String>,
}

#[async_trait]
impl Operation for DescribeFolderContents {
    type Request = DescribeFolderContentsRequest;
    type Response = DescribeFolderContentsResponse;

    const SERVICE: &'static str = "WorkDocs";
    const NAME: &'static str = "DescribeFolderContents";
    const DEFAULT_SELECT: &'static str = "*";
    const PARAMETERS: &'static [ParamSpec] = &[
        ParamSpec::optional("AuthenticationToken"),
        ParamSpec::required("FolderId"),
        ParamSpec::optional("Sort"),
        ParamSpec::optional("Order"),
        ParamSpec::optional("Limit"),
        ParamSpec::marker("Marker"),
        ParamSpec::optional("Type"),
        ParamSpec::optional("Include"),
    ];

    select_fields!(DescribeFolderContentsResponse {
        "Folders" => folders,
        "Documents" => documents,
        "Marker" => marker,
    });

    async fn invoke(
        &self,
        context: &ClientContext,
        request: DescribeFolderContentsRequest,
    ) -> Result<DescribeFolderContentsResponse, AnyhowError> {
        let output = client(context)
            .describe_folder_contents()
            .set_authentication_token(request.authentication_token)
            .folder_id(request.folder_id)
            .set_sort(request.sort.as_deref().map(ResourceSortType::from))
            .set_order(request.order.as_deref().map(OrderType::from))
            .set_limit(request.limit)
            .set_marker(request.marker)
            .set_type(request.kind.as_deref().map(FolderContentType::from))
            .set_include(request.include)
            .send()
            .await?;
        Ok(DescribeFolderContentsResponse {
            folders: output.folders().iter().map(Folder::from).collect(),
            documents: output.documents().iter().map(Document::from).collect(),
            marker: string(output.marker()),
        })
    }
}

impl PagedOperation for DescribeFolderContents {
    const MARKER: &'static str = "Marker";

    fn set_marker(request: &mut DescribeFolderContentsRequest, marker: Option<Marker>) {
        request.marker = marker.map(String::from);
    }

    fn next_marker(response: &DescribeFolderContentsResponse) -> Option<Marker> {
        Marker::normalize(response.marker.clone())
    }
}

/// Lists user activities in an organization, optionally narrowed to a user, a
/// resource or a time range.
pub struct DescribeActivities;

/// Parameters of `DescribeActivities`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeActivitiesRequest {
    pub authentication_token: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub organization_id: Option<String>,
    pub activity_types: Option<String>,
    pub resource_id: Option<String>,
    pub user_id: Option<String>,
    pub include_indirect_activities: Option<bool>,
    pub limit: Option<i32>,
    pub marker: Option<String>,
}

/// Result of `DescribeActivities`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeActivitiesResponse {
    pub user_activities: Vec<Activity>,
    pub marker: Option<String>,
}

#[async_trait]
impl Operation for DescribeActivities {
    type Request = DescribeActivitiesRequest;
    type Response = DescribeActivitiesResponse;

    const SERVICE: &'static str = "WorkDocs";
    const NAME: &'static str = "DescribeActivities";
    const DEFAULT_SELECT: &'static str = "UserActivities";
    const PARAMETERS: &'static [ParamSpec] = &[
        ParamSpec::optional("AuthenticationToken"),
        ParamSpec::optional("StartTime"),
        ParamSpec::optional("EndTime"),
        ParamSpec::optional("OrganizationId"),
        ParamSpec::optional("ActivityTypes"),
        ParamSpec::optional("ResourceId"),
        ParamSpec::optional("UserId"),
        ParamSpec::optional("IncludeIndirectActivities"),
        ParamSpec::optional("Limit"),
        ParamSpec::marker("Marker"),
    ];

    select_fields!(DescribeActivitiesResponse {
        "UserActivities" => user_activities,
        "Marker" => marker,
    });

    async fn invoke(
        &self,
        context: &ClientContext,
        request: DescribeActivitiesRequest,
    ) -> Result<DescribeActivitiesResponse, AnyhowError> {
        let output = client(context)
            .describe_activities()
            .set_authentication_token(request.authentication_token)
            .set_start_time(request.start_time.as_ref().map(to_date_time))
            .set_end_time(request.end_time.as_ref().map(to_date_time))
            .set_organization_id(request.organization_id)
            .set_activity_types(request.activity_types)
            .set_resource_id(request.resource_id)
            .set_user_id(request.user_id)
            .set_include_indirect_activities(request.include_indirect_activities)
            .set_limit(request.limit)
            .set_marker(request.marker)
            .send()
            .await?;
        Ok(DescribeActivitiesResponse {
            user_activities: output.user_activities().iter().map(Activity::from).collect(),
            marker: string(output.marker()),
        })
    }
}

impl PagedOperation for DescribeActivities {
    const MARKER: &'static str = "Marker";

    fn set_marker(request: &mut DescribeActivitiesRequest, marker: Option<Marker>) {
        request.marker = marker.map(String::from);
    }

    fn next_marker(response: &DescribeActivitiesResponse) -> Option<Marker> {
        Marker::normalize(response.marker.clone())
    }
}

/// Creates a folder under a parent folder.
pub struct CreateFolder;

/// Parameters of `CreateFolder`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CreateFolderRequest {
    pub authentication_token: Option<String>,
    pub name: Option<String>,
    pub parent_folder_id: String,
}

/// Result of `CreateFolder`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateFolderResponse {
    pub metadata: Option<Folder>,
    pub request_id: Option<String>,
}

#[async_trait]
impl Operation for CreateFolder {
    type Request = CreateFolderRequest;
    type Response = CreateFolderResponse;

    const SERVICE: &'static str = "WorkDocs";
    const NAME: &'static str = "CreateFolder";
    const DEFAULT_SELECT: &'static str = "Metadata";
    const PARAMETERS: &'static [ParamSpec] = &[
        ParamSpec::optional("AuthenticationToken"),
        ParamSpec::optional("Name"),
        ParamSpec::required("ParentFolderId"),
    ];
    const MUTATING: bool = true;

    select_fields!(CreateFolderResponse { "Metadata" => metadata, "RequestId" => request_id });

    async fn invoke(
        &self,
        context: &ClientContext,
        request: CreateFolderRequest,
    ) -> Result<CreateFolderResponse, AnyhowError> {
        let output = client(context)
            .create_folder()
            .set_authentication_token(request.authentication_token)
            .set_name(request.name)
            .parent_folder_id(request.parent_folder_id)
            .send()
            .await?;
        Ok(CreateFolderResponse {
            metadata: output.metadata().map(Folder::from),
            request_id: string(output.request_id()),
        })
    }
}

/// Permanently deletes a document and its versions.
pub struct DeleteDocument;

/// Parameters of `DeleteDocument`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteDocumentRequest {
    pub authentication_token: Option<String>,
    pub document_id: String,
}

/// Result of `DeleteDocument`, which carries nothing but the request id.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteDocumentResponse {
    pub request_id: Option<String>,
}

#[async_trait]
impl Operation for DeleteDocument {
    type Request = DeleteDocumentRequest;
    type Response = DeleteDocumentResponse;

    const SERVICE: &'static str = "WorkDocs";
    const NAME: &'static str = "DeleteDocument";
    const DEFAULT_SELECT: &'static str = "*";
    const PARAMETERS: &'static [ParamSpec] = &[
        ParamSpec::optional("AuthenticationToken"),
        ParamSpec::required("DocumentId"),
    ];
    const MUTATING: bool = true;
    const PASS_THRU: Option<&'static str> = Some("DocumentId");

    select_fields!(DeleteDocumentResponse { "RequestId" => request_id });

    async fn invoke(
        &self,
        context: &ClientContext,
        request: DeleteDocumentRequest,
    ) -> Result<DeleteDocumentResponse, AnyhowError> {
        let output = client(context)
            .delete_document()
            .set_authentication_token(request.authentication_token)
            .document_id(request.document_id)
            .send()
            .await?;
        Ok(DeleteDocumentResponse {
            request_id: string(output.request_id()),
        })
    }
}

/// Shares a resource with users, groups or the organization.
pub struct AddResourcePermissions;

/// One principal to share with. `Type` is `USER`, `GROUP`, `INVITE`, `ANONYMOUS` or
/// `ORGANIZATION`; `Role` is `VIEWER`, `CONTRIBUTOR`, `OWNER` or `COOWNER`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SharePrincipalRequest {
    pub id: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub role: String,
}

/// The `NotificationOptions` group.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NotificationOptionsRequest {
    pub send_email: Option<bool>,
    pub email_message: Option<String>,
}

/// Parameters of `AddResourcePermissions`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct AddResourcePermissionsRequest {
    pub authentication_token: Option<String>,
    pub resource_id: String,
    pub principals: Vec<SharePrincipalRequest>,
    pub notification_options: Option<NotificationOptionsRequest>,
}

/// Result of `AddResourcePermissions`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddResourcePermissionsResponse {
    pub share_results: Vec<ShareResult>,
    pub request_id: Option<String>,
}

#[async_trait]
impl Operation for AddResourcePermissions {
    type Request = AddResourcePermissionsRequest;
    type Response = AddResourcePermissionsResponse;

    const SERVICE: &'static str = "WorkDocs";
    const NAME: &'static str = "AddResourcePermissions";
    const DEFAULT_SELECT: &'static str = "ShareResults";
    const PARAMETERS: &'static [ParamSpec] = &[
        ParamSpec::optional("AuthenticationToken"),
        ParamSpec::required("ResourceId"),
        ParamSpec::required("Principals"),
        ParamSpec::optional("NotificationOptions.SendEmail"),
        ParamSpec::optional("NotificationOptions.EmailMessage"),
    ];
    const MUTATING: bool = true;

    select_fields!(AddResourcePermissionsResponse {
        "ShareResults" => share_results,
        "RequestId" => request_id,
    });

    async fn invoke(
        &self,
        context: &ClientContext,
        request: AddResourcePermissionsRequest,
    ) -> Result<AddResourcePermissionsResponse, AnyhowError> {
        let principals = request
            .principals
            .into_iter()
            .map(|principal| {
                SharePrincipal::builder()
                    .id(principal.id)
                    .r#type(PrincipalType::from(principal.kind.as_str()))
                    .role(RoleType::from(principal.role.as_str()))
                    .build()
            })
            .collect::<Result<Vec<_>, _>>()?;
        let notification_options = request.notification_options.map(|options| {
            NotificationOptions::builder()
                .set_send_email(options.send_email)
                .set_email_message(options.email_message)
                .build()
        });
        let output = client(context)
            .add_resource_permissions()
            .set_authentication_token(request.authentication_token)
            .resource_id(request.resource_id)
            .set_principals(Some(principals))
            .set_notification_options(notification_options)
            .send()
            .await?;
        Ok(AddResourcePermissionsResponse {
            share_results: output.share_results().iter().map(ShareResult::from).collect(),
            request_id: string(output.request_id()),
        })
    }
}
