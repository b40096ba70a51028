// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::shape::{string, to_date_time};
use crate::common::{AnyhowError, ClientContext};
use crate::select::{Operation, ParamSpec};
use crate::select_fields;
use async_trait::async_trait;
use aws_sdk_marketplacecommerceanalytics::operation::RequestId;
use aws_sdk_marketplacecommerceanalytics::types::DataSetType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A convenient alias for Marketplace Commerce Analytics client so consuming code doesn't
/// need to add it to `Cargo.toml`
pub type CommerceAnalyticsClient = aws_sdk_marketplacecommerceanalytics::Client;

/// Asks for a data set to be published to an S3 bucket. Completion is announced on the
/// SNS topic.
pub struct GenerateDataSet;

/// Parameters of `GenerateDataSet`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateDataSetRequest {
    pub data_set_type: String,
    pub data_set_publication_date: DateTime<Utc>,
    pub role_name_arn: String,
    pub destination_s3_bucket_name: String,
    pub destination_s3_prefix: Option<String>,
    pub sns_topic_arn: String,
    pub customer_defined_values: Option<HashMap<String, String>>,
}

/// Result of `GenerateDataSet`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateDataSetResponse {
    pub data_set_request_id: Option<String>,
    pub request_id: Option<String>,
}

#[async_trait]
impl Operation for GenerateDataSet {
    type Request = GenerateDataSetRequest;
    type Response = GenerateDataSetResponse;

    const SERVICE: &'static str = "MarketplaceCommerceAnalytics";
    const NAME: &'static str = "GenerateDataSet";
    const DEFAULT_SELECT: &'static str = "DataSetRequestId";
    const PARAMETERS: &'static [ParamSpec] = &[
        ParamSpec::required("DataSetType"),
        ParamSpec::required("DataSetPublicationDate"),
        ParamSpec::required("RoleNameArn"),
        ParamSpec::required("DestinationS3BucketName"),
        ParamSpec::optional("DestinationS3Prefix"),
        ParamSpec::required("SnsTopicArn"),
        ParamSpec::optional("CustomerDefinedValues"),
    ];
    const MUTATING: bool = true;

    select_fields!(GenerateDataSetResponse {
        "DataSetRequestId" => data_set_request_id,
        "RequestId" => request_id,
    });

    async fn invoke(
        &self,
        context: &ClientContext,
        request: GenerateDataSetRequest,
    ) -> Result<GenerateDataSetResponse, AnyhowError> {
        let output = CommerceAnalyticsClient::new(context.sdk_config())
            .generate_data_set()
            .data_set_type(DataSetType::from(request.data_set_type.as_str()))
            .data_set_publication_date(to_date_time(&request.data_set_publication_date))
            .role_name_arn(request.role_name_arn)
            .destination_s3_bucket_name(request.destination_s3_bucket_name)
            .set_destination_s3_prefix(request.destination_s3_prefix)
            .sns_topic_arn(request.sns_topic_arn)
            .set_customer_defined_values(request.customer_defined_values)
            .send()
            .await?;
        Ok(GenerateDataSetResponse {
            data_set_request_id: string(output.data_set_request_id()),
            request_id: string(output.request_id()),
        })
    }
}
