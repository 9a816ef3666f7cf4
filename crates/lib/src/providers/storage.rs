use crate::errors::AssistError;
use reqwest::{Client as ReqwestClient, StatusCode};
use serde::Serialize;

/// The outcome of probing the artifact bucket. These are the only failure
/// codes the caller distinguishes; anything else is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketStatus {
    Exists,
    Missing,
    AccessDenied,
}

/// A client for probing and creating the artifact bucket on an
/// S3-compatible endpoint. Only bucket lifecycle is covered; objects are
/// never read or written.
#[derive(Clone, Debug)]
pub struct BucketClient {
    client: ReqwestClient,
    api_url: String,
    bucket: String,
    region: String,
}

impl BucketClient {
    /// Creates a new `BucketClient` for one bucket.
    pub fn new(api_url: String, bucket: String, region: String) -> Result<Self, AssistError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(AssistError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            bucket,
            region,
        })
    }

    /// The name of the bucket this client probes.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    fn bucket_url(&self) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), self.bucket)
    }

    /// Checks whether the bucket exists and is accessible.
    pub async fn status(&self) -> Result<BucketStatus, AssistError> {
        let response = self
            .client
            .head(self.bucket_url())
            .send()
            .await
            .map_err(AssistError::StorageRequest)?;

        match response.status() {
            status if status.is_success() => Ok(BucketStatus::Exists),
            StatusCode::NOT_FOUND => Ok(BucketStatus::Missing),
            StatusCode::FORBIDDEN => Ok(BucketStatus::AccessDenied),
            status => Err(AssistError::StorageApi {
                bucket: self.bucket.clone(),
                status: status.as_u16(),
            }),
        }
    }

    /// Creates the bucket. Regions other than `us-east-1` require an
    /// explicit location constraint in the request body.
    pub async fn create(&self) -> Result<(), AssistError> {
        let mut request_builder = self.client.put(self.bucket_url());
        if self.region != "us-east-1" {
            let body = format!(
                "<CreateBucketConfiguration xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\
                 <LocationConstraint>{}</LocationConstraint>\
                 </CreateBucketConfiguration>",
                self.region
            );
            request_builder = request_builder
                .header("content-type", "application/xml")
                .body(body);
        }

        let response = request_builder
            .send()
            .await
            .map_err(AssistError::StorageRequest)?;

        if !response.status().is_success() {
            return Err(AssistError::StorageApi {
                bucket: self.bucket.clone(),
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }
}
