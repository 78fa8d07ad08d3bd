use crate::{Error, ListTableRecordsOptions, PageInfo, RecordId};
use reqwest::{RequestBuilder, Response, StatusCode, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;

const AUTH_HEADER: &str = "xc-auth";

pub struct NocoDbClientConfig {
    pub base_url: String,
    pub api_token: String,
    pub timeout: Duration,
}

#[derive(Clone)]
pub struct NocoDbClient {
    base_url: Url,
    api_token: String,
    http: reqwest::Client,
}

#[derive(Deserialize)]
struct ListTableRecordsResponse<T> {
    list: Vec<T>,

    #[serde(rename = "pageInfo", default)]
    page_info: PageInfo,
}

#[derive(Deserialize)]
struct BadRequestResponse {
    msg: String,
}

impl NocoDbClient {
    pub fn new(config: NocoDbClientConfig) -> Result<Self, Error> {
        let base_url =
            Url::parse(&config.base_url).map_err(|err| Error::InvalidUrl(err.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(config.base_url));
        }

        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            base_url,
            api_token: config.api_token,
            http,
        })
    }

    ///
    /// Lists records of the table. Response is paginated,
    /// use [ListTableRecordsOptions::offset] to fetch following pages
    ///
    pub async fn list_table_records<T: DeserializeOwned>(
        &self,
        table_id: &str,
        options: &ListTableRecordsOptions,
    ) -> Result<(Vec<T>, PageInfo), Error> {
        let query = options.query_pairs()?;
        tracing::trace!(table_id, ?query, "listing table records");

        let request = self.http.get(self.records_url(table_id)?).query(&query);
        let response = self.send(request).await?;
        let response = Self::parse::<ListTableRecordsResponse<T>>(response).await?;

        Ok((response.list, response.page_info))
    }

    ///
    /// Inserts records into the table
    ///
    /// ### Returns
    /// IDs of created records in the order of `records`
    ///
    pub async fn create_table_records<T: Serialize>(
        &self,
        table_id: &str,
        records: &[T],
    ) -> Result<Vec<RecordId>, Error> {
        tracing::trace!(table_id, count = records.len(), "creating table records");

        let request = self.http.post(self.records_url(table_id)?).json(records);
        let response = self.send(request).await?;

        Self::parse(response).await
    }

    ///
    /// Partially updates records. Every record must contain `Id`,
    /// fields absent from the payload are left unchanged
    ///
    pub async fn update_table_records<T: Serialize>(
        &self,
        table_id: &str,
        records: &[T],
    ) -> Result<Vec<RecordId>, Error> {
        tracing::trace!(table_id, count = records.len(), "updating table records");

        let request = self.http.patch(self.records_url(table_id)?).json(records);
        let response = self.send(request).await?;

        Self::parse(response).await
    }

    fn records_url(&self, table_id: &str) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["api", "v2", "tables", table_id, "records"]);

        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, Error> {
        let response = request.header(AUTH_HEADER, &self.api_token).send().await?;

        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::BAD_REQUEST => {
                let body = response.text().await?;
                let message = serde_json::from_str::<BadRequestResponse>(&body)
                    .map(|bad_request| bad_request.msg)
                    .unwrap_or(body);

                Err(Error::BadRequest { message })
            }
            status => {
                let body = response.text().await.unwrap_or_default();

                Err(Error::UnexpectedStatus { status, body })
            }
        }
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
        Ok(response.json::<T>().await?)
    }
}
