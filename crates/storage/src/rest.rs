use gloo_net::http::{Request, Response};
use log::debug;
use parkfit_domain::FetchError;

use crate::{Collection, DocumentStore};

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error>;
}

#[derive(Clone, Default)]
pub struct GlooNetSendRequest;

impl SendRequest for GlooNetSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
        request.send().await
    }
}

/// Document store accessed over HTTP.
///
/// Collections are read from `{base_url}/{collection}` and single documents from
/// `{base_url}/{collection}/{id}`.
#[derive(Clone)]
pub struct RestStore<S: SendRequest> {
    base_url: String,
    pub sender: S,
}

impl RestStore<GlooNetSendRequest> {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_sender(base_url, GlooNetSendRequest)
    }
}

impl<S: SendRequest> RestStore<S> {
    pub fn with_sender(base_url: &str, sender: S) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            sender,
        }
    }

    fn url(&self, collection: Collection, id: Option<&str>) -> String {
        match id {
            Some(id) => format!("{}/{}/{id}", self.base_url, collection.as_ref()),
            None => format!("{}/{}", self.base_url, collection.as_ref()),
        }
    }

    async fn fetch(&self, url: &str) -> Result<Option<serde_json::Value>, FetchError> {
        let request = Request::get(url)
            .build()
            .map_err(|err| FetchError::Other(err.into()))?;
        let response = self.sender.send_request(request).await.map_err(|err| {
            debug!("request to {url} failed: {err}");
            FetchError::NoConnection
        })?;

        match response.status() {
            200 => Ok(Some(
                response
                    .json::<serde_json::Value>()
                    .await
                    .map_err(|err| FetchError::Deserialization(err.to_string()))?,
            )),
            404 => Ok(None),
            status => Err(FetchError::Response(format!(
                "{status} {}",
                response.status_text()
            ))),
        }
    }
}

impl<S: SendRequest> DocumentStore for RestStore<S> {
    async fn get_all(&self, collection: Collection) -> Result<Vec<serde_json::Value>, FetchError> {
        match self.fetch(&self.url(collection, None)).await? {
            Some(serde_json::Value::Array(documents)) => Ok(documents),
            Some(_) => Err(FetchError::Deserialization(format!(
                "expected list of documents in {}",
                collection.as_ref()
            ))),
            None => Ok(vec![]),
        }
    }

    async fn get_by_id(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<serde_json::Value>, FetchError> {
        self.fetch(&self.url(collection, Some(id))).await
    }
}
