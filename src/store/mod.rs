pub mod tasks;
pub mod thoughts;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Failure of a single store operation. Nothing is retried; the caller's
/// visible state simply stays as it was.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{verb} {path} returned {status}")]
    Status {
        verb: &'static str,
        path: String,
        status: StatusCode,
    },
    #[error("failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },
}

#[derive(Debug, Deserialize)]
struct Created {
    id: String,
}

/// Thin client for the hosted document store.
///
/// Records live in named collections; ids are generated by the store on
/// create and returned to the caller. Constructed once and handed to the
/// collection adapters; there is no process-wide store handle.
#[derive(Clone)]
pub struct DocStore {
    base_url: String,
    http: Client,
}

impl DocStore {
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let http = Client::builder().build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// POST a new record, returning the generated id.
    pub async fn create<T: serde::Serialize>(
        &self,
        collection: &str,
        fields: &T,
    ) -> Result<String, Error> {
        let path = format!("{}/{}", self.base_url, collection);
        let resp = self.http.post(&path).json(fields).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                verb: "POST",
                path,
                status,
            });
        }

        let created: Created = resp.json().await.map_err(|e| Error::Decode {
            path,
            reason: e.to_string(),
        })?;
        Ok(created.id)
    }

    /// GET the records of a collection, optionally filtered on a boolean
    /// field and ordered by another.
    pub async fn query<T: DeserializeOwned>(
        &self,
        collection: &str,
        filter: Option<(&str, bool)>,
        order_by: Option<&str>,
    ) -> Result<Vec<T>, Error> {
        let path = query_path(&self.base_url, collection, filter, order_by);
        let resp = self.http.get(&path).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                verb: "GET",
                path,
                status,
            });
        }

        resp.json().await.map_err(|e| Error::Decode {
            path,
            reason: e.to_string(),
        })
    }

    /// PATCH a partial set of fields onto an existing record.
    pub async fn update<T: serde::Serialize>(
        &self,
        collection: &str,
        id: &str,
        fields: &T,
    ) -> Result<(), Error> {
        let path = format!("{}/{}/{}", self.base_url, collection, id);
        let resp = self.http.patch(&path).json(fields).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                verb: "PATCH",
                path,
                status,
            });
        }
        Ok(())
    }

    /// DELETE a record. A missing record counts as deleted.
    pub async fn delete(&self, collection: &str, id: &str) -> Result<(), Error> {
        let path = format!("{}/{}/{}", self.base_url, collection, id);
        let resp = self.http.delete(&path).send().await?;

        match resp.status() {
            StatusCode::NO_CONTENT | StatusCode::OK | StatusCode::NOT_FOUND => Ok(()),
            status => Err(Error::Status {
                verb: "DELETE",
                path,
                status,
            }),
        }
    }
}

fn query_path(
    base_url: &str,
    collection: &str,
    filter: Option<(&str, bool)>,
    order_by: Option<&str>,
) -> String {
    let mut path = format!("{}/{}", base_url, collection);
    let mut sep = '?';
    if let Some((field, value)) = filter {
        path.push_str(&format!("{}{}={}", sep, field, value));
        sep = '&';
    }
    if let Some(field) = order_by {
        path.push_str(&format!("{}order_by={}", sep, field));
    }
    path
}
