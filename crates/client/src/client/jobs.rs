//! Job API methods for [`NomadClient`].

use secrecy::ExposeSecret;

use crate::client::NomadClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::JobListStub;

impl NomadClient {
    /// List job stubs, scoped to `namespace` when given.
    pub async fn list_jobs(&self, namespace: Option<&str>) -> Result<Vec<JobListStub>> {
        endpoints::list_jobs(
            &self.http,
            &self.address,
            self.token.as_ref().map(|t| t.expose_secret()),
            namespace,
            &self.retry,
        )
        .await
    }
}
