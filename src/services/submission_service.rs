use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{info, warn};

use crate::config::Config;
use crate::dto::application_dto::Application;
use crate::error::{Error, Result};

/// One outbound attempt to deliver an application.
#[allow(async_fn_in_trait)]
pub trait Submitter {
    async fn submit(&self, application: &Application<'_>) -> Result<()>;
}

/// Posts applications as `multipart/form-data` to a form-collection endpoint.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    client: Client,
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

pub fn multipart_form(application: &Application<'_>) -> Result<Form> {
    let resume = application.resume;
    let resume_part = Part::bytes(resume.data.to_vec())
        .file_name(resume.file_name.clone())
        .mime_str(&resume.content_type)?;

    let form = application
        .fields
        .text_parts()
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value));

    Ok(form.part("resume", resume_part))
}

impl Submitter for HttpSubmitter {
    async fn submit(&self, application: &Application<'_>) -> Result<()> {
        let form = multipart_form(application)?;
        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!(%status, "Collection endpoint accepted application");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, body = %body, "Collection endpoint rejected application");
            Err(Error::Rejected(status))
        }
    }
}

/// Stands in for a network call: logs the record locally and waits.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Submitter for SimulatedSubmitter {
    async fn submit(&self, application: &Application<'_>) -> Result<()> {
        let fields = application.fields;
        info!(
            full_name = %fields.full_name,
            email = %fields.email,
            phone = %fields.phone,
            position = %fields.position,
            experience = %fields.experience,
            message = fields.message.as_deref().unwrap_or(""),
            resume = %application.resume.file_name,
            resume_bytes = application.resume.size(),
            "Application received (simulated delivery)"
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// The submitter chosen by configuration.
#[derive(Debug, Clone)]
pub enum ApplicationSubmitter {
    Http(HttpSubmitter),
    Simulated(SimulatedSubmitter),
}

impl ApplicationSubmitter {
    pub fn from_config(config: &Config) -> Self {
        match &config.application_endpoint {
            Some(url) => {
                info!("Application delivery enabled, endpoint: {}", url);
                ApplicationSubmitter::Http(HttpSubmitter::new(url.clone()))
            }
            None => {
                info!("Application delivery simulated (APPLICATION_ENDPOINT not set or empty)");
                ApplicationSubmitter::Simulated(SimulatedSubmitter::new(
                    config.simulated_submit_delay,
                ))
            }
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ApplicationSubmitter::Http(_))
    }
}

impl Submitter for ApplicationSubmitter {
    async fn submit(&self, application: &Application<'_>) -> Result<()> {
        match self {
            ApplicationSubmitter::Http(http) => http.submit(application).await,
            ApplicationSubmitter::Simulated(simulated) => simulated.submit(application).await,
        }
    }
}
