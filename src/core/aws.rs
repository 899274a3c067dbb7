//! AWS backend.
//!
//! Implements every backend capability with the AWS SDK for Rust.
//! Credentials come from the default provider chain (environment, profile,
//! SSO, instance metadata, ...).
//!
//! `HTTPS_PROXY`/`https_proxy` (and `NO_PROXY`) are honored for every call.
//!
//! The SDK is async while resolution is strictly sequential, so each call is
//! driven to completion on a private current-thread runtime.

use aws_config::BehaviorVersion;
use aws_smithy_http_client::proxy::ProxyConfig;
use aws_smithy_http_client::tls;
use std::future::Future;
use tokio::runtime::Runtime;
use tracing::{debug, trace};

use super::backend::{
    Export, ExportLister, ExportPage, ParameterGetter, SecretGetter, Stack, StackDescriber,
    StackOutput,
};
use crate::core::constants;
use crate::error::{BackendError, Result};

/// Overrides applied on top of the SDK's default configuration.
#[derive(Debug, Clone, Default)]
pub struct AwsSettings {
    pub region: Option<String>,
    pub profile: Option<String>,
}

/// Backend talking to CloudFormation, SSM and Secrets Manager.
pub struct AwsBackend {
    runtime: Runtime,
    cloudformation: aws_sdk_cloudformation::Client,
    ssm: aws_sdk_ssm::Client,
    secrets: aws_sdk_secretsmanager::Client,
}

impl AwsBackend {
    /// Load the shared SDK config and build one client per service.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Runtime` if the tokio runtime cannot be built.
    pub fn connect(settings: &AwsSettings) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(BackendError::Runtime)?;

        // The SDK's default client ignores proxy variables.
        let proxy = ProxyConfig::from_env();
        if let Some(url) = constants::PROXY_ENV
            .iter()
            .find_map(|name| std::env::var(name).ok())
        {
            debug!(proxy = %url, "routing aws requests through https proxy");
        }
        let http_client = aws_smithy_http_client::Builder::new().build_with_connector_fn(
            move |settings, components| {
                let mut builder =
                    aws_smithy_http_client::Connector::builder().proxy_config(proxy.clone());
                builder.set_connector_settings(settings.cloned());
                if let Some(components) = components {
                    builder.set_sleep_impl(components.sleep_impl());
                }
                builder
                    .tls_provider(tls::Provider::Rustls(
                        tls::rustls_provider::CryptoMode::AwsLc,
                    ))
                    .build()
            },
        );

        let config = runtime.block_on(async {
            let mut loader =
                aws_config::defaults(BehaviorVersion::latest()).http_client(http_client);
            if let Some(region) = &settings.region {
                loader = loader.region(aws_config::Region::new(region.clone()));
            }
            if let Some(profile) = &settings.profile {
                loader = loader.profile_name(profile);
            }
            loader.load().await
        });

        debug!(
            region = config.region().map(|r| r.as_ref()).unwrap_or("<unset>"),
            profile = settings.profile.as_deref().unwrap_or("<default>"),
            "aws config loaded"
        );

        Ok(Self {
            cloudformation: aws_sdk_cloudformation::Client::new(&config),
            ssm: aws_sdk_ssm::Client::new(&config),
            secrets: aws_sdk_secretsmanager::Client::new(&config),
            runtime,
        })
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}

impl ExportLister for AwsBackend {
    fn list_exports(&self, next_token: Option<&str>) -> Result<ExportPage> {
        trace!(next_token = ?next_token, "ListExports");

        let output = self
            .block_on(
                self.cloudformation
                    .list_exports()
                    .set_next_token(next_token.map(str::to_string))
                    .send(),
            )
            .map_err(|e| BackendError::Request {
                service: "cloudformation",
                message: aws_sdk_cloudformation::error::DisplayErrorContext(&e).to_string(),
            })?;

        let exports = output
            .exports()
            .iter()
            .filter_map(|e| {
                Some(Export {
                    name: e.name()?.to_string(),
                    value: e.value().unwrap_or_default().to_string(),
                })
            })
            .collect();

        Ok(ExportPage {
            exports,
            next_token: output.next_token().map(str::to_string),
        })
    }
}

impl StackDescriber for AwsBackend {
    fn describe_stack(&self, stack_name: &str) -> Result<Vec<Stack>> {
        trace!(stack = %stack_name, "DescribeStacks");

        let output = self
            .block_on(
                self.cloudformation
                    .describe_stacks()
                    .stack_name(stack_name)
                    .send(),
            )
            .map_err(|e| BackendError::Request {
                service: "cloudformation",
                message: aws_sdk_cloudformation::error::DisplayErrorContext(&e).to_string(),
            })?;

        Ok(output
            .stacks()
            .iter()
            .map(|stack| Stack {
                outputs: stack
                    .outputs()
                    .iter()
                    .filter_map(|o| {
                        Some(StackOutput {
                            key: o.output_key()?.to_string(),
                            value: o.output_value().unwrap_or_default().to_string(),
                        })
                    })
                    .collect(),
            })
            .collect())
    }
}

impl ParameterGetter for AwsBackend {
    fn get_parameter(&self, name: &str) -> Result<String> {
        trace!(name = %name, "GetParameter");

        let output = self
            .block_on(
                self.ssm
                    .get_parameter()
                    .name(name)
                    .with_decryption(true)
                    .send(),
            )
            .map_err(|e| BackendError::Request {
                service: "ssm",
                message: aws_sdk_ssm::error::DisplayErrorContext(&e).to_string(),
            })?;

        output
            .parameter()
            .and_then(|p| p.value())
            .map(str::to_string)
            .ok_or_else(|| {
                BackendError::EmptyResponse {
                    service: "ssm",
                    what: format!("value for parameter {}", name),
                }
                .into()
            })
    }
}

impl SecretGetter for AwsBackend {
    fn get_secret_value(&self, secret_id: &str) -> Result<String> {
        trace!(secret_id = %secret_id, "GetSecretValue");

        let output = self
            .block_on(self.secrets.get_secret_value().secret_id(secret_id).send())
            .map_err(|e| BackendError::Request {
                service: "secretsmanager",
                message: aws_sdk_secretsmanager::error::DisplayErrorContext(&e).to_string(),
            })?;

        // Binary secrets have no SecretString.
        output
            .secret_string()
            .map(str::to_string)
            .ok_or_else(|| {
                BackendError::EmptyResponse {
                    service: "secretsmanager",
                    what: format!("string value for secret {}", secret_id),
                }
                .into()
            })
    }
}
