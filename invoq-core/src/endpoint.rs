//! Deployed endpoint metadata.
//!
//! An [`Endpoint`] is the long-lived pairing of one deployed target with its
//! metadata: the naming path used to resolve its component environment and an
//! attachment map collaborators read during one-time setup. One dispatcher
//! owns one endpoint for its whole lifetime.

use crate::attachments::Attachments;
use std::any::Any;
use std::fmt;

/// Default naming path for an endpoint's component environment.
pub const DEFAULT_NAMING_PATH: &str = "comp/env";

/// Metadata for one deployed endpoint.
pub struct Endpoint {
    naming_path: String,
    attachments: Attachments,
}

impl Endpoint {
    /// Start building an endpoint.
    pub fn builder() -> EndpointBuilder {
        EndpointBuilder {
            naming_path: DEFAULT_NAMING_PATH.to_string(),
            attachments: Attachments::new(),
        }
    }

    /// The naming path of the endpoint's component environment.
    pub fn naming_path(&self) -> &str {
        &self.naming_path
    }

    /// Deployment-supplied context objects (e.g. an injection spec).
    pub fn attachments(&self) -> &Attachments {
        &self.attachments
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("naming_path", &self.naming_path)
            .field("attachments", &self.attachments)
            .finish()
    }
}

/// Builder for [`Endpoint`].
pub struct EndpointBuilder {
    naming_path: String,
    attachments: Attachments,
}

impl EndpointBuilder {
    /// Override the component-environment naming path.
    pub fn naming_path(mut self, path: impl Into<String>) -> Self {
        self.naming_path = path.into();
        self
    }

    /// Attach a deployment context object.
    pub fn attach<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.attachments.insert(value);
        self
    }

    /// Finish the endpoint.
    pub fn build(self) -> Endpoint {
        Endpoint {
            naming_path: self.naming_path,
            attachments: self.attachments,
        }
    }
}
