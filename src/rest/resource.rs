//! Named collections of compiled operations.
//!
//! A [`Resource`] binds a base path and an [`ApiClient`] to a set of named
//! operations. Operations come from two places: the standard CRUD subset
//! ([`BasicMethod`]) and explicitly declared [`MethodDescriptor`]s. Every
//! descriptor is checked when the resource is built; a resource that builds
//! successfully never fails on its own declarations at call time.
//!
//! # Example
//!
//! ```rust
//! use pact_api::ApiClient;
//! use pact_api::rest::{BasicMethod, MethodDescriptor, RequestArguments, Resource};
//!
//! let api = ApiClient::new("https://api.pact.example", None).unwrap();
//! let orders = Resource::builder(&api, "/users/me/orders")
//!     .include_basic([BasicMethod::Retrieve, BasicMethod::Create])
//!     .method(
//!         "skip",
//!         MethodDescriptor::patch().path("{id}/skip").url_params(["id"]),
//!     )
//!     .build()
//!     .unwrap();
//!
//! assert!(orders.contains("retrieve"));
//! assert!(!orders.contains("list"));
//!
//! let request = orders
//!     .operation("skip")
//!     .unwrap()
//!     .prepare(&RequestArguments::new().with("id", 7))
//!     .unwrap();
//! assert_eq!(request.path, "/users/me/orders/7/skip");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::clients::ApiClient;
use crate::error::{ApiError, PreconditionError};
use crate::rest::arguments::RequestArguments;
use crate::rest::descriptor::MethodDescriptor;
use crate::rest::errors::ConstructionError;
use crate::rest::operation::CompiledOperation;

/// Query parameters recognized by the standard `list` operation.
pub const LIST_QUERY_PARAMS: [&str; 5] = ["states", "per_page", "page", "sort", "order"];

/// The standard CRUD operations a resource can include.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BasicMethod {
    /// `GET {base}` with the [`LIST_QUERY_PARAMS`].
    List,
    /// `GET {base}/{id}`.
    Retrieve,
    /// `POST {base}`.
    Create,
    /// `PATCH {base}/{id}`.
    Update,
    /// `DELETE {base}/{id}`.
    Del,
}

impl BasicMethod {
    /// Every basic method, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::List,
        Self::Retrieve,
        Self::Create,
        Self::Update,
        Self::Del,
    ];

    /// Returns the operation name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Retrieve => "retrieve",
            Self::Create => "create",
            Self::Update => "update",
            Self::Del => "del",
        }
    }

    /// Returns the conventional descriptor for this operation.
    #[must_use]
    pub fn descriptor(&self) -> MethodDescriptor {
        match self {
            Self::List => MethodDescriptor::get().query_params(LIST_QUERY_PARAMS),
            Self::Retrieve => MethodDescriptor::get().path("{id}").url_params(["id"]),
            Self::Create => MethodDescriptor::post(),
            Self::Update => MethodDescriptor::patch().path("{id}").url_params(["id"]),
            Self::Del => MethodDescriptor::delete().path("{id}").url_params(["id"]),
        }
    }
}

impl fmt::Display for BasicMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BasicMethod {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| ConstructionError::UnknownBasicMethod {
                name: s.to_string(),
            })
    }
}

/// A base path bound to a set of named operations.
///
/// The operation set is fixed once built. Cloning is cheap relative to the
/// network calls it makes and shares the underlying client.
#[derive(Clone, Debug)]
pub struct Resource {
    base_path: String,
    client: ApiClient,
    operations: BTreeMap<String, CompiledOperation>,
}

// Verify Resource is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Resource>();
};

impl Resource {
    /// Starts building a resource at `base_path`.
    #[must_use]
    pub fn builder(client: &ApiClient, base_path: impl Into<String>) -> ResourceBuilder {
        ResourceBuilder::new(client, base_path)
    }

    /// Returns the base path.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the client this resource sends through.
    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Returns the operation called `name`.
    #[must_use]
    pub fn operation(&self, name: &str) -> Option<&CompiledOperation> {
        self.operations.get(name)
    }

    /// Returns every operation name, sorted.
    pub fn operation_names(&self) -> impl Iterator<Item = &str> {
        self.operations.keys().map(String::as_str)
    }

    /// Returns `true` if the resource has an operation called `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// Invokes the operation called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::UnknownOperation`] if there is no such
    /// operation, otherwise whatever the operation returns.
    pub async fn call(&self, name: &str, args: &RequestArguments) -> Result<Value, ApiError> {
        let operation = self
            .operation(name)
            .ok_or_else(|| PreconditionError::UnknownOperation {
                resource: self.base_path.clone(),
                name: name.to_string(),
            })?;
        operation.call(args).await
    }

    /// Invokes `list`.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn list(&self, args: &RequestArguments) -> Result<Value, ApiError> {
        self.call(BasicMethod::List.as_str(), args).await
    }

    /// Invokes `retrieve`.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn retrieve(&self, args: &RequestArguments) -> Result<Value, ApiError> {
        self.call(BasicMethod::Retrieve.as_str(), args).await
    }

    /// Invokes `create`.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn create(&self, args: &RequestArguments) -> Result<Value, ApiError> {
        self.call(BasicMethod::Create.as_str(), args).await
    }

    /// Invokes `update`.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn update(&self, args: &RequestArguments) -> Result<Value, ApiError> {
        self.call(BasicMethod::Update.as_str(), args).await
    }

    /// Invokes `del`.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn del(&self, args: &RequestArguments) -> Result<Value, ApiError> {
        self.call(BasicMethod::Del.as_str(), args).await
    }
}

/// Builder for [`Resource`].
#[derive(Debug)]
pub struct ResourceBuilder {
    client: ApiClient,
    base_path: String,
    basics: Vec<BasicMethod>,
    methods: Vec<(String, MethodDescriptor)>,
}

impl ResourceBuilder {
    fn new(client: &ApiClient, base_path: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            base_path: base_path.into(),
            basics: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Adds standard CRUD operations. Repeats are ignored.
    #[must_use]
    pub fn include_basic(mut self, methods: impl IntoIterator<Item = BasicMethod>) -> Self {
        for method in methods {
            if !self.basics.contains(&method) {
                self.basics.push(method);
            }
        }
        self
    }

    /// Declares a named operation.
    #[must_use]
    pub fn method(mut self, name: impl Into<String>, descriptor: MethodDescriptor) -> Self {
        self.methods.push((name.into(), descriptor));
        self
    }

    /// Compiles every operation.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] if the base path is empty, a name is
    /// empty or defined twice, or a descriptor is invalid.
    pub fn build(self) -> Result<Resource, ConstructionError> {
        if self.base_path.is_empty() {
            return Err(ConstructionError::EmptyBasePath);
        }

        let declared = self
            .basics
            .iter()
            .map(|basic| (basic.as_str().to_string(), basic.descriptor()))
            .chain(self.methods);

        let mut operations = BTreeMap::new();
        for (name, descriptor) in declared {
            if name.is_empty() {
                return Err(ConstructionError::EmptyMethodName {
                    base_path: self.base_path,
                });
            }
            if operations.contains_key(&name) {
                return Err(ConstructionError::DuplicateMethod {
                    name,
                    base_path: self.base_path,
                });
            }

            let operation =
                CompiledOperation::compile(&self.client, name.clone(), &self.base_path, descriptor)
                    .map_err(|source| ConstructionError::InvalidDescriptor {
                        method: name.clone(),
                        source,
                    })?;
            operations.insert(name, operation);
        }

        tracing::debug!(
            base_path = %self.base_path,
            operations = operations.len(),
            "Built Pact API resource"
        );

        Ok(Resource {
            base_path: self.base_path,
            client: self.client,
            operations,
        })
    }
}
