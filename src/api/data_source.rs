use std::path::{Component, Path, PathBuf};

use indexmap::IndexMap;
use tracing::debug;

use crate::core::{FlowRecord, parse_flow_records};
use crate::error::{FlowMapError, FlowMapResult};

/// Joins a deployment base path and a resource file with exactly one `/`.
///
/// Accepts base paths with or without leading/trailing slashes, relative
/// `./` bases, and absolute URLs. An empty base resolves from the root.
#[must_use]
pub fn resolve_resource_path(base_path: &str, file: &str) -> String {
    let file = file.trim().trim_start_matches('/');
    let base = base_path.trim();

    let mut resolved = if base.is_empty() {
        "/".to_owned()
    } else if base.contains("://") || base.starts_with('/') || base.starts_with("./") {
        base.to_owned()
    } else {
        format!("/{base}")
    };
    if !resolved.ends_with('/') {
        resolved.push('/');
    }
    resolved.push_str(file);
    resolved
}

/// Source of static resource bodies addressed by resolved location.
pub trait ResourceFetcher {
    fn fetch(&self, location: &str) -> FlowMapResult<String>;
}

impl<F: ResourceFetcher + ?Sized> ResourceFetcher for &F {
    fn fetch(&self, location: &str) -> FlowMapResult<String> {
        (**self).fetch(location)
    }
}

impl<F: ResourceFetcher + ?Sized> ResourceFetcher for Box<F> {
    fn fetch(&self, location: &str) -> FlowMapResult<String> {
        (**self).fetch(location)
    }
}

/// Fetches and parses the flow resource in one step.
pub fn load_flow_records(
    fetcher: &dyn ResourceFetcher,
    location: &str,
) -> FlowMapResult<Vec<FlowRecord>> {
    let body = fetcher.fetch(location)?;
    debug!(location, bytes = body.len(), "fetched flow resource");
    parse_flow_records(&body)
}

/// Serves resources from a directory mounted at a base path, the way a
/// static host serves a built site under a subpath.
#[derive(Debug, Clone)]
pub struct StaticDirFetcher {
    root: PathBuf,
    base_path: String,
}

impl StaticDirFetcher {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, base_path: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_path: base_path.into(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn local_path(&self, location: &str) -> FlowMapResult<PathBuf> {
        let mount = resolve_resource_path(&self.base_path, "");
        let relative = location.strip_prefix(mount.as_str()).ok_or_else(|| {
            FlowMapError::Fetch {
                location: location.to_owned(),
                reason: format!("not served under base path `{mount}`"),
            }
        })?;

        let relative = Path::new(relative);
        if relative
            .components()
            .any(|component| !matches!(component, Component::Normal(_)))
        {
            return Err(FlowMapError::Fetch {
                location: location.to_owned(),
                reason: "path escapes the static root".to_owned(),
            });
        }
        Ok(self.root.join(relative))
    }
}

impl ResourceFetcher for StaticDirFetcher {
    fn fetch(&self, location: &str) -> FlowMapResult<String> {
        let path = self.local_path(location)?;
        std::fs::read_to_string(&path).map_err(|e| FlowMapError::Fetch {
            location: location.to_owned(),
            reason: format!("failed to read `{}`: {e}", path.display()),
        })
    }
}

/// Fixed set of resources held in memory, keyed by location.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFetcher {
    resources: IndexMap<String, String>,
}

impl InMemoryFetcher {
    #[must_use]
    pub fn with_resource(mut self, location: impl Into<String>, body: impl Into<String>) -> Self {
        self.resources.insert(location.into(), body.into());
        self
    }
}

impl ResourceFetcher for InMemoryFetcher {
    fn fetch(&self, location: &str) -> FlowMapResult<String> {
        self.resources
            .get(location)
            .cloned()
            .ok_or_else(|| FlowMapError::Fetch {
                location: location.to_owned(),
                reason: "not found".to_owned(),
            })
    }
}

/// Fetches resources from an HTTP origin.
#[cfg(feature = "http-source")]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    origin: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http-source")]
impl HttpFetcher {
    pub fn new(origin: impl Into<String>) -> FlowMapResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|e| FlowMapError::Fetch {
                location: String::new(),
                reason: format!("http client error: {e}"),
            })?;
        Ok(Self {
            origin: origin.into().trim_end_matches('/').to_owned(),
            client,
        })
    }

    fn url_for(&self, location: &str) -> String {
        if location.contains("://") {
            location.to_owned()
        } else {
            format!("{}/{}", self.origin, location.trim_start_matches('/'))
        }
    }
}

#[cfg(feature = "http-source")]
impl ResourceFetcher for HttpFetcher {
    fn fetch(&self, location: &str) -> FlowMapResult<String> {
        let url = self.url_for(location);
        let fetch_error = |reason: String| FlowMapError::Fetch {
            location: url.clone(),
            reason,
        };
        self.client
            .get(&url)
            .send()
            .map_err(|e| fetch_error(format!("request failed: {e}")))?
            .error_for_status()
            .map_err(|e| fetch_error(format!("http status: {e}")))?
            .text()
            .map_err(|e| fetch_error(format!("failed to read body: {e}")))
    }
}
