//! Per-context storage and the operations built on it.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use reqwest::Url;
use tracing::{debug, info};

use super::BuildContext;
use crate::config::NetworkConfig;
use crate::constants::{
    MC_VERSION, VERSION_DATA_LOCATION, VERSION_MANIFEST_LOCATION, VERSION_MANIFEST_URL,
};
use crate::core::{McgError, Result};
use crate::plugin::PluginInstance;
use crate::remote::{CachedDocument, DocumentFetcher, HttpFetcher, load_document};
use crate::templating::{FormatArg, ReplacementTable, expand, render};
use crate::version::{VersionFeatures, VersionManifest};

/// The per-version metadata document: an arbitrary JSON object.
pub type VersionMetadata = serde_json::Map<String, serde_json::Value>;

static EMPTY_TABLE: ReplacementTable = ReplacementTable::new();

/// Everything stored for one build context.
///
/// Kept as a single record so that [`ContextRegistry::reset`] drops all of
/// it at once.
#[derive(Debug, Default)]
pub struct ContextState {
    pub replacements: ReplacementTable,
    pub plugin: Option<Arc<PluginInstance>>,
    pub manifest: Option<CachedDocument<VersionManifest>>,
    pub version_metadata: Option<CachedDocument<VersionMetadata>>,
}

/// Registry of build contexts and their state.
///
/// A context's state is created on its first write and lives until
/// [`reset`](Self::reset). Remote documents are loaded at most once per
/// context and then served from memory.
///
/// The registry is not thread-safe; every mutating operation takes
/// `&mut self`.
pub struct ContextRegistry {
    contexts: HashMap<BuildContext, ContextState>,
    fetcher: Box<dyn DocumentFetcher>,
    manifest_url: String,
}

impl ContextRegistry {
    /// Registry fetching over HTTP with the default user agent and timeout.
    pub fn new() -> Result<Self> {
        Ok(Self::with_fetcher(Box::new(HttpFetcher::with_defaults()?)))
    }

    /// Registry fetching over HTTP as described by a `[network]` section.
    pub fn from_network_config(network: &NetworkConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&network.user_agent, network.timeout())?;
        Ok(Self::with_fetcher(Box::new(fetcher)).with_manifest_url(network.manifest_url.clone()))
    }

    /// Registry using a caller-supplied fetcher.
    pub fn with_fetcher(fetcher: Box<dyn DocumentFetcher>) -> Self {
        Self {
            contexts: HashMap::new(),
            fetcher,
            manifest_url: VERSION_MANIFEST_URL.to_string(),
        }
    }

    /// Use a different manifest location. The URL may contain tokens.
    #[must_use]
    pub fn with_manifest_url(mut self, url: impl Into<String>) -> Self {
        self.manifest_url = url.into();
        self
    }

    /// State stored for `context`, if any.
    pub fn state(&self, context: BuildContext) -> Option<&ContextState> {
        self.contexts.get(&context)
    }

    /// Store the plugin instance for `context`, replacing any previous one.
    pub fn set_plugin_instance(&mut self, context: BuildContext, instance: Arc<PluginInstance>) {
        self.contexts.entry(context).or_default().plugin = Some(instance);
    }

    /// The plugin instance applied to `context`.
    ///
    /// # Errors
    ///
    /// [`McgError::NotInitialized`] if no instance was set (or the context
    /// was reset since).
    pub fn plugin_instance(&self, context: BuildContext) -> Result<Arc<PluginInstance>> {
        self.state(context)
            .and_then(|state| state.plugin.clone())
            .ok_or(McgError::NotInitialized)
    }

    /// Register a replacement for `name`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// [`McgError::InvalidReplacementName`] if `name` is not `@UPPER_SNAKE@`.
    /// Nothing is stored in that case.
    pub fn add_replacement(
        &mut self,
        context: BuildContext,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<()> {
        let name = name.into();

        if let Some(state) = self.contexts.get_mut(&context) {
            state.replacements.insert(name.clone(), value)?;
        } else {
            let mut state = ContextState::default();
            state.replacements.insert(name.clone(), value)?;
            self.contexts.insert(context, state);
        }

        debug!("Registered {} for {}", name, context);
        Ok(())
    }

    /// Register several replacements. All names are validated first; on
    /// error none of them is stored.
    pub fn add_replacements<I, K, V>(&mut self, context: BuildContext, replacements: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        if let Some(state) = self.contexts.get_mut(&context) {
            state.replacements.insert_all(replacements)?;
        } else {
            let mut state = ContextState::default();
            state.replacements.insert_all(replacements)?;
            self.contexts.insert(context, state);
        }

        debug!("Replacement table of {} now has {} entries", context, self.replacements(context).len());
        Ok(())
    }

    /// Whether `name` is registered for `context`.
    pub fn has_replacement(&self, context: BuildContext, name: &str) -> bool {
        self.replacements(context).contains(name)
    }

    /// The replacement table of `context`; empty if nothing was registered.
    pub fn replacements(&self, context: BuildContext) -> &ReplacementTable {
        self.state(context).map_or(&EMPTY_TABLE, |state| &state.replacements)
    }

    /// Expand every `@NAME@` token in `template`, then apply `args` as
    /// positional format arguments.
    ///
    /// Nothing is returned on failure; there is no partial result.
    ///
    /// # Errors
    ///
    /// - [`McgError::UnresolvedReplacement`] for a token with no entry
    /// - [`McgError::ExpansionLimitExceeded`] for self-referencing values
    /// - [`McgError::InvalidFormat`] if formatting fails
    pub fn resolve(
        &self,
        context: BuildContext,
        template: &str,
        args: &[FormatArg],
    ) -> Result<String> {
        render(self.replacements(context), template, args)
    }

    /// Expand `template` into a filesystem path.
    ///
    /// Only tokens are expanded; `%` is taken literally.
    pub fn resolve_path(&self, context: BuildContext, template: &str) -> Result<PathBuf> {
        expand(self.replacements(context), template).map(PathBuf::from)
    }

    /// Expand `template` into an absolute `http`/`https` URL.
    pub fn resolve_url(&self, context: BuildContext, template: &str) -> Result<Url> {
        let expanded = expand(self.replacements(context), template)?;

        let url = Url::parse(&expanded).map_err(|e| McgError::InvalidFormat {
            template: template.to_string(),
            reason: format!("'{expanded}' is not a valid URL: {e}"),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(McgError::InvalidFormat {
                template: template.to_string(),
                reason: format!("unsupported URL scheme '{other}'"),
            }),
        }
    }

    /// The version manifest, loaded on first use for `context`.
    ///
    /// The first call fetches it (falling back to the copy under
    /// `@CACHE_DIR@`); later calls return the same document without touching
    /// the network or the disk.
    pub fn version_manifest(
        &mut self,
        context: BuildContext,
    ) -> Result<&CachedDocument<VersionManifest>> {
        if self.state(context).is_none_or(|state| state.manifest.is_none()) {
            let url = self.resolve_url(context, &self.manifest_url)?;
            let path = self.resolve_path(context, VERSION_MANIFEST_LOCATION)?;
            let document = load_document(self.fetcher.as_ref(), url.as_str(), &path)?;
            self.contexts.entry(context).or_default().manifest = Some(document);
        }

        self.state(context)
            .and_then(|state| state.manifest.as_ref())
            .ok_or(McgError::NotInitialized)
    }

    /// The metadata document for the configured version, loaded on first use.
    ///
    /// Its URL comes from the manifest entry whose id equals the plugin
    /// instance's configured version. The mirror path uses that same version,
    /// whatever `@MC_VERSION@` currently holds.
    ///
    /// # Errors
    ///
    /// - [`McgError::NotInitialized`] without a plugin instance
    /// - [`McgError::UnknownVersion`] if the manifest has no such id
    /// - any error from loading either document
    pub fn version_metadata(
        &mut self,
        context: BuildContext,
    ) -> Result<&CachedDocument<VersionMetadata>> {
        if self.state(context).is_none_or(|state| state.version_metadata.is_none()) {
            let version = self.plugin_instance(context)?.extension.version.clone();
            let url = self.version_manifest(context)?.require(&version)?.url.clone();
            let location = VERSION_DATA_LOCATION.replace(MC_VERSION, &version);
            let path = self.resolve_path(context, &location)?;

            debug!("Version {} metadata at {}", version, url);
            let document = load_document(self.fetcher.as_ref(), &url, &path)?;
            self.contexts.entry(context).or_default().version_metadata = Some(document);
        }

        self.state(context)
            .and_then(|state| state.version_metadata.as_ref())
            .ok_or(McgError::NotInitialized)
    }

    /// Feature flags for the plugin instance's configured version.
    pub fn version_features(&self, context: BuildContext) -> Result<VersionFeatures> {
        let instance = self.plugin_instance(context)?;
        VersionFeatures::for_version(&instance.extension.version)
    }

    /// Drop everything stored for `context`.
    ///
    /// Afterwards the context behaves as if it had never been used. Returns
    /// whether there was anything to drop.
    pub fn reset(&mut self, context: BuildContext) -> bool {
        let removed = self.contexts.remove(&context).is_some();
        if removed {
            info!("Reset {}", context);
        }
        removed
    }
}
