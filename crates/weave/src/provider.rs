//! Named value providers and their registry.
//!
//! A provider is a named, zero-argument source of one value to substitute
//! into templates at render time. Providers come in two flavors:
//!
//! - Static: the value is fixed at registration time ([`StaticProvider`])
//! - Lazy: the value is computed fresh on every render, by a closure or a
//!   hand-written [`ValueProvider`] implementation
//!
//! [`ProviderRegistry`] holds the registered providers and resolves them
//! into a flat context map once per render call. Suppliers backed by
//! mutable external state (a counter, a clock) are legitimate: every render
//! invokes each supplier exactly once, so such values are fresh per call.
//!
//! # Single-Threaded Design
//!
//! Providers are stored as `Rc` and carry no `Send + Sync` bounds. The
//! processor imposes no locking; thread safety of a shared processor is
//! entirely a property of the registered suppliers.

use std::collections::HashMap;
use std::rc::Rc;

use minijinja::Value;

/// Trait for types that produce a value for template rendering.
///
/// Implementations are invoked once per render call. A blanket
/// implementation is provided for closures:
///
/// ```rust
/// use weave::ValueProvider;
/// use minijinja::Value;
///
/// let provider = || Value::from(42);
/// assert_eq!(provider.provide(), Value::from(42));
/// ```
pub trait ValueProvider {
    /// Produce the value to substitute under this provider's name.
    fn provide(&self) -> Value;
}

/// Blanket implementation for closures returning a template value.
impl<F> ValueProvider for F
where
    F: Fn() -> Value,
{
    fn provide(&self) -> Value {
        (self)()
    }
}

/// A provider that always returns the same value.
///
/// Used internally for eager `.add(key, value)` registrations.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    value: Value,
}

impl StaticProvider {
    /// Creates a new static provider with the given value.
    pub fn new(value: Value) -> Self {
        Self { value }
    }
}

impl ValueProvider for StaticProvider {
    fn provide(&self) -> Value {
        self.value.clone()
    }
}

/// Storage for named providers, resolved into a context map per render.
///
/// At most one provider exists per name; registering a name again replaces
/// the earlier provider. `ProviderRegistry` is cheap to clone since it
/// stores providers as `Rc`.
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: HashMap<String, Rc<dyn ValueProvider>>,
}

impl ProviderRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a provider under `name`, replacing any earlier one.
    ///
    /// An empty name is silently ignored: no template can reference it.
    pub fn add_provider<P: ValueProvider + 'static>(&mut self, name: impl Into<String>, provider: P) {
        let name = name.into();
        if name.is_empty() {
            return;
        }
        self.providers.insert(name, Rc::new(provider));
    }

    /// Registers a static value under `name`.
    pub fn add_static(&mut self, name: impl Into<String>, value: Value) {
        self.add_provider(name, StaticProvider::new(value));
    }

    /// Returns true if the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Returns the number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Gets the names of all registered providers.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(|s| s.as_str())
    }

    /// Resolves every provider into a flat name-to-value map.
    ///
    /// Each provider is invoked exactly once. A value that resolves to
    /// none or undefined is substituted with the empty string, so the
    /// engine never sees an absent value under a registered name.
    pub fn resolve(&self) -> HashMap<String, Value> {
        self.providers
            .iter()
            .map(|(name, provider)| {
                let value = provider.provide();
                let value = if value.is_none() || value.is_undefined() {
                    Value::from("")
                } else {
                    value
                };
                (name.clone(), value)
            })
            .collect()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.providers.keys().collect::<Vec<_>>())
            .finish()
    }
}
