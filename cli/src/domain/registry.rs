//! Immutable registry of managed services.
//!
//! The registry pairs the canonical install order with a lookup table of
//! service handles. It is built once at startup and handed to the use-cases
//! that need it; nothing mutates it afterwards.

use std::collections::HashMap;

use crate::domain::error::RegistryError;
use crate::domain::service::ServiceId;

/// Ordered set of service handles keyed by [`ServiceId`].
///
/// Every identifier in the order has exactly one handle, and identifiers are
/// unique. Both properties are checked by [`ServiceRegistry::new`].
#[derive(Debug)]
pub struct ServiceRegistry<S> {
    order: Vec<ServiceId>,
    services: HashMap<ServiceId, S>,
}

impl<S> ServiceRegistry<S> {
    /// Build a registry from `(id, handle)` pairs given in install order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if an identifier appears twice.
    pub fn new<I>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (ServiceId, S)>,
    {
        let mut order = Vec::new();
        let mut services = HashMap::new();
        for (id, service) in entries {
            if services.contains_key(&id) {
                return Err(RegistryError::Duplicate(id.to_string()));
            }
            order.push(id.clone());
            services.insert(id, service);
        }
        Ok(Self { order, services })
    }

    /// A registry with no services.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            order: Vec::new(),
            services: HashMap::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Identifiers in install order.
    #[must_use]
    pub fn order(&self) -> &[ServiceId] {
        &self.order
    }

    #[must_use]
    pub fn get(&self, id: &ServiceId) -> Option<&S> {
        self.services.get(id)
    }

    /// Services in install order.
    pub fn install_order(&self) -> impl DoubleEndedIterator<Item = (&ServiceId, &S)> {
        self.order
            .iter()
            .filter_map(|id| self.services.get(id).map(|service| (id, service)))
    }

    /// Services in teardown order: last installed, first removed.
    pub fn uninstall_order(&self) -> impl Iterator<Item = (&ServiceId, &S)> {
        self.install_order().rev()
    }
}
