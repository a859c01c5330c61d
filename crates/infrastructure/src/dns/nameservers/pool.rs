use super::random::{FastRandom, RandomSource};
use arc_swap::ArcSwap;
use ferrous_resolv_domain::{Address, AddressInput, DomainError};
use rustc_hash::FxHashSet;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

pub const DEFAULT_NAMESERVER_PORT: u16 = 53;

/// Candidate nameservers for a resolver.
///
/// Members are unique by `(host, port)`. Every `add`/`fail` rebuilds an
/// ordered view of the members under the writer lock and publishes it
/// atomically, so `pick_random` and `iter` never block on writers and
/// never see a half-built view.
pub struct NameServers<R = FastRandom> {
    members: Mutex<FxHashSet<Address>>,
    view: ArcSwap<Vec<Address>>,
    default_port: u16,
    rng: R,
}

impl NameServers<FastRandom> {
    /// Builds a pool from raw nameserver specs. Fails on the first spec
    /// that does not parse.
    pub fn new<'a, I>(nameservers: I, default_port: u16) -> Result<Self, DomainError>
    where
        I: IntoIterator,
        I::Item: Into<AddressInput<'a>>,
    {
        Self::with_rng(nameservers, default_port, FastRandom)
    }
}

impl Default for NameServers<FastRandom> {
    fn default() -> Self {
        Self::empty(DEFAULT_NAMESERVER_PORT, FastRandom)
    }
}

impl<R: RandomSource> NameServers<R> {
    pub fn with_rng<'a, I>(nameservers: I, default_port: u16, rng: R) -> Result<Self, DomainError>
    where
        I: IntoIterator,
        I::Item: Into<AddressInput<'a>>,
    {
        let pool = Self::empty(default_port, rng);
        for nameserver in nameservers {
            pool.add(nameserver)?;
        }
        info!(
            nameservers = pool.len(),
            default_port, "Nameserver pool initialized"
        );
        Ok(pool)
    }

    fn empty(default_port: u16, rng: R) -> Self {
        Self {
            members: Mutex::new(FxHashSet::default()),
            view: ArcSwap::from_pointee(Vec::new()),
            default_port,
            rng,
        }
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn len(&self) -> usize {
        self.view.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.load().is_empty()
    }

    /// Parses `nameserver` (domain names allowed) and inserts it.
    ///
    /// Returns `false` when an equal member was already present.
    pub fn add<'a>(&self, nameserver: impl Into<AddressInput<'a>>) -> Result<bool, DomainError> {
        let addr = Address::parse(nameserver, self.default_port, true)?;
        let mut members = self.members.lock().unwrap_or_else(PoisonError::into_inner);
        let server_str = addr.to_display_string(Some(self.default_port));
        let inserted = members.insert(addr);
        self.rebuild_view(&members);
        if inserted {
            debug!(nameserver = %server_str, nameservers = members.len(), "Nameserver added");
        }
        Ok(inserted)
    }

    /// Drops `nameserver` from the pool. Absent members are ignored.
    ///
    /// Returns `true` when a member was removed.
    pub fn fail(&self, nameserver: &Address) -> bool {
        let mut members = self.members.lock().unwrap_or_else(PoisonError::into_inner);
        let removed = members.remove(nameserver);
        self.rebuild_view(&members);
        if removed {
            warn!(
                nameserver = %nameserver.to_display_string(Some(self.default_port)),
                remaining = members.len(),
                "Nameserver marked FAILED"
            );
        }
        removed
    }

    /// Picks one member uniformly at random.
    ///
    /// Indices from the random source are reduced modulo the member count.
    pub fn pick_random(&self) -> Result<Address, DomainError> {
        let view = self.view.load();
        if view.is_empty() {
            return Err(DomainError::EmptyPool);
        }
        let index = self.rng.next_index(view.len()) % view.len();
        Ok(view[index].clone())
    }

    /// Iterates over the members as of this call.
    pub fn iter(&self) -> NameServersIter {
        NameServersIter {
            view: self.view.load_full(),
            position: 0,
        }
    }

    /// The current ordered view.
    pub fn snapshot(&self) -> Arc<Vec<Address>> {
        self.view.load_full()
    }

    // Called with the writer lock held.
    fn rebuild_view(&self, members: &FxHashSet<Address>) {
        let view: Vec<Address> = members.iter().cloned().collect();
        self.view.store(Arc::new(view));
    }
}

impl<R> fmt::Display for NameServers<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.view.load();
        let rendered: Vec<String> = view.iter().map(|a| a.to_string()).collect();
        write!(f, "<NameServers [{}]>", rendered.join(","))
    }
}

impl<R> fmt::Debug for NameServers<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameServers")
            .field("members", &*self.view.load())
            .field("default_port", &self.default_port)
            .finish()
    }
}

impl<'p, R: RandomSource> IntoIterator for &'p NameServers<R> {
    type Item = Address;
    type IntoIter = NameServersIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a fixed view of a [`NameServers`] pool.
#[derive(Debug, Clone)]
pub struct NameServersIter {
    view: Arc<Vec<Address>>,
    position: usize,
}

impl Iterator for NameServersIter {
    type Item = Address;

    fn next(&mut self) -> Option<Self::Item> {
        let addr = self.view.get(self.position)?.clone();
        self.position += 1;
        Some(addr)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.view.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for NameServersIter {}
