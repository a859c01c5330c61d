#![allow(dead_code)]
use ferrous_resolv_domain::Address;
use ferrous_resolv_infrastructure::RandomSource;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct NameServerBuilder;

impl NameServerBuilder {
    pub fn google_dns() -> Address {
        Address::parse("8.8.8.8:53", 0, false).unwrap()
    }

    pub fn google_dns_ipv6() -> Address {
        Address::parse("[2001:4860:4860::8888]:53", 0, false).unwrap()
    }

    pub fn cloudflare_dns() -> Address {
        Address::parse("1.1.1.1:53", 0, false).unwrap()
    }

    pub fn quad9_hostname() -> Address {
        Address::parse("dns.quad9.net:53", 0, true).unwrap()
    }
}

/// Always yields the configured index (clamped to the bound) and counts draws.
pub struct FixedRandom {
    index: usize,
    draws: AtomicUsize,
}

impl FixedRandom {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            draws: AtomicUsize::new(0),
        }
    }

    pub fn draws(&self) -> usize {
        self.draws.load(Ordering::Relaxed)
    }
}

impl RandomSource for FixedRandom {
    fn next_index(&self, bound: usize) -> usize {
        self.draws.fetch_add(1, Ordering::Relaxed);
        self.index.min(bound - 1)
    }
}

/// Ignores the bound and always yields `index`.
pub struct UnboundedRandom {
    index: usize,
}

impl UnboundedRandom {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl RandomSource for UnboundedRandom {
    fn next_index(&self, _bound: usize) -> usize {
        self.index
    }
}
