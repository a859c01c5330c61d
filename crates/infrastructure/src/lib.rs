//! Ferrous Resolv Infrastructure Layer
pub mod dns;

pub use dns::nameservers::{
    FastRandom, NameServers, NameServersIter, RandomSource, SeededRandom,
    DEFAULT_NAMESERVER_PORT,
};
