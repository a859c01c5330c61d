pub mod nameservers;

pub use nameservers::{FastRandom, NameServers, NameServersIter, RandomSource, SeededRandom};
