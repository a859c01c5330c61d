pub mod pool;
pub mod random;

pub use pool::{NameServers, NameServersIter, DEFAULT_NAMESERVER_PORT};
pub use random::{FastRandom, RandomSource, SeededRandom};
