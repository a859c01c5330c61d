pub mod builders;

pub use builders::{FixedRandom, NameServerBuilder, UnboundedRandom};
