pub mod backends;
pub mod builder;
pub mod namehash;
pub mod transport;

pub use backends::{Api, Cns, Ens, Zns};
pub use builder::{create_naming_service, ResolutionBuilder};
pub use namehash::{ens_namehash, namehash_for, zns_namehash};
