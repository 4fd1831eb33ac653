pub mod naming;

pub use naming::backends::{Api, Cns, Ens, Zns};
pub use naming::builder::{create_naming_service, ResolutionBuilder};
