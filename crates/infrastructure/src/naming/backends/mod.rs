pub mod api;
pub mod cns;
pub mod ens;
pub mod zns;

pub use api::Api;
pub use cns::Cns;
pub use ens::Ens;
pub use zns::Zns;
