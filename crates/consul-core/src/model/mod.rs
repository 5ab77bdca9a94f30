pub mod address;
pub mod bytes32;
pub mod praetor;
pub mod role;

pub use address::Address;
pub use bytes32::Bytes32;
pub use praetor::{NodeEndpoint, Praetor, ServerEndpoint};
pub use role::{Role, RoleTable};
