//! Adapters for the remote reservation store.

mod remote;

pub use remote::RemoteReservationStore;
