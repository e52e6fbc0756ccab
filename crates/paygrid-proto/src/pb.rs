//! Generated protobuf/tonic bindings, checked in for offline builds.

pub mod paygrid {
    pub mod v1 {
        include!("generated/paygrid.v1.rs");
    }
}
