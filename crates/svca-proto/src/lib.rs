//! Shared Protocol Buffer definitions for the Service A demo API.
//!
//! Generated by `tonic_build` in build.rs from `proto/svc_a_demo.proto`.

/// Service A demo protocol
pub mod servicea {
    pub mod v1 {
        tonic::include_proto!("servicea.v1");
    }
}

pub use servicea::v1::*;

pub use servicea::v1::svc_a_demo_client::SvcADemoClient;
pub use servicea::v1::svc_a_demo_server::{SvcADemo, SvcADemoServer};
