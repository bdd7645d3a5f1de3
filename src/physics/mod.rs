//! Physical observables and astrophysical models: the accretion disk's
//! temperature profile, its blackbody color mapping, and the relativistic
//! corrections (redshift, Doppler beaming) applied to its emitted light.

pub mod blackbody;
pub mod disk;
pub mod redshift;

pub use disk::Disk;
