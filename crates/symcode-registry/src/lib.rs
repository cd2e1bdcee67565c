//! Symbology registry: id validation, names, capability flags and version
//! discovery for the symcode barcode engine.
//!
//! The registry is a pure lookup table. The process-wide instance is
//! lazily initialized once and immutable afterwards, so it is safe to share
//! across threads; callers needing a historical id space build their own
//! [`Registry`] pinned to a [`Profile`].

pub mod caps;
mod profile;
mod table;

use std::sync::OnceLock;

pub use profile::Profile;
pub use table::Symbology;

/// Registry lookup failures.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown symbology id {0}")]
    UnknownSymbology(u32),
}

/// Capability and name lookups for one pinned id profile.
#[derive(Clone, Copy, Debug, Default)]
pub struct Registry {
    profile: Profile,
}

impl Registry {
    pub fn with_profile(profile: Profile) -> Self {
        Self { profile }
    }

    #[inline]
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Resolve a raw id to its variant, regardless of encoder availability.
    pub fn resolve(&self, id: u32) -> Option<Symbology> {
        self.profile.resolve(id)
    }

    /// True if the id is mapped in this profile *and* an encoder for it is
    /// compiled into this build.
    pub fn is_valid_id(&self, id: u32) -> bool {
        self.resolve(id)
            .map(Symbology::encoder_available)
            .unwrap_or(false)
    }

    /// Canonical short name, failing for out-of-range or withdrawn ids.
    pub fn barcode_name(&self, id: u32) -> Result<&'static str, RegistryError> {
        self.resolve(id)
            .map(Symbology::name)
            .ok_or(RegistryError::UnknownSymbology(id))
    }

    /// Capability flags supported by the symbology, intersected with the
    /// caller's request. A zero request returns all supported flags; an
    /// unknown id grants nothing.
    pub fn cap(&self, id: u32, requested: u32) -> u32 {
        let Some(sym) = self.resolve(id) else {
            return 0;
        };
        let mask = if requested == 0 { u32::MAX } else { requested };
        sym.capabilities() & mask
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry, pinned to [`Profile::Current`].
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::default)
}

/// Engine version as one decimal integer: major * 10000 + minor * 100 + patch.
pub fn version() -> u32 {
    let field = |s: &str| s.parse::<u32>().unwrap_or(0);
    field(env!("CARGO_PKG_VERSION_MAJOR")) * 10000
        + field(env!("CARGO_PKG_VERSION_MINOR")) * 100
        + field(env!("CARGO_PKG_VERSION_PATCH"))
}
