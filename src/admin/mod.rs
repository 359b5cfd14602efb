//! First-order administrative region lookup.
//!
//! Pass 1 builds an [`AdminRegionIndex`] of ADM1 codes to region names;
//! pass 2 resolves each record's ADM1 code against it to produce a
//! containment tag.

mod index;
mod resolver;

pub use index::{is_adm1_designation, AdminRegionIndex};
pub use resolver::{resolve_containment, strip_province, Containment};
