//! Bindless resource addressing.
//!
//! The shader stages select resources by runtime index into descriptor
//! arrays rather than by fixed bindings. This module provides the host half
//! of that contract: handle newtypes for array slots, the registry that
//! assigns them ([`BindlessTable`]), and the unified resolution strategy
//! ([`TextureResolve`]) covering both the direct and the indirect lookup
//! path.

mod handle;
mod resolve;
mod table;

pub use handle::{SamplerHandle, TextureHandle};
pub use resolve::{ResolvedBinding, TextureResolve};
pub use table::{AddressMode, BindlessTable, FilterMode, SamplerDesc, TextureDesc};
