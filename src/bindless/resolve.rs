//! Unified texture resolution strategy.
//!
//! The shaders support two lookup paths that historically existed as two
//! near-identical fragment-stage variants. Here they are a single tagged
//! strategy: [`Direct`](TextureResolve::Direct) indexes the combined
//! image-sampler array with a per-draw id, [`Indirect`](TextureResolve::Indirect)
//! goes through the per-object metadata table and indexes separate sampler
//! and texture arrays.

use crate::error::ValidationError;

use super::handle::TextureHandle;
use super::table::BindlessTable;

/// How a fragment selects its texture and sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureResolve {
    /// The identifier indexes the combined image-sampler array directly.
    ///
    /// Supplied per draw through the [`DrawParams`](crate::types::DrawParams)
    /// push block.
    Direct(TextureHandle),

    /// The per-vertex `obj_id` indexes the object table, whose entry then
    /// indexes the separate sampler and texture arrays.
    Indirect {
        /// Index into the object table.
        obj_id: u32,
    },
}

/// The concrete descriptor-array slots a strategy resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedBinding {
    /// One slot in the combined image-sampler array.
    Combined {
        /// Array slot of the combined image-sampler.
        slot: u32,
    },
    /// Separate slots in the texture and sampler arrays.
    Separate {
        /// Array slot of the sampled image.
        texture: u32,
        /// Array slot of the sampler.
        sampler: u32,
    },
}

impl TextureResolve {
    /// Resolve the strategy against a table, mirroring the shader's lookup.
    ///
    /// The GPU performs this mapping unchecked; this host-side version
    /// reports the same precondition violations the validator would.
    pub fn resolve(&self, table: &BindlessTable) -> Result<ResolvedBinding, ValidationError> {
        match *self {
            TextureResolve::Direct(texture) => {
                if texture.index() >= table.texture_count() {
                    return Err(ValidationError::TextureIdOutOfBounds {
                        object: 0,
                        texture_id: texture.index(),
                        texture_count: table.texture_count(),
                    });
                }
                Ok(ResolvedBinding::Combined {
                    slot: texture.index(),
                })
            }
            TextureResolve::Indirect { obj_id } => {
                let info = table.object(obj_id).ok_or_else(|| {
                    ValidationError::ObjectIdOutOfBounds {
                        vertex: 0,
                        obj_id,
                        object_count: table.object_count(),
                    }
                })?;
                Ok(ResolvedBinding::Separate {
                    texture: info.texture_id,
                    sampler: info.sampler_id,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindless::table::{SamplerDesc, TextureDesc};

    fn sample_table() -> BindlessTable {
        let mut table = BindlessTable::new(4, 4);
        let s = table.register_sampler(SamplerDesc::linear()).unwrap();
        let t0 = table.register_texture(TextureDesc::new(64, 64)).unwrap();
        let t1 = table.register_texture(TextureDesc::new(64, 64)).unwrap();
        table.push_object(t0, s).unwrap();
        table.push_object(t1, s).unwrap();
        table
    }

    #[test]
    fn test_direct_resolution() {
        let table = sample_table();
        let strategy = TextureResolve::Direct(TextureHandle(1));
        assert_eq!(
            strategy.resolve(&table).unwrap(),
            ResolvedBinding::Combined { slot: 1 }
        );
    }

    #[test]
    fn test_indirect_resolution_goes_through_object_table() {
        let table = sample_table();
        let strategy = TextureResolve::Indirect { obj_id: 1 };
        assert_eq!(
            strategy.resolve(&table).unwrap(),
            ResolvedBinding::Separate {
                texture: 1,
                sampler: 0
            }
        );
    }

    #[test]
    fn test_out_of_range_object_id_is_rejected() {
        let table = sample_table();
        let strategy = TextureResolve::Indirect { obj_id: 2 };
        assert!(matches!(
            strategy.resolve(&table),
            Err(ValidationError::ObjectIdOutOfBounds { obj_id: 2, .. })
        ));
    }

    #[test]
    fn test_out_of_range_direct_handle_is_rejected() {
        let table = sample_table();
        let strategy = TextureResolve::Direct(TextureHandle(5));
        assert!(matches!(
            strategy.resolve(&table),
            Err(ValidationError::TextureIdOutOfBounds { texture_id: 5, .. })
        ));
    }
}
