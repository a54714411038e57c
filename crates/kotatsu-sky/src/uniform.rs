use kotatsu_core::ColorPair;

/// Sky gradient uniform (32 bytes): top and bottom colors as RGBA in [0, 1].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SkyUniform {
    pub top_color: [f32; 4],
    pub bottom_color: [f32; 4],
}

impl SkyUniform {
    pub fn from_pair(pair: ColorPair) -> Self {
        let [tr, tg, tb] = pair.top.to_unit_rgb();
        let [br, bg, bb] = pair.bottom.to_unit_rgb();
        Self {
            top_color: [tr, tg, tb, 1.0],
            bottom_color: [br, bg, bb, 1.0],
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<ColorPair> for SkyUniform {
    fn from(pair: ColorPair) -> Self {
        Self::from_pair(pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kotatsu_core::Rgb24;

    #[test]
    fn test_sky_uniform_size() {
        assert_eq!(std::mem::size_of::<SkyUniform>(), 32);
    }

    #[test]
    fn test_from_pair() {
        let pair = ColorPair::new(Rgb24::WHITE, Rgb24::from_channels(0, 51, 255));
        let uniform = SkyUniform::from(pair);
        assert_eq!(uniform.top_color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(uniform.bottom_color, [0.0, 0.2, 1.0, 1.0]);
        assert_eq!(uniform.as_bytes().len(), 32);
    }
}
