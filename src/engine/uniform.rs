use super::frame::{Frame, ObjectParams};

/// GPU uniform block for one draw: transforms, material, both lights and
/// the cel band count.
///
/// Every `vec3` is followed by a scalar so the layout matches std140
/// without implicit padding. NOTE: must match the GLSL uniform block
/// field order exactly (304 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShadingUniform {
    /// Model-view matrix (`MV`).
    pub mv: [[f32; 4]; 4],
    /// Inverse-transpose of the model-view matrix (`IT`).
    pub it: [[f32; 4]; 4],
    /// Projection matrix (`P`).
    pub p: [[f32; 4]; 4],
    /// Ambient reflectance.
    pub ka: [f32; 3],
    /// Specular exponent.
    pub s: f32,
    /// Diffuse reflectance.
    pub kd: [f32; 3],
    /// Cel band count.
    pub cel_levels: i32,
    /// Specular reflectance.
    pub ks: [f32; 3],
    /// Padding for GPU alignment.
    pub _pad0: f32,
    /// First light position.
    pub light_pos1: [f32; 3],
    /// Padding for GPU alignment.
    pub _pad1: f32,
    /// First light color.
    pub light_color1: [f32; 3],
    /// Padding for GPU alignment.
    pub _pad2: f32,
    /// Second light position.
    pub light_pos2: [f32; 3],
    /// Padding for GPU alignment.
    pub _pad3: f32,
    /// Second light color.
    pub light_color2: [f32; 3],
    /// Padding for GPU alignment.
    pub _pad4: f32,
}

impl ShadingUniform {
    /// Pack the parameters for drawing `object` within `frame`.
    #[must_use]
    pub fn new(frame: &Frame, object: &ObjectParams) -> Self {
        let [light1, light2] = frame.lights;
        Self {
            mv: object.model_view.to_cols_array_2d(),
            it: object.normal_matrix.to_cols_array_2d(),
            p: frame.projection.to_cols_array_2d(),
            ka: frame.material.ka.to_array(),
            s: frame.material.s,
            kd: frame.material.kd.to_array(),
            cel_levels: i32::try_from(frame.toon_levels).unwrap_or(i32::MAX),
            ks: frame.material.ks.to_array(),
            _pad0: 0.0,
            light_pos1: light1.position.to_array(),
            _pad1: 0.0,
            light_color1: light1.color.to_array(),
            _pad2: 0.0,
            light_pos2: light2.position.to_array(),
            _pad3: 0.0,
            light_color2: light2.color.to_array(),
            _pad4: 0.0,
        }
    }

    /// Raw bytes for a buffer upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
