use std::{
    fmt,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

/// The shading programs, in selection order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ShaderProgram {
    /// Surface normals as colors.
    Normal,
    /// Blinn-Phong with two point lights.
    #[default]
    BlinnPhong,
    /// Outline-only rendering.
    Silhouette,
    /// Quantized (toon) Blinn-Phong.
    Cel,
}

/// Vertex and fragment source files for one program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    /// Vertex shader path.
    pub vertex: PathBuf,
    /// Fragment shader path.
    pub fragment: PathBuf,
}

impl ShaderProgram {
    /// Every program, in cursor order.
    pub const ALL: [Self; 4] =
        [Self::Normal, Self::BlinnPhong, Self::Silhouette, Self::Cel];

    /// Position in [`ALL`](Self::ALL).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Normal => 0,
            Self::BlinnPhong => 1,
            Self::Silhouette => 2,
            Self::Cel => 3,
        }
    }

    /// Program at `index`, clamped to the last program.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    /// Source file names, relative to the resource directory.
    #[must_use]
    pub fn file_names(self) -> (&'static str, &'static str) {
        match self {
            Self::Normal => ("normal_vert.glsl", "normal_frag.glsl"),
            Self::BlinnPhong => ("bp_vert.glsl", "bp_frag.glsl"),
            Self::Silhouette => ("bp_vert.glsl", "sil_frag.glsl"),
            Self::Cel => ("bp_vert.glsl", "cel_frag.glsl"),
        }
    }

    /// Source file paths resolved against `resource_dir`.
    #[must_use]
    pub fn sources(self, resource_dir: &Path) -> ShaderSources {
        let (vertex, fragment) = self.file_names();
        ShaderSources {
            vertex: resource_dir.join(vertex),
            fragment: resource_dir.join(fragment),
        }
    }
}

impl fmt::Display for ShaderProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Normal => "Normal",
            Self::BlinnPhong => "Blinn-Phong",
            Self::Silhouette => "Silhouette",
            Self::Cel => "Cel",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        for (i, program) in ShaderProgram::ALL.iter().enumerate() {
            assert_eq!(program.index(), i);
            assert_eq!(ShaderProgram::from_index(i), *program);
        }
        assert_eq!(ShaderProgram::from_index(42), ShaderProgram::Cel);
    }

    #[test]
    fn lit_programs_share_a_vertex_stage() {
        let dir = Path::new("res");
        let cel = ShaderProgram::Cel.sources(dir);
        let sil = ShaderProgram::Silhouette.sources(dir);
        assert_eq!(cel.vertex, sil.vertex);
        assert_eq!(cel.fragment, dir.join("cel_frag.glsl"));
        assert_eq!(
            ShaderProgram::Normal.sources(dir).vertex,
            dir.join("normal_vert.glsl")
        );
    }
}
