//! The boundary frames are handed across, plus a bundled implementation
//! that records parameters instead of drawing.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{engine::Frame, error::ShadeError};

/// File name offline mode captures to.
pub const CAPTURE_FILE: &str = "output.png";

/// Receives composed frames. Implemented by whatever owns the GPU
/// programs and mesh buffers.
pub trait RenderBoundary {
    /// Draw one frame.
    fn submit(&mut self, frame: &Frame) -> Result<(), ShadeError>;

    /// Export the most recently submitted frame, returning the file
    /// actually written.
    ///
    /// Pixel backends write `path` itself. A backend that exports a
    /// different format keeps the file stem and swaps the extension.
    fn capture(&mut self, path: &Path) -> Result<PathBuf, ShadeError>;
}

/// What a capture file holds: the frame plus the resource files a
/// renderer would bind for it.
#[derive(Serialize)]
struct CaptureRecord<'a> {
    vertex_shader: PathBuf,
    fragment_shader: PathBuf,
    meshes: Vec<PathBuf>,
    frame: &'a Frame,
}

/// A boundary that logs every frame and captures the composed parameters
/// as JSON, for running without a GPU backend.
///
/// Capturing to `output.png` writes `output.json` next to it instead.
#[derive(Debug, Default)]
pub struct ParameterDump {
    resource_dir: PathBuf,
    last: Option<Frame>,
    frames: u64,
}

impl ParameterDump {
    /// Resolve shader and mesh files against `resource_dir`.
    #[must_use]
    pub fn new(resource_dir: impl Into<PathBuf>) -> Self {
        Self {
            resource_dir: resource_dir.into(),
            last: None,
            frames: 0,
        }
    }

    /// Frames submitted so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

impl RenderBoundary for ParameterDump {
    fn submit(&mut self, frame: &Frame) -> Result<(), ShadeError> {
        self.frames += 1;
        log::debug!(
            "frame {} t={:.3} shader={} levels={}",
            self.frames,
            frame.time,
            frame.shader,
            frame.toon_levels
        );
        for object in &frame.objects {
            log::trace!("  {} MV={:?}", object.name, object.model_view);
        }
        self.last = Some(frame.clone());
        Ok(())
    }

    fn capture(&mut self, path: &Path) -> Result<PathBuf, ShadeError> {
        let frame = self
            .last
            .as_ref()
            .ok_or_else(|| ShadeError::Capture("no frame has been submitted".into()))?;
        let sources = frame.shader.sources(&self.resource_dir);
        let record = CaptureRecord {
            vertex_shader: sources.vertex,
            fragment_shader: sources.fragment,
            meshes: frame
                .objects
                .iter()
                .map(|object| self.resource_dir.join(&object.mesh))
                .collect(),
            frame,
        };
        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| ShadeError::Capture(e.to_string()))?;

        let target = path.with_extension("json");
        log::debug!("capturing parameters as JSON to {}", target.display());
        std::fs::write(&target, json)?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ShadingEngine;

    #[test]
    fn capture_without_a_frame_fails() {
        let mut dump = ParameterDump::new("res");
        assert!(matches!(
            dump.capture(Path::new(CAPTURE_FILE)),
            Err(ShadeError::Capture(_))
        ));
    }

    #[test]
    fn capture_writes_frame_parameters() {
        let mut engine = ShadingEngine::default();
        let mut dump = ParameterDump::new("res");
        dump.submit(&engine.compose_frame().unwrap()).unwrap();
        assert_eq!(dump.frame_count(), 1);

        let dir = std::env::temp_dir()
            .join(format!("shadelab-capture-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let written = dump.capture(&dir.join(CAPTURE_FILE)).unwrap();
        assert_eq!(written, dir.join("output.json"));
        assert!(!dir.join(CAPTURE_FILE).exists());

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&written).unwrap())
                .unwrap();
        assert_eq!(json["frame"]["shader"], "blinn_phong");
        assert_eq!(json["frame"]["toon_levels"], 4);
        assert_eq!(json["frame"]["objects"].as_array().unwrap().len(), 2);
        assert_eq!(
            json["fragment_shader"],
            Path::new("res").join("bp_frag.glsl").to_str().unwrap()
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
