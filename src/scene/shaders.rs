use std::path::{Path, PathBuf};

use crate::{Error, Result};

macro_rules! glsl {
    ($stem:literal, $stage:literal) => {
        include_str!(concat!("../../shaders/", $stem, ".", $stage, ".glsl"))
    };
}

macro_rules! builtin {
    ($name:literal) => {
        builtin!($name, $name)
    };
    ($name:literal, $vertex:literal) => {
        ($name, glsl!($vertex, "vs"), glsl!($name, "fs"))
    };
}

/// Name, vertex source, fragment source. The solid-colour triangles share the
/// plain triangle vertex stage.
const BUILTIN: &[(&str, &str, &str)] = &[
    builtin!("triangle"),
    builtin!("triangle_blue", "triangle"),
    builtin!("triangle_yellow", "triangle"),
    builtin!("texture"),
    builtin!("transform"),
    builtin!("cube"),
    builtin!("phong_point"),
    builtin!("phong_directional"),
    builtin!("emissive"),
];

/// Vertex and fragment GLSL for one program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSource {
    /// Reads `<stem>.vs.glsl` and `<stem>.fs.glsl`.
    pub fn load(stem: &Path) -> Result<Self> {
        Ok(Self {
            vertex: Self::read_stage(stem, "vs")?,
            fragment: Self::read_stage(stem, "fs")?,
        })
    }

    fn read_stage(stem: &Path, stage: &str) -> Result<String> {
        let mut file_name = stem.as_os_str().to_owned();
        file_name.push(format!(".{stage}.glsl"));
        let path = PathBuf::from(file_name);

        let text = std::fs::read_to_string(&path).map_err(|e| Error::ShaderSource {
            path: path.clone(),
            reason: format!("failed to open: {e}"),
        })?;

        if text.trim().is_empty() {
            return Err(Error::ShaderSource {
                path,
                reason: "file is empty".to_owned(),
            });
        }

        Ok(text)
    }

    /// GLSL compiled into the binary under `name`.
    pub fn builtin(name: &str) -> Option<Self> {
        BUILTIN
            .iter()
            .find(|(builtin, _, _)| *builtin == name)
            .map(|(_, vertex, fragment)| Self {
                vertex: (*vertex).to_owned(),
                fragment: (*fragment).to_owned(),
            })
    }

    /// Prefers `<dir>/<name>.*.glsl` when an override directory is configured
    /// and holds that program, falling back to the built-in source.
    pub fn resolve(name: &str, dir: Option<&Path>) -> Result<Self> {
        if let Some(dir) = dir {
            let stem = dir.join(name);
            let mut vertex_path = stem.as_os_str().to_owned();
            vertex_path.push(".vs.glsl");

            if Path::new(&vertex_path).exists() {
                info!("Loading shader '{}' from {}", name, dir.display());
                return Self::load(&stem);
            }
        }

        Self::builtin(name).ok_or_else(|| Error::ShaderSource {
            path: PathBuf::from(name),
            reason: "no such built-in shader".to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("gl-tutorials-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn every_builtin_has_both_stages() {
        for (name, _, _) in BUILTIN {
            let source = ShaderSource::builtin(name).unwrap();
            assert!(source.vertex.starts_with("#version 330 core"), "{name}");
            assert!(source.fragment.starts_with("#version 330 core"), "{name}");
        }
        assert!(ShaderSource::builtin("missing").is_none());
    }

    #[test]
    fn solid_triangles_share_a_vertex_stage() {
        let blue = ShaderSource::builtin("triangle_blue").unwrap();
        let yellow = ShaderSource::builtin("triangle_yellow").unwrap();

        assert_eq!(blue.vertex, ShaderSource::builtin("triangle").unwrap().vertex);
        assert_eq!(blue.vertex, yellow.vertex);
        assert_ne!(blue.fragment, yellow.fragment);
    }

    #[test]
    fn load_names_the_missing_file() {
        let dir = scratch_dir("missing");
        std::fs::write(dir.join("only.vs.glsl"), "#version 330 core\n").unwrap();

        match ShaderSource::load(&dir.join("only")) {
            Err(Error::ShaderSource { path, .. }) => assert!(path.ends_with("only.fs.glsl")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn load_rejects_empty_files() {
        let dir = scratch_dir("empty");
        std::fs::write(dir.join("blank.vs.glsl"), "  \n").unwrap();
        std::fs::write(dir.join("blank.fs.glsl"), "void main() {}").unwrap();

        assert!(matches!(
            ShaderSource::load(&dir.join("blank")),
            Err(Error::ShaderSource { reason, .. }) if reason == "file is empty"
        ));
    }

    #[test]
    fn resolve_prefers_override_directory() {
        let dir = scratch_dir("override");
        std::fs::write(dir.join("cube.vs.glsl"), "custom vertex").unwrap();
        std::fs::write(dir.join("cube.fs.glsl"), "custom fragment").unwrap();

        let source = ShaderSource::resolve("cube", Some(&dir)).unwrap();
        assert_eq!(source.vertex, "custom vertex");

        let fallback = ShaderSource::resolve("emissive", Some(&dir)).unwrap();
        assert_eq!(fallback, ShaderSource::builtin("emissive").unwrap());
    }
}
