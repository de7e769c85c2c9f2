//! Rendering and writing the output directory.

use std::path::Path;

use swc_common::{sync::Lrc, SourceMap};
use uw_ast::{module_file_name, INDEX_FILE};

use crate::emit::print_script;
use crate::error::UnpackError;
use crate::unpack::UnpackedBundle;

/// One output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub name: String,
    pub code: String,
}

/// Print every file of `bundle`: `index.js` first, then modules by id.
pub fn render_bundle(
    bundle: &UnpackedBundle,
    source_map: &Lrc<SourceMap>,
) -> Result<Vec<RenderedFile>, UnpackError> {
    let mut files = Vec::with_capacity(bundle.modules.len() + 1);

    files.push(RenderedFile {
        name: INDEX_FILE.to_string(),
        code: print_script(&bundle.index, source_map.clone(), INDEX_FILE)?,
    });

    for module in &bundle.modules {
        let name = module_file_name(module.id);
        let code = print_script(&module.script, source_map.clone(), &name)?;
        files.push(RenderedFile { name, code });
    }

    Ok(files)
}

/// Render `bundle` and write it into `dir`, creating the directory if needed.
/// Nothing is written unless every file rendered. Returns the number of
/// modules written.
pub fn write_bundle(
    dir: &Path,
    bundle: &UnpackedBundle,
    source_map: &Lrc<SourceMap>,
) -> Result<usize, UnpackError> {
    let files = render_bundle(bundle, source_map)?;

    std::fs::create_dir_all(dir).map_err(|source| UnpackError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for file in &files {
        let path = dir.join(&file.name);
        log::debug!("writing {}", path.display());
        std::fs::write(&path, &file.code).map_err(|source| UnpackError::Io { path, source })?;
    }

    Ok(bundle.modules.len())
}
