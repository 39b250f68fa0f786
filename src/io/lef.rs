//! Placeholder block descriptor (LEF) for the generated cell
//!
//! The descriptor only declares a blackbox macro of the rectangle's size;
//! it carries no pins and no obstructions.

use std::path::Path;

use crate::io::configuration::LEF_DATABASE_UNITS;
use crate::io::error::{PatternError, Result, require_cell_name, require_positive};

/// Render the LEF text for a blackbox cell of `width` × `height` microns
///
/// # Errors
///
/// Returns `InvalidParameter` if the cell name is empty, not ASCII or
/// contains whitespace, or a dimension is not a positive finite number
pub fn render_lef(cell_name: &str, width: f64, height: f64) -> Result<String> {
    require_cell_name(cell_name)?;
    require_positive("width", width)?;
    require_positive("height", height)?;

    Ok(format!(
        "# LEF file generated for {cell_name}\n\
         VERSION 5.8 ;\n\
         NAMESCASESENSITIVE ON ;\n\
         DIVIDERCHAR \"/\" ;\n\
         BUSBITCHARS \"[]\" ;\n\
         UNITS\n   \
         DATABASE MICRONS {LEF_DATABASE_UNITS} ;\n\
         END UNITS\n\
         \n\
         MACRO {cell_name}\n   \
         CLASS BLOCK ;\n   \
         FOREIGN {cell_name} 0 0 ;\n   \
         SIZE {width:.3} BY {height:.3} ;\n   \
         SYMMETRY X Y ;\n\
         END {cell_name}\n"
    ))
}

/// Write the LEF descriptor to `path`, creating parent directories
///
/// # Errors
///
/// Returns `InvalidParameter` for an invalid name or size and `FileSystem`
/// if the directory or file cannot be written
pub fn write_lef(path: &Path, cell_name: &str, width: f64, height: f64) -> Result<()> {
    let contents = render_lef(cell_name, width, height)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PatternError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(path, contents).map_err(|e| PatternError::FileSystem {
        path: path.to_path_buf(),
        operation: "write block descriptor",
        source: e,
    })
}
