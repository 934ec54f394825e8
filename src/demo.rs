//! The demonstration document set written by `educafric-docs demo`.

use crate::bulletin::BulletinGenerator;
use crate::error::DocumentError;
use crate::master_sheet::{ColorScheme, MasterSheetGenerator, MasterSheetOptions};
use educafric_types::Orientation;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the demo bulletin and one master sheet per color scheme and
/// orientation into `dir`, creating it if needed. Returns the written paths.
pub fn write_demo_documents(dir: &Path) -> Result<Vec<PathBuf>, DocumentError> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    let path = dir.join("bulletin-demo.pdf");
    fs::write(&path, BulletinGenerator::new().generate(None)?)?;
    written.push(path);

    let data = MasterSheetGenerator::generate_demo_data();
    for scheme in ColorScheme::ALL {
        for orientation in [Orientation::Landscape, Orientation::Portrait] {
            let options = MasterSheetOptions::default()
                .with_color_scheme(scheme)
                .with_orientation(orientation);
            let bytes = MasterSheetGenerator::new().with_options(options).generate(&data)?;
            let name =
                format!("master-sheet-{}-{}.pdf", scheme.name(), orientation_name(orientation));
            let path = dir.join(name);
            fs::write(&path, bytes)?;
            written.push(path);
        }
    }

    log::info!("Wrote {} demonstration documents to {}", written.len(), dir.display());
    Ok(written)
}

fn orientation_name(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Landscape => "landscape",
        Orientation::Portrait => "portrait",
    }
}
