mod document_viewer;
mod material_viewer;
mod study;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use document_viewer::{DocumentViewer, document_src};
pub use material_viewer::MaterialViewer;
pub use study::StudyView;
