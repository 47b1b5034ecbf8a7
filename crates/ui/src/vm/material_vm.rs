use rethink_core::model::{Material, MaterialId, MaterialKind};

/// UI-ready row for the material tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterialRowVm {
    pub id: MaterialId,
    pub title: String,
    pub kind_label: &'static str,
    pub badge: &'static str,
    pub opens_viewer: bool,
}

#[must_use]
pub fn map_material_row(material: &Material) -> MaterialRowVm {
    let badge = match material.kind() {
        MaterialKind::Textbook { .. } => "Book",
        MaterialKind::Video { .. } => "Video",
        MaterialKind::Article { .. } => "Article",
        MaterialKind::Notes { .. } => "Notes",
    };
    MaterialRowVm {
        id: material.id(),
        title: material.title().to_owned(),
        kind_label: material.kind().label(),
        badge,
        opens_viewer: material.is_textbook(),
    }
}
