use super::domain::FateVariant;

/// Where rendered fate artwork lives: `/<root>/<variant folder>/<NN>.<extension>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLayout {
    pub root: String,
    pub extension: String,
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self {
            root: "results".to_string(),
            extension: "webp".to_string(),
        }
    }
}

impl AssetLayout {
    pub fn path_for(&self, fate_id: u8, variant: FateVariant) -> String {
        format!(
            "/{}/{}/{:02}.{}",
            self.root,
            variant.folder(),
            fate_id,
            self.extension
        )
    }
}

/// Asset path under the default layout.
pub fn result_asset_path(fate_id: u8, variant: FateVariant) -> String {
    AssetLayout::default().path_for(fate_id, variant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_single_digit_ids() {
        assert_eq!(
            result_asset_path(7, FateVariant::Base),
            "/results/base/07.webp"
        );
        assert_eq!(
            result_asset_path(30, FateVariant::Gravesong),
            "/results/gravesong/30.webp"
        );
    }

    #[test]
    fn variant_selects_folder() {
        let folders: Vec<String> = FateVariant::ALL
            .iter()
            .map(|variant| result_asset_path(12, *variant))
            .collect();
        assert_eq!(
            folders,
            vec![
                "/results/base/12.webp",
                "/results/highflame/12.webp",
                "/results/gravesong/12.webp",
            ]
        );
    }

    #[test]
    fn custom_layout_overrides_root_and_extension() {
        let layout = AssetLayout {
            root: "static/fates".to_string(),
            extension: "png".to_string(),
        };
        assert_eq!(
            layout.path_for(3, FateVariant::Highflame),
            "/static/fates/highflame/03.png"
        );
    }

    #[test]
    fn sentinel_id_still_formats() {
        assert_eq!(result_asset_path(0, FateVariant::Base), "/results/base/00.webp");
    }
}
