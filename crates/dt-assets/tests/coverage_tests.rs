use dt_assets::registry::TilesetRegistry;
use dt_core::{Palette, TextureId};
use strum::IntoEnumIterator;

#[test]
fn test_coverage_all_textures_mapped() {
    let assets_path = "../../assets/tileset.json";
    // We expect this to be run from crates/dt-assets
    let registry =
        TilesetRegistry::load_from_file(assets_path).expect("Failed to load tileset.json");

    let missing: Vec<TextureId> = TextureId::iter()
        .filter(|&texture| registry.get(texture).is_err())
        .collect();

    assert!(missing.is_empty(), "Missing tiles for textures: {:?}", missing);
    assert_eq!(registry.len(), TextureId::iter().count());
}

#[test]
fn test_shipped_tileset_metrics() {
    let registry = TilesetRegistry::load_from_file("../../assets/tileset.json")
        .expect("Failed to load tileset.json");

    assert_eq!(registry.tileset().cell_size(), (32, 32));
    assert_eq!(*registry.palette(), Palette::default());
    assert_eq!(
        registry.get(TextureId::Floor).unwrap().sprite,
        "tiny_dungeon/tile_0048.png"
    );
    assert_eq!(
        registry.get(TextureId::ShadowVariation).unwrap().sprite,
        "tiny_dungeon/tile_0051.png"
    );
}

#[test]
fn test_shipped_colors_parse() {
    let registry = TilesetRegistry::load_from_file("../../assets/tileset.json")
        .expect("Failed to load tileset.json");

    for texture in TextureId::iter() {
        let tile = registry.get(texture).unwrap();
        assert!(
            TilesetRegistry::parse_color(&tile.tui_color).is_some(),
            "unparsable color {:?} for {}",
            tile.tui_color,
            texture
        );
    }
}
