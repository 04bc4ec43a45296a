use dt_assets::mapping::*;
use dt_assets::registry::*;
use dt_core::{Palette, TextureId};

fn tile(texture: TextureId, tui_char: char) -> TileDefinition {
    TileDefinition {
        texture,
        sprite: format!("{texture}.png"),
        tui_char,
        tui_color: "gray".to_string(),
    }
}

fn tileset(tiles: Vec<TileDefinition>) -> Tileset {
    Tileset {
        sprite_width: 16,
        sprite_height: 16,
        scale: 2,
        palette: Palette::default(),
        tiles,
    }
}

#[test]
fn test_registry_lookup() {
    let registry = TilesetRegistry::new(tileset(vec![
        tile(TextureId::Wall, '#'),
        tile(TextureId::Floor, '.'),
    ]))
    .expect("Registry should build");

    let def = registry.get(TextureId::Floor).expect("Tile should be found");
    assert_eq!(def.tui_char, '.');
    assert_eq!(def.sprite, "Floor.png");
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_registry_missing_texture() {
    let registry = TilesetRegistry::new(tileset(vec![tile(TextureId::Wall, '#')])).unwrap();

    assert!(matches!(
        registry.get(TextureId::TopCap),
        Err(RegistryError::Missing(TextureId::TopCap))
    ));
    assert!(matches!(
        registry.validate_coverage(),
        Err(RegistryError::Missing(TextureId::Floor))
    ));
}

#[test]
fn test_registry_rejects_duplicates() {
    let result = TilesetRegistry::new(tileset(vec![
        tile(TextureId::Wall, '#'),
        tile(TextureId::Wall, '|'),
    ]));

    assert!(matches!(result, Err(RegistryError::Duplicate(TextureId::Wall))));
}

#[test]
fn test_from_json_requires_coverage() {
    let json = r##"{ "tiles": [ { "texture": "Wall", "sprite": "w.png", "tui_char": "#", "tui_color": "gray" } ] }"##;

    assert!(matches!(
        TilesetRegistry::from_json(json),
        Err(RegistryError::Missing(_))
    ));
}

#[test]
fn test_load_missing_file() {
    assert!(matches!(
        TilesetRegistry::load_from_file("does/not/exist.json"),
        Err(RegistryError::Io(_))
    ));
}
