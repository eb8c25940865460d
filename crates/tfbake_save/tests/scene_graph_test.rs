//! Integration tests for building, facility and fluid writing.

use tfbake_assets::{AssetPool, MaterialAsset, MeshAsset};
use tfbake_save::{
    Building, DisplayText, Facility, FluidContainer, FluidType, Layer, Layers, Position,
    RecordKind, SaveError, SceneContext, Transform,
};

fn glass_sphere() -> Layers {
    Layers::uniform(Layer::pbr(
        MeshAsset::sphere_with_depth(1),
        MaterialAsset::Glass,
    ))
}

#[test]
fn test_building_writes_ambient_facility() {
    let pool = AssetPool::new();
    let mut ctx = SceneContext::new(&pool);

    let handle = Building::new(DisplayText::custom("Core"), Transform::default())
        .write(&mut ctx)
        .unwrap();

    let doc = ctx.finish();
    assert_eq!(doc.kinds(), vec![RecordKind::Building, RecordKind::Facility]);
    let facilities = doc.defs(RecordKind::Facility);
    assert_eq!(facilities.len(), 1);
    assert_eq!(facilities[0]["parent"], handle.index());
    assert_eq!(facilities[0]["is_ambient"], true);
    assert_eq!(facilities[0]["appearance"]["distal"]["type"], "Null");
}

#[test]
fn test_facilities_follow_their_building() {
    let pool = AssetPool::new();
    let mut ctx = SceneContext::new(&pool);

    Building::new(DisplayText::custom("A"), Transform::default())
        .write(&mut ctx)
        .unwrap();
    let second = Building::new(DisplayText::custom("B"), Transform::default())
        .with_facility(Facility::new().with_label(DisplayText::custom("B1")))
        .with_facility(Facility::new().with_label(DisplayText::custom("B2")))
        .write(&mut ctx)
        .unwrap();

    let doc = ctx.finish();
    let facilities = doc.defs(RecordKind::Facility);
    assert_eq!(facilities.len(), 4);
    let labels: Vec<&str> = facilities
        .iter()
        .map(|f| f["appearance"]["label"]["value"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["", "", "B1", "B2"]);
    for facility in &facilities[1..] {
        assert_eq!(facility["parent"], second.index());
    }
    assert_eq!(facilities[2]["is_ambient"], false);
}

#[test]
fn test_building_record_shape() {
    let pool = AssetPool::new();
    let mut ctx = SceneContext::new(&pool);
    Building::new(
        DisplayText::custom("Core"),
        Transform::at(Position::new(-2.0, 0.0, 5.0)),
    )
    .with_layers(glass_sphere())
    .write(&mut ctx)
    .unwrap();

    let doc = ctx.finish();
    let building = &doc.defs(RecordKind::Building)[0];
    let keys: Vec<&String> = building.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["transform", "appearance"]);
    assert_eq!(building["transform"]["position"]["x"], -2.0);
    assert_eq!(building["appearance"]["label"]["value"], "Core");

    let sha = pool.hash_of("icosphere(depth=1)").unwrap().to_hex();
    assert_eq!(building["appearance"]["proximal"]["mesh"]["sha"], sha);
    assert_eq!(pool.len(), 2);
}

#[test]
fn test_shared_material_across_meshes() {
    let pool = AssetPool::new();
    let mut ctx = SceneContext::new(&pool);
    let material = MaterialAsset::rough_monotone(0.39, 0.85, 0.34);

    Building::new(DisplayText::custom("X"), Transform::default())
        .with_layers(Layers {
            distal: Layer::pbr(MeshAsset::cylinder(), material),
            proximal: Layer::pbr(MeshAsset::sphere_with_depth(1), material),
            interior: Layer::Null,
        })
        .write(&mut ctx)
        .unwrap();

    let doc = ctx.finish();
    let appearance = &doc.defs(RecordKind::Building)[0]["appearance"];
    assert_ne!(appearance["distal"]["mesh"]["sha"], appearance["proximal"]["mesh"]["sha"]);
    assert_eq!(
        appearance["distal"]["material"]["sha"],
        appearance["proximal"]["material"]["sha"]
    );
    assert_eq!(pool.len(), 3);
}

#[test]
fn test_facility_owned_container() {
    let pool = AssetPool::new();
    let mut ctx = SceneContext::new(&pool);
    let oxygen = FluidType::gas_like(DisplayText::custom("Oxygen"), 32.0)
        .write(&mut ctx)
        .unwrap();

    Building::new(DisplayText::custom("Tank"), Transform::default())
        .with_ambient(Facility::new().with_container(
            FluidContainer::new(100.0, 10.0).with_mass(oxygen, 4.0),
        ))
        .write(&mut ctx)
        .unwrap();

    let doc = ctx.finish();
    let container = &doc.defs(RecordKind::FluidContainer)[0];
    assert_eq!(container["owner"]["type"], "traffloat.save.Facility");
    assert_eq!(container["owner"]["id"], 0);
    assert_eq!(doc.defs(RecordKind::ContainerElement)[0]["ty"], 0);
    assert_eq!(
        doc.kinds(),
        vec![
            RecordKind::Building,
            RecordKind::Facility,
            RecordKind::FluidType,
            RecordKind::FluidContainer,
            RecordKind::ContainerElement,
        ]
    );
}

#[test]
fn test_handle_from_another_pass_rejected() {
    let pool = AssetPool::new();
    let mut first = SceneContext::new(&pool);
    let building = Building::new(DisplayText::custom("A"), Transform::default())
        .write(&mut first)
        .unwrap();

    let mut second = SceneContext::new(&pool);
    let result = Facility::new().write(&mut second, building, false);
    assert!(matches!(
        result,
        Err(SaveError::DanglingHandle {
            referrer: RecordKind::Facility,
            target: RecordKind::Building,
            index: 0,
            len: 0,
        })
    ));
}
