//! # Basic Scenario
//!
//! Two glass-domed buildings: a core and a garden with a bush facility and
//! a small air and water reserve.

use tfbake_assets::{MaterialAsset, MeshAsset};
use tfbake_save::{
    Building, DisplayText, Facility, FluidContainer, FluidType, Handle, Layer, Layers, Position,
    SaveResult, Scale, SceneContext, Transform,
};

/// Bush foliage colour.
const BUSH_GREEN: MaterialAsset = MaterialAsset::rough_monotone(0.39, 0.85, 0.34);

/// Writes the scenario.
///
/// # Errors
///
/// Propagates asset and writer failures.
pub fn write_scenario(ctx: &mut SceneContext<'_>) -> SaveResult<()> {
    let oxygen = FluidType::gas_like(DisplayText::custom("Oxygen"), 32.0).write(ctx)?;
    let water = FluidType::aqueous(DisplayText::custom("Water"), 18.0).write(ctx)?;

    core(Position::new(-2.0, 0.0, 5.0)).write(ctx)?;
    garden(Position::new(2.0, 0.0, 5.0), oxygen, water).write(ctx)?;
    Ok(())
}

fn glass(mesh: MeshAsset) -> Layer {
    Layer::pbr(mesh, MaterialAsset::Glass)
}

fn core(position: Position) -> Building {
    Building::new(
        DisplayText::custom("Core"),
        Transform::at(position).with_scale(Scale::splat(2.0)),
    )
    .with_layers(Layers {
        distal: glass(MeshAsset::sphere()),
        proximal: glass(MeshAsset::sphere_with_depth(5)),
        interior: glass(MeshAsset::sphere()),
    })
}

fn garden(position: Position, oxygen: Handle<FluidType>, water: Handle<FluidType>) -> Building {
    let reserve = FluidContainer::new(1000.0, 200.0)
        .with_mass(oxygen, 0.5)
        .with_mass(water, 50.0);

    let bushes = Facility::new()
        .with_label(DisplayText::custom("Bushes"))
        .with_inner(Transform::default().with_scale(Scale::new(0.3, 0.3, 0.7)))
        .with_layers(Layers {
            distal: Layer::pbr(MeshAsset::cylinder(), BUSH_GREEN),
            proximal: Layer::pbr(MeshAsset::cylinder(), BUSH_GREEN),
            interior: Layer::Null,
        });

    Building::new(DisplayText::custom("Garden"), Transform::at(position))
        .with_layers(Layers::uniform(glass(MeshAsset::sphere())))
        .with_ambient(Facility::new().with_container(reserve))
        .with_facility(bushes)
}
