use bevy::math::Affine3A;
use bevy::prelude::*;
use bevy::render::primitives::Aabb;
use bevy::scene::{SceneInstance, SceneSpawner};

use crate::config::ViewerConfig;
use crate::engine::animation::tween::TweenSet;
use crate::engine::assets::bounds::{Bounds3, merge_bounds};
use crate::engine::camera::viewer_camera::{ViewerCamera, framing_transform};
use crate::engine::core::app_state::ViewerState;
use crate::engine::model::animations::model_tweens;

/// Pivot the model spins and floats around. Sits at the origin.
#[derive(Component)]
pub struct HeadsetModel;

/// Root of the loaded glTF scene, child of the pivot. Carries the scale and
/// the centring offset.
#[derive(Component)]
pub struct ModelScene;

/// The scene under a pivot has spawned and every mesh in it has bounds.
#[derive(Component)]
pub struct ModelInstanceReady;

pub type ModelNodes<'w, 's> = Query<
    'w,
    's,
    (
        &'static Transform,
        Option<&'static Aabb>,
        Option<&'static Children>,
    ),
    (
        Without<HeadsetModel>,
        Without<ModelScene>,
        Without<ViewerCamera>,
    ),
>;

pub fn spawn_model(commands: &mut Commands, scene: Handle<Scene>, scale: f32) -> Entity {
    commands
        .spawn((HeadsetModel, Transform::IDENTITY, Visibility::default()))
        .with_children(|pivot| {
            pivot.spawn((
                SceneRoot(scene),
                Transform::from_scale(Vec3::splat(scale)),
                ModelScene,
            ));
        })
        .id()
}

/// Mark pivots whose scene instance is spawned and fully bounded. Mesh AABBs
/// are computed a frame after spawning, so this is polled.
pub fn mark_model_instances_ready(
    mut commands: Commands,
    spawner: Res<SceneSpawner>,
    pivots: Query<(Entity, &Children), (With<HeadsetModel>, Without<ModelInstanceReady>)>,
    scenes: Query<(Entity, &SceneInstance), With<ModelScene>>,
    hierarchy: Query<&Children>,
    meshes: Query<Has<Aabb>, With<Mesh3d>>,
) {
    for (pivot, children) in &pivots {
        let kids: &[Entity] = children;
        let ready = kids.iter().any(|&child| {
            scenes.get(child).is_ok_and(|(scene, instance)| {
                spawner.instance_is_ready(**instance)
                    && hierarchy
                        .iter_descendants(scene)
                        .all(|node| meshes.get(node).unwrap_or(true))
            })
        });
        if ready {
            commands.entity(pivot).insert(ModelInstanceReady);
        }
    }
}

/// Box around every mesh below `root`, in the space `root`'s transform maps into.
pub fn subtree_bounds(
    root: &Transform,
    root_aabb: Option<&Aabb>,
    root_children: Option<&Children>,
    nodes: &ModelNodes,
) -> Option<Bounds3> {
    let mut parts = Vec::new();
    collect_bounds(root.compute_affine(), root_aabb, root_children, nodes, &mut parts);
    merge_bounds(parts)
}

fn collect_bounds(
    affine: Affine3A,
    aabb: Option<&Aabb>,
    children: Option<&Children>,
    nodes: &ModelNodes,
    parts: &mut Vec<Bounds3>,
) {
    if let Some(aabb) = aabb {
        parts.push(Bounds3::from_aabb(aabb).transformed(&affine));
    }
    let Some(children) = children else {
        return;
    };
    let kids: &[Entity] = children;
    for &child in kids {
        if let Ok((transform, aabb, grandchildren)) = nodes.get(child) {
            collect_bounds(
                affine * transform.compute_affine(),
                aabb,
                grandchildren,
                nodes,
                parts,
            );
        }
    }
}

/// Translation that moves the box center onto the pivot.
pub fn centering_offset(bounds: &Bounds3) -> Vec3 {
    -bounds.center()
}

/// Centre each ready model on its pivot, frame it, and start its tweens.
pub fn center_ready_models(
    mut commands: Commands,
    mut next_state: ResMut<NextState<ViewerState>>,
    time: Res<Time>,
    config: Res<ViewerConfig>,
    pivots: Query<
        (Entity, &Transform, &Children),
        (With<HeadsetModel>, With<ModelInstanceReady>, Without<TweenSet>),
    >,
    mut scenes: Query<
        (&mut Transform, Option<&Aabb>, Option<&Children>),
        (With<ModelScene>, Without<HeadsetModel>, Without<ViewerCamera>),
    >,
    nodes: ModelNodes,
    mut cameras: Query<&mut Transform, (With<ViewerCamera>, Without<HeadsetModel>, Without<ModelScene>)>,
) {
    for (pivot, pivot_transform, children) in &pivots {
        let kids: &[Entity] = children;
        for &child in kids {
            let Ok((mut scene_transform, aabb, scene_children)) = scenes.get_mut(child) else {
                continue;
            };
            match subtree_bounds(&scene_transform, aabb, scene_children, &nodes) {
                Some(bounds) => {
                    scene_transform.translation += centering_offset(&bounds);
                    info!(
                        "Model bounds {:.3?}, centred by {:.3?}",
                        bounds.size(),
                        centering_offset(&bounds)
                    );
                }
                None => warn!("Model has no mesh bounds, leaving it uncentred"),
            }
        }

        for mut camera in &mut cameras {
            *camera = framing_transform(config.camera.framed_distance);
        }

        commands.entity(pivot).insert(model_tweens(
            pivot_transform,
            &config.animation,
            time.elapsed_secs_f64(),
        ));
        info!("✓ Model centred, animations started");
        next_state.set(ViewerState::Animating);
    }
}
