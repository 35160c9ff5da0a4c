use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::camera::viewer_camera::{ViewerCamera, set_aspect_ratio};
use crate::engine::viewport::debounce::ResizeDebouncer;
use crate::engine::viewport::{ContainerResized, ViewportSurface};

/// Feed container resizes into the debouncer. A zero width or height means
/// the container is collapsed or hidden, so the current surface is kept.
pub fn collect_container_resizes(
    time: Res<Time>,
    mut events: EventReader<ContainerResized>,
    mut debouncer: ResMut<ResizeDebouncer>,
) {
    for event in events.read() {
        if event.width == 0 || event.height == 0 {
            debug!(
                "Ignoring collapsed container size {}x{}",
                event.width, event.height
            );
            continue;
        }
        debouncer.push(event.size(), time.elapsed());
    }
}

/// Apply a settled size to the surface, the camera projection and the window.
pub fn apply_container_resize(
    time: Res<Time>,
    mut debouncer: ResMut<ResizeDebouncer>,
    mut surface: ResMut<ViewportSurface>,
    mut cameras: Query<&mut Projection, With<ViewerCamera>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Some(size) = debouncer.poll(time.elapsed()) else {
        return;
    };

    if surface.size != size {
        surface.size = size;
        info!("Viewport resized to {}x{}", size.x, size.y);
    }

    let aspect = surface.aspect_ratio();
    for mut projection in &mut cameras {
        set_aspect_ratio(&mut projection, aspect);
    }

    let (width, height) = (size.x as f32, size.y as f32);
    for mut window in &mut windows {
        if window.resolution.width() != width || window.resolution.height() != height {
            window.resolution.set(width, height);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::time::TimeUpdateStrategy;
    use bevy::window::WindowResolution;

    use super::*;
    use crate::config::CameraSettings;
    use crate::engine::camera::viewer_camera::perspective_projection;

    fn resize_app(quiet: Duration) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
            .insert_resource(ResizeDebouncer::new(quiet))
            .insert_resource(ViewportSurface::new(UVec2::new(800, 400)))
            .add_event::<ContainerResized>()
            .add_systems(
                Update,
                (collect_container_resizes, apply_container_resize).chain(),
            );
        app.world_mut().spawn((
            ViewerCamera,
            Projection::Perspective(perspective_projection(&CameraSettings::default(), 2.0)),
        ));
        app.world_mut().spawn((
            Window {
                resolution: WindowResolution::new(800.0, 400.0),
                ..default()
            },
            PrimaryWindow,
        ));
        app.update();
        app
    }

    fn window_size(app: &mut App) -> Vec2 {
        let mut query = app
            .world_mut()
            .query_filtered::<&Window, With<PrimaryWindow>>();
        let window = query.single(app.world()).expect("one primary window");
        Vec2::new(window.resolution.width(), window.resolution.height())
    }

    fn camera_aspect(app: &mut App) -> f32 {
        let mut query = app
            .world_mut()
            .query_filtered::<&Projection, With<ViewerCamera>>();
        match query.single(app.world()).expect("one viewer camera") {
            Projection::Perspective(perspective) => perspective.aspect_ratio,
            other => panic!("unexpected projection {other:?}"),
        }
    }

    #[test]
    fn immediate_resize_updates_aspect_and_surface() {
        let mut app = resize_app(Duration::ZERO);
        app.world_mut().send_event(ContainerResized {
            width: 900,
            height: 300,
        });
        app.update();

        assert_eq!(app.world().resource::<ViewportSurface>().size, UVec2::new(900, 300));
        assert!((camera_aspect(&mut app) - 3.0).abs() < 1e-6);
        assert_eq!(window_size(&mut app), Vec2::new(900.0, 300.0));
    }

    #[test]
    fn debounced_resize_waits_for_quiet_period() {
        let mut app = resize_app(Duration::from_millis(200));
        app.world_mut().send_event(ContainerResized {
            width: 500,
            height: 500,
        });
        app.update();
        assert_eq!(app.world().resource::<ViewportSurface>().size, UVec2::new(800, 400));
        assert!((camera_aspect(&mut app) - 2.0).abs() < 1e-6);
        assert_eq!(window_size(&mut app), Vec2::new(800.0, 400.0));

        for _ in 0..5 {
            app.update();
        }
        assert_eq!(app.world().resource::<ViewportSurface>().size, UVec2::new(500, 500));
        assert!((camera_aspect(&mut app) - 1.0).abs() < 1e-6);
        assert_eq!(window_size(&mut app), Vec2::new(500.0, 500.0));
    }

    #[test]
    fn collapsed_container_is_ignored() {
        let mut app = resize_app(Duration::ZERO);
        app.world_mut().send_event(ContainerResized {
            width: 1024,
            height: 0,
        });
        app.update();

        assert_eq!(app.world().resource::<ViewportSurface>().size, UVec2::new(800, 400));
        assert!((camera_aspect(&mut app) - 2.0).abs() < 1e-6);
        assert_eq!(window_size(&mut app), Vec2::new(800.0, 400.0));
    }

    #[test]
    fn repeated_same_size_is_idempotent() {
        let mut app = resize_app(Duration::ZERO);
        for _ in 0..3 {
            app.world_mut().send_event(ContainerResized {
                width: 800,
                height: 400,
            });
            app.update();
        }
        assert_eq!(app.world().resource::<ViewportSurface>().size, UVec2::new(800, 400));
        assert!((camera_aspect(&mut app) - 2.0).abs() < 1e-6);
    }
}
