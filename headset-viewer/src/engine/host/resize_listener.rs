use std::sync::{Arc, Mutex};

use bevy::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(not(target_arch = "wasm32"))]
use bevy::window::WindowResized;

use crate::engine::viewport::ContainerResized;

/// Container sizes reported by the host since the last frame.
/// Filled from browser callbacks, drained by the schedule.
#[derive(Resource, Clone, Default)]
pub struct ResizeQueue(Arc<Mutex<Vec<UVec2>>>);

impl ResizeQueue {
    pub fn push(&self, size: UVec2) {
        if let Ok(mut queue) = self.0.lock() {
            queue.push(size);
        }
    }

    pub fn drain(&self) -> Vec<UVec2> {
        if let Ok(mut queue) = self.0.lock() {
            std::mem::take(&mut *queue)
        } else {
            Vec::new()
        }
    }
}

/// Turn queued host sizes into resize events.
pub fn drain_resize_queue(queue: Res<ResizeQueue>, mut events: EventWriter<ContainerResized>) {
    for size in queue.drain() {
        events.write(ContainerResized::from(size));
    }
}

/// Window `resize` listener reading the container's size.
/// Unregisters itself when dropped with the world.
#[cfg(target_arch = "wasm32")]
pub struct ResizeListener {
    closure: Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for ResizeListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref());
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn container_size(id: &str) -> Option<UVec2> {
    let container = web_sys::window()?.document()?.get_element_by_id(id)?;
    Some(UVec2::new(
        container.client_width().max(0) as u32,
        container.client_height().max(0) as u32,
    ))
}

#[cfg(target_arch = "wasm32")]
pub fn install_resize_listener(world: &mut World) {
    use crate::engine::host::HostElement;

    let Some(host_id) = world.get_resource::<HostElement>().map(|host| host.id.clone()) else {
        return;
    };
    let queue = world.resource::<ResizeQueue>().clone();

    let closure = Closure::wrap(Box::new(move || {
        if let Some(size) = container_size(&host_id) {
            queue.push(size);
        }
    }) as Box<dyn FnMut()>);

    let Some(window) = web_sys::window() else {
        error!("Window object not available, container resizes will be ignored");
        return;
    };
    if let Err(e) =
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
    {
        error!("Failed to register resize listener: {:?}", e);
        return;
    }

    world.insert_non_send_resource(ResizeListener { closure });
    info!("✓ Resize listener registered");
}

/// Natively the window is the container, so its resizes are forwarded.
#[cfg(not(target_arch = "wasm32"))]
pub fn forward_window_resizes(
    mut resized: EventReader<WindowResized>,
    queue: Res<ResizeQueue>,
) {
    for event in resized.read() {
        queue.push(UVec2::new(
            event.width.round() as u32,
            event.height.round() as u32,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_the_queue_in_order() {
        let queue = ResizeQueue::default();
        let producer = queue.clone();
        producer.push(UVec2::new(100, 50));
        producer.push(UVec2::new(200, 100));

        assert_eq!(queue.drain(), vec![UVec2::new(100, 50), UVec2::new(200, 100)]);
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn queued_sizes_become_events() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<ResizeQueue>()
            .add_event::<ContainerResized>()
            .add_systems(Update, drain_resize_queue);

        app.world().resource::<ResizeQueue>().push(UVec2::new(640, 480));
        app.update();

        let events = app.world().resource::<Events<ContainerResized>>();
        let mut cursor = events.get_cursor();
        let received: Vec<_> = cursor.read(events).copied().collect();
        assert_eq!(received, vec![ContainerResized { width: 640, height: 480 }]);
    }
}
