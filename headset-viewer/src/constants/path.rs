/// DOM id of the element that hosts the render canvas.
pub const HOST_ELEMENT_ID: &str = "vr-headset-container";

/// DOM id given to the canvas created inside the host element.
pub const CANVAS_ELEMENT_ID: &str = "vr-headset-canvas";

/// DOM id of an optional `<script type="application/json">` holding viewer configuration.
pub const CONFIG_ELEMENT_ID: &str = "viewer-config";

/// Model location relative to the asset root.
pub const MODEL_PATH: &str = "models/vr_headset.glb";
