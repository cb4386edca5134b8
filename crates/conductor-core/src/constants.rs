// Tuning constants for motion, input mapping and the pointer trail.
//
// Distances are viewport pixels, times are milliseconds unless the name
// says otherwise.

// Pointer speed -> playback rate curve (speed in px/ms)
pub const RATE_LOW_SPEED: f32 = 0.3;
pub const RATE_HIGH_SPEED: f32 = 2.5;
pub const RATE_MIN: f32 = 0.3;
pub const RATE_MAX: f32 = 2.5;
pub const RATE_MID_SLOPE: f32 = 0.9;
pub const RATE_TAIL_SLOPE: f32 = 0.45; // reduced sensitivity past the high threshold

// Active/Idle energy
pub const ENERGY_ACTIVE: f32 = 1.0;
pub const ENERGY_IDLE: f32 = 0.1;
pub const IDLE_DELAY_MS: f64 = 100.0;

// Trail
pub const TRAIL_LIFETIME_MS: f64 = 1000.0;
pub const TRAIL_POINT_RADIUS: f32 = 10.0;
pub const TRAIL_COLOR_RGB: [u8; 3] = [126, 206, 244];

// Motion field
pub const ENTITY_SIZE: f32 = 100.0;
pub const SAFE_MARGIN: f32 = ENTITY_SIZE * 1.5; // shrinks the swing range
pub const BOUNDS_MARGIN: f32 = 5.0; // hard clamp from viewport edges
pub const DISPERSION_RADIUS_FRACTION: f32 = 0.4; // of min(width, height)
pub const PHASE_STEP: f32 = std::f32::consts::PI * 1.5;

pub const FREQ_X_BASE: f32 = 0.24; // rad per motion-second
pub const FREQ_X_STEP: f32 = 0.12;
pub const FREQ_Y_BASE: f32 = 0.20;
pub const FREQ_Y_STEP: f32 = 0.10;
pub const SECONDARY_X_RATIO: f32 = 0.7;
pub const SECONDARY_Y_RATIO: f32 = 0.6;

pub const RANGE_X_BASE: f32 = 0.85;
pub const RANGE_X_STEP: f32 = 0.12;
pub const RANGE_Y_BASE: f32 = 1.2;
pub const RANGE_Y_STEP: f32 = 0.15;
pub const WEIGHT_X: [f32; 2] = [0.6, 0.4];
pub const WEIGHT_Y: [f32; 2] = [0.8, 0.5];

// Rotation (degrees) and scale
pub const ROTATION_BASE_DEG: f32 = 4.0;
pub const ROTATION_STEP_DEG: f32 = 2.0;
pub const SCALE_BASE: f32 = 0.9;
pub const SCALE_VARIATION: f32 = 0.25;
pub const SCALE_FREQ_RATIO: f32 = 0.2;
pub const SCALE_MIN: f32 = 0.5;
pub const SCALE_MAX: f32 = 1.6;

// Separation between entities
pub const MIN_SEPARATION: f32 = 250.0;
pub const SEPARATION_PUSH: f32 = 0.6; // fraction of overlap removed per frame (split across the pair)
pub const SEPARATION_FORCE: f32 = 0.05; // impulse per px of overlap

// Pointer repulsion
pub const POINTER_RADIUS: f32 = 500.0;
pub const POINTER_STRENGTH: f32 = 0.15;
pub const POINTER_IMPULSE: f32 = 0.1; // impulse variant: share of the push fed into velocity

// Integration
pub const SMOOTHING_FACTOR: f32 = 0.04;
pub const VELOCITY_DAMPING: f32 = 0.9;
pub const BOUNCE_LOSS: f32 = 0.5;
pub const TRANSITION_BASE_SECS: f32 = 0.25;

// Frame clock
pub const MOTION_TIME_SCALE: f64 = 0.001; // ms -> motion-seconds
pub const MAX_FRAME_DT_SECS: f64 = 0.1;

// Layout
pub const LAYOUT_COLUMNS: usize = 4;
pub const LAYOUT_FILL: f32 = 0.8;
pub const LAYOUT_JITTER: f32 = 0.3; // full width of jitter as a fraction of the cell
