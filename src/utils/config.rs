//! Configuration and constants for the CLI.

/// Number of quantization buckets in the duration histogram
pub const DISTRIBUTION_WIDTH: usize = 23;

/// Glyph palette for the histogram, ordered from empty to full visual weight
pub const BLOCKS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Default decimal places when formatting durations as seconds
pub const DEFAULT_DECIMAL_PLACES: usize = 3;

/// Default include pattern: object-file outputs (one per translation unit)
pub const DEFAULT_FILTER_IN: &str = r".*\.o$";

/// Default exclude pattern: matches nothing
pub const DEFAULT_FILTER_OUT: &str = r"a^";

/// CMake generator used for profiled builds
pub const CMAKE_GENERATOR: &str = "Ninja Multi-Config";

/// CMake configuration used for profiled builds
pub const CMAKE_BUILD_CONFIG: &str = "Release";

/// External converter that turns a `.ninja_log` into Chrome trace JSON
pub const NINJATRACING_EXECUTABLE: &str = "ninjatracing";
