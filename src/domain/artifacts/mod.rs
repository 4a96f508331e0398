//! Pure renderers for the generated build artifacts.
//!
//! Each renderer turns already loaded inputs into output text. Reading
//! templates and writing results is left to the generator.

pub mod base_config;
pub mod makefile;
pub mod notice;
pub mod solution;
pub mod threshold_map;
pub mod version;

pub use base_config::{CONFIG_MARKER, render_base_config};
pub use makefile::{library_stub_name, render_makefile};
pub use notice::{NOTICE_RULE, component_notice, render_notice};
pub use solution::{SolutionEntry, parse_solution, render_solution};
pub use threshold_map::render_threshold_map;
pub use version::version_map;
