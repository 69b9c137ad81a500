//! GUI view components.

mod arena_view;

pub use arena_view::ArenaView;
