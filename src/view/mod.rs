//! View models - display-ready projections of API snapshots

mod charts;
mod programs;

pub use charts::{background_label, BackgroundChart, BackgroundSlice, ConversationsChart};
pub use programs::{sanitize, ProgramCard, ProgramsPanel};
