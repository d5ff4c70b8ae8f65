//! View resolution and presentation models for the support dashboard.

pub mod dashboard;
pub mod resolver;

pub use dashboard::{DashboardLoad, clock_line, load_dashboard};
pub use resolver::{
    ChannelStore, ChannelView, DiskStore, LogDayRow, LogsView, MusicSchedules, MusicView,
    OverrideView, ScheduleListing, Selection, ViewResolver,
};
