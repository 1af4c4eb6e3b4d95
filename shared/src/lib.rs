//! Live telemetry ingestion for the dashboard.
//!
//! Readings arrive over one connection ([`ConnectionClient`]), are decoded
//! by shape ([`Inbound`]) and stored per data set ([`DataStore`]). The
//! [`Dashboard`] keeps the current selection and mirrors it onto a
//! [`ViewRenderer`]. Nothing here touches the browser; the frontend crate
//! supplies the transport and the renderer.

pub mod config;
pub mod connection;
pub mod controller;
pub mod error;
pub mod message;
pub mod reading;
pub mod store;
pub mod time;
pub mod view;

pub use config::DashboardConfig;
pub use connection::{ConnectionClient, ConnectionEvent, ConnectionState, Transport};
pub use controller::{Dashboard, Ingested};
pub use error::{DashboardError, Result};
pub use message::{Inbound, Outbound};
pub use reading::{RawReading, Reading};
pub use store::{DataSet, DataStore};
pub use time::format_timestamp;
pub use view::{ChartSeries, DashboardView, ViewRenderer};
