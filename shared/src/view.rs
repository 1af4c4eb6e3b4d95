use crate::{connection::ConnectionState, reading::Reading};

/// Render target for readings and the login surface.
pub trait ViewRenderer {
    /// Overwrites the latest-values fields.
    fn show_latest(&mut self, reading: &Reading);

    /// Adds one table row and one chart point per reading, in order.
    fn append_rows(&mut self, readings: &[Reading]);

    /// Removes all rows and chart points.
    fn clear(&mut self);

    fn set_login_visible(&mut self, visible: bool);

    /// An empty message hides the error text.
    fn show_login_error(&mut self, message: &str);

    fn show_connection(&mut self, state: ConnectionState);
}

/// Chart data: one category label per point, shared by both series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub temperature: Vec<f64>,
    pub humidity: Vec<f64>,
}

impl ChartSeries {
    pub fn push(&mut self, reading: &Reading) {
        self.labels.push(reading.timestamp.clone());
        self.temperature.push(reading.temperature);
        self.humidity.push(reading.humidity);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn clear(&mut self) {
        self.labels.clear();
        self.temperature.clear();
        self.humidity.clear();
    }
}

/// Everything the dashboard page shows, as plain data.
///
/// Table rows are kept newest first: each appended reading is inserted at
/// the top, directly under the header row. The chart keeps chronological
/// order.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardView {
    pub latest: Reading,
    pub rows: Vec<Reading>,
    pub chart: ChartSeries,
    pub login_visible: bool,
    pub login_error: String,
    pub connection: ConnectionState,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self {
            latest: Reading::placeholder(),
            rows: Vec::new(),
            chart: ChartSeries::default(),
            login_visible: true,
            login_error: String::new(),
            connection: ConnectionState::Disconnected,
        }
    }
}

impl ViewRenderer for DashboardView {
    fn show_latest(&mut self, reading: &Reading) {
        self.latest = reading.clone();
    }

    fn append_rows(&mut self, readings: &[Reading]) {
        for reading in readings {
            self.rows.insert(0, reading.clone());
            self.chart.push(reading);
        }
    }

    fn clear(&mut self) {
        self.rows.clear();
        self.chart.clear();
    }

    fn set_login_visible(&mut self, visible: bool) {
        self.login_visible = visible;
    }

    fn show_login_error(&mut self, message: &str) {
        self.login_error = message.to_string();
    }

    fn show_connection(&mut self, state: ConnectionState) {
        self.connection = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(label: &str, temperature: f64) -> Reading {
        Reading {
            timestamp: label.to_string(),
            temperature,
            humidity: 40.0 + temperature,
            ..Reading::default()
        }
    }

    #[test]
    fn rows_stack_newest_first() {
        let mut view = DashboardView::default();
        view.append_rows(&[reading("a", 1.0), reading("b", 2.0)]);
        view.append_rows(&[reading("c", 3.0)]);

        let table: Vec<&str> = view.rows.iter().map(|r| r.timestamp.as_str()).collect();
        assert_eq!(table, vec!["c", "b", "a"]);

        assert_eq!(view.chart.labels, vec!["a", "b", "c"]);
        assert_eq!(view.chart.temperature, vec![1.0, 2.0, 3.0]);
        assert_eq!(view.chart.humidity, vec![41.0, 42.0, 43.0]);
    }

    #[test]
    fn clear_empties_rows_and_chart_only() {
        let mut view = DashboardView::default();
        view.append_rows(&[reading("a", 1.0)]);
        view.show_latest(&reading("a", 1.0));
        view.clear();

        assert!(view.rows.is_empty());
        assert!(view.chart.is_empty());
        assert_eq!(view.latest, reading("a", 1.0));
    }

    #[test]
    fn latest_overwrites() {
        let mut view = DashboardView::default();
        assert_eq!(view.latest, Reading::placeholder());

        view.show_latest(&reading("a", 1.0));
        view.show_latest(&reading("b", 2.0));
        assert_eq!(view.latest, reading("b", 2.0));
    }
}
