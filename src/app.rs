use std::{cell::RefCell, rc::Rc};

use const_format::concatcp;
use leptos::*;
use plotly::{
    color::Rgba,
    common::{Line, Marker, Mode, Title},
    layout::{Axis, AxisType, RangeMode},
    Configuration, Layout, Plot, Scatter,
};
use shared::{ChartSeries, Dashboard, DashboardConfig, DashboardView, DataSet, ViewRenderer};

use crate::{
    plotly_bindings,
    signal_view::SignalView,
    socket::{Connection, SharedDashboard},
};

const ID_PREFIX: &str = "telemetry-";
pub const LOGIN_ID: &str = concatcp!(ID_PREFIX, "login");
pub const LOGIN_INPUT_ID: &str = concatcp!(ID_PREFIX, "login-input");
pub const LOGIN_ERROR_ID: &str = concatcp!(ID_PREFIX, "login-error");
pub const MENU_ID: &str = concatcp!(ID_PREFIX, "menu");
pub const CONTEXT_ID: &str = concatcp!(ID_PREFIX, "context");
pub const TABLE_ID: &str = concatcp!(ID_PREFIX, "table");
pub const CHART_ID: &str = concatcp!(ID_PREFIX, "chart");

fn series(
    labels: &[String],
    values: &[f64],
    name: &str,
    (r, g, b): (u8, u8, u8),
) -> Box<Scatter<String, f64>> {
    Scatter::new(labels.to_vec(), values.to_vec())
        .name(name)
        .mode(Mode::LinesMarkers)
        .line(Line::new().color(Rgba::new(r, g, b, 1.0)))
        .marker(Marker::new().color(Rgba::new(r, g, b, 0.2)))
}

fn plot_readings(chart: &ChartSeries) -> Plot {
    let mut plot = Plot::new();
    plot.set_configuration(Configuration::new().responsive(false));

    plot.add_trace(series(
        &chart.labels,
        &chart.temperature,
        "Temperature (°C)",
        (255, 99, 132),
    ));
    plot.add_trace(series(
        &chart.labels,
        &chart.humidity,
        "Humidity (%)",
        (54, 162, 235),
    ));

    let layout = Layout::new()
        .auto_size(true)
        .title(Title::with_text(format!("{} readings", chart.len())))
        .x_axis(Axis::new().type_(AxisType::Category))
        .y_axis(Axis::new().range_mode(RangeMode::ToZero));
    plot.set_layout(layout);

    plot
}

#[component]
fn ReadingsChart(view_model: RwSignal<DashboardView>) -> impl IntoView {
    let chart = create_memo(move |_| view_model.with(|view| view.chart.clone()));

    create_effect(move |_| {
        let plot = chart.with(plot_readings);
        spawn_local(async move {
            plotly_bindings::react(CHART_ID, &plot).await;
        });
    });

    view! {
        <div id=CHART_ID></div>
    }
}

#[component]
fn ReadingsTable(view_model: RwSignal<DashboardView>) -> impl IntoView {
    let rows = create_memo(move |_| view_model.with(|view| view.rows.clone()));

    view! {
        <table id=TABLE_ID>
            <thead>
                <tr>
                    <th>"Time"</th>
                    <th>"Temperature"</th>
                    <th>"Humidity"</th>
                </tr>
            </thead>
            <tbody>
            {move || {
                rows.get()
                    .into_iter()
                    .map(|reading| {
                        view! {
                            <tr>
                                <td>{reading.timestamp}</td>
                                <td>{format!("{} °C", reading.temperature)}</td>
                                <td>{format!("{} %", reading.humidity)}</td>
                            </tr>
                        }
                    })
                    .collect_view()
            }}
            </tbody>
        </table>
    }
}

#[component]
fn LatestValues(view_model: RwSignal<DashboardView>) -> impl IntoView {
    let latest = move || view_model.with(|view| view.latest.clone());
    let uptime = move || latest().uptime.unwrap_or_else(|| "-".to_string());
    let cloud = move || latest().cloud.unwrap_or_else(|| "-".to_string());

    view! {
        <div class="latest">
            <p>"Time: " <span id="data_time">{move || latest().timestamp}</span></p>
            <p>"Temperature: " <span id="data_temp">{move || latest().temperature}</span>" °C"</p>
            <p>"Humidity: " <span id="data_humidity">{move || latest().humidity}</span>" %"</p>
            <p>"Uptime: " <span id="data_uptime">{uptime}</span></p>
            <p>"Cloud: " <span id="data_cloud">{cloud}</span></p>
        </div>
    }
}

#[component]
fn Menu(
    dashboard: StoredValue<SharedDashboard>,
    view_model: RwSignal<DashboardView>,
) -> impl IntoView {
    let switch_to = move |set: DataSet| dashboard.with_value(|d| d.borrow_mut().switch_to(set));
    let clear = move |_: ev::MouseEvent| dashboard.with_value(|d| d.borrow_mut().clear_session());
    let status = move || view_model.with(|view| view.connection.to_string());
    let hidden = move || {
        if view_model.with(|view| view.login_visible) {
            "hidden"
        } else {
            "visible"
        }
    };

    view! {
        <div id=MENU_ID style:visibility=hidden>
            <button on:click=move |_| switch_to(DataSet::History)>"History"</button>
            <button on:click=move |_| switch_to(DataSet::Session)>"Session"</button>
            <button on:click=clear>"Clear"</button>
            <span class="status">{status}</span>
        </div>
    }
}

#[component]
fn Login(
    config: StoredValue<DashboardConfig>,
    dashboard: StoredValue<SharedDashboard>,
    connection: StoredValue<Option<Connection>>,
    view_model: RwSignal<DashboardView>,
) -> impl IntoView {
    let user_input = create_rw_signal(String::new());

    let login = move || {
        let dashboard = dashboard.get_value();
        let user_id = match dashboard.borrow_mut().login(&user_input.get_untracked()) {
            Ok(user_id) => user_id,
            Err(e) => {
                log::warn!("Login rejected: {e}");
                return;
            }
        };

        // The previous connection, if any, is discarded before opening anew.
        connection.set_value(None);
        match config.with_value(|config| Connection::open(config, &user_id, dashboard.clone())) {
            Ok(opened) => connection.set_value(Some(opened)),
            Err(e) => {
                log::error!("{e}");
                dashboard
                    .borrow_mut()
                    .view_mut()
                    .show_login_error(&e.to_string());
            }
        }
    };

    let display = move || {
        if view_model.with(|view| view.login_visible) {
            "block"
        } else {
            "none"
        }
    };
    let error = move || view_model.with(|view| view.login_error.clone());

    view! {
        <div id=LOGIN_ID style:display=display>
            <input
                type="text"
                id=LOGIN_INPUT_ID
                placeholder="User id"
                prop:value=user_input
                on:input=move |ev| user_input.set(event_target_value(&ev))
            />
            <button on:click=move |_| login()>"Login"</button>
            <p id=LOGIN_ERROR_ID class="error">{error}</p>
        </div>
    }
}

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let view_model = create_rw_signal(DashboardView::default());
    let dashboard: SharedDashboard = Rc::new(RefCell::new(Dashboard::new(
        SignalView(view_model),
        config.default_set,
    )));

    let config = store_value(config);
    let dashboard = store_value(dashboard);
    let connection = store_value(None::<Connection>);

    let hidden = move || {
        if view_model.with(|view| view.login_visible) {
            "hidden"
        } else {
            "visible"
        }
    };

    view! {
        <main class="container">
            <Login config=config dashboard=dashboard connection=connection view_model=view_model/>
            <Menu dashboard=dashboard view_model=view_model/>
            <div id=CONTEXT_ID style:visibility=hidden>
                <LatestValues view_model=view_model/>
                <ReadingsChart view_model=view_model/>
                <ReadingsTable view_model=view_model/>
            </div>
        </main>
    }
}
