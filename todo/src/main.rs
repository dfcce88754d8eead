//! Console demo for the todo application.
//!
//! Dispatches a short script of actions to a store and prints the state after
//! each one, then drives a session through UI events with a subscribed
//! renderer.
//!
//! Store metrics are described at startup. No exporter is installed, so the
//! recorded values are discarded.

use anyhow::Context;
use statecraft_runtime::Store;
use todo::{Config, TaskId, TodoAction, TodoAppReducer, TodoSession, TodoState, UiEvent, VisibilityFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn print_state(config: &Config, label: &str, state: &TodoState) -> anyhow::Result<()> {
    if config.print_json {
        let json = serde_json::to_string(state).context("serializing state")?;
        println!("{label}: {json}");
    } else {
        println!("{label}: {state:?}");
    }
    Ok(())
}

fn run_script(config: &Config) -> anyhow::Result<()> {
    println!("=== Action script ===\n");

    let store = Store::with_config(TodoState::new(), TodoAppReducer::new(), config.store_config());
    print_state(config, "initial", &store.state())?;

    store.send(TodoAction::AddTask {
        id: TaskId(1),
        text: "Play synthesizers".to_string(),
    })?;
    print_state(config, "after ADD_TODO", &store.state())?;

    store.send(TodoAction::ToggleTask { id: TaskId(1) })?;
    print_state(config, "after TOGGLE_TODO", &store.state())?;

    Ok(())
}

fn run_session(config: &Config) -> anyhow::Result<()> {
    println!("\n=== Session ===\n");

    let mut session = TodoSession::new(config.store_config());
    let _renderer = session.subscribe(|state| {
        println!("{}\n", todo::view::render_app(&todo::containers::app(state, "")));
    })?;

    println!("{}\n", session.render());

    let events = [
        UiEvent::InputChanged {
            value: "Learn Redux".to_string(),
        },
        UiEvent::AddClicked,
        UiEvent::InputChanged {
            value: "Play synthesizers".to_string(),
        },
        UiEvent::AddClicked,
        UiEvent::TodoClicked { id: TaskId(0) },
        UiEvent::FilterClicked {
            filter: VisibilityFilter::ShowActive,
        },
        UiEvent::FilterClicked {
            filter: VisibilityFilter::ShowActive,
        },
        UiEvent::FilterClicked {
            filter: VisibilityFilter::ShowAll,
        },
    ];

    for event in events {
        if session.handle(event)?.is_none() {
            tracing::debug!("Event dispatched no action");
        }
    }

    print_state(config, "final", &session.store().state())?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    statecraft_runtime::metrics::describe_metrics();
    tracing::info!(?config, "Starting todo demo");

    run_script(&config)?;
    run_session(&config)?;

    Ok(())
}
