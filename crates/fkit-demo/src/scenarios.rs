#![forbid(unsafe_code)]

//! Scripted runs of the three showcase apps.
//!
//! Each scenario mounts its components, feeds a fixed event script, and
//! records a frame after every interesting step. The output is fully
//! deterministic for a given [`ShowcaseConfig`].

use std::fmt;
use std::rc::Rc;

use clap::ValueEnum;
use fkit_core::component::Component;
use fkit_core::event::Event;
use fkit_core::frame::Frame;
use fkit_core::geometry::Size;
use fkit_runtime::{BatchScope, WindowDimensions, WindowSizeObserver, log_changes};
use fkit_widgets::contacts::{ContactRecord, Field, PhoneBook};
use fkit_widgets::counters::{ButtonProps, click_counter, hover_counter};
use fkit_widgets::window_size_view::WindowSizeView;
use tracing::{info, info_span};

use crate::config::ShowcaseConfig;

/// Which app to replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    Counters,
    WindowSize,
    PhoneBook,
    All,
}

/// A single showcase app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum App {
    Counters,
    WindowSize,
    PhoneBook,
}

impl App {
    fn scenario(self) -> Scenario {
        match self {
            Self::Counters => Scenario::Counters,
            Self::WindowSize => Scenario::WindowSize,
            Self::PhoneBook => Scenario::PhoneBook,
        }
    }

    fn replay(self, config: &ShowcaseConfig) -> Transcript {
        match self {
            Self::Counters => counters(config),
            Self::WindowSize => window_size(config),
            Self::PhoneBook => phone_book(),
        }
    }
}

impl Scenario {
    fn apps(self) -> &'static [App] {
        match self {
            Self::Counters => &[App::Counters],
            Self::WindowSize => &[App::WindowSize],
            Self::PhoneBook => &[App::PhoneBook],
            Self::All => &[App::Counters, App::WindowSize, App::PhoneBook],
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Counters => "counters",
            Self::WindowSize => "window-size",
            Self::PhoneBook => "phone-book",
            Self::All => "all",
        }
    }
}

/// One captured frame with a caption.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub caption: String,
    pub frame: Frame,
}

/// Ordered frames produced by one scenario.
#[derive(Debug, Clone)]
pub struct Transcript {
    scenario: Scenario,
    snapshots: Vec<Snapshot>,
}

impl Transcript {
    fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            snapshots: Vec::new(),
        }
    }

    fn capture<C: Component>(&mut self, caption: impl Into<String>, component: &C, props: &C::Props) {
        let mut frame = Frame::new();
        component.render(props, &mut frame);
        self.snapshots.push(Snapshot {
            caption: caption.into(),
            frame,
        });
    }

    #[must_use]
    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    #[must_use]
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Frame captured under `caption`, if any.
    #[must_use]
    pub fn frame(&self, caption: &str) -> Option<&Frame> {
        self.snapshots
            .iter()
            .find(|s| s.caption == caption)
            .map(|s| &s.frame)
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.scenario.name())?;
        for snapshot in &self.snapshots {
            writeln!(f, "--- {} ---", snapshot.caption)?;
            for line in snapshot.frame.lines() {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

/// Replay `scenario` (every app for [`Scenario::All`]).
#[must_use]
pub fn run(scenario: Scenario, config: &ShowcaseConfig) -> Vec<Transcript> {
    scenario
        .apps()
        .iter()
        .map(|&app| {
            let _span = info_span!("fkit.scenario", scenario = app.scenario().name()).entered();
            let transcript = app.replay(config);
            info!(frames = transcript.snapshots.len(), "scenario finished");
            transcript
        })
        .collect()
}

/// Click and hover counters, each with its own step and state.
#[must_use]
pub fn counters(config: &ShowcaseConfig) -> Transcript {
    let mut transcript = Transcript::new(Scenario::Counters);
    let click = click_counter(config.click_step()).mount();
    let hover = hover_counter(config.hover_step()).mount();
    let click_props = ButtonProps::default();
    let hover_props = ButtonProps {
        label: "Hover".to_string(),
    };

    transcript.capture("click: initial", &click, &click_props);
    transcript.capture("hover: initial", &hover, &hover_props);

    for event in [Event::Click, Event::Hover, Event::Click] {
        click.handle_event(&click_props, &event);
        hover.handle_event(&hover_props, &event);
    }
    transcript.capture("click: after two clicks", &click, &click_props);
    transcript.capture("hover: after one hover", &hover, &hover_props);

    {
        let _batch = BatchScope::new();
        for _ in 0..3 {
            click.handle_event(&click_props, &Event::Click);
        }
    }
    transcript.capture("click: after a batch of three", &click, &click_props);
    transcript
}

/// Window size observer driven by scripted resize events.
#[must_use]
pub fn window_size(config: &ShowcaseConfig) -> Transcript {
    let mut transcript = Transcript::new(Scenario::WindowSize);
    let source = Rc::new(WindowDimensions::new(config.initial_size));
    let observer = WindowSizeObserver::activate(source.clone());
    let _changes = log_changes(observer.observable(), "window_size");

    transcript.capture("before any resize", &WindowSizeView, &observer.get());
    for (width, height) in [(800, 600), (1280, 720)] {
        source.dispatch(&Event::Resize { width, height });
        transcript.capture(
            format!("after resize to {}", Size::new(width, height)),
            &WindowSizeView,
            &observer.get(),
        );
    }

    observer.deactivate();
    source.resize(Size::new(640, 480));
    info!(
        listeners = source.listener_count(),
        "observer deactivated"
    );
    transcript
}

/// Phone book fed through the form.
#[must_use]
pub fn phone_book() -> Transcript {
    let mut transcript = Transcript::new(Scenario::PhoneBook);
    let book = PhoneBook::default();
    transcript.capture("empty", &book, &());

    book.handle_event(&(), &Event::Submit);
    transcript.capture("after submitting defaults", &book, &());

    for (first, last, phone) in [
        ("Ada", "Lovelace", "5550001"),
        ("Alan", "Turing", "5550002"),
        ("Grace", "Hopper", "5550003"),
    ] {
        let form = book.form();
        form.set_field(Field::FirstName, first);
        form.set_field(Field::LastName, last);
        form.set_field(Field::Phone, phone);
        book.handle_event(&(), &Event::Submit);
    }
    transcript.capture("after three entries", &book, &());

    book.form().set_field(Field::Phone, "");
    book.handle_event(&(), &Event::Submit);
    transcript.capture("blank phone rejected", &book, &());

    book.add(ContactRecord::new("Edsger", "Dijkstra", "5550004"));
    book.form().set_field(Field::Phone, "5550005");
    transcript.capture("direct insert", &book, &());
    transcript
}
