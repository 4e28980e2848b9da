// SPDX-License-Identifier: MPL-2.0
use iced_core::keyboard::{key::Named, Key, Modifiers};
use iced_core::{Point, Size};
use search_lens::app::{App, Event, Message};
use search_lens::application::port::{HeadlessHost, ImageProbe, SearchSource};
use search_lens::application::query::ResultSet;
use search_lens::config::{self, Config, MAX_SCALE, MIN_SCALE};
use search_lens::domain::results::{
    ExternalDetails, ImageRef, LocalDetails, ResultId, ResultItem, ResultKind, Similarity,
};
use search_lens::infrastructure::{FsImageProbe, ResultFileSource};
use search_lens::ui::viewer::session::Effect;
use search_lens::ui::viewer::{LoadPhase, ModalSession, RequestToken, ViewportController};
use tempfile::tempdir;

fn external(id: &str, width: u32, height: u32) -> ResultItem {
    ResultItem::new(
        id,
        format!("photo {id}"),
        format!("https://cdn.example.com/{id}-small.jpg"),
        ResultKind::External(ExternalDetails {
            source: "pexels".into(),
            photographer: "someone".into(),
            page_url: format!("https://pexels.com/{id}"),
            width,
            height,
            description: None,
        }),
    )
    .with_full(format!("https://cdn.example.com/{id}.jpg"))
}

fn five_results() -> Vec<ResultItem> {
    (0..5).map(|i| external(&format!("r{i}"), 800, 600)).collect()
}

fn requested(event: Event) -> RequestToken {
    match event {
        Event::ImageRequested { token, .. } => token,
        other => panic!("expected ImageRequested, got {other:?}"),
    }
}

#[test]
fn zoom_by_stays_within_bounds_for_any_delta() {
    let mut controller = ViewportController::default();
    controller.set_container_size(Size::new(800.0, 600.0));
    let token = controller.display(ImageRef::from("a.jpg"));
    controller.image_ready(token, Size::new(400.0, 300.0));

    let deltas = [-7.5, 0.01, 3.3, 9.0, -0.33, 0.0, -1e9, 1e9, 0.2, -4.9];
    for delta in deltas {
        controller.zoom_by(delta);
        let scale = controller.state().scale().value();
        assert!((MIN_SCALE..=MAX_SCALE).contains(&scale));
    }
}

#[test]
fn fit_matches_formula_and_never_magnifies() {
    let cases = [
        (Size::new(800.0, 600.0), Size::new(400.0, 300.0), 1.0),
        (Size::new(800.0, 600.0), Size::new(3200.0, 1200.0), 0.225),
        (Size::new(1000.0, 1000.0), Size::new(500.0, 4500.0), 0.2),
    ];
    for (container, natural, expected) in cases {
        let mut controller = ViewportController::default();
        controller.set_container_size(container);
        let token = controller.display(ImageRef::from("a.jpg"));
        controller.image_ready(token, natural);

        let scale = controller.state().scale().value();
        assert!(scale <= 1.0);
        assert!((scale - expected).abs() < 1e-6, "{scale} != {expected}");
    }
}

#[test]
fn reset_zoom_twice_is_identical() {
    let mut controller = ViewportController::default();
    controller.set_container_size(Size::new(800.0, 600.0));
    let token = controller.display(ImageRef::from("a.jpg"));
    controller.image_ready(token, Size::new(2000.0, 1000.0));
    controller.zoom_by(2.0);
    controller.begin_drag(Point::new(5.0, 5.0));
    controller.continue_drag(Point::new(50.0, 80.0));

    controller.reset_zoom();
    let first = *controller.state();
    controller.reset_zoom();
    assert_eq!(*controller.state(), first);
}

#[test]
fn begin_drag_is_no_op_unless_magnified() {
    let mut controller = ViewportController::default();
    controller.set_container_size(Size::new(800.0, 600.0));
    let token = controller.display(ImageRef::from("a.jpg"));
    controller.image_ready(token, Size::new(400.0, 300.0));

    let offset = controller.state().offset();
    assert!(!controller.begin_drag(Point::new(20.0, 20.0)));
    assert!(!controller.state().is_dragging());
    assert_eq!(controller.state().offset(), offset);
}

#[test]
fn session_next_stops_at_last_item() {
    let set = ResultSet::from_items(five_results());
    let mut session = ModalSession::new();
    session.open(&set, &ResultId::from("r2"));

    for _ in 0..3 {
        session.next(&set);
    }
    assert_eq!(session.current_id(), Some(&ResultId::from("r4")));
    session.next(&set);
    assert_eq!(session.current_id(), Some(&ResultId::from("r4")));
}

#[test]
fn session_previous_from_first_is_no_op() {
    let set = ResultSet::from_items(five_results());
    let mut session = ModalSession::new();
    session.open(&set, &ResultId::from("r0"));
    assert!(session.previous(&set).is_empty());
    assert_eq!(session.current_id(), Some(&ResultId::from("r0")));
}

#[test]
fn replaced_set_without_current_makes_navigation_no_op() {
    let mut set = ResultSet::from_items(five_results());
    let mut session = ModalSession::new();
    session.open(&set, &ResultId::from("r3"));

    set.replace(vec![external("fresh", 100, 100)]);
    assert!(session.next(&set).is_empty());
    assert!(session.previous(&set).is_empty());
    assert_eq!(session.current_id(), Some(&ResultId::from("r3")));
}

#[test]
fn only_latest_display_is_fitted() {
    let mut controller = ViewportController::default();
    controller.set_container_size(Size::new(800.0, 600.0));

    let image_a = controller.display(ImageRef::from("a.jpg"));
    let image_b = controller.display(ImageRef::from("b.jpg"));

    // B ready before A: the late A signal must not override B's fit.
    controller.image_ready(image_b, Size::new(1600.0, 1200.0));
    controller.image_ready(image_a, Size::new(100_000.0, 100_000.0));
    assert!((controller.state().scale().value() - 0.45).abs() < 1e-6);
    assert_eq!(controller.source().map(ImageRef::as_str), Some("b.jpg"));
}

#[test]
fn stale_failure_does_not_mark_new_image_failed() {
    let mut controller = ViewportController::default();
    let image_a = controller.display(ImageRef::from("a.jpg"));
    controller.display(ImageRef::from("b.jpg"));
    controller.image_failed(image_a, "timeout".into());
    assert_eq!(controller.phase(), &LoadPhase::Pending);
}

#[test]
fn open_and_close_pair_scroll_lock_effects() {
    let set = ResultSet::from_items(five_results());
    let mut session = ModalSession::new();

    let opened = session.open(&set, &ResultId::from("r1"));
    assert_eq!(opened.first(), Some(&Effect::LockScroll));
    let closed = session.close();
    assert_eq!(closed.first(), Some(&Effect::UnlockScroll));
}

#[test]
fn full_browsing_flow_through_app() {
    let mut app = App::new(Config::default(), HeadlessHost::default());
    app.update(Message::ResultsLoaded(five_results()));
    app.update(Message::ContainerResized(Size::new(1000.0, 800.0)));

    let token = requested(app.update(Message::Open(ResultId::from("r2"))));
    assert!(app.host().is_scroll_locked());
    app.update(Message::ImageReady {
        token,
        natural: Size::new(800.0, 600.0),
    });
    assert_eq!(app.viewer().zoom_level_percent(), 100);

    let plus = Message::KeyPressed {
        key: Key::Character("+".into()),
        modifiers: Modifiers::empty(),
    };
    app.update(plus);
    assert_eq!(app.viewer().zoom_level_percent(), 120);

    // Navigation resets the transform for the next image.
    let right = Message::KeyPressed {
        key: Key::Named(Named::ArrowRight),
        modifiers: Modifiers::empty(),
    };
    requested(app.update(right));
    assert_eq!(app.viewer().zoom_level_percent(), 100);
    assert_eq!(app.position(), Some((4, 5)));

    let escape = Message::KeyPressed {
        key: Key::Named(Named::Escape),
        modifiers: Modifiers::empty(),
    };
    assert_eq!(app.update(escape), Event::Closed);
    assert!(!app.host().is_scroll_locked());
}

#[test]
fn result_file_and_probe_drive_viewer() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let image_path = dir.path().join("harbour.png");
    image_rs::RgbImage::new(32, 16)
        .save(&image_path)
        .expect("write png fixture");

    let local = ResultItem::new(
        "7",
        "harbour.png",
        "data:image/png;base64,AAAA",
        ResultKind::Local(LocalDetails {
            similarity: Similarity::new(0.8),
            file_path: image_path.clone(),
            file_exists: true,
            tags: None,
        }),
    );
    let file_path = dir.path().join("results.toml");
    let contents = search_lens::infrastructure::result_file::render(&[
        local,
        external("pexels_1", 1920, 1080),
    ])
    .expect("render results");
    std::fs::write(&file_path, contents).expect("write results");

    let mut source = ResultFileSource::new(&file_path);
    let items = source.fetch().expect("fetch results");
    assert_eq!(items.len(), 2);

    let probe = FsImageProbe;
    assert_eq!(probe.natural_size(&items[0]), Ok(Size::new(32.0, 16.0)));
    assert_eq!(
        probe.natural_size(&items[1]),
        Ok(Size::new(1920.0, 1080.0))
    );
}

#[test]
fn config_round_trip_changes_viewer_steps() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let custom = Config {
        zoom_step: Some(0.5),
        wheel_step: Some(0.25),
        double_click_reset: Some(false),
    };
    config::save_to_path(&custom, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, custom);

    let mut controller = ViewportController::from_config(&loaded);
    controller.set_container_size(Size::new(800.0, 600.0));
    let token = controller.display(ImageRef::from("a.jpg"));
    controller.image_ready(token, Size::new(400.0, 300.0));
    controller.zoom_in();
    assert_eq!(controller.zoom_level_percent(), 150);
    controller.zoom_wheel(-1.0);
    assert_eq!(controller.zoom_level_percent(), 125);
}

#[test]
fn invalid_config_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "zoom_step = \"lots\"").expect("write");

    let loaded = config::load_from_path(&path).expect("read succeeds");
    assert_eq!(loaded, Config::default());
}
