use fractree_lib::{key, skew_bound, Controller, Limits, Rgb, Season, TreeState, Viewer, ViewerSettings};

fn viewer_with(limits: Limits) -> Viewer {
    Viewer::new(
        Controller::new(TreeState::default(), limits),
        500,
        700,
        ViewerSettings::default(),
    )
}

#[test]
fn keyboard_session() {
    let mut viewer = viewer_with(Limits::default());
    assert!(viewer.render().unwrap());

    viewer.handle_key(key::UP);
    assert_eq!(6, viewer.state().depth);

    for _ in 0..4 {
        viewer.handle_key(key::LEFT);
    }
    assert!((viewer.state().skewness + 0.20).abs() < 1e-9);

    viewer.handle_key(key::SPACE);
    let state = viewer.state();
    assert_eq!(Season::Winter, state.season);
    assert_eq!(6, state.depth);

    // several keys before the next paint pass, a single regeneration
    assert!(viewer.render().unwrap());
    assert!(!viewer.render().unwrap());
    assert_eq!(Some(Rgb::BARK), viewer.canvas().pixel(250, 670));
}

#[test]
fn winter_clamps_depth() {
    let mut viewer = viewer_with(Limits {
        depth_step: 2,
        summer_max_depth: 12,
        winter_max_depth: 8,
    });
    for _ in 0..5 {
        viewer.handle_key(key::UP);
    }
    assert_eq!(12, viewer.state().depth);

    viewer.handle_key(key::SPACE);
    assert_eq!(8, viewer.state().depth);
    viewer.handle_key(key::SPACE);
    assert_eq!(Season::Summer, viewer.state().season);
    assert_eq!(8, viewer.state().depth);
}

#[test]
fn ignored_keys_do_nothing() {
    let mut viewer = viewer_with(Limits::default());
    viewer.render().unwrap();
    let before = viewer.canvas().buffer().to_vec();
    for code in [key::ESCAPE, b'a' as u32, b'\n' as u32, 0xFFFF] {
        assert!(!viewer.handle_key(code));
    }
    assert_eq!(TreeState::default(), viewer.state());
    assert!(!viewer.render().unwrap());
    assert_eq!(before, viewer.canvas().buffer());
}

#[test]
fn mashing_keys_keeps_bounds() {
    let mut viewer = viewer_with(Limits::default());
    let keys = [key::UP, key::RIGHT, key::RIGHT, key::SPACE, key::UP, key::LEFT, key::DOWN];
    for round in 0..200 {
        viewer.handle_key(keys[(round * 7 + round / 3) % keys.len()]);
        let state = viewer.state();
        assert!(state.depth >= 1 && state.depth <= 10);
        assert!(state.skewness.abs() <= skew_bound());
    }
}
