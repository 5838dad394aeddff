use std::rc::Rc;
use trellis_core::config::OverlayConfig;
use trellis_core::driver::OverlayDriver;
use trellis_core::overlay::OverlayPhase;
use trellis_test_support::{CallRecorder, ManualScheduler, RecordingPage, init_tracing};

struct Harness {
    driver: OverlayDriver<ManualScheduler, RecordingPage>,
    scheduler: ManualScheduler,
    page: RecordingPage,
    phases: CallRecorder<OverlayPhase>,
    closes: CallRecorder<()>,
}

fn harness(config: OverlayConfig) -> Harness {
    init_tracing();
    let scheduler = ManualScheduler::new();
    let page = RecordingPage::new();
    let phases = CallRecorder::new();
    let closes = CallRecorder::new();
    let driver = OverlayDriver::new(config, scheduler.clone(), page.clone(), phases.handler());
    driver.set_close_handler(closes.unit_handler());
    Harness {
        driver,
        scheduler,
        page,
        phases,
        closes,
    }
}

#[test]
fn open_mounts_and_becomes_visible_after_paint() {
    let h = harness(OverlayConfig::default());
    h.driver.set_open(true);
    assert_eq!(h.driver.phase(), OverlayPhase::Entering);
    assert!(h.page.is_scroll_locked());
    assert!(h.page.has_key_listener());
    assert_eq!(h.scheduler.paint(), 1);
    assert_eq!(h.driver.phase(), OverlayPhase::Visible);
    assert_eq!(
        h.phases.calls(),
        vec![OverlayPhase::Entering, OverlayPhase::Visible]
    );
}

#[test]
fn close_keeps_overlay_mounted_for_exactly_the_exit_duration() {
    let h = harness(OverlayConfig::default());
    h.driver.set_open(true);
    h.scheduler.paint();
    h.driver.set_open(false);
    assert_eq!(h.driver.phase(), OverlayPhase::Exiting);
    assert!(h.page.is_scroll_locked());

    h.scheduler.advance(299);
    assert!(h.driver.phase().is_mounted());

    h.scheduler.advance(1);
    assert_eq!(h.driver.phase(), OverlayPhase::Unmounted);
    assert!(!h.page.is_scroll_locked());
    assert!(!h.page.has_key_listener());
    assert_eq!(h.page.scroll_calls(), (1, 1));
}

#[test]
fn custom_exit_duration_is_honoured() {
    let h = harness(OverlayConfig {
        exit_duration_ms: 120,
        ..OverlayConfig::default()
    });
    h.driver.set_open(true);
    h.driver.set_open(false);
    h.scheduler.advance(119);
    assert_eq!(h.driver.phase(), OverlayPhase::Exiting);
    h.scheduler.advance(1);
    assert_eq!(h.driver.phase(), OverlayPhase::Unmounted);
}

#[test]
fn escape_fires_close_once_per_keypress() {
    let h = harness(OverlayConfig::default());
    h.driver.set_open(true);
    h.scheduler.paint();
    h.page.press("Escape");
    assert_eq!(h.closes.count(), 1);
    h.page.press("Enter");
    assert_eq!(h.closes.count(), 1);
    h.page.press("Escape");
    assert_eq!(h.closes.count(), 2);
}

#[test]
fn escape_closes_then_overlay_exits_and_unmounts() {
    let h = harness(OverlayConfig::default());
    let driver = h.driver.clone();
    // Consumer flips `open` back to false from its close callback.
    h.driver
        .set_close_handler(Rc::new(move || driver.set_open(false)));
    h.driver.set_open(true);
    h.scheduler.paint();

    h.page.press("Escape");
    assert_eq!(h.driver.phase(), OverlayPhase::Exiting);
    h.scheduler.advance(300);
    assert_eq!(h.driver.phase(), OverlayPhase::Unmounted);
}

#[test]
fn escape_never_fires_after_unmount() {
    let h = harness(OverlayConfig::default());
    h.driver.set_open(true);
    h.driver.set_open(false);
    h.scheduler.advance(300);
    h.page.press("Escape");
    assert_eq!(h.closes.count(), 0);
}

#[test]
fn escape_disabled_registers_no_listener() {
    let h = harness(OverlayConfig {
        close_on_escape: false,
        ..OverlayConfig::default()
    });
    h.driver.set_open(true);
    assert!(!h.page.has_key_listener());
    h.page.press("Escape");
    assert_eq!(h.closes.count(), 0);
}

#[test]
fn backdrop_click_requests_close_when_enabled() {
    let h = harness(OverlayConfig::default());
    h.driver.backdrop_clicked();
    assert_eq!(h.closes.count(), 0);
    h.driver.set_open(true);
    h.driver.backdrop_clicked();
    assert_eq!(h.closes.count(), 1);

    let quiet = harness(OverlayConfig {
        close_on_backdrop: false,
        ..OverlayConfig::default()
    });
    quiet.driver.set_open(true);
    quiet.driver.backdrop_clicked();
    assert_eq!(quiet.closes.count(), 0);
}

#[test]
fn reopen_during_exit_cancels_the_unmount() {
    let h = harness(OverlayConfig::default());
    h.driver.set_open(true);
    h.scheduler.paint();
    h.driver.set_open(false);
    h.scheduler.advance(100);
    h.driver.set_open(true);
    assert_eq!(h.scheduler.pending_timers(), 0);
    h.scheduler.advance(500);
    assert_eq!(h.driver.phase(), OverlayPhase::Entering);
    h.scheduler.paint();
    assert_eq!(h.driver.phase(), OverlayPhase::Visible);
    assert_eq!(h.page.scroll_calls(), (1, 0));
}

#[test]
fn dispose_cancels_pending_work_and_releases_page() {
    let h = harness(OverlayConfig::default());
    h.driver.set_open(true);
    h.driver.dispose();
    assert_eq!(h.scheduler.pending_paints(), 0);
    assert!(!h.page.is_scroll_locked());
    assert!(!h.page.has_key_listener());
    assert_eq!(h.scheduler.paint(), 0);
    assert_eq!(h.driver.phase(), OverlayPhase::Unmounted);
}

#[test]
fn dropping_the_driver_releases_page_effects() {
    let scheduler = ManualScheduler::new();
    let page = RecordingPage::new();
    {
        let driver = OverlayDriver::new(
            OverlayConfig::default(),
            scheduler.clone(),
            page.clone(),
            Rc::new(|_: OverlayPhase| {}),
        );
        driver.set_open(true);
        assert!(page.is_scroll_locked());
    }
    assert!(!page.is_scroll_locked());
    assert!(!page.has_key_listener());
    assert_eq!(scheduler.pending_paints(), 0);
}

#[test]
fn scroll_lock_can_be_disabled() {
    let h = harness(OverlayConfig {
        lock_scroll: false,
        ..OverlayConfig::default()
    });
    h.driver.set_open(true);
    assert!(!h.page.is_scroll_locked());
    assert!(h.page.has_key_listener());
}

#[test]
fn overlapping_overlays_share_one_scroll_lock() {
    init_tracing();
    let scheduler = ManualScheduler::new();
    let drawer_page = RecordingPage::new();
    drawer_page.set_overflow("auto");
    let modal_page = drawer_page.share_document();
    let drawer = OverlayDriver::new(
        OverlayConfig::default(),
        scheduler.clone(),
        drawer_page.clone(),
        Rc::new(|_: OverlayPhase| {}),
    );
    let modal = OverlayDriver::new(
        OverlayConfig::default(),
        scheduler.clone(),
        modal_page.clone(),
        Rc::new(|_: OverlayPhase| {}),
    );

    drawer.set_open(true);
    modal.set_open(true);
    scheduler.paint();

    drawer.set_open(false);
    scheduler.advance(300);
    assert_eq!(drawer.phase(), OverlayPhase::Unmounted);
    assert!(modal_page.is_scroll_locked());

    modal.set_open(false);
    scheduler.advance(300);
    assert_eq!(modal.phase(), OverlayPhase::Unmounted);
    assert_eq!(drawer_page.overflow().as_deref(), Some("auto"));
}
